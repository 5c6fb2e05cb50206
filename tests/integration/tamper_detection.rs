//! Modified, resized and removed files are caught during verification

use crate::integration::test_utils::{populate, small_chunk_config};
use hcompare::api::IntegrityApi;
use hcompare::error::HcompareError;
use hcompare::manifest::VerifyPolicy;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
    manifest: PathBuf,
    api: IntegrityApi,
}

fn fixture() -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mmc1");
    populate(
        &root,
        &[
            ("a.bin", &[0x11u8; 130][..]),
            ("b.bin", &[0x22u8; 64][..]),
            ("c/d.txt", b"delta"),
        ],
    );
    let manifest = temp_dir.path().join("ref.txt");
    let api = IntegrityApi::new(small_chunk_config(32)).unwrap();
    api.create_manifest(&root, &manifest).unwrap();
    Fixture {
        _temp_dir: temp_dir,
        root,
        manifest,
        api,
    }
}

#[test]
fn test_single_byte_flip_same_size() {
    let fx = fixture();
    let mut bytes = fs::read(fx.root.join("a.bin")).unwrap();
    bytes[77] ^= 0x01;
    fs::write(fx.root.join("a.bin"), bytes).unwrap();

    let report = fx
        .api
        .verify_manifest(&fx.manifest, VerifyPolicy::Audit)
        .unwrap();
    assert_eq!(report.checked, 3);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].path, fx.root.join("a.bin"));
}

#[test]
fn test_strict_stops_at_first_mismatch() {
    let fx = fixture();
    fs::write(fx.root.join("a.bin"), [0u8; 130]).unwrap();
    fs::write(fx.root.join("b.bin"), [0u8; 64]).unwrap();

    match fx.api.verify_manifest(&fx.manifest, VerifyPolicy::Strict) {
        Err(HcompareError::DigestMismatch {
            path,
            expected,
            actual,
            ..
        }) => {
            assert!(path == fx.root.join("a.bin") || path == fx.root.join("b.bin"));
            assert_ne!(expected, actual);
        }
        other => panic!("expected DigestMismatch, got {:?}", other),
    }

    let report = fx
        .api
        .verify_manifest(&fx.manifest, VerifyPolicy::Audit)
        .unwrap();
    assert_eq!(report.mismatches.len(), 2);
}

#[test]
fn test_appended_bytes_are_detected() {
    let fx = fixture();
    let mut bytes = fs::read(fx.root.join("b.bin")).unwrap();
    bytes.extend_from_slice(b"extra");
    fs::write(fx.root.join("b.bin"), bytes).unwrap();

    let report = fx
        .api
        .verify_manifest(&fx.manifest, VerifyPolicy::Audit)
        .unwrap();
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].path, fx.root.join("b.bin"));
}

#[test]
fn test_truncation_is_detected() {
    let fx = fixture();
    fs::write(fx.root.join("c/d.txt"), b"delt").unwrap();

    let report = fx
        .api
        .verify_manifest(&fx.manifest, VerifyPolicy::Audit)
        .unwrap();
    assert_eq!(report.mismatches.len(), 1);
}

#[test]
fn test_missing_file_is_fatal_even_in_audit() {
    let fx = fixture();
    fs::remove_file(fx.root.join("c/d.txt")).unwrap();

    let result = fx.api.verify_manifest(&fx.manifest, VerifyPolicy::Audit);
    assert!(matches!(result, Err(HcompareError::Io { .. })));
}

#[test]
fn test_new_files_are_not_reported() {
    let fx = fixture();
    fs::write(fx.root.join("new.txt"), b"unlisted").unwrap();

    let report = fx
        .api
        .verify_manifest(&fx.manifest, VerifyPolicy::Strict)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.checked, 3);
}
