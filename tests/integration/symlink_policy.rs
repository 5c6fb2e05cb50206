//! Symlink handling during manifest creation

#![cfg(unix)]

use crate::integration::test_utils::{manifest_lines, populate, small_chunk_config};
use hcompare::api::IntegrityApi;
use hcompare::manifest::VerifyPolicy;
use std::os::unix::fs::symlink;
use tempfile::TempDir;

fn create(temp_dir: &TempDir, follow: bool) -> (hcompare::api::CreateSummary, Vec<String>) {
    let root = temp_dir.path().join("mmc1");
    let manifest = temp_dir.path().join(if follow { "follow.txt" } else { "skip.txt" });
    let mut config = small_chunk_config(64);
    config.walk.follow_symlinks = follow;
    let summary = IntegrityApi::new(config)
        .unwrap()
        .create_manifest(&root, &manifest)
        .unwrap();
    (summary, manifest_lines(&manifest))
}

fn linked_tree(temp_dir: &TempDir) {
    let root = temp_dir.path().join("mmc1");
    populate(&root, &[("real.txt", b"payload"), ("dir/inner.txt", b"inner")]);
    symlink(root.join("real.txt"), root.join("link.txt")).unwrap();
    symlink(root.join("dir"), root.join("dirlink")).unwrap();
}

#[test]
fn test_links_skipped_by_default() {
    let temp_dir = TempDir::new().unwrap();
    linked_tree(&temp_dir);

    let (summary, lines) = create(&temp_dir, false);
    assert_eq!(summary.records, 2);
    assert_eq!(summary.walk.skipped_symlinks, 2);
    assert!(lines.iter().all(|l| !l.ends_with("link.txt")));
}

#[test]
fn test_follow_digests_link_targets() {
    let temp_dir = TempDir::new().unwrap();
    linked_tree(&temp_dir);

    let (summary, lines) = create(&temp_dir, true);
    // real.txt, link.txt, dir/inner.txt, dirlink/inner.txt
    assert_eq!(summary.records, 4);
    assert_eq!(summary.walk.skipped_symlinks, 0);
    assert!(lines.iter().any(|l| l.ends_with("mmc1/link.txt")));
    assert!(lines.iter().any(|l| l.ends_with("mmc1/dirlink/inner.txt")));
}

#[test]
fn test_dangling_link_is_a_warning_when_following() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mmc1");
    populate(&root, &[("real.txt", b"payload")]);
    symlink(root.join("gone"), root.join("dangling")).unwrap();

    let (summary, _) = create(&temp_dir, true);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.walk.warnings.len(), 1);
    assert_eq!(summary.walk.warnings[0].path, root.join("dangling"));
}

#[test]
fn test_link_loop_is_a_warning_when_following() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mmc1");
    populate(&root, &[("sub/file.txt", b"x")]);
    symlink(&root, root.join("sub").join("back")).unwrap();

    let (summary, _) = create(&temp_dir, true);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.walk.warnings.len(), 1);
}

#[test]
fn test_followed_manifest_verifies() {
    let temp_dir = TempDir::new().unwrap();
    linked_tree(&temp_dir);
    create(&temp_dir, true);

    let report = IntegrityApi::new(small_chunk_config(64))
        .unwrap()
        .verify_manifest(&temp_dir.path().join("follow.txt"), VerifyPolicy::Strict)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.checked, 4);
}
