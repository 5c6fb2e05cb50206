//! Manifest record encoding and parsing agree for any storable path

use hcompare::digest::md5;
use hcompare::manifest::{encode_line, ManifestRecord};
use hcompare::types::FileEntry;
use proptest::prelude::*;
use std::path::PathBuf;

proptest! {
    #[test]
    fn encoded_line_parses_back(
        path in "/[a-zA-Z0-9 ._/\r-]{0,63}[a-zA-Z0-9 ._/-]",
        size in any::<u64>(),
        contents in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let entry = FileEntry {
            path: PathBuf::from(&path),
            size,
            digest: md5(&contents),
        };
        let line = encode_line(&entry).unwrap();
        prop_assert_eq!(line.last(), Some(&b'\n'));

        let record = ManifestRecord::parse(&line, 1).unwrap();
        prop_assert_eq!(record, ManifestRecord::from(&entry));
    }

    #[test]
    fn paths_with_tabs_are_refused(prefix in "[a-z]{1,8}", suffix in "[a-z]{0,8}") {
        let entry = FileEntry {
            path: PathBuf::from(format!("/{}\t{}", prefix, suffix)),
            size: 0,
            digest: md5(b""),
        };
        prop_assert!(encode_line(&entry).is_err());
    }

    #[test]
    fn trailing_carriage_return_is_refused(name in "[a-z\r]{0,16}") {
        let entry = FileEntry {
            path: PathBuf::from(format!("/{}\r", name)),
            size: 0,
            digest: md5(b""),
        };
        prop_assert!(encode_line(&entry).is_err());
    }
}
