//! Digest results do not depend on how the input is split

use ::md5::{Digest as _, Md5 as RefMd5};
use hcompare::digest::{md5, FileDigester, Md5};
use proptest::prelude::*;

fn reference(data: &[u8]) -> [u8; 16] {
    let mut hasher = RefMd5::new();
    hasher.update(data);
    hasher.finalize().into()
}

proptest! {
    #[test]
    fn digest_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let digest = md5(&data);
        prop_assert_eq!(digest.as_bytes(), &reference(&data));
    }

    #[test]
    fn chunk_size_is_irrelevant(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        chunk in 1usize..300,
    ) {
        let mut digester = FileDigester::new(chunk).unwrap();
        let digest = digester.digest_reader(&data[..], data.len() as u64).unwrap();
        prop_assert_eq!(digest, md5(&data));
    }

    #[test]
    fn arbitrary_update_splits_agree(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|i| i.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Md5::new();
        let mut start = 0;
        for p in points {
            hasher.update(&data[start..p]);
            start = p;
        }
        hasher.update(&data[start..]);

        prop_assert_eq!(hasher.bytes_consumed(), data.len() as u64);
        prop_assert_eq!(hasher.finish(), md5(&data));
    }
}
