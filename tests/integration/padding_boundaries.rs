//! Padding and chunk-boundary behavior, checked against the md-5 crate

use ::md5::{Digest as _, Md5 as RefMd5};
use hcompare::digest::{md5, FileDigester, BLOCK_LEN};

fn reference(data: &[u8]) -> [u8; 16] {
    let mut hasher = RefMd5::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Lengths around the 56-byte length-field cutoff spill into a second block
#[test]
fn test_lengths_around_length_field() {
    for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129] {
        let data = pattern(len);
        assert_eq!(md5(&data).as_bytes(), &reference(&data), "length {}", len);
    }
}

/// Files whose size is an exact multiple of the read buffer
#[test]
fn test_exact_multiples_of_chunk() {
    for chunk in [1usize, 3, 64, 100, 4096] {
        let mut digester = FileDigester::new(chunk).unwrap();
        for multiple in 0..4 {
            let data = pattern(chunk * multiple);
            let digest = digester
                .digest_reader(&data[..], data.len() as u64)
                .unwrap();
            assert_eq!(
                digest.as_bytes(),
                &reference(&data),
                "chunk {} x {}",
                chunk,
                multiple
            );
        }
    }
}

/// Buffer sizes that are not a multiple of the block length
#[test]
fn test_chunks_not_aligned_to_block() {
    let data = pattern(BLOCK_LEN * 9 + 13);
    for chunk in [BLOCK_LEN - 1, BLOCK_LEN + 1, 2 * BLOCK_LEN + 5, 1000] {
        let mut digester = FileDigester::new(chunk).unwrap();
        let digest = digester
            .digest_reader(&data[..], data.len() as u64)
            .unwrap();
        assert_eq!(digest.as_bytes(), &reference(&data), "chunk {}", chunk);
    }
}

/// The declared size drives the length field, so a stale size changes the digest
#[test]
fn test_declared_size_enters_digest() {
    let data = pattern(200);
    let mut digester = FileDigester::new(64).unwrap();
    let honest = digester.digest_reader(&data[..], 200).unwrap();
    let stale = digester.digest_reader(&data[..], 199).unwrap();
    assert_eq!(honest.as_bytes(), &reference(&data));
    assert_ne!(honest, stale);
}
