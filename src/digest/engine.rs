//! MD5 compression function, padding and finalization (RFC 1321).
//!
//! [`HashState`] is the raw accumulator: callers feed it whole 64-byte blocks
//! and finalize it with whatever partial block is left plus the total message
//! length. [`Md5`] wraps it with a carry buffer so arbitrary slices can be fed
//! in any split without changing the result.

use crate::types::{Digest, DIGEST_LEN};

/// Size of one compression block in bytes
pub const BLOCK_LEN: usize = 64;

/// Offset inside the final block where the 64-bit length field starts
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Additive constants: floor(|sin(i + 1)| * 2^32)
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left-rotate amounts
const R: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Running MD5 accumulators (A, B, C, D) and the number of bits absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashState {
    acc: [u32; 4],
    bits: u64,
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// Fresh state with the standard initialization vector
    pub fn new() -> Self {
        Self {
            acc: INITIAL_STATE,
            bits: 0,
        }
    }

    /// Number of message bits absorbed through whole blocks so far
    pub fn bits_absorbed(&self) -> u64 {
        self.bits
    }

    /// Run the 64-round compression over one block.
    pub fn absorb_block(&mut self, block: &[u8; BLOCK_LEN]) {
        self.compress(block);
    }

    /// `block` must be exactly [`BLOCK_LEN`] bytes.
    pub(crate) fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_LEN);

        let mut w = [0u32; 16];
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let [mut a, mut b, mut c, mut d] = self.acc;

        for i in 0..64 {
            let (f, g) = match i {
                0..=15 => ((b & c) | (!b & d), i),
                16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let rotated = a
                .wrapping_add(f)
                .wrapping_add(K[i])
                .wrapping_add(w[g])
                .rotate_left(R[i]);
            let next_b = b.wrapping_add(rotated);

            a = d;
            d = c;
            c = b;
            b = next_b;
        }

        self.acc[0] = self.acc[0].wrapping_add(a);
        self.acc[1] = self.acc[1].wrapping_add(b);
        self.acc[2] = self.acc[2].wrapping_add(c);
        self.acc[3] = self.acc[3].wrapping_add(d);
        self.bits = self.bits.wrapping_add((BLOCK_LEN as u64) * 8);
    }

    /// Pad `tail` and absorb the final block(s), producing the digest.
    ///
    /// `tail` is the unabsorbed remainder of the message and is normally
    /// shorter than one block; any whole blocks it does contain are absorbed
    /// first. `total_len_bits` is written into the length field as is (mod 2^64).
    pub fn finalize(mut self, tail: &[u8], total_len_bits: u64) -> Digest {
        let whole = tail.chunks_exact(BLOCK_LEN);
        let remainder = whole.remainder();
        for block in whole {
            self.compress(block);
        }

        let mut block = [0u8; BLOCK_LEN];
        block[..remainder.len()].copy_from_slice(remainder);
        block[remainder.len()] = 0x80;

        // No room left for the length field: it spills into a second block.
        if remainder.len() >= LENGTH_OFFSET {
            self.compress(&block);
            block = [0u8; BLOCK_LEN];
        }

        block[LENGTH_OFFSET..].copy_from_slice(&total_len_bits.to_le_bytes());
        self.compress(&block);

        let mut out = [0u8; DIGEST_LEN];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.acc.iter()) {
            dst.copy_from_slice(&word.to_le_bytes());
        }
        Digest::from_bytes(out)
    }
}

/// Streaming MD5 context that carries partial blocks between updates.
#[derive(Debug, Clone)]
pub struct Md5 {
    state: HashState,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    len: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    pub fn new() -> Self {
        Self {
            state: HashState::new(),
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Total bytes fed through [`Md5::update`]
    pub fn bytes_consumed(&self) -> u64 {
        self.len
    }

    /// Absorb `data`, compressing every block completed so far.
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            self.state.compress(&block);
            self.buffered = 0;
        }

        let blocks = data.chunks_exact(BLOCK_LEN);
        let remainder = blocks.remainder();
        for block in blocks {
            self.state.compress(block);
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();
    }

    /// Finalize using the number of bytes actually fed.
    pub fn finish(self) -> Digest {
        let len = self.len;
        self.finish_with_len(len)
    }

    /// Finalize with a caller-declared message length in bytes.
    pub fn finish_with_len(self, byte_len: u64) -> Digest {
        self.state
            .finalize(&self.buffer[..self.buffered], byte_len.wrapping_mul(8))
    }
}

/// One-shot MD5 of an in-memory buffer
pub fn md5(data: &[u8]) -> Digest {
    let mut ctx = Md5::new();
    ctx.update(data);
    ctx.finish()
}
