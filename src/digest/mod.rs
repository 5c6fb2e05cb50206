//! MD5 digesting: the block engine and the chunked file reader that drives it.

pub mod engine;
pub mod file;

pub use engine::{md5, HashState, Md5, BLOCK_LEN};
pub use file::{FileDigester, DEFAULT_CHUNK_SIZE};
