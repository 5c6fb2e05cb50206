//! Chunked file digesting on top of the streaming MD5 context.

use crate::digest::engine::Md5;
use crate::error::HcompareError;
use crate::types::Digest;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Default read chunk: 5 MiB
pub const DEFAULT_CHUNK_SIZE: usize = 5 * 1024 * 1024;

/// Reads files in bounded chunks and digests them.
///
/// One read buffer is allocated up front and reused for every file, so a
/// digester must not be shared between concurrent runs.
pub struct FileDigester {
    buffer: Vec<u8>,
}

impl FileDigester {
    /// Create a digester reading `chunk_size` bytes per I/O call.
    pub fn new(chunk_size: usize) -> Result<Self, HcompareError> {
        if chunk_size == 0 {
            return Err(HcompareError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            buffer: vec![0u8; chunk_size],
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.buffer.len()
    }

    /// Digest the file at `path`, using `declared_size` as the message length.
    ///
    /// Creation passes the stat size; verification passes the size recorded in
    /// the manifest, so a file whose length changed no longer matches.
    pub fn digest_file(&mut self, path: &Path, declared_size: u64) -> Result<Digest, HcompareError> {
        let file = File::open(path).map_err(|e| HcompareError::io(path, e))?;
        self.digest_reader(file, declared_size)
            .map_err(|e| HcompareError::io(path, e))
    }

    /// Digest everything `reader` yields up to end of stream.
    ///
    /// Whole blocks are compressed as they arrive; a trailing partial block is
    /// carried into the next chunk, and padding happens only at end of stream.
    pub fn digest_reader<R: Read>(&mut self, mut reader: R, declared_size: u64) -> io::Result<Digest> {
        let mut ctx = Md5::new();
        let mut chunks = 0usize;

        loop {
            let n = match reader.read(&mut self.buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            ctx.update(&self.buffer[..n]);
            chunks += 1;
        }

        trace!(
            chunks,
            bytes_read = ctx.bytes_consumed(),
            declared_size,
            "Digested stream"
        );

        Ok(ctx.finish_with_len(declared_size))
    }
}

impl Default for FileDigester {
    fn default() -> Self {
        Self {
            buffer: vec![0u8; DEFAULT_CHUNK_SIZE],
        }
    }
}
