//! One manifest line: `<hex digest>\t<size>\t<path>\n`.

use crate::error::HcompareError;
use crate::tree::path::{is_representable, path_from_bytes, path_to_bytes};
use crate::types::{Digest, FileEntry, DIGEST_HEX_LEN};
use std::path::PathBuf;

pub const FIELD_SEPARATOR: u8 = b'\t';
pub const RECORD_TERMINATOR: u8 = b'\n';

/// A parsed manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub digest: Digest,
    pub size: u64,
    pub path: PathBuf,
}

impl ManifestRecord {
    /// Parse one line (with or without its trailing newline).
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse(line: &[u8], line_no: usize) -> Result<Self, HcompareError> {
        let malformed = |reason: String| HcompareError::MalformedRecord {
            line: line_no,
            reason,
        };

        let line = line.strip_suffix(&[RECORD_TERMINATOR]).unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let mut fields = line.splitn(3, |b| *b == FIELD_SEPARATOR);
        let digest_field = fields.next().unwrap_or_default();
        let size_field = fields
            .next()
            .ok_or_else(|| malformed("missing size field".to_string()))?;
        let path_field = fields
            .next()
            .ok_or_else(|| malformed("missing path field".to_string()))?;

        let digest_str = std::str::from_utf8(digest_field)
            .map_err(|_| malformed("digest is not ASCII hex".to_string()))?;
        if digest_str.len() != DIGEST_HEX_LEN {
            return Err(malformed(format!(
                "digest must be {} hex characters, found {}",
                DIGEST_HEX_LEN,
                digest_str.len()
            )));
        }
        let digest: Digest = digest_str
            .parse()
            .map_err(|e| malformed(format!("{}", e)))?;

        let size = std::str::from_utf8(size_field)
            .ok()
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| {
                malformed(format!(
                    "size is not a decimal byte count: {:?}",
                    String::from_utf8_lossy(size_field)
                ))
            })?;

        if path_field.is_empty() {
            return Err(malformed("empty path field".to_string()));
        }

        Ok(Self {
            digest,
            size,
            path: path_from_bytes(path_field),
        })
    }
}

impl From<&FileEntry> for ManifestRecord {
    fn from(entry: &FileEntry) -> Self {
        Self {
            digest: entry.digest,
            size: entry.size,
            path: entry.path.clone(),
        }
    }
}

/// Encode `entry` as one newline-terminated manifest line.
pub fn encode_line(entry: &FileEntry) -> Result<Vec<u8>, HcompareError> {
    if !is_representable(&entry.path) {
        return Err(HcompareError::UnrepresentablePath(entry.path.clone()));
    }
    let path = path_to_bytes(&entry.path);
    let size = entry.size.to_string();

    let mut line = Vec::with_capacity(DIGEST_HEX_LEN + size.len() + path.len() + 3);
    line.extend_from_slice(entry.digest.to_hex().as_bytes());
    line.push(FIELD_SEPARATOR);
    line.extend_from_slice(size.as_bytes());
    line.push(FIELD_SEPARATOR);
    line.extend_from_slice(&path);
    line.push(RECORD_TERMINATOR);
    Ok(line)
}
