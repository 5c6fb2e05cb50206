//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::HcompareError;

/// Success
pub const EXIT_OK: i32 = 0;
/// I/O, path, configuration or logging failure
pub const EXIT_FATAL: i32 = 1;
/// Manifest line could not be parsed
pub const EXIT_MALFORMED: i32 = 2;
/// Manufacture mode hit a mismatch
pub const EXIT_MISMATCH: i32 = 3;
/// Analyze mode finished and found at least one mismatch
pub const EXIT_AUDIT_FAILED: i32 = 4;

/// Map domain errors to a single diagnostic line for CLI output.
pub fn map_error(e: &HcompareError) -> String {
    match e {
        HcompareError::DigestMismatch { path, .. } => {
            format!("File mismatch: {}", path.display())
        }
        other => other.to_string(),
    }
}

/// Process exit status for a run that ended in `e`.
pub fn exit_code(e: &HcompareError) -> i32 {
    match e {
        HcompareError::MalformedRecord { .. } => EXIT_MALFORMED,
        HcompareError::DigestMismatch { .. } => EXIT_MISMATCH,
        HcompareError::Io { .. }
        | HcompareError::ManifestIo { .. }
        | HcompareError::DirectoryUnreadable { .. }
        | HcompareError::PathTooLong { .. }
        | HcompareError::UnrepresentablePath(_)
        | HcompareError::ConfigError(_)
        | HcompareError::Render(_) => EXIT_FATAL,
    }
}
