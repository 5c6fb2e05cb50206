//! Manifest format: writing during creation, parsing and checking during verification.

pub mod record;
pub mod verifier;
pub mod writer;

pub use record::{encode_line, ManifestRecord};
pub use verifier::{ManifestVerifier, Mismatch, VerifyPolicy, VerifyReport};
pub use writer::ManifestWriter;
