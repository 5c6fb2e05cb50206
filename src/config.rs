//! Configuration System
//!
//! Layered configuration for chunk size, walk policy and logging. Sources, lowest
//! precedence first: built-in defaults, the global config file (or an explicit
//! `--config` file), then `HCOMPARE_*` environment variables. CLI flags are
//! applied on top by the binary. The loaded value is immutable and passed into
//! the run API.

use crate::digest::DEFAULT_CHUNK_SIZE;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HcompareConfig {
    /// Digest I/O settings
    #[serde(default)]
    pub digest: DigestConfig,

    /// Directory walk policy used in creation mode
    #[serde(default)]
    pub walk: WalkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Digest I/O settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Bytes read from a file per I/O call
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Digest(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Digest(msg) => write!(f, "Digest: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DigestConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl HcompareConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.digest.validate() {
            errors.push(ValidationError::Digest(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
