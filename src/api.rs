//! Run API: the two top-level operations, creation and verification.
//!
//! Both operations take the immutable [`HcompareConfig`] given at construction;
//! each call allocates its own read buffer and never touches process-wide state.

use crate::config::HcompareConfig;
use crate::digest::FileDigester;
use crate::error::HcompareError;
use crate::manifest::{ManifestVerifier, ManifestWriter, VerifyPolicy, VerifyReport};
use crate::tree::walker::{TreeWalker, WalkSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Result of a creation run
#[derive(Debug, Clone, Serialize)]
pub struct CreateSummary {
    pub manifest: PathBuf,
    pub records: u64,
    pub walk: WalkSummary,
}

/// Entry point for creating and verifying manifests
pub struct IntegrityApi {
    config: HcompareConfig,
    echo_records: bool,
}

impl IntegrityApi {
    /// Validate `config` and build the API around it.
    pub fn new(config: HcompareConfig) -> Result<Self, HcompareError> {
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            HcompareError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(Self {
            config,
            echo_records: false,
        })
    }

    /// Echo every created manifest record to stdout as it is written
    pub fn with_record_echo(mut self, echo: bool) -> Self {
        self.echo_records = echo;
        self
    }

    fn digester(&self) -> Result<FileDigester, HcompareError> {
        FileDigester::new(self.config.digest.chunk_size)
    }

    /// Walk `root` and write a fresh manifest to `manifest_path`.
    ///
    /// The manifest is opened before the walk starts, so an unwritable
    /// destination fails before any file is read.
    #[instrument(skip(self), fields(root = %root.display(), manifest = %manifest_path.display()))]
    pub fn create_manifest(
        &self,
        root: &Path,
        manifest_path: &Path,
    ) -> Result<CreateSummary, HcompareError> {
        info!(chunk_size = self.config.digest.chunk_size, "Creating manifest");

        let mut writer = ManifestWriter::create(manifest_path)?.with_echo(self.echo_records);
        let mut digester = self.digester()?;
        let walker = TreeWalker::with_config(root.to_path_buf(), self.config.walk.clone());

        let walk = walker.walk(&mut digester, |entry| writer.write_entry(entry))?;
        let records = writer.finish()?;

        info!(records, warnings = walk.warnings.len(), "Manifest created");
        Ok(CreateSummary {
            manifest: manifest_path.to_path_buf(),
            records,
            walk,
        })
    }

    /// Re-digest every file named in `manifest_path` and compare.
    ///
    /// Under [`VerifyPolicy::Strict`] the first mismatch is returned as
    /// [`HcompareError::DigestMismatch`]; under [`VerifyPolicy::Audit`] all
    /// mismatches are collected in the report.
    #[instrument(skip(self), fields(manifest = %manifest_path.display()))]
    pub fn verify_manifest(
        &self,
        manifest_path: &Path,
        policy: VerifyPolicy,
    ) -> Result<VerifyReport, HcompareError> {
        let mut digester = self.digester()?;
        ManifestVerifier::new(policy).verify(manifest_path, &mut digester)
    }
}
