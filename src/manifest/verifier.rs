//! Manifest verification: re-digest every recorded file and compare.

use crate::digest::FileDigester;
use crate::error::HcompareError;
use crate::manifest::record::{ManifestRecord, RECORD_TERMINATOR};
use crate::types::Digest;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// What to do when a recomputed digest differs from the recorded one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyPolicy {
    /// Stop at the first mismatch (manufacture mode)
    Strict,
    /// Report every mismatch and keep going (analyze mode)
    Audit,
}

/// One file whose digest no longer matches the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub line: usize,
    pub path: PathBuf,
    pub expected: Digest,
    pub actual: Digest,
}

/// Outcome of a verification run that was not aborted
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub policy: VerifyPolicy,
    pub checked: u64,
    pub bytes: u64,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Reads a manifest and checks each record against the filesystem.
pub struct ManifestVerifier {
    policy: VerifyPolicy,
}

impl ManifestVerifier {
    pub fn new(policy: VerifyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VerifyPolicy {
        self.policy
    }

    /// Verify the manifest at `manifest_path`.
    ///
    /// Each file is digested with the size recorded in the manifest, not its
    /// current size. Blank lines are ignored. Unreadable files and malformed
    /// lines abort the run under either policy.
    #[instrument(skip(self, digester), fields(manifest = %manifest_path.display(), policy = ?self.policy()))]
    pub fn verify(
        &self,
        manifest_path: &Path,
        digester: &mut FileDigester,
    ) -> Result<VerifyReport, HcompareError> {
        let file =
            File::open(manifest_path).map_err(|e| HcompareError::manifest_io(manifest_path, e))?;
        self.verify_reader(BufReader::new(file), manifest_path, digester)
    }

    /// Verify records read from `reader`; `source` names it in errors.
    pub fn verify_reader<R: BufRead>(
        &self,
        mut reader: R,
        source: &Path,
        digester: &mut FileDigester,
    ) -> Result<VerifyReport, HcompareError> {
        let mut report = VerifyReport {
            policy: self.policy,
            checked: 0,
            bytes: 0,
            mismatches: Vec::new(),
        };
        let mut line = Vec::new();
        let mut line_no = 0usize;

        loop {
            line.clear();
            let read = reader
                .read_until(RECORD_TERMINATOR, &mut line)
                .map_err(|e| HcompareError::manifest_io(source, e))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            if is_empty_line(&line) {
                continue;
            }

            let record = ManifestRecord::parse(&line, line_no)?;
            let actual = digester.digest_file(&record.path, record.size)?;
            report.checked += 1;
            report.bytes += record.size;

            if actual == record.digest {
                debug!(path = %record.path.display(), "Digest matches");
                continue;
            }

            let mismatch = Mismatch {
                line: line_no,
                path: record.path,
                expected: record.digest,
                actual,
            };

            match self.policy {
                VerifyPolicy::Strict => {
                    error!(
                        path = %mismatch.path.display(),
                        line = line_no,
                        "File mismatch"
                    );
                    return Err(HcompareError::DigestMismatch {
                        path: mismatch.path,
                        expected: mismatch.expected,
                        actual: mismatch.actual,
                        line: mismatch.line,
                    });
                }
                VerifyPolicy::Audit => {
                    warn!(
                        path = %mismatch.path.display(),
                        line = line_no,
                        expected = %mismatch.expected,
                        actual = %mismatch.actual,
                        "File mismatch"
                    );
                    report.mismatches.push(mismatch);
                }
            }
        }

        info!(
            checked = report.checked,
            mismatches = report.mismatches.len(),
            "Verification complete"
        );
        Ok(report)
    }
}

/// Only a bare terminator (`\n` or `\r\n`) counts as blank; anything else
/// is parsed, so whitespace-only lines are reported as malformed.
fn is_empty_line(line: &[u8]) -> bool {
    let line = line.strip_suffix(&[RECORD_TERMINATOR]).unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.is_empty()
}
