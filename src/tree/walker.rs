//! Filesystem walker that digests every regular file under a root

use crate::digest::FileDigester;
use crate::error::HcompareError;
use crate::tree::path::check_path_len;
use crate::types::FileEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace, warn};
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Descend into subdirectories (default: true)
    #[serde(default = "default_true")]
    pub recursive: bool,
    /// Digest symlink targets instead of skipping links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Report directories as they are passed; they are never digested (default: true)
    #[serde(default = "default_true")]
    pub match_directories: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_symlinks: false,
            match_directories: true,
        }
    }
}

/// A non-fatal problem with one directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Tally of one walk
#[derive(Debug, Clone, Default, Serialize)]
pub struct WalkSummary {
    pub files: u64,
    pub bytes: u64,
    pub directories: u64,
    pub skipped_symlinks: u64,
    /// FIFOs, sockets, devices
    pub skipped_special: u64,
    pub warnings: Vec<WalkWarning>,
}

impl WalkSummary {
    fn warn(&mut self, path: PathBuf, message: String) {
        warn!(path = %path.display(), "Can't stat entry: {}", message);
        self.warnings.push(WalkWarning { path, message });
    }
}

/// Depth-first walker over one directory tree
pub struct TreeWalker {
    root: PathBuf,
    config: WalkConfig,
}

impl TreeWalker {
    /// Create a walker with the default configuration
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkConfig::default(),
        }
    }

    pub fn with_config(root: PathBuf, config: WalkConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree, digest each regular file, and hand it to `visit`.
    ///
    /// Entries arrive in directory enumeration order, which is unsorted and
    /// platform dependent. Entries are not collected; `visit` sees each one
    /// exactly once and an error from it stops the walk.
    #[instrument(skip(self, digester, visit), fields(root = %self.root.display()))]
    pub fn walk<F>(
        &self,
        digester: &mut FileDigester,
        mut visit: F,
    ) -> Result<WalkSummary, HcompareError>
    where
        F: FnMut(&FileEntry) -> Result<(), HcompareError>,
    {
        let mut summary = WalkSummary::default();

        let mut walker = WalkDir::new(&self.root).follow_links(self.config.follow_symlinks);
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        for item in walker {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    self.handle_walk_error(err, &mut summary)?;
                    continue;
                }
            };

            let path = entry.path();
            check_path_len(path)?;

            let file_type = entry.file_type();

            if entry.depth() == 0 {
                if !file_type.is_dir() {
                    return Err(HcompareError::DirectoryUnreadable {
                        path: path.to_path_buf(),
                        source: io::Error::new(io::ErrorKind::Other, "not a directory"),
                    });
                }
                continue;
            }

            // Only reachable when links are not followed
            if file_type.is_symlink() {
                trace!(path = %path.display(), "Skipping symlink");
                summary.skipped_symlinks += 1;
                continue;
            }

            if file_type.is_dir() {
                summary.directories += 1;
                if self.config.match_directories {
                    debug!(path = %path.display(), "Entering directory");
                }
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    summary.warn(path.to_path_buf(), err.to_string());
                    continue;
                }
            };

            if !metadata.is_file() {
                debug!(path = %path.display(), "Skipping special file");
                summary.skipped_special += 1;
                continue;
            }

            let size = metadata.len();
            let digest = digester.digest_file(path, size)?;
            let file_entry = FileEntry {
                path: path.to_path_buf(),
                size,
                digest,
            };
            debug!(path = %path.display(), size, digest = %digest, "Digested file");

            summary.files += 1;
            summary.bytes += size;
            visit(&file_entry)?;
        }

        info!(
            files = summary.files,
            bytes = summary.bytes,
            directories = summary.directories,
            warnings = summary.warnings.len(),
            "Walk complete"
        );
        Ok(summary)
    }

    /// Decide whether a walkdir error is a stat failure (warn and continue)
    /// or an unopenable directory (fatal).
    fn handle_walk_error(
        &self,
        err: walkdir::Error,
        summary: &mut WalkSummary,
    ) -> Result<(), HcompareError> {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let message = err.to_string();

        if err.depth() > 0 {
            if err.loop_ancestor().is_some() {
                summary.warn(path, message);
                return Ok(());
            }
            match fs::symlink_metadata(&path) {
                Ok(meta) if meta.is_dir() => {}
                // Dangling link, vanished entry, or a file that failed to stat
                _ => {
                    summary.warn(path, message);
                    return Ok(());
                }
            }
        }

        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
        Err(HcompareError::DirectoryUnreadable { path, source })
    }
}
