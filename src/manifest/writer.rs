//! Manifest serialization during creation mode

use crate::error::HcompareError;
use crate::manifest::record::encode_line;
use crate::types::FileEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes manifest lines to a file in the order entries are given.
pub struct ManifestWriter {
    path: PathBuf,
    sink: BufWriter<File>,
    records: u64,
    echo: bool,
}

impl ManifestWriter {
    /// Create (or truncate) the manifest at `path`.
    pub fn create(path: &Path) -> Result<Self, HcompareError> {
        let file = File::create(path).map_err(|e| HcompareError::manifest_io(path, e))?;
        debug!(manifest = %path.display(), "Opened manifest for writing");
        Ok(Self {
            path: path.to_path_buf(),
            sink: BufWriter::new(file),
            records: 0,
            echo: false,
        })
    }

    /// Also print each record to stdout as it is written
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn write_entry(&mut self, entry: &FileEntry) -> Result<(), HcompareError> {
        let line = encode_line(entry)?;
        self.sink
            .write_all(&line)
            .map_err(|e| HcompareError::manifest_io(&self.path, e))?;
        if self.echo {
            // Echo is best effort; a closed stdout must not fail the run
            echo_line(std::io::stdout().lock(), &line);
        }
        self.records += 1;
        Ok(())
    }

    /// Flush to disk and return the number of records written.
    pub fn finish(mut self) -> Result<u64, HcompareError> {
        self.sink
            .flush()
            .map_err(|e| HcompareError::manifest_io(&self.path, e))?;
        self.sink
            .get_ref()
            .sync_all()
            .map_err(|e| HcompareError::manifest_io(&self.path, e))?;
        debug!(manifest = %self.path.display(), records = self.records, "Manifest written");
        Ok(self.records)
    }
}

/// Write `line` to `out`, logging instead of failing when the write errors.
/// Returns whether the line went out.
fn echo_line<W: Write>(mut out: W, line: &[u8]) -> bool {
    match out.write_all(line) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "Record echo failed");
            false
        }
    }
}
