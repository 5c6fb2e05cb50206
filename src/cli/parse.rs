//! CLI parse: clap types for hcompare. No behavior; definitions only.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// hcompare - walk a directory and record or verify MD5 digests of all files
#[derive(Parser)]
#[command(name = "hcompare", version)]
#[command(about = "Walk a directory and record or verify MD5 digests of all files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read buffer size in bytes (default: 5 MiB)
    #[arg(short = 'b', long = "buffer-size", global = true)]
    pub buffer_size: Option<usize>,

    /// More v's, more verbose (-v debug, -vv trace and echo records)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Result output format (text or json)
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a manifest for a directory
    Create {
        /// Directory to walk (e.g. /fs/mmc1)
        #[arg(short = 'd', long = "dir")]
        dir: PathBuf,
        /// Manifest file to write (e.g. /fs/mmc1/ref.txt)
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Only digest files directly inside the directory
        #[arg(long)]
        no_recursive: bool,
        /// Digest symlink targets instead of skipping links
        #[arg(long)]
        follow_symlinks: bool,
    },
    /// Verify a manifest and stop at the first mismatch
    Manufacture {
        /// Manifest file to read
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
    },
    /// Verify a manifest and report every mismatch
    Analyze {
        /// Manifest file to read
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
    },
}
