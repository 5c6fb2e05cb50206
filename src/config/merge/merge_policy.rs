//! Merge rules: defaults, override order, conflict handling.

use crate::digest::DEFAULT_CHUNK_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override these key by key, so a file that sets only
/// `walk.follow_symlinks` keeps every other default.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("digest.chunk_size", DEFAULT_CHUNK_SIZE as u64)?
        .set_default("walk.recursive", true)?
        .set_default("walk.follow_symlinks", false)?
        .set_default("walk.match_directories", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
