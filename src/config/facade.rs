//! Config loading facade: assembles the source layers and deserializes.

use crate::config::merge::merge_policy;
use crate::config::sources::{env_vars, global_file};
use crate::config::HcompareConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

/// Loads [`HcompareConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file if present, then environment.
    pub fn load() -> Result<HcompareConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env_vars::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Defaults, then `path` (required, TOML), then environment.
    ///
    /// The global config file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<HcompareConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = env_vars::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }
}
