//! Environment source: `HCOMPARE_<SECTION>__<KEY>`, e.g. `HCOMPARE_DIGEST__CHUNK_SIZE=65536`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add the environment source; it overrides every file layer.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("HCOMPARE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
