//! Environment source: `MODELGEN_OPTIONS__DISABLE_CONSTANT_COPYING=true` and friends.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("MODELGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
