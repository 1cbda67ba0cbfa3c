//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{env, global_file, workspace_file};
use super::ModelgenConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads [`ModelgenConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root`.
    ///
    /// Precedence (highest last): defaults, user config file, workspace `modelgen.toml`,
    /// `MODELGEN_` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ModelgenConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder);

        let config: ModelgenConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            options = config.effective_options().bits(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from a single file over the defaults. Environment variables still
    /// apply.
    pub fn load_from_file(path: &Path) -> Result<ModelgenConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = env::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Defaults only, ignoring every file and the environment.
    pub fn defaults() -> Result<ModelgenConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()
    }
}
