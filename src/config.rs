//! Configuration System
//!
//! Layered generator configuration: built-in defaults, the user config file, the workspace
//! `modelgen.toml`, then `MODELGEN_` environment variables. The loaded options are what a
//! [`PluginManager`](crate::plugin::PluginManager) captures at construction.

use crate::logging::LoggingConfig;
use crate::options::{GeneratorOptions, OptionFlag};
use serde::{Deserialize, Serialize};
use tracing::warn;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelgenConfig {
    /// Named generator options
    #[serde(default)]
    pub options: GeneratorOptions,

    /// Legacy option bitmask, OR-ed into `options`
    #[serde(default)]
    pub option_flags: u32,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ModelgenConfig {
    /// Options the generator runs with: the named options plus any bits in `option_flags`.
    pub fn effective_options(&self) -> GeneratorOptions {
        let known = OptionFlag::ALL.iter().fold(0, |acc, flag| acc | flag.bit());
        let unknown = self.option_flags & !known;
        if unknown != 0 {
            warn!(bits = unknown, "Ignoring unknown option flag bits");
        }
        self.options
            .union(GeneratorOptions::from_bits(self.option_flags))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let logging = &self.logging;

        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown level '{}'",
                logging.level
            )));
        }
        if logging.format != "text" && logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}' (must be 'json' or 'text')",
                logging.format
            )));
        }
        if !["stdout", "stderr", "file"].contains(&logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown output '{}'",
                logging.output
            )));
        }
        if logging.output == "file" && logging.file.as_os_str().is_empty() {
            errors.push(ValidationError::Logging(
                "file output requires a log file path".to_string(),
            ));
        }
        for (module, level) in &logging.modules {
            if !LOG_LEVELS.contains(&level.as_str()) {
                errors.push(ValidationError::Logging(format!(
                    "unknown level '{}' for module {}",
                    level, module
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
