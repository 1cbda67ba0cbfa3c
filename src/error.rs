//! Error types for the model generator.

use crate::model::ModelKind;
use thiserror::Error;

/// Errors raised while constructing a plugin for a model spec.
///
/// These never escape the plugin manager: a failed construction is reported as a
/// warning and the provider is left out of that spec's bundle.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("model kind {kind} is not supported by {plugin}")]
    UnsupportedModelKind {
        plugin: String,
        kind: ModelKind,
    },

    #[error("invalid model spec {model}: {reason}")]
    InvalidSpec { model: String, reason: String },

    #[error("plugin construction failed: {0}")]
    Construction(String),
}

/// Errors raised while writing generated source.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("end_block called with no open block")]
    UnbalancedBlock,

    #[error("{0} block(s) left open at end of source")]
    UnclosedBlocks(usize),

    #[error("invalid member {member}: {reason}")]
    InvalidMember { member: String, reason: String },

    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Crate-level errors surfaced to callers of the configuration, emission, and CLI layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Emission failed: {0}")]
    EmitFailed(#[from] EmitError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
