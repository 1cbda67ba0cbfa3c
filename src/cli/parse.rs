//! CLI parse: clap types for modelgen, plus the value parsers they use.

use crate::model::{ConstantSpec, ModelKind, PropertySpec, TypeName};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// modelgen - resolve generator plugins and render model classes
#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Resolve generator plugins for a model spec and render the model class")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Legacy option bitmask, OR-ed into the configured options
    #[arg(long)]
    pub flags: Option<u32>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the plugin bundle resolved for a model
    Plan {
        #[command(flatten)]
        model: ModelArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the generated model class
    Render {
        #[command(flatten)]
        model: ModelArgs,
        /// Omit the generated-file header comment
        #[arg(long)]
        no_header: bool,
    },
    /// Show the effective generator options
    Options {
        /// Output format (toml, json, or text)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// Model description given on the command line
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Simple name of the generated class
    #[arg(long)]
    pub name: String,

    /// Simple name of the spec class (default: <name>Spec)
    #[arg(long)]
    pub spec_class: Option<String>,

    /// Package of the spec and generated class
    #[arg(long, default_value = "")]
    pub package: String,

    /// Model kind (table, view, inherited)
    #[arg(long, default_value = "table")]
    pub kind: ModelKind,

    /// Table or view name (default: lowercase plural of the class name)
    #[arg(long)]
    pub source: Option<String>,

    /// Qualified parent model, required for inherited models
    #[arg(long)]
    pub parent: Option<String>,

    /// Property as name:type or name:type=default (repeatable)
    #[arg(long = "property", value_parser = parse_property)]
    pub properties: Vec<PropertySpec>,

    /// Constant as NAME:type=initializer (repeatable)
    #[arg(long = "constant", value_parser = parse_constant)]
    pub constants: Vec<ConstantSpec>,

    /// Qualified interface to implement (repeatable)
    #[arg(long = "implements")]
    pub implements: Vec<String>,
}

/// Parse `name:type` or `name:type=default`.
pub fn parse_property(value: &str) -> Result<PropertySpec, String> {
    let (declaration, default) = match value.split_once('=') {
        Some((declaration, default)) => (declaration, Some(default)),
        None => (value, None),
    };
    let (name, column_type) = declaration
        .split_once(':')
        .ok_or_else(|| format!("expected name:type, got '{}'", value))?;
    let (name, column_type) = (name.trim(), column_type.trim());
    if name.is_empty() || column_type.is_empty() {
        return Err(format!("property name and type must be non-empty in '{}'", value));
    }

    let property = PropertySpec::new(name, column_type);
    Ok(match default {
        Some(default) => property.with_default(default.trim()),
        None => property,
    })
}

/// Parse `NAME:type=initializer`.
pub fn parse_constant(value: &str) -> Result<ConstantSpec, String> {
    let (declaration, initializer) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME:type=initializer, got '{}'", value))?;
    let (name, type_name) = declaration
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:type=initializer, got '{}'", value))?;
    let (name, type_name) = (name.trim(), type_name.trim());
    if name.is_empty() || type_name.is_empty() {
        return Err(format!("constant name and type must be non-empty in '{}'", value));
    }
    Ok(ConstantSpec::new(
        name,
        TypeName::new(type_name),
        initializer.trim(),
    ))
}
