//! CLI route: single route table and run context. Dispatches to the plugin manager, the
//! emitter, and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, ModelArgs};
use crate::cli::presentation::{
    format_options_json, format_options_text, format_options_toml, format_plan_json,
    format_plan_text, OptionsView, PlanView,
};
use crate::config::{ConfigLoader, ModelgenConfig};
use crate::diagnostics::CollectingSink;
use crate::emitter::ModelFileEmitter;
use crate::error::ApiError;
use crate::model::{ModelKind, ModelSpec, TypeName};
use crate::options::GeneratorOptions;
use crate::plugin::PluginManager;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, info_span};

/// Runtime context for CLI execution: loaded configuration and the diagnostics sink shared
/// with the plugin manager.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ModelgenConfig,
    options: GeneratorOptions,
    diagnostics: Arc<CollectingSink>,
}

impl RunContext {
    /// Create run context from workspace root, optional config path, and an optional
    /// legacy bitmask given on the command line.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        flags: Option<u32>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::from_config(workspace_root, config, flags)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(
        workspace_root: PathBuf,
        config: ModelgenConfig,
        flags: Option<u32>,
    ) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;

        let mut options = config.effective_options();
        if let Some(bits) = flags {
            options = options.union(GeneratorOptions::from_bits(bits));
        }

        Ok(Self {
            workspace_root,
            config,
            options,
            diagnostics: Arc::new(CollectingSink::new()),
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &ModelgenConfig {
        &self.config
    }

    /// Options after config and command line flags are combined.
    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn diagnostics(&self) -> &CollectingSink {
        &self.diagnostics
    }

    /// Plugin manager for this run, with the default registrations.
    pub fn manager(&self) -> PluginManager {
        PluginManager::new(self.options, self.diagnostics.clone())
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", name = command_name(command));
        let _guard = span.enter();
        self.diagnostics.clear();

        let result = match command {
            Commands::Plan { model, format } => self.plan(model, format),
            Commands::Render { model, no_header } => self.render(model, *no_header),
            Commands::Options { format } => self.show_options(format),
        };
        info!(ok = result.is_ok(), "Command finished");
        result
    }

    fn plan(&self, model: &ModelArgs, format: &str) -> Result<String, ApiError> {
        let spec = Arc::new(model_spec(model)?);
        let manager = self.manager();
        let bundle = manager.bundle_for(&spec);
        let view = PlanView::new(&manager, &bundle, self.diagnostics.diagnostics());
        match format {
            "json" => format_plan_json(&view),
            "text" => Ok(format_plan_text(&view)),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown format '{}' (expected text or json)",
                other
            ))),
        }
    }

    fn render(&self, model: &ModelArgs, no_header: bool) -> Result<String, ApiError> {
        let spec = Arc::new(model_spec(model)?);
        let bundle = self.manager().bundle_for(&spec);
        let emitter = if no_header {
            ModelFileEmitter::new().without_header()
        } else {
            ModelFileEmitter::new()
        };
        let generated = emitter.emit(&bundle)?;
        info!(
            class = %generated.qualified_name(),
            path = %generated.relative_path().display(),
            "Rendered model class"
        );
        Ok(generated.source.trim_end().to_string())
    }

    fn show_options(&self, format: &str) -> Result<String, ApiError> {
        let view = OptionsView::new(self.options);
        match format {
            "toml" => format_options_toml(&view),
            "json" => format_options_json(&view),
            "text" => Ok(format_options_text(&view)),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown format '{}' (expected toml, json, or text)",
                other
            ))),
        }
    }
}

/// Build a model spec from command line arguments.
pub(crate) fn model_spec(args: &ModelArgs) -> Result<ModelSpec, ApiError> {
    if args.name.trim().is_empty() {
        return Err(ApiError::InvalidArgument("--name must not be empty".to_string()));
    }
    let parent = match (args.kind, &args.parent) {
        (ModelKind::Inherited, None) => {
            return Err(ApiError::InvalidArgument(
                "inherited models require --parent".to_string(),
            ))
        }
        (ModelKind::Inherited, Some(parent)) => Some(TypeName::new(parent.clone())),
        (_, Some(_)) => {
            return Err(ApiError::InvalidArgument(format!(
                "--parent only applies to inherited models, not {}",
                args.kind
            )))
        }
        (_, None) => None,
    };

    let mut spec = ModelSpec::builder()
        .spec_class(
            args.spec_class
                .clone()
                .unwrap_or_else(|| format!("{}Spec", args.name)),
        )
        .class_name(args.name.clone())
        .package(args.package.clone())
        .kind(args.kind)
        .source_name(args.source.clone().unwrap_or_default())
        .properties(args.properties.clone())
        .constants(args.constants.clone())
        .implements(args.implements.iter().map(TypeName::new).collect())
        .build();
    spec.parent = parent;
    Ok(spec)
}
