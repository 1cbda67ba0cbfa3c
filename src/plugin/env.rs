//! Plugin environment: shared utilities handed to every plugin at construction.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::options::{GeneratorOptions, OptionFlag};
use std::fmt;
use std::sync::Arc;

/// Options and diagnostics shared by all plugins of one manager.
#[derive(Clone)]
pub struct PluginEnv {
    options: GeneratorOptions,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl PluginEnv {
    pub fn new(options: GeneratorOptions, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    /// Environment that reports diagnostics through `tracing`.
    pub fn with_tracing(options: GeneratorOptions) -> Self {
        Self::new(options, Arc::new(TracingSink))
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn flag(&self, flag: OptionFlag) -> bool {
        self.options.is_set(flag)
    }

    pub fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }
}

impl fmt::Debug for PluginEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginEnv")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
