//! Plugin providers: named factories that build a plugin instance per model spec.

use crate::error::PluginError;
use crate::model::ModelSpec;
use crate::plugin::{BuildPlugin, Plugin, PluginEnv};
use std::fmt;
use std::sync::Arc;

type PluginFactory =
    dyn Fn(&Arc<ModelSpec>, &PluginEnv) -> Result<Box<dyn Plugin>, PluginError> + Send + Sync;

/// A registered, not yet instantiated plugin.
///
/// Cloning a provider shares its factory.
#[derive(Clone)]
pub struct PluginProvider {
    name: Arc<str>,
    factory: Arc<PluginFactory>,
}

impl PluginProvider {
    /// Provider backed by an arbitrary factory.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgen::plugin::{Plugin, PluginProvider};
    ///
    /// struct Marker;
    /// impl Plugin for Marker {}
    ///
    /// let provider = PluginProvider::new("marker", |_spec, _env| Ok(Box::new(Marker)));
    /// assert_eq!(provider.name(), "marker");
    /// ```
    pub fn new<F>(name: impl Into<Arc<str>>, factory: F) -> Self
    where
        F: Fn(&Arc<ModelSpec>, &PluginEnv) -> Result<Box<dyn Plugin>, PluginError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Provider for a plugin type implementing [`BuildPlugin`].
    pub fn of<P: BuildPlugin>() -> Self {
        Self::new(P::NAME, |spec, env| {
            let plugin = P::build(spec, env)?;
            Ok(Box::new(plugin) as Box<dyn Plugin>)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Build a fresh plugin instance for `spec`.
    pub fn instantiate(
        &self,
        spec: &Arc<ModelSpec>,
        env: &PluginEnv,
    ) -> Result<Box<dyn Plugin>, PluginError> {
        (self.factory)(spec, env)
    }
}

impl fmt::Debug for PluginProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
