//! Plugin Manager
//!
//! Registration happens on a [`PluginManagerBuilder`]; `build` freezes the three priority
//! tiers into a shared snapshot that any number of threads may resolve bundles from.
//! Late registration on a built manager takes `&mut self` and copies the snapshot on write,
//! so clones handed out earlier keep resolving against the tiers they captured.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::PluginError;
use crate::model::{ModelKind, ModelSpec};
use crate::options::{GeneratorOptions, OptionFlag};
use crate::plugin::defaults::{
    ConstantCopyingPlugin, ConstructorPlugin, FieldPlugin, ImplementsPlugin, ModelMethodPlugin,
};
use crate::plugin::{BundleEntry, Plugin, PluginBundle, PluginEnv, PluginProvider};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Priority tier of a registered provider.
///
/// Variants are ordered by resolution: `High` instances come first in a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginPriority {
    High,
    Normal,
    Low,
}

impl PluginPriority {
    pub const RESOLUTION_ORDER: [PluginPriority; 3] =
        [PluginPriority::High, PluginPriority::Normal, PluginPriority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluginPriority::High => "high",
            PluginPriority::Normal => "normal",
            PluginPriority::Low => "low",
        }
    }
}

impl fmt::Display for PluginPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(PluginPriority::High),
            "normal" => Ok(PluginPriority::Normal),
            "low" => Ok(PluginPriority::Low),
            other => Err(format!(
                "unknown plugin priority '{}' (expected high, normal, or low)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Tiers {
    high: Vec<PluginProvider>,
    normal: Vec<PluginProvider>,
    low: Vec<PluginProvider>,
}

impl Tiers {
    fn tier(&self, priority: PluginPriority) -> &[PluginProvider] {
        match priority {
            PluginPriority::High => &self.high,
            PluginPriority::Normal => &self.normal,
            PluginPriority::Low => &self.low,
        }
    }

    fn tier_mut(&mut self, priority: PluginPriority) -> &mut Vec<PluginProvider> {
        match priority {
            PluginPriority::High => &mut self.high,
            PluginPriority::Normal => &mut self.normal,
            PluginPriority::Low => &mut self.low,
        }
    }

    fn len(&self) -> usize {
        self.high.len() + self.normal.len() + self.low.len()
    }

    /// Providers in resolution order.
    fn iter(&self) -> impl Iterator<Item = (PluginPriority, &PluginProvider)> {
        PluginPriority::RESOLUTION_ORDER
            .into_iter()
            .flat_map(move |priority| self.tier(priority).iter().map(move |p| (priority, p)))
    }
}

/// Registration phase of a [`PluginManager`].
pub struct PluginManagerBuilder {
    env: Arc<PluginEnv>,
    tiers: Tiers,
}

impl PluginManagerBuilder {
    /// Start a registration phase. Default providers are registered immediately, reading
    /// `options` exactly once.
    pub fn new(options: GeneratorOptions, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        let mut builder = Self {
            env: Arc::new(PluginEnv::new(options, diagnostics)),
            tiers: Tiers::default(),
        };
        builder.register_defaults();
        builder
    }

    fn register_defaults(&mut self) {
        let options = *self.env.options();
        let mut defaults = Vec::new();

        if !options.is_set(OptionFlag::DisableDefaultConstructors) {
            defaults.push(PluginProvider::of::<ConstructorPlugin>());
        }
        if !options.is_set(OptionFlag::DisableImplementsHandling) {
            defaults.push(PluginProvider::of::<ImplementsPlugin>());
        }
        if !options.is_set(OptionFlag::DisableMethodHandling) {
            defaults.push(PluginProvider::of::<ModelMethodPlugin>());
        }

        // One field plugin per model kind; these cannot be disabled.
        for kind in ModelKind::ALL {
            defaults.push(FieldPlugin::provider(kind));
        }

        // Constant copying is registered last.
        if !options.is_set(OptionFlag::DisableConstantCopying) {
            defaults.push(PluginProvider::of::<ConstantCopyingPlugin>());
        }

        for provider in defaults {
            debug!(plugin = provider.name(), "Registered default plugin");
            self.tiers.normal.push(provider);
        }
    }

    /// Register an additional provider. Call order is preserved within a tier.
    pub fn add_plugin(&mut self, provider: PluginProvider, priority: PluginPriority) -> &mut Self {
        register(&self.env, &mut self.tiers, provider, priority);
        self
    }

    /// Owned variant of [`PluginManagerBuilder::add_plugin`].
    pub fn with_plugin(mut self, provider: PluginProvider, priority: PluginPriority) -> Self {
        self.add_plugin(provider, priority);
        self
    }

    pub fn flag(&self, flag: OptionFlag) -> bool {
        self.env.flag(flag)
    }

    /// Freeze registrations into a manager.
    pub fn build(self) -> PluginManager {
        debug!(providers = self.tiers.len(), "Plugin registrations frozen");
        PluginManager {
            env: self.env,
            tiers: Arc::new(self.tiers),
        }
    }
}

fn register(
    env: &PluginEnv,
    tiers: &mut Tiers,
    provider: PluginProvider,
    priority: PluginPriority,
) {
    env.diagnostics().note(format!(
        "Adding plugin {} with priority {}",
        provider.name(),
        priority
    ));
    tiers.tier_mut(priority).push(provider);
}

/// Instantiate `provider`, turning a panicking factory into a construction error.
fn instantiate_guarded(
    provider: &PluginProvider,
    spec: &Arc<ModelSpec>,
    env: &PluginEnv,
) -> Result<Box<dyn Plugin>, PluginError> {
    panic::catch_unwind(AssertUnwindSafe(|| provider.instantiate(spec, env))).unwrap_or_else(
        |payload| {
            Err(PluginError::Construction(format!(
                "factory panicked: {}",
                panic_message(payload.as_ref())
            )))
        },
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Resolves per-spec plugin bundles from a frozen set of registrations.
#[derive(Clone)]
pub struct PluginManager {
    env: Arc<PluginEnv>,
    tiers: Arc<Tiers>,
}

impl PluginManager {
    /// Manager with the default registrations for `options`.
    pub fn new(options: GeneratorOptions, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        PluginManagerBuilder::new(options, diagnostics).build()
    }

    /// Manager reporting diagnostics through `tracing`.
    pub fn with_tracing(options: GeneratorOptions) -> Self {
        Self::new(options, Arc::new(TracingSink))
    }

    pub fn builder(
        options: GeneratorOptions,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> PluginManagerBuilder {
        PluginManagerBuilder::new(options, diagnostics)
    }

    /// Whether `flag` was set when this manager was created.
    pub fn flag(&self, flag: OptionFlag) -> bool {
        self.env.flag(flag)
    }

    pub fn options(&self) -> &GeneratorOptions {
        self.env.options()
    }

    pub fn env(&self) -> &PluginEnv {
        &self.env
    }

    /// Register an additional provider for all later resolutions on this manager.
    pub fn add_plugin(&mut self, provider: PluginProvider, priority: PluginPriority) {
        register(&self.env, Arc::make_mut(&mut self.tiers), provider, priority);
    }

    /// Names of the providers registered in `priority`, in registration order.
    pub fn registered(&self, priority: PluginPriority) -> Vec<&str> {
        self.tiers
            .tier(priority)
            .iter()
            .map(PluginProvider::name)
            .collect()
    }

    /// All registered provider names in resolution order.
    pub fn registered_all(&self) -> Vec<(PluginPriority, &str)> {
        self.tiers.iter().map(|(p, provider)| (p, provider.name())).collect()
    }

    /// Instantiate every registered provider for `spec`, in resolution order.
    ///
    /// A provider that fails to construct, by error or by panic, is reported as a warning
    /// and left out of the returned bundle; resolution always completes.
    pub fn bundle_for(&self, spec: &Arc<ModelSpec>) -> PluginBundle {
        let span = debug_span!("bundle_for", model = %spec.class_name, kind = %spec.kind);
        let _guard = span.enter();

        let mut entries = Vec::with_capacity(self.tiers.len());
        for (priority, provider) in self.tiers.iter() {
            match instantiate_guarded(provider, spec, &self.env) {
                Ok(plugin) => {
                    debug!(plugin = provider.name(), %priority, "Instantiated plugin");
                    entries.push(BundleEntry::new(provider.shared_name(), priority, plugin));
                }
                Err(err) => {
                    self.env.diagnostics().warning(format!(
                        "Unable to instantiate plugin {} for {}, reason: {}",
                        provider.name(),
                        spec.class_name,
                        err
                    ));
                }
            }
        }

        PluginBundle::new(Arc::clone(spec), entries)
    }
}

impl fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginManager")
            .field("env", &self.env)
            .field("providers", &self.registered_all())
            .finish()
    }
}
