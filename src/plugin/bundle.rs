//! Plugin bundle: the ordered plugin instances resolved for one model spec.

use crate::error::EmitError;
use crate::model::{ModelSpec, TypeName};
use crate::plugin::{Plugin, PluginPriority};
use crate::writer::SourceWriter;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// One resolved plugin together with the provider it came from.
pub struct BundleEntry {
    name: Arc<str>,
    priority: PluginPriority,
    plugin: Box<dyn Plugin>,
}

impl BundleEntry {
    pub(crate) fn new(name: Arc<str>, priority: PluginPriority, plugin: Box<dyn Plugin>) -> Self {
        Self {
            name,
            priority,
            plugin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> PluginPriority {
        self.priority
    }

    pub fn plugin(&self) -> &dyn Plugin {
        self.plugin.as_ref()
    }
}

/// Ordered aggregate of plugin instances for one model spec.
///
/// A bundle is itself a [`Plugin`]: each operation is forwarded to every member in bundle
/// order. Imports accumulate into one set; interfaces and emitted members are concatenated
/// without any conflict detection. Emission stops at the first member that fails.
pub struct PluginBundle {
    spec: Arc<ModelSpec>,
    entries: Vec<BundleEntry>,
}

impl PluginBundle {
    pub(crate) fn new(spec: Arc<ModelSpec>, entries: Vec<BundleEntry>) -> Self {
        Self { spec, entries }
    }

    /// The model spec this bundle was resolved for.
    pub fn spec(&self) -> &Arc<ModelSpec> {
        &self.spec
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// Provider names in bundle order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(BundleEntry::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn required_imports(&self) -> BTreeSet<TypeName> {
        let mut imports = BTreeSet::new();
        self.add_required_imports(&mut imports);
        imports
    }

    pub fn interfaces(&self) -> Vec<TypeName> {
        let mut interfaces = Vec::new();
        self.add_interfaces_to_implement(&mut interfaces);
        interfaces
    }

    fn each<F>(&self, mut emit: F) -> Result<(), EmitError>
    where
        F: FnMut(&dyn Plugin) -> Result<(), EmitError>,
    {
        for entry in &self.entries {
            emit(entry.plugin())?;
        }
        Ok(())
    }
}

impl Plugin for PluginBundle {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        for entry in &self.entries {
            entry.plugin.add_required_imports(imports);
        }
    }

    fn add_interfaces_to_implement(&self, interfaces: &mut Vec<TypeName>) {
        for entry in &self.entries {
            entry.plugin.add_interfaces_to_implement(interfaces);
        }
    }

    fn emit_constants(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        self.each(|plugin| plugin.emit_constants(writer))
    }

    fn emit_schema(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        self.each(|plugin| plugin.emit_schema(writer))
    }

    fn emit_constructors(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        self.each(|plugin| plugin.emit_constructors(writer))
    }

    fn emit_methods(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        self.each(|plugin| plugin.emit_methods(writer))
    }

    fn emit_additional_code(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        self.each(|plugin| plugin.emit_additional_code(writer))
    }
}

impl fmt::Debug for PluginBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginBundle")
            .field("model", &self.spec.class_name)
            .field("plugins", &self.names())
            .finish()
    }
}
