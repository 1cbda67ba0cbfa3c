//! Plugin System
//!
//! Generator plugins contribute imports, interfaces, and members to a generated model class.
//! The [`PluginManager`] keeps an ordered, tiered list of [`PluginProvider`]s and, for each
//! model spec, builds a fresh [`PluginBundle`] that the emitter drives as if it were a single
//! plugin.

use crate::error::{EmitError, PluginError};
use crate::model::{ModelSpec, TypeName};
use crate::writer::SourceWriter;
use std::collections::BTreeSet;
use std::sync::Arc;

mod bundle;
pub mod defaults;
mod env;
mod manager;
mod provider;

pub use bundle::{BundleEntry, PluginBundle};
pub use env::PluginEnv;
pub use manager::{PluginManager, PluginManagerBuilder, PluginPriority};
pub use provider::PluginProvider;

/// Contribution interface implemented by every generator plugin.
///
/// Every operation is optional: the default does nothing. Emission phases are driven in
/// the order constants, schema, constructors, methods, additional code.
pub trait Plugin: Send {
    /// Add the types the generated class must import.
    fn add_required_imports(&self, _imports: &mut BTreeSet<TypeName>) {}

    /// Add interfaces the generated class implements.
    fn add_interfaces_to_implement(&self, _interfaces: &mut Vec<TypeName>) {}

    /// Emit constant declarations.
    fn emit_constants(&self, _writer: &mut SourceWriter) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit the schema: table or view declaration and property declarations.
    fn emit_schema(&self, _writer: &mut SourceWriter) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit constructors.
    fn emit_constructors(&self, _writer: &mut SourceWriter) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit methods, including property accessors.
    fn emit_methods(&self, _writer: &mut SourceWriter) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit trailing code after all methods.
    fn emit_additional_code(&self, _writer: &mut SourceWriter) -> Result<(), EmitError> {
        Ok(())
    }
}

/// A plugin type that can be constructed for a model spec.
///
/// Implementing this lets a plugin be registered with [`PluginProvider::of`].
pub trait BuildPlugin: Plugin + Sized + 'static {
    /// Provider name used in diagnostics and bundle listings.
    const NAME: &'static str;

    fn build(spec: &Arc<ModelSpec>, env: &PluginEnv) -> Result<Self, PluginError>;
}
