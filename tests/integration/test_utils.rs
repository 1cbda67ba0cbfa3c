//! Shared test utilities for integration tests
//!
//! Sample model specs, a tracing plugin that records which phases ran, and serialized access
//! to process environment variables.

use modelgen::error::EmitError;
use modelgen::model::{ModelKind, ModelSpec, PropertySpec, TypeName};
use modelgen::plugin::{Plugin, PluginProvider};
use modelgen::writer::SourceWriter;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::TempDir;

/// Serializes every test that touches process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn table_spec(class_name: &str) -> Arc<ModelSpec> {
    Arc::new(
        ModelSpec::builder()
            .spec_class(format!("{}Spec", class_name))
            .class_name(class_name)
            .package("com.example.models")
            .kind(ModelKind::Table)
            .properties(vec![
                PropertySpec::new("name", "String"),
                PropertySpec::new("age", "int").with_default("0"),
            ])
            .build(),
    )
}

pub fn view_spec(class_name: &str) -> Arc<ModelSpec> {
    Arc::new(
        ModelSpec::builder()
            .spec_class(format!("{}Spec", class_name))
            .class_name(class_name)
            .package("com.example.models")
            .kind(ModelKind::View)
            .properties(vec![PropertySpec::new("name", "String")])
            .build(),
    )
}

pub fn inherited_spec(class_name: &str, parent: &str) -> Arc<ModelSpec> {
    Arc::new(
        ModelSpec::builder()
            .spec_class(format!("{}Spec", class_name))
            .class_name(class_name)
            .package("com.example.models")
            .kind(ModelKind::Inherited)
            .parent(TypeName::new(parent))
            .properties(vec![PropertySpec::new("name", "String")])
            .build(),
    )
}

/// Plugin that tags every contribution with its name.
pub struct Tagging {
    pub tag: String,
}

impl Plugin for Tagging {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        imports.insert(TypeName::new(format!("com.example.tags.{}", self.tag)));
    }

    fn add_interfaces_to_implement(&self, interfaces: &mut Vec<TypeName>) {
        interfaces.push(TypeName::new(format!("com.example.tags.{}", self.tag)));
    }

    fn emit_constants(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        writer.write_comment(&format!("constants:{}", self.tag));
        Ok(())
    }

    fn emit_methods(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        writer.write_comment(&format!("methods:{}", self.tag));
        Ok(())
    }
}

pub fn tagging(name: &str) -> PluginProvider {
    let tag = name.to_string();
    PluginProvider::new(name.to_string(), move |_, _| {
        Ok(Box::new(Tagging { tag: tag.clone() }) as Box<dyn Plugin>)
    })
}

/// Holds the environment lock and restores the variables it changed on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn lock() -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.saved.push((key.to_string(), std::env::var(key).ok()));
        std::env::set_var(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.saved.push((key.to_string(), std::env::var(key).ok()));
        std::env::remove_var(key);
    }

    /// Point the user config directory at a fresh temp dir.
    pub fn isolate_config_home(&mut self) -> TempDir {
        let dir = TempDir::new().unwrap();
        self.set("XDG_CONFIG_HOME", dir.path().to_str().unwrap());
        dir
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
