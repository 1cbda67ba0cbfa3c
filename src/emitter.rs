//! Model File Emitter
//!
//! Drives a [`PluginBundle`] through the fixed emission order and assembles the complete
//! source of one generated model class. Output is returned in memory.

use crate::error::EmitError;
use crate::model::{ModelKind, ModelSpec, TypeName};
use crate::plugin::{Plugin, PluginBundle};
use crate::types;
use crate::writer::SourceWriter;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

const GENERATED_HEADER: &str = "Generated by modelgen. Do not edit.";

/// Source text of one generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub package: String,
    pub class_name: String,
    pub source: String,
}

impl GeneratedSource {
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package, self.class_name)
        }
    }

    /// Path of the source file relative to a source root, e.g. `com/example/Person.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|s| !s.is_empty()).collect();
        path.push(format!("{}.java", self.class_name));
        path
    }
}

/// Writes model classes from plugin bundles.
#[derive(Debug, Clone)]
pub struct ModelFileEmitter {
    header: bool,
}

impl Default for ModelFileEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFileEmitter {
    pub fn new() -> Self {
        Self { header: true }
    }

    /// Omit the "generated" header comment.
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    pub fn emit(&self, bundle: &PluginBundle) -> Result<GeneratedSource, EmitError> {
        let spec = bundle.spec();
        let superclass = superclass_for(spec)?;
        let generated = spec.generated_type();

        let mut imports = bundle.required_imports();
        imports.insert(superclass.erased());
        let imports: BTreeSet<TypeName> = imports
            .into_iter()
            .map(|ty| ty.erased())
            .filter(|ty| *ty != generated && ty.needs_import_from(&spec.package))
            .collect();

        let mut interfaces: Vec<TypeName> = Vec::new();
        for interface in bundle.interfaces() {
            if !interfaces.contains(&interface) {
                interfaces.push(interface);
            }
        }

        let mut writer = SourceWriter::new();
        if self.header {
            writer.write_comment(GENERATED_HEADER);
        }
        if !spec.package.is_empty() {
            writer.write_statement(&format!("package {}", spec.package));
            writer.blank_line();
        }
        for import in &imports {
            writer.write_statement(&format!("import {}", import.qualified_name()));
        }
        if !imports.is_empty() {
            writer.blank_line();
        }

        let mut header = format!("public class {} extends {}", spec.class_name, superclass);
        if !interfaces.is_empty() {
            let names: Vec<String> = interfaces.iter().map(|i| i.to_string()).collect();
            header.push_str(" implements ");
            header.push_str(&names.join(", "));
        }
        writer.begin_block(&header);
        writer.blank_line();

        bundle.emit_constants(&mut writer)?;
        bundle.emit_schema(&mut writer)?;
        bundle.emit_constructors(&mut writer)?;
        bundle.emit_methods(&mut writer)?;
        bundle.emit_additional_code(&mut writer)?;

        writer.end_block()?;
        let source = writer.finish()?;

        debug!(
            model = %generated.qualified_name(),
            plugins = bundle.len(),
            imports = imports.len(),
            "Emitted model class"
        );

        Ok(GeneratedSource {
            package: spec.package.clone(),
            class_name: spec.class_name.clone(),
            source,
        })
    }
}

fn superclass_for(spec: &ModelSpec) -> Result<TypeName, EmitError> {
    match spec.kind {
        ModelKind::Table => Ok(types::table_model()),
        ModelKind::View => Ok(types::view_model()),
        ModelKind::Inherited => spec.parent.clone().ok_or_else(|| EmitError::InvalidMember {
            member: spec.class_name.clone(),
            reason: "inherited model declares no parent".to_string(),
        }),
    }
}
