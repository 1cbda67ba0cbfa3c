//! Copies `public static final` constants from the spec onto the generated model.

use crate::error::{EmitError, PluginError};
use crate::model::{ConstantSpec, ModelSpec, TypeName};
use crate::plugin::defaults::names;
use crate::plugin::{BuildPlugin, Plugin, PluginEnv};
use crate::writer::SourceWriter;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct ConstantCopyingPlugin {
    spec_class: String,
    constants: Vec<ConstantSpec>,
}

impl BuildPlugin for ConstantCopyingPlugin {
    const NAME: &'static str = names::CONSTANT_COPYING;

    fn build(spec: &Arc<ModelSpec>, _env: &PluginEnv) -> Result<Self, PluginError> {
        Ok(Self {
            spec_class: spec.spec_class.clone(),
            constants: spec.constants.clone(),
        })
    }
}

impl Plugin for ConstantCopyingPlugin {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        imports.extend(self.constants.iter().map(|c| c.type_name.erased()));
    }

    fn emit_constants(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        if self.constants.is_empty() {
            return Ok(());
        }
        writer.write_comment(&format!("--- constants from {}", self.spec_class));
        for constant in &self.constants {
            if constant.initializer.trim().is_empty() {
                return Err(EmitError::InvalidMember {
                    member: constant.name.clone(),
                    reason: "constant has no initializer".to_string(),
                });
            }
            writer.write_statement(&format!(
                "public static final {} {} = {}",
                constant.type_name, constant.name, constant.initializer
            ));
        }
        writer.blank_line();
        Ok(())
    }
}
