//! Static helpers on the spec become methods of the generated model.

use crate::error::{EmitError, PluginError};
use crate::model::{MethodSpec, ModelSpec, TypeName};
use crate::plugin::defaults::names;
use crate::plugin::{BuildPlugin, Plugin, PluginEnv};
use crate::types;
use crate::writer::{MethodDeclaration, SourceWriter};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Copies static methods as static delegates, and exposes model methods as instance
/// methods that pass `this` as the first argument.
///
/// A model method must take the model as its first parameter. Methods that don't are
/// reported as errors when the plugin is built and are left out of the generated class.
pub struct ModelMethodPlugin {
    spec_type: TypeName,
    static_methods: Vec<MethodSpec>,
    model_methods: Vec<MethodSpec>,
}

impl BuildPlugin for ModelMethodPlugin {
    const NAME: &'static str = names::MODEL_METHODS;

    fn build(spec: &Arc<ModelSpec>, env: &PluginEnv) -> Result<Self, PluginError> {
        let mut static_methods = Vec::new();
        let mut model_methods = Vec::new();
        for method in &spec.methods {
            if method.is_static {
                static_methods.push(method.clone());
                continue;
            }
            match method.parameters.first() {
                Some(first) if first.type_name.simple_name() == spec.class_name => {
                    model_methods.push(method.clone());
                }
                _ => env.diagnostics().error(format!(
                    "Model method {}.{} must take a {} as its first argument",
                    spec.spec_class, method.name, spec.class_name
                )),
            }
        }
        Ok(Self {
            spec_type: spec.spec_type(),
            static_methods,
            model_methods,
        })
    }
}

impl ModelMethodPlugin {
    fn emit_delegate(
        &self,
        writer: &mut SourceWriter,
        method: &MethodSpec,
        is_static: bool,
    ) -> Result<(), EmitError> {
        let return_type = method.return_type.clone().unwrap_or_else(types::void);
        let returns_value = return_type != types::void();

        let declared = if is_static {
            &method.parameters[..]
        } else {
            &method.parameters[1..]
        };
        let mut arguments: Vec<&str> = declared.iter().map(|p| p.name.as_str()).collect();
        if !is_static {
            arguments.insert(0, "this");
        }

        let modifiers: &[&'static str] = if is_static {
            &["public", "static"]
        } else {
            &["public"]
        };
        let declaration = MethodDeclaration::method(method.name.clone(), Some(return_type))
            .modifiers(modifiers)
            .parameters(declared.to_vec());

        let call = format!(
            "{}.{}({})",
            self.spec_type.simple_name(),
            method.name,
            arguments.join(", ")
        );
        writer.begin_method(&declaration);
        if returns_value {
            writer.write_statement(&format!("return {}", call));
        } else {
            writer.write_statement(&call);
        }
        writer.finish_method()?;
        Ok(())
    }
}

impl Plugin for ModelMethodPlugin {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        let methods = self.static_methods.iter().chain(&self.model_methods);
        for method in methods {
            if let Some(return_type) = &method.return_type {
                imports.insert(return_type.erased());
            }
            for parameter in &method.parameters {
                imports.insert(parameter.type_name.erased());
            }
        }
    }

    fn emit_methods(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        for method in &self.model_methods {
            self.emit_delegate(writer, method, false)?;
        }
        for method in &self.static_methods {
            self.emit_delegate(writer, method, true)?;
        }
        Ok(())
    }
}
