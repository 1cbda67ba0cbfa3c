//! Default constructors for generated models.

use crate::error::{EmitError, PluginError};
use crate::model::{ModelSpec, TypeName};
use crate::plugin::defaults::names;
use crate::plugin::{BuildPlugin, Plugin, PluginEnv};
use crate::types;
use crate::writer::{MethodDeclaration, SourceWriter};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Emits the four standard constructors and a covariant `clone` override.
///
/// Registered unless [`OptionFlag::DisableDefaultConstructors`](crate::options::OptionFlag)
/// is set.
pub struct ConstructorPlugin {
    spec: Arc<ModelSpec>,
}

impl BuildPlugin for ConstructorPlugin {
    const NAME: &'static str = names::CONSTRUCTORS;

    fn build(spec: &Arc<ModelSpec>, _env: &PluginEnv) -> Result<Self, PluginError> {
        Ok(Self {
            spec: Arc::clone(spec),
        })
    }
}

impl Plugin for ConstructorPlugin {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        imports.insert(types::model_cursor());
        imports.insert(types::content_values());
        imports.insert(types::property());
    }

    fn emit_constructors(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        let class_name = &self.spec.class_name;
        let generated = self.spec.generated_type();

        writer.write_comment("--- default constructors");

        writer.begin_method(&MethodDeclaration::constructor(class_name));
        writer.write_statement("super()");
        writer.finish_method()?;

        let cursor_type = types::model_cursor().with_type_args(vec![generated.clone()]);
        writer.begin_method(&MethodDeclaration::constructor(class_name).parameter(cursor_type, "cursor"));
        writer.write_statement("this()");
        writer.write_statement("readPropertiesFromCursor(cursor)");
        writer.finish_method()?;

        writer.begin_method(
            &MethodDeclaration::constructor(class_name)
                .parameter(types::content_values(), "contentValues"),
        );
        writer.write_statement("this(contentValues, PROPERTIES)");
        writer.finish_method()?;

        writer.begin_method(
            &MethodDeclaration::constructor(class_name)
                .parameter(types::content_values(), "contentValues")
                .parameter(types::any_property(), "withProperties")
                .varargs(),
        );
        writer.write_statement("this()");
        writer.write_statement("readPropertiesFromContentValues(contentValues, withProperties)");
        writer.finish_method()?;

        writer.write_annotation(&types::override_annotation());
        writer.begin_method(&MethodDeclaration::method("clone", Some(generated)));
        writer.write_statement(&format!("return ({}) super.clone()", class_name));
        writer.finish_method()?;
        Ok(())
    }
}
