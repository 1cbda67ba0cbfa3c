//! Field plugins: schema, property declarations, and accessors for one model kind.

use crate::error::{EmitError, PluginError};
use crate::model::{ModelKind, ModelSpec, TypeName};
use crate::options::OptionFlag;
use crate::plugin::defaults::names;
use crate::plugin::{Plugin, PluginEnv, PluginProvider};
use crate::property::{BasicPropertyGenerator, PropertyGenerator, PropertySource};
use crate::types;
use crate::writer::{MethodDeclaration, SourceWriter};
use std::collections::BTreeSet;
use std::sync::Arc;

const ROWID_COLUMN: &str = "_id";

/// Generates the persisted members of a model of one [`ModelKind`].
///
/// One field plugin per kind is registered with every manager. A plugin built for a spec of
/// another kind holds nothing and contributes nothing. An inherited spec without a parent is
/// invalid input: the plugin is still built, inert, and the problem is reported as an error.
pub struct FieldPlugin {
    kind: ModelKind,
    fields: Option<Fields>,
}

struct Fields {
    spec: Arc<ModelSpec>,
    generators: Vec<BasicPropertyGenerator>,
    accessors: bool,
    default_values: bool,
}

impl FieldPlugin {
    /// Provider name for the field plugin of `kind`.
    pub fn name_for(kind: ModelKind) -> &'static str {
        match kind {
            ModelKind::Table => names::TABLE_FIELDS,
            ModelKind::View => names::VIEW_FIELDS,
            ModelKind::Inherited => names::INHERITED_FIELDS,
        }
    }

    pub fn provider(kind: ModelKind) -> PluginProvider {
        PluginProvider::new(Self::name_for(kind), move |spec, env| {
            let plugin = Self::build(kind, spec, env)?;
            Ok(Box::new(plugin) as Box<dyn Plugin>)
        })
    }

    pub fn build(kind: ModelKind, spec: &Arc<ModelSpec>, env: &PluginEnv) -> Result<Self, PluginError> {
        if spec.kind != kind {
            return Ok(Self { kind, fields: None });
        }
        if kind == ModelKind::Inherited && spec.parent.is_none() {
            env.diagnostics().error(format!(
                "Inherited model {} declares no parent; no fields generated",
                spec.class_name
            ));
            return Ok(Self { kind, fields: None });
        }

        let mut generators = Vec::with_capacity(spec.properties.len());
        for property in &spec.properties {
            match BasicPropertyGenerator::for_property(property) {
                Some(generator) => generators.push(generator),
                None => env.diagnostics().error(format!(
                    "No property generator found for {}.{} of type {}",
                    spec.spec_class, property.name, property.column_type
                )),
            }
        }

        Ok(Self {
            kind,
            fields: Some(Fields {
                spec: Arc::clone(spec),
                generators,
                accessors: !env.flag(OptionFlag::DisableGettersAndSetters),
                default_values: kind == ModelKind::Table
                    && !env.flag(OptionFlag::DisableDefaultContentValues),
            }),
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Whether this plugin contributes to its spec.
    pub fn is_active(&self) -> bool {
        self.fields.is_some()
    }
}

impl Fields {
    fn container_constant(&self) -> &'static str {
        match self.spec.kind {
            ModelKind::View => "VIEW",
            _ => "TABLE",
        }
    }

    /// Size of the `PROPERTIES` array. Table models also list the rowid property.
    fn property_count(&self) -> usize {
        match self.spec.kind {
            ModelKind::Table => self.generators.len() + 1,
            _ => self.generators.len(),
        }
    }

    fn emit_properties_array(&self, writer: &mut SourceWriter) {
        writer.write_comment("--- allocate properties array");
        writer.write_statement(&format!(
            "public static final {any}[] PROPERTIES = new {any}[{}]",
            self.property_count(),
            any = types::any_property()
        ));
        writer.blank_line();
    }

    fn emit_container(&self, writer: &mut SourceWriter) {
        let (comment, ty) = match self.spec.kind {
            ModelKind::View => ("--- view declaration", types::view()),
            _ => ("--- table declaration", types::table()),
        };
        writer.write_comment(comment);
        writer.write_statement(&format!(
            "public static final {ty} {} = new {ty}({}.class, PROPERTIES, \"{}\")",
            self.container_constant(),
            self.spec.class_name,
            self.spec.source_name(),
            ty = ty
        ));
        writer.blank_line();
    }

    fn emit_declarations(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        writer.write_comment("--- property declarations");
        let parent = self.spec.parent.as_ref();
        if self.spec.kind == ModelKind::Table {
            writer.write_statement(&format!(
                "public static final {ty} ID = new {ty}(TABLE, \"{}\")",
                ROWID_COLUMN,
                ty = types::long_property()
            ));
        }
        for generator in &self.generators {
            let source = match (self.spec.kind, parent) {
                (ModelKind::Inherited, Some(parent)) => PropertySource::Parent(parent),
                _ => PropertySource::Container(self.container_constant()),
            };
            generator.emit_declaration(writer, source)?;
        }
        writer.blank_line();
        Ok(())
    }

    fn emit_properties_initializer(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        if self.property_count() == 0 {
            return Ok(());
        }
        writer.begin_block("static");
        let mut index = 0;
        if self.spec.kind == ModelKind::Table {
            writer.write_statement("PROPERTIES[0] = ID");
            index = 1;
        }
        for generator in &self.generators {
            writer.write_statement(&format!(
                "PROPERTIES[{}] = {}",
                index,
                generator.property().constant_name()
            ));
            index += 1;
        }
        writer.finish_method()?;
        Ok(())
    }

    fn emit_default_values(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        writer.write_comment("--- default values");
        writer.write_statement(&format!(
            "protected static final {ty} defaultValues = new {ty}()",
            ty = types::content_values()
        ));
        writer.begin_block("static");
        for generator in &self.generators {
            generator.emit_default_value(writer)?;
        }
        writer.finish_method()?;
        Ok(())
    }

    fn emit_overrides(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        if self.spec.kind == ModelKind::Table {
            writer.write_annotation(&types::override_annotation());
            writer.begin_method(&MethodDeclaration::method(
                "getRowIdProperty",
                Some(types::long_property()),
            ));
            writer.write_statement("return ID");
            writer.finish_method()?;
        }
        if self.default_values {
            writer.write_annotation(&types::override_annotation());
            writer.begin_method(&MethodDeclaration::method(
                "getDefaultValues",
                Some(types::content_values()),
            ));
            writer.write_statement("return defaultValues");
            writer.finish_method()?;
        }
        Ok(())
    }

    fn emit_accessors(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        if !self.accessors {
            return Ok(());
        }
        let model = self.spec.generated_type();
        let read_only = self.spec.kind != ModelKind::Table;
        for generator in &self.generators {
            generator.emit_getter(writer)?;
            if !read_only {
                generator.emit_setter(writer, &model)?;
            }
        }
        Ok(())
    }
}

impl Plugin for FieldPlugin {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        let Some(fields) = &self.fields else {
            return;
        };
        imports.insert(types::property());
        match fields.spec.kind {
            ModelKind::Table => {
                imports.insert(types::table());
                imports.insert(types::long_property());
            }
            ModelKind::View => {
                imports.insert(types::view());
            }
            ModelKind::Inherited => {
                if let Some(parent) = &fields.spec.parent {
                    imports.insert(parent.erased());
                }
            }
        }
        if fields.default_values {
            imports.insert(types::content_values());
        }
        for generator in &fields.generators {
            generator.add_required_imports(imports);
        }
    }

    fn emit_schema(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        let Some(fields) = &self.fields else {
            return Ok(());
        };
        fields.emit_properties_array(writer);
        if fields.spec.kind != ModelKind::Inherited {
            fields.emit_container(writer);
        }
        fields.emit_declarations(writer)?;
        fields.emit_properties_initializer(writer)?;
        if fields.default_values {
            fields.emit_default_values(writer)?;
        }
        Ok(())
    }

    fn emit_methods(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        let Some(fields) = &self.fields else {
            return Ok(());
        };
        fields.emit_overrides(writer)?;
        fields.emit_accessors(writer)
    }
}
