//! Property Generators
//!
//! A property generator knows how to declare one persisted property on a generated model
//! and how to write its accessors and default value. Field plugins pick a generator for each
//! property from the property's declared column type.

use crate::error::EmitError;
use crate::model::{PropertySpec, TypeName};
use crate::types;
use crate::writer::{MethodDeclaration, SourceWriter};
use std::collections::BTreeSet;

/// Where a generated property declaration gets its column from.
#[derive(Debug, Clone, Copy)]
pub enum PropertySource<'a> {
    /// A column of the model's own table or view, named by the given constant (`TABLE`)
    Container(&'a str),
    /// The same property declared on a parent model
    Parent(&'a TypeName),
}

/// Generates declaration, accessors, and default value for one property.
pub trait PropertyGenerator: Send + Sync {
    fn property(&self) -> &PropertySpec;

    /// Type of the generated property constant, e.g. `LongProperty`.
    fn property_type(&self) -> TypeName;

    /// Type used by the getter and setter, e.g. `Long`.
    fn accessor_type(&self) -> TypeName;

    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        imports.insert(self.property_type());
        imports.insert(self.accessor_type());
    }

    fn emit_declaration(
        &self,
        writer: &mut SourceWriter,
        source: PropertySource<'_>,
    ) -> Result<(), EmitError> {
        let property = self.property();
        let ty = self.property_type();
        let initializer = match source {
            PropertySource::Container(container) => {
                format!("new {}({}, \"{}\")", ty, container, property.column())
            }
            PropertySource::Parent(parent) => {
                format!("{}.{}", parent.simple_name(), property.constant_name())
            }
        };
        writer.write_statement(&format!(
            "public static final {} {} = {}",
            ty,
            property.constant_name(),
            initializer
        ));
        Ok(())
    }

    fn getter_name(&self) -> String {
        format!("get{}", self.property().accessor_suffix())
    }

    fn setter_name(&self) -> String {
        format!("set{}", self.property().accessor_suffix())
    }

    fn emit_getter(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        let declaration = MethodDeclaration::method(self.getter_name(), Some(self.accessor_type()));
        writer.begin_method(&declaration);
        writer.write_statement(&format!("return get({})", self.property().constant_name()));
        writer.finish_method()?;
        Ok(())
    }

    fn emit_setter(&self, writer: &mut SourceWriter, model: &TypeName) -> Result<(), EmitError> {
        let property = self.property();
        let declaration = MethodDeclaration::method(self.setter_name(), Some(model.clone()))
            .parameter(self.accessor_type(), property.name.clone());
        writer.begin_method(&declaration);
        writer.write_statement(&format!("set({}, {})", property.constant_name(), property.name));
        writer.write_statement("return this");
        writer.finish_method()?;
        Ok(())
    }

    /// Emit the `defaultValues.put(...)` line, if the property declares a default.
    fn emit_default_value(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        if let Some(value) = &self.property().default_value {
            writer.write_statement(&format!(
                "defaultValues.put({}.getName(), {})",
                self.property().constant_name(),
                value
            ));
        }
        Ok(())
    }
}

/// Column families handled by [`BasicPropertyGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicPropertyKind {
    Long,
    Integer,
    Double,
    String,
    Boolean,
    Blob,
}

impl BasicPropertyKind {
    pub const ALL: [BasicPropertyKind; 6] = [
        BasicPropertyKind::Long,
        BasicPropertyKind::Integer,
        BasicPropertyKind::Double,
        BasicPropertyKind::String,
        BasicPropertyKind::Boolean,
        BasicPropertyKind::Blob,
    ];

    /// Declared Java types this kind handles.
    pub fn handled_column_types(&self) -> &'static [&'static str] {
        match self {
            BasicPropertyKind::Long => &["long", "Long", "java.lang.Long"],
            BasicPropertyKind::Integer => &[
                "int",
                "Integer",
                "java.lang.Integer",
                "short",
                "Short",
                "java.lang.Short",
                "byte",
                "Byte",
                "java.lang.Byte",
            ],
            BasicPropertyKind::Double => &[
                "float",
                "Float",
                "java.lang.Float",
                "double",
                "Double",
                "java.lang.Double",
            ],
            BasicPropertyKind::String => &["String", "java.lang.String"],
            BasicPropertyKind::Boolean => &["boolean", "Boolean", "java.lang.Boolean"],
            BasicPropertyKind::Blob => &["byte[]"],
        }
    }

    pub fn for_column_type(column_type: &str) -> Option<Self> {
        let column_type = column_type.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.handled_column_types().iter().any(|ty| *ty == column_type))
    }

    fn property_type(&self) -> TypeName {
        match self {
            BasicPropertyKind::Long => types::long_property(),
            BasicPropertyKind::Integer => TypeName::runtime("sql.Property.IntegerProperty"),
            BasicPropertyKind::Double => TypeName::runtime("sql.Property.DoubleProperty"),
            BasicPropertyKind::String => TypeName::runtime("sql.Property.StringProperty"),
            BasicPropertyKind::Boolean => TypeName::runtime("sql.Property.BooleanProperty"),
            BasicPropertyKind::Blob => TypeName::runtime("sql.Property.BlobProperty"),
        }
    }

    fn accessor_type(&self) -> TypeName {
        match self {
            BasicPropertyKind::Long => TypeName::new("java.lang.Long"),
            BasicPropertyKind::Integer => TypeName::new("java.lang.Integer"),
            BasicPropertyKind::Double => TypeName::new("java.lang.Double"),
            BasicPropertyKind::String => TypeName::new("java.lang.String"),
            BasicPropertyKind::Boolean => TypeName::new("java.lang.Boolean"),
            BasicPropertyKind::Blob => TypeName::new("byte[]"),
        }
    }
}

/// Generator for the basic column types.
#[derive(Debug, Clone)]
pub struct BasicPropertyGenerator {
    property: PropertySpec,
    kind: BasicPropertyKind,
}

impl BasicPropertyGenerator {
    /// Generator for `property`, or `None` if its column type is not a basic type.
    pub fn for_property(property: &PropertySpec) -> Option<Self> {
        BasicPropertyKind::for_column_type(&property.column_type).map(|kind| Self {
            property: property.clone(),
            kind,
        })
    }

    pub fn kind(&self) -> BasicPropertyKind {
        self.kind
    }
}

impl PropertyGenerator for BasicPropertyGenerator {
    fn property(&self) -> &PropertySpec {
        &self.property
    }

    fn property_type(&self) -> TypeName {
        self.kind.property_type()
    }

    fn accessor_type(&self) -> TypeName {
        self.kind.accessor_type()
    }

    fn getter_name(&self) -> String {
        match self.kind {
            BasicPropertyKind::Boolean => format!("is{}", self.property.accessor_suffix()),
            _ => format!("get{}", self.property.accessor_suffix()),
        }
    }

    fn emit_default_value(&self, writer: &mut SourceWriter) -> Result<(), EmitError> {
        let Some(value) = &self.property.default_value else {
            return Ok(());
        };
        let literal = match self.kind {
            BasicPropertyKind::String if !value.starts_with('"') => format!("\"{}\"", value),
            BasicPropertyKind::Long if !value.ends_with('L') => format!("{}L", value),
            BasicPropertyKind::Blob => {
                return Err(EmitError::InvalidMember {
                    member: self.property.name.clone(),
                    reason: "blob columns cannot declare a default value".to_string(),
                })
            }
            _ => value.clone(),
        };
        writer.write_statement(&format!(
            "defaultValues.put({}.getName(), {})",
            self.property.constant_name(),
            literal
        ));
        Ok(())
    }
}
