//! Model Description
//!
//! Read-only description of one generated model class: its name, the kind of model it is
//! (table-backed, view-backed, or inherited from another model), and the members declared on
//! its spec. Model specs are produced upstream and shared with plugins through an `Arc`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use typed_builder::TypedBuilder;

/// Package of the runtime library generated models compile against.
pub const RUNTIME_PACKAGE: &str = "io.modelgen.runtime";

/// Kind of model a spec describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Backed by a database table
    Table,
    /// Backed by a database view or subquery
    View,
    /// Extends another generated model without its own storage
    Inherited,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Table, ModelKind::View, ModelKind::Inherited];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Table => "table",
            ModelKind::View => "view",
            ModelKind::Inherited => "inherited",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ModelKind::Table),
            "view" => Ok(ModelKind::View),
            "inherited" => Ok(ModelKind::Inherited),
            other => Err(format!(
                "unknown model kind '{}' (expected table, view, or inherited)",
                other
            )),
        }
    }
}

/// A qualified Java type name, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeName {
    qualified: String,
    #[serde(default)]
    type_args: Vec<TypeName>,
}

impl TypeName {
    pub fn new(qualified: impl Into<String>) -> Self {
        Self {
            qualified: qualified.into(),
            type_args: Vec::new(),
        }
    }

    /// Type living in the runtime library, e.g. `runtime("data.TableModel")`.
    pub fn runtime(relative: &str) -> Self {
        Self::new(format!("{}.{}", RUNTIME_PACKAGE, relative))
    }

    pub fn with_type_args(mut self, type_args: Vec<TypeName>) -> Self {
        self.type_args = type_args;
        self
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    pub fn simple_name(&self) -> &str {
        self.qualified
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.qualified)
    }

    /// Package part of the name, `None` for primitives and unqualified names.
    pub fn package(&self) -> Option<&str> {
        self.qualified.rsplit_once('.').map(|(package, _)| package)
    }

    pub fn type_args(&self) -> &[TypeName] {
        &self.type_args
    }

    /// The same type without type arguments, as it appears in an import statement.
    pub fn erased(&self) -> TypeName {
        TypeName::new(self.qualified.clone())
    }

    /// Whether a class in `current_package` must import this type.
    pub fn needs_import_from(&self, current_package: &str) -> bool {
        match self.package() {
            None => false,
            Some("java.lang") => false,
            Some(package) => package != current_package,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())?;
        if !self.type_args.is_empty() {
            let args: Vec<String> = self.type_args.iter().map(|arg| arg.to_string()).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// A persisted property declared on a model spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Field name as declared on the spec (camelCase)
    pub name: String,
    /// Declared Java type, e.g. `long`, `java.lang.String`
    pub column_type: String,
    /// Column name override; defaults to the field name
    #[serde(default)]
    pub column_name: Option<String>,
    /// Literal default value for the column
    #[serde(default)]
    pub default_value: Option<String>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            column_name: None,
            default_value: None,
        }
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn column(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    /// Name of the generated property constant, e.g. `firstName` -> `FIRST_NAME`.
    pub fn constant_name(&self) -> String {
        constant_case(&self.name)
    }

    /// Accessor suffix, e.g. `firstName` -> `FirstName`.
    pub fn accessor_suffix(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A `public static final` constant declared on a model spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantSpec {
    pub name: String,
    pub type_name: TypeName,
    pub initializer: String,
}

impl ConstantSpec {
    pub fn new(
        name: impl Into<String>,
        type_name: TypeName,
        initializer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name,
            initializer: initializer.into(),
        }
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub type_name: TypeName,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: TypeName, name: impl Into<String>) -> Self {
        Self {
            type_name,
            name: name.into(),
        }
    }
}

/// A method declared on a model spec.
///
/// Static methods are copied onto the generated class as static delegates. Non-static
/// entries are model methods: static helpers on the spec whose first parameter receives the
/// model instance, exposed on the generated class as instance methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    #[serde(default)]
    pub return_type: Option<TypeName>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub is_static: bool,
}

impl MethodSpec {
    pub fn model_method(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters,
            is_static: false,
        }
    }

    pub fn static_method(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters,
            is_static: true,
        }
    }

    pub fn returning(mut self, return_type: TypeName) -> Self {
        self.return_type = Some(return_type);
        self
    }
}

/// Description of one generated model class
///
/// # Examples
///
/// ```
/// use modelgen::model::{ModelKind, ModelSpec, PropertySpec};
///
/// let spec = ModelSpec::builder()
///     .spec_class("PersonSpec")
///     .class_name("Person")
///     .package("com.example.models")
///     .kind(ModelKind::Table)
///     .properties(vec![PropertySpec::new("name", "String")])
///     .build();
/// assert_eq!(spec.source_name(), "persons");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct ModelSpec {
    /// Simple name of the annotated spec class
    #[builder(setter(into))]
    pub spec_class: String,

    /// Simple name of the class to generate
    #[builder(setter(into))]
    pub class_name: String,

    /// Package of both the spec and the generated class
    #[builder(default, setter(into))]
    pub package: String,

    pub kind: ModelKind,

    /// Table or view name; empty means derived from the class name
    #[builder(default, setter(into))]
    pub source_name: String,

    /// Parent model of an inherited model
    #[builder(default, setter(strip_option))]
    pub parent: Option<TypeName>,

    #[builder(default)]
    pub properties: Vec<PropertySpec>,

    #[builder(default)]
    pub constants: Vec<ConstantSpec>,

    #[builder(default)]
    pub methods: Vec<MethodSpec>,

    /// Interfaces the generated class should implement
    #[builder(default)]
    pub implements: Vec<TypeName>,
}

impl ModelSpec {
    /// Qualified type of the generated class.
    pub fn generated_type(&self) -> TypeName {
        TypeName::new(qualify(&self.package, &self.class_name))
    }

    /// Qualified type of the spec class.
    pub fn spec_type(&self) -> TypeName {
        TypeName::new(qualify(&self.package, &self.spec_class))
    }

    /// Table or view name the model reads from.
    pub fn source_name(&self) -> String {
        if self.source_name.is_empty() {
            format!("{}s", self.class_name.to_lowercase())
        } else {
            self.source_name.clone()
        }
    }
}

fn qualify(package: &str, simple: &str) -> String {
    if package.is_empty() {
        simple.to_string()
    } else {
        format!("{}.{}", package, simple)
    }
}

fn constant_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_uppercase());
    }
    out
}
