//! Well-known type names referenced by generated models.

use crate::model::TypeName;

pub fn table_model() -> TypeName {
    TypeName::runtime("data.TableModel")
}

pub fn view_model() -> TypeName {
    TypeName::runtime("data.ViewModel")
}

pub fn model_cursor() -> TypeName {
    TypeName::runtime("data.ModelCursor")
}

pub fn content_values() -> TypeName {
    TypeName::new("android.content.ContentValues")
}

pub fn table() -> TypeName {
    TypeName::runtime("sql.Table")
}

pub fn view() -> TypeName {
    TypeName::runtime("sql.View")
}

pub fn property() -> TypeName {
    TypeName::runtime("sql.Property")
}

/// `Property<?>`, the element type of the generated `PROPERTIES` array.
pub fn any_property() -> TypeName {
    property().with_type_args(vec![TypeName::new("?")])
}

pub fn long_property() -> TypeName {
    TypeName::runtime("sql.Property.LongProperty")
}

pub fn override_annotation() -> TypeName {
    TypeName::new("java.lang.Override")
}

pub fn void() -> TypeName {
    TypeName::new("void")
}
