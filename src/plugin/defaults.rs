//! Built-in plugins registered by every [`PluginManager`](crate::plugin::PluginManager).
//!
//! The constructor, implements, model method, and constant copying plugins can each be
//! turned off with an option. The three field plugins are always registered; each one only
//! contributes to specs of its own model kind.

mod constant_copying;
mod constructor;
mod fields;
mod implements;
mod model_method;

pub use constant_copying::ConstantCopyingPlugin;
pub use constructor::ConstructorPlugin;
pub use fields::FieldPlugin;
pub use implements::ImplementsPlugin;
pub use model_method::ModelMethodPlugin;

/// Provider names of the built-in plugins.
pub mod names {
    pub const CONSTRUCTORS: &str = "constructors";
    pub const IMPLEMENTS: &str = "implements";
    pub const MODEL_METHODS: &str = "model-methods";
    pub const TABLE_FIELDS: &str = "table-fields";
    pub const VIEW_FIELDS: &str = "view-fields";
    pub const INHERITED_FIELDS: &str = "inherited-fields";
    pub const CONSTANT_COPYING: &str = "constant-copying";
}
