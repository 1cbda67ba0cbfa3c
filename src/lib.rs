//! modelgen: Plugin Pipeline for ORM Model Generation
//!
//! Resolves an ordered, extensible set of generator plugins for each model spec and bundles
//! them into a single unit the emitter drives to write a model class. Registration happens
//! once per manager; resolution is per spec and may run on many threads.
//!
//! ```
//! use modelgen::emitter::ModelFileEmitter;
//! use modelgen::model::{ModelKind, ModelSpec, PropertySpec};
//! use modelgen::options::GeneratorOptions;
//! use modelgen::plugin::PluginManager;
//! use std::sync::Arc;
//!
//! let manager = PluginManager::with_tracing(GeneratorOptions::default());
//! let spec = Arc::new(
//!     ModelSpec::builder()
//!         .spec_class("PersonSpec")
//!         .class_name("Person")
//!         .package("com.example")
//!         .kind(ModelKind::Table)
//!         .properties(vec![PropertySpec::new("name", "String")])
//!         .build(),
//! );
//! let bundle = manager.bundle_for(&spec);
//! let generated = ModelFileEmitter::new().emit(&bundle).unwrap();
//! assert!(generated.source.contains("public class Person extends TableModel"));
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod model;
pub mod options;
pub mod plugin;
pub mod property;
pub mod types;
pub mod writer;

pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use emitter::{GeneratedSource, ModelFileEmitter};
pub use error::{ApiError, EmitError, PluginError};
pub use model::{ModelKind, ModelSpec};
pub use options::{GeneratorOptions, OptionFlag};
pub use plugin::{Plugin, PluginBundle, PluginManager, PluginPriority, PluginProvider};
