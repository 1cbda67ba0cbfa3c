//! Tier ordering, registration order, and aggregation through the bundle

use super::test_utils::{table_spec, tagging};
use modelgen::plugin::defaults::names;
use modelgen::writer::SourceWriter;
use modelgen::{GeneratorOptions, OptionFlag, Plugin, PluginManager, PluginPriority};
use modelgen::model::TypeName;
use std::sync::Arc;
use modelgen::diagnostics::TracingSink;

#[test]
fn test_single_high_plugin_precedes_defaults() {
    let mut manager = PluginManager::with_tracing(GeneratorOptions::default());
    manager.add_plugin(tagging("extra"), PluginPriority::High);

    let bundle = manager.bundle_for(&table_spec("Person"));
    assert_eq!(
        bundle.names(),
        vec![
            "extra",
            names::CONSTRUCTORS,
            names::IMPLEMENTS,
            names::MODEL_METHODS,
            names::TABLE_FIELDS,
            names::VIEW_FIELDS,
            names::INHERITED_FIELDS,
            names::CONSTANT_COPYING,
        ]
    );
}

#[test]
fn test_tiers_resolve_high_normal_low() {
    let manager = PluginManager::builder(GeneratorOptions::from_bits(0x3f), Arc::new(TracingSink))
        .with_plugin(tagging("low-1"), PluginPriority::Low)
        .with_plugin(tagging("normal-1"), PluginPriority::Normal)
        .with_plugin(tagging("high-1"), PluginPriority::High)
        .with_plugin(tagging("low-2"), PluginPriority::Low)
        .with_plugin(tagging("high-2"), PluginPriority::High)
        .build();

    let bundle = manager.bundle_for(&table_spec("Person"));
    assert_eq!(
        bundle.names(),
        vec![
            "high-1",
            "high-2",
            names::TABLE_FIELDS,
            names::VIEW_FIELDS,
            names::INHERITED_FIELDS,
            "normal-1",
            "low-1",
            "low-2",
        ]
    );
}

#[test]
fn test_builder_and_late_registration_keep_call_order() {
    let mut builder =
        PluginManager::builder(GeneratorOptions::from_bits(0x3f), Arc::new(TracingSink));
    builder
        .add_plugin(tagging("a"), PluginPriority::Low)
        .add_plugin(tagging("b"), PluginPriority::Low);
    let mut manager = builder.build();
    manager.add_plugin(tagging("c"), PluginPriority::Low);

    assert_eq!(manager.registered(PluginPriority::Low), vec!["a", "b", "c"]);
}

#[test]
fn test_bundle_concatenates_contributions_in_order() {
    let options = GeneratorOptions::from_bits(0x3f);
    let mut manager = PluginManager::with_tracing(options);
    manager.add_plugin(tagging("second"), PluginPriority::Low);
    manager.add_plugin(tagging("first"), PluginPriority::High);
    // Same provider twice: contributions are duplicated, not merged.
    manager.add_plugin(tagging("second"), PluginPriority::Low);

    let bundle = manager.bundle_for(&table_spec("Person"));

    let interfaces: Vec<String> = bundle.interfaces().iter().map(|i| i.to_string()).collect();
    assert_eq!(interfaces, vec!["first", "second", "second"]);

    let imports = bundle.required_imports();
    assert!(imports.contains(&TypeName::new("com.example.tags.first")));
    assert!(imports.contains(&TypeName::new("com.example.tags.second")));

    let mut writer = SourceWriter::new();
    bundle.emit_methods(&mut writer).unwrap();
    let tags: Vec<&str> = writer
        .lines()
        .iter()
        .filter_map(|line| line.strip_prefix("// methods:"))
        .collect();
    assert_eq!(tags, vec!["first", "second", "second"]);
}

#[test]
fn test_flags_are_captured_at_construction() {
    let mut options = GeneratorOptions::default();
    let manager = PluginManager::with_tracing(options);
    options.set(OptionFlag::DisableDefaultConstructors, true);

    assert!(!manager.flag(OptionFlag::DisableDefaultConstructors));
    assert!(manager.bundle_for(&table_spec("Person")).contains(names::CONSTRUCTORS));
}
