//! Default registration under the generator options

use super::test_utils::{inherited_spec, table_spec, view_spec};
use modelgen::plugin::defaults::names;
use modelgen::{GeneratorOptions, OptionFlag, PluginManager, PluginPriority};

const FIELD_PLUGINS: [&str; 3] = [
    names::TABLE_FIELDS,
    names::VIEW_FIELDS,
    names::INHERITED_FIELDS,
];

#[test]
fn test_all_defaults_registered_without_flags() {
    let manager = PluginManager::with_tracing(GeneratorOptions::default());
    let bundle = manager.bundle_for(&table_spec("Person"));
    assert_eq!(
        bundle.names(),
        vec![
            names::CONSTRUCTORS,
            names::IMPLEMENTS,
            names::MODEL_METHODS,
            names::TABLE_FIELDS,
            names::VIEW_FIELDS,
            names::INHERITED_FIELDS,
            names::CONSTANT_COPYING,
        ]
    );
    assert!(bundle
        .entries()
        .iter()
        .all(|entry| entry.priority() == PluginPriority::Normal));
}

#[test]
fn test_constructor_flag_removes_only_constructors() {
    let options = GeneratorOptions::from_bits(OptionFlag::DisableDefaultConstructors.bit());
    let manager = PluginManager::with_tracing(options);
    assert!(manager.flag(OptionFlag::DisableDefaultConstructors));

    let bundle = manager.bundle_for(&table_spec("Person"));
    assert!(!bundle.contains(names::CONSTRUCTORS));
    for name in FIELD_PLUGINS {
        assert!(bundle.contains(name));
    }
    assert_eq!(bundle.len(), 6);
}

#[test]
fn test_all_flags_leave_field_plugins() {
    let manager = PluginManager::with_tracing(GeneratorOptions::from_bits(0x3f));
    for spec in [
        table_spec("Person"),
        view_spec("RecentPerson"),
        inherited_spec("Vip", "com.example.models.Person"),
    ] {
        assert_eq!(manager.bundle_for(&spec).names(), FIELD_PLUGINS.to_vec());
    }
}

#[test]
fn test_field_option_flags_do_not_change_registration() {
    let options = GeneratorOptions::default()
        .with(OptionFlag::DisableDefaultContentValues)
        .with(OptionFlag::DisableGettersAndSetters);
    let manager = PluginManager::with_tracing(options);
    assert_eq!(manager.registered(PluginPriority::Normal).len(), 7);
}

#[test]
fn test_bitmask_and_named_options_agree() {
    let from_bits = GeneratorOptions::from_bits(0b1010);
    let named = GeneratorOptions::default()
        .with(OptionFlag::DisableImplementsHandling)
        .with(OptionFlag::DisableConstantCopying);
    assert_eq!(from_bits, named);

    let a = PluginManager::with_tracing(from_bits);
    let b = PluginManager::with_tracing(named);
    assert_eq!(a.registered_all(), b.registered_all());
}
