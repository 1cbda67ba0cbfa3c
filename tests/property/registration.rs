//! Property-based tests for registration and resolution order

use modelgen::model::{ModelKind, ModelSpec};
use modelgen::plugin::defaults::names;
use modelgen::plugin::{Plugin, PluginProvider};
use modelgen::{GeneratorOptions, OptionFlag, PluginManager, PluginPriority};
use proptest::prelude::*;
use std::sync::Arc;

struct Marker;
impl Plugin for Marker {}

fn spec(kind: ModelKind) -> Arc<ModelSpec> {
    let spec = ModelSpec::builder()
        .spec_class("ThingSpec")
        .class_name("Thing")
        .kind(kind)
        .build();
    let spec = match kind {
        ModelKind::Inherited => ModelSpec {
            parent: Some(modelgen::model::TypeName::new("com.example.Base")),
            ..spec
        },
        _ => spec,
    };
    Arc::new(spec)
}

fn kind_strategy() -> impl Strategy<Value = ModelKind> {
    prop_oneof![
        Just(ModelKind::Table),
        Just(ModelKind::View),
        Just(ModelKind::Inherited),
    ]
}

fn priority_strategy() -> impl Strategy<Value = PluginPriority> {
    prop_oneof![
        Just(PluginPriority::High),
        Just(PluginPriority::Normal),
        Just(PluginPriority::Low),
    ]
}

/// Each disable-able default is registered iff its flag is unset; field plugins always are.
#[test]
fn test_default_registration_follows_flags() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0u32..64, kind_strategy()), |(bits, kind)| {
            let manager = PluginManager::with_tracing(GeneratorOptions::from_bits(bits));
            let bundle = manager.bundle_for(&spec(kind));

            let optional = [
                (OptionFlag::DisableDefaultConstructors, names::CONSTRUCTORS),
                (OptionFlag::DisableImplementsHandling, names::IMPLEMENTS),
                (OptionFlag::DisableMethodHandling, names::MODEL_METHODS),
                (OptionFlag::DisableConstantCopying, names::CONSTANT_COPYING),
            ];
            for (flag, name) in optional {
                prop_assert_eq!(bundle.contains(name), bits & flag.bit() == 0);
            }
            for name in [names::TABLE_FIELDS, names::VIEW_FIELDS, names::INHERITED_FIELDS] {
                prop_assert!(bundle.contains(name));
            }
            Ok(())
        })
        .unwrap();
}

/// Bundles list HIGH, then NORMAL, then LOW, each tier in call order.
#[test]
fn test_resolution_order_is_tier_then_call_order() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(priority_strategy(), 0..12),
            |priorities| {
                let mut manager = PluginManager::with_tracing(GeneratorOptions::from_bits(0x3f));
                for (i, priority) in priorities.iter().enumerate() {
                    manager.add_plugin(
                        PluginProvider::new(format!("p{}", i), |_, _| {
                            Ok(Box::new(Marker) as Box<dyn Plugin>)
                        }),
                        *priority,
                    );
                }

                let bundle = manager.bundle_for(&spec(ModelKind::Table));
                let extra: Vec<(PluginPriority, String)> = bundle
                    .entries()
                    .iter()
                    .filter(|entry| entry.name().starts_with('p'))
                    .map(|entry| (entry.priority(), entry.name().to_string()))
                    .collect();

                let mut expected: Vec<(PluginPriority, String)> = priorities
                    .iter()
                    .enumerate()
                    .map(|(i, priority)| (*priority, format!("p{}", i)))
                    .collect();
                // Stable sort keeps call order within a tier.
                expected.sort_by_key(|(priority, _)| *priority);
                prop_assert_eq!(extra, expected);

                let tiers: Vec<PluginPriority> =
                    bundle.entries().iter().map(|entry| entry.priority()).collect();
                let mut sorted = tiers.clone();
                sorted.sort();
                prop_assert_eq!(tiers, sorted);
                Ok(())
            },
        )
        .unwrap();
}

/// The bitmask and the named options round-trip for every known combination.
#[test]
fn test_bitmask_conversion_ignores_unknown_bits() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<u32>(), |bits| {
            let options = GeneratorOptions::from(bits);
            prop_assert_eq!(options.bits(), bits & 0x3f);
            prop_assert_eq!(GeneratorOptions::from_bits(options.bits()), options);
            Ok(())
        })
        .unwrap();
}
