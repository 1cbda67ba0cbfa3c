//! Construction failures, per-spec isolation, and concurrent resolution

use super::test_utils::{inherited_spec, table_spec, tagging, view_spec, Tagging};
use modelgen::diagnostics::{CollectingSink, Severity};
use modelgen::error::PluginError;
use modelgen::model::{ModelKind, ModelSpec};
use modelgen::plugin::defaults::names;
use modelgen::{GeneratorOptions, Plugin, PluginManager, PluginPriority, PluginProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn table_only() -> PluginProvider {
    PluginProvider::new("table-only", |spec, _| {
        if spec.kind != ModelKind::Table {
            return Err(PluginError::UnsupportedModelKind {
                plugin: "table-only".to_string(),
                kind: spec.kind,
            });
        }
        Ok(Box::new(Tagging {
            tag: "table-only".to_string(),
        }) as Box<dyn Plugin>)
    })
}

#[test]
fn test_failure_is_scoped_to_one_spec() {
    let sink = Arc::new(CollectingSink::new());
    let mut manager = PluginManager::new(GeneratorOptions::default(), sink.clone());
    manager.add_plugin(table_only(), PluginPriority::High);
    sink.clear();

    let table = manager.bundle_for(&table_spec("Person"));
    assert_eq!(table.names()[0], "table-only");
    assert!(sink.diagnostics().is_empty());

    let view = manager.bundle_for(&view_spec("RecentPerson"));
    assert!(!view.contains("table-only"));
    assert_eq!(view.len(), 7);

    let warnings = sink.with_severity(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("table-only"));
    assert!(warnings[0].message.contains("RecentPerson"));
    assert!(warnings[0].message.contains("view"));
}

#[test]
fn test_inherited_without_parent_keeps_field_plugins() {
    let sink = Arc::new(CollectingSink::new());
    let manager = PluginManager::new(GeneratorOptions::default(), sink.clone());
    let orphan = Arc::new(
        ModelSpec::builder()
            .spec_class("OrphanSpec")
            .class_name("Orphan")
            .kind(ModelKind::Inherited)
            .build(),
    );

    let bundle = manager.bundle_for(&orphan);
    assert_eq!(bundle.len(), 7);
    for name in [names::TABLE_FIELDS, names::VIEW_FIELDS, names::INHERITED_FIELDS] {
        assert!(bundle.contains(name));
    }
    assert!(sink.with_severity(Severity::Warning).is_empty());
    let errors = sink.with_severity(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Orphan"));
}

#[test]
fn test_panicking_provider_is_reported_and_skipped() {
    let sink = Arc::new(CollectingSink::new());
    let mut manager = PluginManager::new(GeneratorOptions::default(), sink.clone());
    manager.add_plugin(
        PluginProvider::new("throws", |_, _| panic!("constructor threw")),
        PluginPriority::High,
    );
    sink.clear();

    let bundle = manager.bundle_for(&table_spec("Person"));
    assert_eq!(bundle.len(), 7);
    assert!(!bundle.contains("throws"));
    assert_eq!(bundle.names()[0], names::CONSTRUCTORS);

    let warnings = sink.with_severity(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("throws"));
    assert!(warnings[0].message.contains("constructor threw"));

    // The manager stays usable after a panicking provider.
    assert_eq!(manager.bundle_for(&view_spec("RecentPerson")).len(), 7);
}

#[test]
fn test_every_resolution_builds_fresh_instances() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);
    let mut manager = PluginManager::with_tracing(GeneratorOptions::from_bits(0x3f));
    manager.add_plugin(
        PluginProvider::new("counting", move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Tagging {
                tag: "counting".to_string(),
            }) as Box<dyn Plugin>)
        }),
        PluginPriority::Normal,
    );

    let spec = table_spec("Person");
    manager.bundle_for(&spec);
    manager.bundle_for(&spec);
    manager.bundle_for(&view_spec("RecentPerson"));
    assert_eq!(built.load(Ordering::SeqCst), 3);
}

#[test]
fn test_concurrent_resolution() {
    let mut manager = PluginManager::with_tracing(GeneratorOptions::default());
    manager.add_plugin(tagging("extra"), PluginPriority::Low);
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let spec = match i % 3 {
                    0 => table_spec(&format!("Table{}", i)),
                    1 => view_spec(&format!("View{}", i)),
                    _ => inherited_spec(&format!("Child{}", i), "com.example.models.Base"),
                };
                manager.bundle_for(&spec).names().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 8);
    }
}
