//! Rendering whole model classes from resolved bundles

use super::test_utils::{inherited_spec, table_spec, tagging, view_spec};
use modelgen::model::{ConstantSpec, MethodSpec, ModelKind, ModelSpec, Parameter, PropertySpec, TypeName};
use modelgen::{GeneratorOptions, ModelFileEmitter, OptionFlag, PluginManager, PluginPriority};
use std::sync::Arc;

fn render(manager: &PluginManager, spec: &Arc<ModelSpec>) -> String {
    ModelFileEmitter::new()
        .emit(&manager.bundle_for(spec))
        .unwrap()
        .source
}

#[test]
fn test_table_model_sections_in_emission_order() {
    let spec = Arc::new(
        ModelSpec::builder()
            .spec_class("PersonSpec")
            .class_name("Person")
            .package("com.example.models")
            .kind(ModelKind::Table)
            .source_name("people")
            .properties(vec![
                PropertySpec::new("firstName", "String"),
                PropertySpec::new("birthday", "long").with_column_name("birth_day"),
            ])
            .constants(vec![ConstantSpec::new("MAX_AGE", TypeName::new("int"), "150")])
            .methods(vec![MethodSpec::model_method(
                "getDisplayName",
                vec![Parameter::new(TypeName::new("com.example.models.Person"), "person")],
            )
            .returning(TypeName::new("java.lang.String"))])
            .implements(vec![TypeName::new("java.io.Serializable")])
            .build(),
    );
    let source = render(&PluginManager::with_tracing(GeneratorOptions::default()), &spec);

    assert!(source.contains("package com.example.models;"));
    assert!(source.contains("import java.io.Serializable;"));
    assert!(source.contains("public class Person extends TableModel implements Serializable {"));

    let order = [
        "public static final int MAX_AGE = 150;",
        "public static final Table TABLE = new Table(Person.class, PROPERTIES, \"people\");",
        "new LongProperty(TABLE, \"birth_day\")",
        "public Person(ContentValues contentValues) {",
        "public String getDisplayName() {",
        "public Person setFirstName(String firstName) {",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| source.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_view_and_inherited_models() {
    let manager = PluginManager::with_tracing(GeneratorOptions::default());

    let view = render(&manager, &view_spec("RecentPerson"));
    assert!(view.contains("public class RecentPerson extends ViewModel {"));
    assert!(view.contains("import io.modelgen.runtime.sql.View;"));
    assert!(!view.contains("setName"));

    let child = render(&manager, &inherited_spec("Vip", "com.example.base.Person"));
    assert!(child.contains("import com.example.base.Person;"));
    assert!(child.contains("public class Vip extends Person {"));
    assert!(child.contains("public static final StringProperty NAME = Person.NAME;"));
}

#[test]
fn test_disabled_defaults_are_absent_from_output() {
    let options = GeneratorOptions::default()
        .with(OptionFlag::DisableDefaultConstructors)
        .with(OptionFlag::DisableGettersAndSetters)
        .with(OptionFlag::DisableDefaultContentValues);
    let source = render(&PluginManager::with_tracing(options), &table_spec("Person"));

    assert!(!source.contains("public Person() {"));
    assert!(!source.contains("getName"));
    assert!(!source.contains("defaultValues"));
    assert!(!source.contains("import android.content.ContentValues;"));
    assert!(source.contains("public static final StringProperty NAME"));
}

#[test]
fn test_extra_plugin_output_is_included() {
    let mut manager = PluginManager::with_tracing(GeneratorOptions::default());
    manager.add_plugin(tagging("Audited"), PluginPriority::High);
    let source = render(&manager, &table_spec("Person"));

    assert!(source.contains("import com.example.tags.Audited;"));
    assert!(source.contains("extends TableModel implements Audited {"));
    let tag = source.find("// methods:Audited").unwrap();
    let accessor = source.find("public String getName() {").unwrap();
    assert!(tag < accessor);
}
