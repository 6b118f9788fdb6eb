//! Basic mapping scenarios: member matching, defaults, skipping.

use remap_tests::prelude::*;

#[test]
fn test_dto_maps_with_nested_child() {
    let registry = person_registry();
    let source = Value::Object(fields! {
        "id" => 1i64,
        "name" => "x",
        "child" => fields! { "id" => 2i64 },
    });

    let mapped = registry.map(&source, "PersonDto", "Person").unwrap();
    assert_eq!(mapped.field("id"), Some(&Value::Int(1)));
    assert_eq!(mapped.field("name"), Some(&Value::String("x".into())));
    assert_eq!(
        mapped.field("child").and_then(|c| c.field("id")),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_target_without_name_drops_it_silently() {
    let registry = person_registry();
    let source = Value::Object(fields! {
        "id" => 1i64,
        "name" => "x",
        "child" => fields! { "id" => 2i64 },
    });

    let mapped = registry.map(&source, "PersonDto", "PersonSummary").unwrap();
    assert_eq!(mapped.field("id"), Some(&Value::Int(1)));
    assert_eq!(mapped.field("name"), None);
    assert_eq!(
        mapped.field("child").and_then(|c| c.field("id")),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_source_without_name_leaves_constructed_default() {
    let registry = person_registry();
    let source = Value::Object(fields! { "id" => 3i64 });

    let mapped = registry.map(&source, "PersonSummary", "Person").unwrap();
    assert_eq!(mapped.field("id"), Some(&Value::Int(3)));
    // PersonSummary has no name member at all: the target keeps its
    // constructed default.
    assert_eq!(mapped.field("name"), Some(&Value::String(String::new())));
    assert_eq!(mapped.field("child"), Some(&Value::Null));
}

#[test]
fn test_null_source_member_leaves_constructed_default() {
    let registry = person_registry();
    let source = Value::Object(fields! {
        "id" => 4i64,
        "name" => Value::Null,
        "child" => Value::Null,
    });

    let mapped = registry.map(&source, "PersonDto", "Person").unwrap();
    assert_eq!(mapped.field("name"), Some(&Value::String(String::new())));
    assert_eq!(mapped.field("child"), Some(&Value::Null));
}

#[test]
fn test_absent_construction_yields_null() {
    let mut builder = CatalogBuilder::new();
    builder
        .reference_type("Source")
        .scalar("id", ScalarType::Int64)
        .done()
        .unwrap();
    builder
        .reference_type("Unbuildable")
        .no_default_ctor()
        .scalar("id", ScalarType::Int64)
        .done()
        .unwrap();
    let registry = MapperRegistry::new(Arc::new(builder.build().unwrap()));

    let source = Value::Object(fields! { "id" => 1i64 });
    let mapped = registry.map(&source, "Source", "Unbuildable").unwrap();
    assert_eq!(mapped, Value::Null);
}

#[test]
fn test_widening_and_float_conversions_applied() {
    let mut builder = CatalogBuilder::new();
    builder
        .reference_type("Metrics32")
        .scalar("count", ScalarType::Int32)
        .scalar("ratio", ScalarType::Int32)
        .done()
        .unwrap();
    builder
        .reference_type("Metrics")
        .scalar("count", ScalarType::Int64)
        .scalar("ratio", ScalarType::Float64)
        .done()
        .unwrap();
    let registry = MapperRegistry::new(Arc::new(builder.build().unwrap()));

    let source = Value::Object(fields! { "count" => 12i32, "ratio" => 3i32 });
    let mapped = registry.map(&source, "Metrics32", "Metrics").unwrap();
    assert_eq!(mapped.field("count"), Some(&Value::Int(12)));
    assert_eq!(mapped.field("ratio"), Some(&Value::Float(3.0)));
}
