//! Self-referential and mutually-referential type graphs.

use remap_tests::prelude::*;

#[test]
fn test_self_recursive_pair_compiles_and_binds() {
    let registry = person_registry();
    registry.bind("PersonDto", "Person").unwrap();

    let pair = registry.type_pair("PersonDto", "Person").unwrap();
    assert!(registry.try_get(pair).is_some());
}

#[test]
fn test_three_level_chain_preserves_structure() {
    let registry = person_registry();
    let source = Value::Object(fields! {
        "id" => 1i64,
        "name" => "root",
        "child" => fields! {
            "id" => 2i64,
            "name" => "middle",
            "child" => fields! {
                "id" => 3i64,
                "name" => "leaf",
            },
        },
    });

    let mapped = registry.map(&source, "PersonDto", "Person").unwrap();

    let level1 = &mapped;
    assert_eq!(level1.field("id"), Some(&Value::Int(1)));
    let level2 = level1.field("child").unwrap();
    assert_eq!(level2.field("id"), Some(&Value::Int(2)));
    assert_eq!(level2.field("name"), Some(&Value::String("middle".into())));
    let level3 = level2.field("child").unwrap();
    assert_eq!(level3.field("id"), Some(&Value::Int(3)));
    assert_eq!(level3.field("name"), Some(&Value::String("leaf".into())));
    assert_eq!(level3.field("child"), Some(&Value::Null));
}

fn mutual_catalog() -> Arc<TypeCatalog> {
    let mut builder = CatalogBuilder::new();
    builder
        .reference_type("OrderDto")
        .scalar("id", ScalarType::Int64)
        .object("customer", "CustomerDto")
        .done()
        .unwrap();
    builder
        .reference_type("CustomerDto")
        .scalar("name", ScalarType::String)
        .object("last_order", "OrderDto")
        .done()
        .unwrap();
    builder
        .reference_type("Order")
        .scalar("id", ScalarType::Int64)
        .object("customer", "Customer")
        .done()
        .unwrap();
    builder
        .reference_type("Customer")
        .scalar("name", ScalarType::String)
        .object("last_order", "Order")
        .done()
        .unwrap();
    Arc::new(builder.build().unwrap())
}

#[test]
fn test_mutually_recursive_pairs_compile() {
    let registry = MapperRegistry::new(mutual_catalog());
    registry.bind("OrderDto", "Order").unwrap();

    // Binding the top pair eagerly compiled its mutual partner too.
    let partner = registry.type_pair("CustomerDto", "Customer").unwrap();
    assert!(registry.try_get(partner).is_some());
}

#[test]
fn test_mutually_recursive_instance_graph_maps() {
    let registry = MapperRegistry::new(mutual_catalog());
    let source = Value::Object(fields! {
        "id" => 10i64,
        "customer" => fields! {
            "name" => "Ada",
            "last_order" => fields! { "id" => 9i64 },
        },
    });

    let mapped = registry.map(&source, "OrderDto", "Order").unwrap();
    assert_eq!(mapped.field("id"), Some(&Value::Int(10)));
    let customer = mapped.field("customer").unwrap();
    assert_eq!(customer.field("name"), Some(&Value::String("Ada".into())));
    let last_order = customer.field("last_order").unwrap();
    assert_eq!(last_order.field("id"), Some(&Value::Int(9)));
    assert_eq!(last_order.field("customer"), Some(&Value::Null));
}
