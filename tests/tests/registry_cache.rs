//! Registry caching and concurrency properties.

use remap_tests::prelude::*;
use std::sync::Barrier;

#[test]
fn test_get_or_build_returns_same_plan_twice() {
    let registry = person_registry();
    let pair = registry.type_pair("PersonDto", "Person").unwrap();

    let first = registry.get_or_build(pair).unwrap();
    let second = registry.get_or_build(pair).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_concurrent_first_use_observes_one_mapper() {
    const CALLERS: usize = 8;

    let registry = person_registry();
    let pair = registry.type_pair("PersonDto", "Person").unwrap();
    let barrier = Barrier::new(CALLERS);

    let mappers: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.get_or_build(pair).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for mapper in &mappers[1..] {
        assert!(Arc::ptr_eq(&mappers[0], mapper));
    }
    // PersonDto->Person is self-recursive, so only its own pair exists.
    assert_eq!(registry.mapper_count(), 1);
}

#[test]
fn test_concurrent_mapping_of_distinct_pairs() {
    let registry = person_registry();
    let source = Value::Object(fields! {
        "id" => 1i64,
        "name" => "x",
        "child" => fields! { "id" => 2i64 },
    });

    std::thread::scope(|scope| {
        for target in ["Person", "PersonSummary"] {
            let source = &source;
            let registry = &registry;
            scope.spawn(move || {
                for _ in 0..50 {
                    let mapped = registry.map(source, "PersonDto", target).unwrap();
                    assert_eq!(mapped.field("id"), Some(&Value::Int(1)));
                }
            });
        }
    });

    assert_eq!(registry.mapper_count(), 2);
}

#[test]
fn test_bind_compiles_nested_pairs_eagerly() {
    let registry = person_registry();
    registry.bind("PersonDto", "PersonSummary").unwrap();

    let pair = registry.type_pair("PersonDto", "PersonSummary").unwrap();
    assert!(registry.try_get(pair).is_some());
}

#[test]
fn test_bind_surfaces_incompatible_member() {
    let mut builder = CatalogBuilder::new();
    builder
        .reference_type("Source")
        .scalar("flag", ScalarType::Bool)
        .done()
        .unwrap();
    builder
        .reference_type("Target")
        .scalar("flag", ScalarType::String)
        .done()
        .unwrap();
    let registry = MapperRegistry::new(Arc::new(builder.build().unwrap()));

    let err = registry.bind("Source", "Target").unwrap_err();
    assert!(matches!(
        err,
        MapError::IncompatibleMember { member, .. } if member == "flag"
    ));
    assert_eq!(registry.mapper_count(), 0);
}
