//! Shared catalogs for the integration suites.

use remap_catalog::{CatalogBuilder, TypeCatalog};
use remap_core::ScalarType;
use remap_registry::MapperRegistry;
use std::sync::Arc;

/// Catalog with the PersonDto/Person family of shapes.
///
/// Both sides carry `id`, `name` and a self-typed `child`;
/// `PersonSummary` is the same shape without `name`.
pub fn person_catalog() -> Arc<TypeCatalog> {
    let mut builder = CatalogBuilder::new();
    builder
        .reference_type("PersonDto")
        .scalar("id", ScalarType::Int64)
        .scalar("name", ScalarType::String)
        .object("child", "PersonDto")
        .done()
        .unwrap();
    builder
        .reference_type("Person")
        .scalar("id", ScalarType::Int64)
        .scalar("name", ScalarType::String)
        .object("child", "Person")
        .done()
        .unwrap();
    builder
        .reference_type("PersonSummary")
        .scalar("id", ScalarType::Int64)
        .object("child", "PersonSummary")
        .done()
        .unwrap();
    Arc::new(builder.build().unwrap())
}

/// A fresh registry over [`person_catalog`].
pub fn person_registry() -> MapperRegistry {
    MapperRegistry::new(person_catalog())
}
