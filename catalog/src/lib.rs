//! Remap Type Catalog
//!
//! The thin introspection layer the mapping compiler works against: for
//! any registered type, the catalog answers what its members are (with
//! accessor capability) and whether a default instance can be
//! constructed. Built once through [`CatalogBuilder`], immutable after.

mod builder;
mod catalog;

pub use builder::{CatalogBuilder, CatalogError, MemberDecl, TypeBuilder};
pub use catalog::TypeCatalog;
