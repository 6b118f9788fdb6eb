//! The TypeCatalog - immutable type descriptor lookup.

use remap_core::{TypeDescriptor, TypeId};
use std::collections::HashMap;

/// The TypeCatalog provides runtime lookup of type descriptors.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    /// Type descriptors by ID.
    types: HashMap<TypeId, TypeDescriptor>,
    /// Type ID lookup by name.
    type_names: HashMap<String, TypeId>,
}

impl TypeCatalog {
    /// Create a catalog (use CatalogBuilder for construction).
    pub(crate) fn new(
        types: HashMap<TypeId, TypeDescriptor>,
        type_names: HashMap<String, TypeId>,
    ) -> Self {
        Self { types, type_names }
    }

    /// Get a type descriptor by ID.
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(&id)
    }

    /// Get a type descriptor by name.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    /// Get a type ID by name.
    pub fn id_of(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Get a type name by ID.
    pub fn name_of(&self, id: TypeId) -> Option<&str> {
        self.types.get(&id).map(|t| t.name.as_str())
    }

    /// Get all type descriptors.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Get the number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
