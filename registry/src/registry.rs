//! The MapperRegistry - lazy, concurrent mapper cache.

use parking_lot::RwLock;
use remap_catalog::TypeCatalog;
use remap_compiler::{
    select_builder, CompiledMapper, MapperBuilder, MapperLookup, StructMapperBuilder,
};
use remap_core::{MapError, MapResult, TypePair, Value};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, trace};

/// Table from type pair to compiled mapper, populated lazily.
///
/// Plans are built outside the table lock, so a build in progress for
/// one pair never blocks lookups for another, and nested lookups during
/// a build cannot deadlock against it. When two callers race to build
/// the same pair, both builds may run; exactly one result is retained
/// and the loser discards its own.
pub struct MapperRegistry {
    catalog: Arc<TypeCatalog>,
    builders: Vec<Box<dyn MapperBuilder>>,
    mappers: RwLock<HashMap<TypePair, Arc<CompiledMapper>>>,
}

impl MapperRegistry {
    /// Create a registry with the default builder set.
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self::with_builders(catalog, vec![Box::new(StructMapperBuilder::new())])
    }

    /// Create a registry with a custom builder list. Builders are
    /// consulted in order; the first to support a pair compiles it.
    pub fn with_builders(catalog: Arc<TypeCatalog>, builders: Vec<Box<dyn MapperBuilder>>) -> Self {
        Self {
            catalog,
            builders,
            mappers: RwLock::new(HashMap::new()),
        }
    }

    /// The catalog this registry resolves types against.
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Number of compiled mappers currently cached.
    pub fn mapper_count(&self) -> usize {
        self.mappers.read().len()
    }

    /// Resolve a type pair from type names.
    pub fn type_pair(&self, source: &str, target: &str) -> MapResult<TypePair> {
        let source_id = self
            .catalog
            .id_of(source)
            .ok_or_else(|| MapError::UnknownType(source.to_string()))?;
        let target_id = self
            .catalog
            .id_of(target)
            .ok_or_else(|| MapError::UnknownType(target.to_string()))?;
        Ok(TypePair::new(source_id, target_id))
    }

    /// Map a source value to a target value, compiling the plan on
    /// first use.
    pub fn map(&self, source_value: &Value, source: &str, target: &str) -> MapResult<Value> {
        let pair = self.type_pair(source, target)?;
        let mapper = self.get_or_build(pair)?;
        mapper.map(source_value, self)
    }

    /// Eagerly compile the pair and every nested pair it depends on,
    /// surfacing structural issues before first real use.
    pub fn bind(&self, source: &str, target: &str) -> MapResult<()> {
        let mut pending = vec![self.type_pair(source, target)?];
        let mut visited = HashSet::new();

        while let Some(pair) = pending.pop() {
            if !visited.insert(pair) {
                continue;
            }
            let mapper = self.get_or_build(pair)?;
            pending.extend(mapper.nested_pairs().iter().copied());
        }
        Ok(())
    }

    /// Get the compiled mapper for a pair, building it on miss.
    pub fn get_or_build(&self, pair: TypePair) -> MapResult<Arc<CompiledMapper>> {
        if let Some(mapper) = self.mappers.read().get(&pair) {
            trace!(%pair, "mapper cache hit");
            return Ok(Arc::clone(mapper));
        }

        // Build without holding the table lock.
        let builder = select_builder(&self.builders, pair, &self.catalog)
            .ok_or_else(|| self.unsupported(pair))?;
        let built = Arc::new(builder.build(pair, &self.catalog)?);

        match self.mappers.write().entry(pair) {
            Entry::Occupied(existing) => {
                // Lost the race: another caller's build landed first.
                trace!(%pair, "discarding duplicate build");
                Ok(Arc::clone(existing.get()))
            }
            Entry::Vacant(slot) => {
                debug!(%pair, "mapper plan cached");
                Ok(Arc::clone(slot.insert(built)))
            }
        }
    }

    /// Non-building lookup.
    pub fn try_get(&self, pair: TypePair) -> Option<Arc<CompiledMapper>> {
        self.mappers.read().get(&pair).cloned()
    }

    fn unsupported(&self, pair: TypePair) -> MapError {
        let name = |id| {
            self.catalog
                .name_of(id)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string())
        };
        MapError::UnsupportedTypePair {
            source_type: name(pair.source),
            target_type: name(pair.target),
        }
    }
}

impl MapperLookup for MapperRegistry {
    fn try_get(&self, pair: TypePair) -> Option<Arc<CompiledMapper>> {
        MapperRegistry::try_get(self, pair)
    }

    fn get_or_build(&self, pair: TypePair) -> MapResult<Arc<CompiledMapper>> {
        MapperRegistry::get_or_build(self, pair)
    }
}
