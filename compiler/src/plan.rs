//! The executable mapping plan.
//!
//! A compiled mapper holds no mutable state: invoking it is a pure
//! function of the source value and the plan, so one mapper can serve
//! any number of threads without synchronization.

use remap_core::{Conversion, Fields, MapError, MapResult, TypePair, Value};
use std::sync::Arc;

/// Lookup seam between a running plan and the mapper registry.
///
/// Nested member steps resolve their mapper through this trait on every
/// invocation instead of capturing a reference at build time. A mapper
/// whose plan needs itself (self-recursion) or a pair still being built
/// (mutual recursion) could otherwise never finish construction.
pub trait MapperLookup {
    /// Non-building lookup. Returns `None` rather than blocking when
    /// the pair has not been built yet.
    fn try_get(&self, pair: TypePair) -> Option<Arc<CompiledMapper>>;

    /// Building lookup: returns the existing mapper or builds it.
    fn get_or_build(&self, pair: TypePair) -> MapResult<Arc<CompiledMapper>>;
}

/// How the target instance comes into being.
#[derive(Debug, Clone)]
pub enum Construct {
    /// Clone a prototype in which every member holds its default value,
    /// then apply the member steps.
    Default { prototype: Fields },
    /// No construction path exists: mapping yields `Value::Null` and
    /// member steps are skipped.
    Absent,
}

/// One per-member conversion step of a plan.
#[derive(Debug, Clone)]
pub enum MemberStep {
    /// Read a scalar member, convert, write.
    Convert {
        source_name: String,
        target_name: String,
        conversion: Conversion,
    },
    /// Read an object-shaped member and map it with the mapper for
    /// `pair`, resolved lazily at invocation time.
    Nested {
        source_name: String,
        target_name: String,
        pair: TypePair,
    },
}

/// The reusable conversion routine compiled for one type pair.
///
/// Immutable after construction and safe for concurrent invocation.
#[derive(Debug)]
pub struct CompiledMapper {
    pair: TypePair,
    source_name: String,
    target_name: String,
    construct: Construct,
    steps: Vec<MemberStep>,
    nested: Vec<TypePair>,
}

impl CompiledMapper {
    pub fn new(
        pair: TypePair,
        source_name: String,
        target_name: String,
        construct: Construct,
        steps: Vec<MemberStep>,
        nested: Vec<TypePair>,
    ) -> Self {
        Self {
            pair,
            source_name,
            target_name,
            construct,
            steps,
            nested,
        }
    }

    /// The type pair this mapper was compiled for.
    pub fn pair(&self) -> TypePair {
        self.pair
    }

    /// Name of the source type.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Name of the target type.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Every type pair this plan depends on, transitively. The pairs
    /// are not necessarily built yet.
    pub fn nested_pairs(&self) -> &[TypePair] {
        &self.nested
    }

    /// Map a source value to a newly constructed target value.
    pub fn map(&self, source: &Value, mappers: &dyn MapperLookup) -> MapResult<Value> {
        let fields = match source {
            Value::Null => return Ok(Value::Null),
            Value::Object(fields) => fields,
            other => {
                return Err(MapError::SourceShape {
                    expected: self.source_name.clone(),
                    found: other.kind(),
                })
            }
        };

        let mut built = match &self.construct {
            Construct::Absent => return Ok(Value::Null),
            Construct::Default { prototype } => prototype.clone(),
        };

        for step in &self.steps {
            match step {
                MemberStep::Convert {
                    source_name,
                    target_name,
                    conversion,
                } => {
                    // Absent or null source members leave the target's
                    // constructed default in place.
                    let Some(value) = fields.get(source_name) else {
                        continue;
                    };
                    if value.is_null() {
                        continue;
                    }
                    let converted =
                        conversion
                            .apply(value)
                            .map_err(|source| MapError::Conversion {
                                member: target_name.clone(),
                                source,
                            })?;
                    built.insert(target_name.clone(), converted);
                }
                MemberStep::Nested {
                    source_name,
                    target_name,
                    pair,
                } => {
                    let Some(value) = fields.get(source_name) else {
                        continue;
                    };
                    if value.is_null() {
                        continue;
                    }
                    let mapper = match mappers.try_get(*pair) {
                        Some(mapper) => mapper,
                        None => mappers.get_or_build(*pair)?,
                    };
                    let mapped = mapper.map(value, mappers)?;
                    built.insert(target_name.clone(), mapped);
                }
            }
        }

        Ok(Value::Object(built))
    }
}
