//! Mapper builders.
//!
//! A builder variant declares itself applicable to a type pair before
//! being selected; exactly one variant builds the plan for a pair. This
//! is the extension point for future collection or enum mapping
//! variants.

use crate::{CompiledMapper, Construct, MemberStep};
use remap_catalog::TypeCatalog;
use remap_core::{Fields, MapError, MapResult, TypePair};
use remap_resolver::{resolve, MemberMapping};
use tracing::debug;

/// A strategy for compiling one kind of type pair into a plan.
pub trait MapperBuilder: Send + Sync {
    /// Whether this builder can compile the given pair.
    fn is_supported(&self, pair: TypePair, catalog: &TypeCatalog) -> bool;

    /// Compile the pair into an executable plan.
    fn build(&self, pair: TypePair, catalog: &TypeCatalog) -> MapResult<CompiledMapper>;
}

/// Select the first builder variant that supports the pair.
pub fn select_builder<'a>(
    builders: &'a [Box<dyn MapperBuilder>],
    pair: TypePair,
    catalog: &TypeCatalog,
) -> Option<&'a dyn MapperBuilder> {
    builders
        .iter()
        .map(|b| b.as_ref())
        .find(|b| b.is_supported(pair, catalog))
}

/// Builds plans for plain object-to-object pairs: both sides are
/// catalog struct types.
#[derive(Debug, Default)]
pub struct StructMapperBuilder;

impl StructMapperBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl MapperBuilder for StructMapperBuilder {
    fn is_supported(&self, pair: TypePair, catalog: &TypeCatalog) -> bool {
        catalog.get(pair.source).is_some() && catalog.get(pair.target).is_some()
    }

    fn build(&self, pair: TypePair, catalog: &TypeCatalog) -> MapResult<CompiledMapper> {
        let source = catalog
            .get(pair.source)
            .ok_or(MapError::UnknownTypeId(pair.source))?;
        let target = catalog
            .get(pair.target)
            .ok_or(MapError::UnknownTypeId(pair.target))?;

        if !target.is_default_constructible() {
            // Mapping to this target always yields the absent value, so
            // there is no plan body to build.
            debug!(source = %source.name, target = %target.name, "target not constructible, absent plan");
            return Ok(CompiledMapper::new(
                pair,
                source.name.clone(),
                target.name.clone(),
                Construct::Absent,
                Vec::new(),
                Vec::new(),
            ));
        }

        let prototype: Fields = target
            .members
            .iter()
            .map(|m| (m.name.clone(), m.ty.default_value()))
            .collect();

        let resolution = resolve(pair, catalog)?;
        let steps = resolution
            .members
            .into_iter()
            .map(|member| match member.kind {
                MemberMapping::Convert(conversion) => MemberStep::Convert {
                    source_name: member.source_name,
                    target_name: member.target_name,
                    conversion,
                },
                MemberMapping::Nested(member_pair) => MemberStep::Nested {
                    source_name: member.source_name,
                    target_name: member.target_name,
                    pair: member_pair,
                },
            })
            .collect::<Vec<_>>();

        debug!(
            source = %source.name,
            target = %target.name,
            steps = steps.len(),
            nested = resolution.nested.len(),
            "built mapper plan"
        );

        Ok(CompiledMapper::new(
            pair,
            source.name.clone(),
            target.name.clone(),
            Construct::Default { prototype },
            steps,
            resolution.nested,
        ))
    }
}
