//! Member resolution.
//!
//! Walks the target type's members in declaration order and pairs each
//! settable member with a readable source member. Object-shaped member
//! pairs are descended into recursively, with a resolution stack
//! guarding against cyclic type graphs; every pair discovered on the
//! way down is recorded so the registry can compile it lazily.

use remap_catalog::TypeCatalog;
use remap_core::{
    Conversion, MapError, MapResult, MemberDef, MemberType, TypeDescriptor, TypeId, TypePair,
};
use tracing::trace;

/// How one unit of data moves from source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingMember {
    /// Source member to read.
    pub source_name: String,
    /// Target member to write.
    pub target_name: String,
    /// Conversion or nested mapping to apply in between.
    pub kind: MemberMapping,
}

/// The per-member mapping kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberMapping {
    /// Scalar member: apply a conversion from the table.
    Convert(Conversion),
    /// Object-shaped member: invoke the mapper for this pair.
    Nested(TypePair),
}

/// The outcome of resolving one type pair.
#[derive(Debug)]
pub struct Resolution {
    /// Member correspondences, in target declaration order.
    pub members: Vec<MappingMember>,
    /// Every distinct type pair discovered for object-shaped members,
    /// transitively. Contains the resolved pair itself for
    /// self-recursive types. Used for eager binding.
    pub nested: Vec<TypePair>,
}

/// Resolve the member correspondences for a type pair.
///
/// Resolution is best-effort over names: a target member with no
/// matching source member is skipped, not an error. A name match whose
/// types are incompatible is a build-time error.
pub fn resolve(pair: TypePair, catalog: &TypeCatalog) -> MapResult<Resolution> {
    let mut nested = Vec::new();
    let mut stack = Vec::new();
    let members = resolve_members(pair, catalog, &mut stack, &mut nested)?;
    Ok(Resolution { members, nested })
}

fn resolve_members(
    pair: TypePair,
    catalog: &TypeCatalog,
    stack: &mut Vec<TypePair>,
    nested: &mut Vec<TypePair>,
) -> MapResult<Vec<MappingMember>> {
    let source = descriptor(catalog, pair.source)?;
    let target = descriptor(catalog, pair.target)?;

    stack.push(pair);
    let mut members = Vec::new();

    for target_member in target.members.iter().filter(|m| m.settable) {
        let Some(source_member) = match_source_member(source, &target_member.name) else {
            trace!(
                target_type = %target.name,
                member = %target_member.name,
                "no matching source member, skipping"
            );
            continue;
        };

        let kind = match (source_member.ty, target_member.ty) {
            (MemberType::Scalar(s), MemberType::Scalar(t)) => match Conversion::between(s, t) {
                Some(conversion) => MemberMapping::Convert(conversion),
                None => return Err(incompatible(target_member, source_member, catalog)),
            },
            (MemberType::Object(s), MemberType::Object(t)) => {
                let member_pair = TypePair::new(s, t);
                // Descend only on first discovery, and never into a pair
                // already being resolved further up the stack (cycle).
                // A pair reachable through several members still resolves
                // once, so DAG-shaped graphs stay linear in pair count.
                if !nested.contains(&member_pair) {
                    nested.push(member_pair);
                    if !stack.contains(&member_pair) {
                        resolve_members(member_pair, catalog, stack, nested)?;
                    }
                }
                MemberMapping::Nested(member_pair)
            }
            _ => return Err(incompatible(target_member, source_member, catalog)),
        };

        members.push(MappingMember {
            source_name: source_member.name.clone(),
            target_name: target_member.name.clone(),
            kind,
        });
    }

    stack.pop();
    Ok(members)
}

fn descriptor(catalog: &TypeCatalog, id: TypeId) -> MapResult<&TypeDescriptor> {
    catalog.get(id).ok_or(MapError::UnknownTypeId(id))
}

/// Find the readable source member matching a target member name.
/// Exact match wins; otherwise a case-insensitive match is accepted
/// only when it is unique.
fn match_source_member<'a>(source: &'a TypeDescriptor, name: &str) -> Option<&'a MemberDef> {
    let readable = || source.members.iter().filter(|m| m.readable);

    if let Some(member) = readable().find(|m| m.name == name) {
        return Some(member);
    }

    let mut candidates = readable().filter(|m| m.name.eq_ignore_ascii_case(name));
    match (candidates.next(), candidates.next()) {
        (Some(member), None) => Some(member),
        _ => None,
    }
}

fn incompatible(
    target_member: &MemberDef,
    source_member: &MemberDef,
    catalog: &TypeCatalog,
) -> MapError {
    MapError::IncompatibleMember {
        member: target_member.name.clone(),
        source_type: member_type_name(source_member.ty, catalog),
        target_type: member_type_name(target_member.ty, catalog),
    }
}

fn member_type_name(ty: MemberType, catalog: &TypeCatalog) -> String {
    match ty {
        MemberType::Scalar(scalar) => scalar.to_string(),
        MemberType::Object(id) => catalog
            .name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string()),
    }
}
