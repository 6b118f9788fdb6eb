//! Remap Member Resolver
//!
//! Given a type pair, produces the ordered list of member
//! correspondences the plan builder turns into an executable plan.
//! Matching is by name (exact first, unique case-insensitive fallback)
//! and type compatibility; unmatched target members are skipped.

mod resolver;

pub use resolver::{resolve, MappingMember, MemberMapping, Resolution};
