//! Remap Mapping Compiler
//!
//! Turns a type pair plus its resolved member correspondences into a
//! [`CompiledMapper`]: an immutable, interpreted plan of per-member
//! steps ending in the built target value. Mappers resolve the nested
//! mappers they depend on through the [`MapperLookup`] seam at every
//! invocation, which is what lets cyclic type graphs compile.

mod builder;
mod plan;

pub use builder::{select_builder, MapperBuilder, StructMapperBuilder};
pub use plan::{CompiledMapper, Construct, MapperLookup, MemberStep};
