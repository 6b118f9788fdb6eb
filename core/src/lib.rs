//! Remap Core Types
//!
//! This crate provides the foundational types used throughout the remap
//! system:
//! - Type identifiers (TypeId) and the TypePair cache key
//! - Value types (the dynamic Value enum moved between objects)
//! - Type descriptors (TypeDescriptor, MemberDef)
//! - The primitive conversion table
//! - Common error types

mod convert;
mod descriptor;
mod error;
mod id;
mod value;

pub use convert::*;
pub use descriptor::*;
pub use error::*;
pub use id::*;
pub use value::*;
