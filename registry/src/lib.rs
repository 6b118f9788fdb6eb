//! Remap Mapper Registry
//!
//! The process-wide table from type pair to compiled mapper. A pair is
//! compiled at most once, even under concurrent first use; entries are
//! never evicted or replaced. The registry also carries the public
//! `map`/`bind` surface callers use by type name.
//!
//! The registry is an explicitly constructed value, not an implicit
//! singleton: callers own its lifecycle and tests stay isolated.

mod registry;

pub use registry::MapperRegistry;
