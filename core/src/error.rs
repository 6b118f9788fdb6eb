//! Common error types for remap.

use crate::{ConvertError, TypeId};
use thiserror::Error;

/// Errors that can occur while building or invoking a mapper.
#[derive(Debug, Error)]
pub enum MapError {
    /// No type with this name is registered in the catalog.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// No type with this identifier exists in the catalog.
    #[error("unknown type id {0}")]
    UnknownTypeId(TypeId),

    /// No mapper builder declares itself applicable to the pair.
    #[error("no mapper builder supports mapping '{source_type}' to '{target_type}'")]
    UnsupportedTypePair {
        source_type: String,
        target_type: String,
    },

    /// A target member name-matches a source member whose type neither
    /// equals it, converts to it, nor is object-shaped alongside it.
    #[error("member '{member}': cannot map {source_type} to {target_type}")]
    IncompatibleMember {
        member: String,
        source_type: String,
        target_type: String,
    },

    /// The top-level source value is not an object of the expected type.
    #[error("expected an object value for type '{expected}', found {found}")]
    SourceShape {
        expected: String,
        found: &'static str,
    },

    /// A per-member conversion failed at invocation time.
    #[error("member '{member}': {source}")]
    Conversion {
        member: String,
        #[source]
        source: ConvertError,
    },
}

/// Result alias for mapping operations.
pub type MapResult<T> = Result<T, MapError>;
