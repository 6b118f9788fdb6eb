//! The primitive conversion table.
//!
//! Two scalar member types either convert via one of the documented
//! conversions below or do not match at all. Whether a conversion exists
//! is decided once, at plan-build time; applying it happens on every
//! mapping call. Every conversion validates the runtime value's kind
//! against the declared member type, and narrowing is range-checked.

use crate::{ScalarType, Value};
use thiserror::Error;

/// Errors raised while applying a conversion to a concrete value.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// Narrowing conversion target cannot represent the value.
    #[error("integer value {value} overflows Int32")]
    IntOverflow { value: i64 },

    /// The runtime value does not have the declared scalar kind.
    #[error("expected {expected} value, found {found}")]
    UnexpectedKind {
        expected: ScalarType,
        found: &'static str,
    },
}

/// A single scalar conversion selected from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Identical scalar types: copy the value through.
    Identity(ScalarType),
    /// Int32 to Int64. Widening, cannot overflow.
    WidenInt,
    /// Int64 to Int32. Range-checked at invocation time.
    NarrowInt,
    /// Int32 or Int64 to Float64.
    IntToFloat,
}

impl Conversion {
    /// Look up the conversion between two scalar types, if one exists.
    pub fn between(source: ScalarType, target: ScalarType) -> Option<Conversion> {
        use ScalarType::*;
        match (source, target) {
            (s, t) if s == t => Some(Conversion::Identity(t)),
            (Int32, Int64) => Some(Conversion::WidenInt),
            (Int64, Int32) => Some(Conversion::NarrowInt),
            (Int32 | Int64, Float64) => Some(Conversion::IntToFloat),
            _ => None,
        }
    }

    /// Apply this conversion to a concrete value.
    pub fn apply(&self, value: &Value) -> Result<Value, ConvertError> {
        match self {
            Conversion::Identity(expected) => {
                if scalar_matches(*expected, value) {
                    Ok(value.clone())
                } else {
                    Err(unexpected(*expected, value))
                }
            }
            Conversion::WidenInt => int_operand(value, ScalarType::Int64).map(Value::Int),
            Conversion::NarrowInt => {
                let i = int_operand(value, ScalarType::Int32)?;
                if i < i64::from(i32::MIN) || i > i64::from(i32::MAX) {
                    return Err(ConvertError::IntOverflow { value: i });
                }
                Ok(Value::Int(i))
            }
            Conversion::IntToFloat => {
                let i = int_operand(value, ScalarType::Float64)?;
                Ok(Value::Float(i as f64))
            }
        }
    }
}

/// Whether a runtime value has the declared scalar kind.
fn scalar_matches(expected: ScalarType, value: &Value) -> bool {
    match expected {
        ScalarType::Bool => value.is_bool(),
        ScalarType::Int32 | ScalarType::Int64 => value.is_int(),
        ScalarType::Float64 => value.is_float(),
        ScalarType::String => value.is_string(),
    }
}

fn int_operand(value: &Value, expected: ScalarType) -> Result<i64, ConvertError> {
    value.as_int().ok_or_else(|| unexpected(expected, value))
}

fn unexpected(expected: ScalarType, value: &Value) -> ConvertError {
    ConvertError::UnexpectedKind {
        expected,
        found: value.kind(),
    }
}
