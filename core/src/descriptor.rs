//! Semantic type descriptors.
//!
//! A descriptor records everything the mapping compiler needs to know
//! about a type: its name, its members in declaration order, and whether
//! a default instance can be constructed. Descriptors are immutable once
//! their catalog is built.

use crate::{TypeId, Value};
use std::fmt;

/// Scalar member types.
///
/// Int32 and Int64 share the `Value::Int` representation; the declared
/// width is what drives the conversion table (widening is implicit,
/// narrowing is range-checked at invocation time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    Int32,
    Int64,
    Float64,
    String,
}

impl ScalarType {
    /// The zero value a constructed target member starts from.
    pub fn zero(&self) -> Value {
        match self {
            ScalarType::Bool => Value::Bool(false),
            ScalarType::Int32 | ScalarType::Int64 => Value::Int(0),
            ScalarType::Float64 => Value::Float(0.0),
            ScalarType::String => Value::String(String::new()),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Bool => "Bool",
            ScalarType::Int32 => "Int32",
            ScalarType::Int64 => "Int64",
            ScalarType::Float64 => "Float64",
            ScalarType::String => "String",
        };
        write!(f, "{}", name)
    }
}

/// The type of a single member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberType {
    /// A scalar member.
    Scalar(ScalarType),
    /// An object-shaped member of another registered type.
    Object(TypeId),
}

impl MemberType {
    /// The default value a constructed target member starts from.
    pub fn default_value(&self) -> Value {
        match self {
            MemberType::Scalar(scalar) => scalar.zero(),
            MemberType::Object(_) => Value::Null,
        }
    }
}

/// Member definition within a type.
#[derive(Debug, Clone)]
pub struct MemberDef {
    /// Member name.
    pub name: String,
    /// Member type.
    pub ty: MemberType,
    /// Whether the member can be read from a source value.
    pub readable: bool,
    /// Whether the member can be written on a target value.
    pub settable: bool,
}

impl MemberDef {
    pub fn new(name: impl Into<String>, ty: MemberType) -> Self {
        Self {
            name: name.into(),
            ty,
            readable: true,
            settable: true,
        }
    }
}

/// Whether a type is value-shaped or reference-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// Value semantics: a default instance always exists.
    Value,
    /// Reference semantics: default construction may be unavailable.
    Reference,
}

/// A registered type: name, shape, construction capability, and members
/// in declaration order.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Unique identifier within the owning catalog.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Value or reference shape.
    pub shape: TypeShape,
    /// Whether a parameterless construction path exists. Always true for
    /// value-shaped types.
    pub default_constructible: bool,
    /// Member definitions, in declaration order.
    pub members: Vec<MemberDef>,
}

impl TypeDescriptor {
    /// Get a member definition by exact name.
    pub fn get_member(&self, name: &str) -> Option<&MemberDef> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Check if this type has a member with the given name.
    pub fn has_member(&self, name: &str) -> bool {
        self.get_member(name).is_some()
    }

    /// Whether a default instance of this type can be constructed.
    pub fn is_default_constructible(&self) -> bool {
        matches!(self.shape, TypeShape::Value) || self.default_constructible
    }
}

/// The (source type, target type) key identifying one mapping direction.
///
/// Equality is structural over both constituent identities; the pair is
/// used purely as a cache key and never mutates either type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub source: TypeId,
    pub target: TypeId,
}

impl TypePair {
    pub fn new(source: TypeId, target: TypeId) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
