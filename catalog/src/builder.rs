//! CatalogBuilder for constructing an immutable TypeCatalog.
//!
//! Object members reference other types by name and are resolved to
//! type IDs in `build()`, so forward references and cyclic type graphs
//! (A contains B, B contains A) declare cleanly in any order.

use crate::TypeCatalog;
use remap_core::{MemberDef, MemberType, ScalarType, TypeDescriptor, TypeId, TypeShape};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate member '{member}' on type '{type_name}'")]
    DuplicateMemberName { type_name: String, member: String },

    #[error("Member '{member}' on type '{type_name}' references unknown type '{referenced}'")]
    UnknownMemberType {
        type_name: String,
        member: String,
        referenced: String,
    },
}

/// A member declaration, before object type names are resolved.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    name: String,
    ty: DeclType,
    readable: bool,
    settable: bool,
}

#[derive(Debug, Clone)]
enum DeclType {
    Scalar(ScalarType),
    Object(String),
}

impl MemberDecl {
    /// Declare a scalar member.
    pub fn scalar(name: impl Into<String>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            ty: DeclType::Scalar(ty),
            readable: true,
            settable: true,
        }
    }

    /// Declare an object-shaped member of another type, by name.
    pub fn object(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: DeclType::Object(type_name.into()),
            readable: true,
            settable: true,
        }
    }

    /// Mark the member as readable but not settable.
    pub fn read_only(mut self) -> Self {
        self.settable = false;
        self
    }

    /// Mark the member as settable but not readable.
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }
}

struct PendingType {
    id: TypeId,
    name: String,
    shape: TypeShape,
    default_constructible: bool,
    members: Vec<MemberDecl>,
}

/// Builder for constructing an immutable TypeCatalog.
#[derive(Default)]
pub struct CatalogBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Types being built, in declaration order.
    types: Vec<PendingType>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a value-shaped type. Always default-constructible.
    pub fn value_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        self.add_type(name, TypeShape::Value)
    }

    /// Declare a reference-shaped type. Default-constructible unless
    /// `no_default_ctor()` is called.
    pub fn reference_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        self.add_type(name, TypeShape::Reference)
    }

    fn add_type(&mut self, name: impl Into<String>, shape: TypeShape) -> TypeBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeBuilder {
            builder: self,
            id,
            name,
            shape,
            default_constructible: true,
            members: Vec::new(),
        }
    }

    /// Build the immutable TypeCatalog, resolving object member type
    /// names to IDs.
    pub fn build(self) -> Result<TypeCatalog, CatalogError> {
        let mut types = HashMap::new();

        for pending in &self.types {
            let mut members = Vec::with_capacity(pending.members.len());
            for decl in &pending.members {
                let ty = match &decl.ty {
                    DeclType::Scalar(scalar) => MemberType::Scalar(*scalar),
                    DeclType::Object(type_name) => match self.type_names.get(type_name) {
                        Some(&id) => MemberType::Object(id),
                        None => {
                            return Err(CatalogError::UnknownMemberType {
                                type_name: pending.name.clone(),
                                member: decl.name.clone(),
                                referenced: type_name.clone(),
                            })
                        }
                    },
                };
                let mut member = MemberDef::new(decl.name.clone(), ty);
                member.readable = decl.readable;
                member.settable = decl.settable;
                members.push(member);
            }

            types.insert(
                pending.id,
                TypeDescriptor {
                    id: pending.id,
                    name: pending.name.clone(),
                    shape: pending.shape,
                    default_constructible: pending.default_constructible,
                    members,
                },
            );
        }

        Ok(TypeCatalog::new(types, self.type_names))
    }
}

/// Builder for a single type declaration.
pub struct TypeBuilder<'a> {
    builder: &'a mut CatalogBuilder,
    id: TypeId,
    name: String,
    shape: TypeShape,
    default_constructible: bool,
    members: Vec<MemberDecl>,
}

impl<'a> TypeBuilder<'a> {
    /// Add a member declaration.
    pub fn member(mut self, decl: MemberDecl) -> Self {
        self.members.push(decl);
        self
    }

    /// Shorthand for `member(MemberDecl::scalar(..))`.
    pub fn scalar(self, name: impl Into<String>, ty: ScalarType) -> Self {
        self.member(MemberDecl::scalar(name, ty))
    }

    /// Shorthand for `member(MemberDecl::object(..))`.
    pub fn object(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.member(MemberDecl::object(name, type_name))
    }

    /// Mark this type as having no parameterless construction path.
    /// Only meaningful for reference-shaped types.
    pub fn no_default_ctor(mut self) -> Self {
        self.default_constructible = false;
        self
    }

    /// Finish declaring this type.
    pub fn done(self) -> Result<TypeId, CatalogError> {
        if self.builder.type_names.contains_key(&self.name) {
            return Err(CatalogError::DuplicateTypeName(self.name));
        }

        let mut seen = std::collections::HashSet::new();
        for decl in &self.members {
            if !seen.insert(decl.name.as_str()) {
                return Err(CatalogError::DuplicateMemberName {
                    type_name: self.name,
                    member: decl.name.clone(),
                });
            }
        }

        self.builder.type_names.insert(self.name.clone(), self.id);
        self.builder.types.push(PendingType {
            id: self.id,
            name: self.name,
            shape: self.shape,
            default_constructible: self.default_constructible,
            members: self.members,
        });
        Ok(self.id)
    }
}
