//! Core schema type definitions.
//!
//! Provides the structural type system for describing the shape of projected
//! data: types (entity or complex), their properties, and the target each
//! property points at. These types are arena-resolved: properties and base
//! links refer to other types through [`TypeId`] indices handed out by
//! [`SchemaModel`](super::SchemaModel), never through live references.

use serde::{Deserialize, Serialize};

/// Index of a type inside its owning [`SchemaModel`](super::SchemaModel) arena.
///
/// Ids are only minted by the model builder, so an id is always valid for the
/// model that produced it. Ids from one model must not be used with another,
/// and they never cross a serialization boundary (declarations reference
/// types by name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) usize);

/// Whether a schema type is entity-shaped or a plain complex value.
///
/// The distinction is declarative only: an entity-shaped type without a
/// declared key anywhere in its ancestry still behaves as a complex value
/// for projection purposes (see [`crate::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A top-level addressable type, usually carrying a primary key
    Entity,
    /// A structured value embedded in its owner, no identity of its own
    Complex,
}

/// Primitive property targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// String/text data
    String,
    /// Integer data
    Int,
    /// Floating point data
    Float,
    /// Boolean data
    Bool,
}

impl PrimitiveType {
    /// Returns the display name used in tables and log output.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Bool => "bool",
        }
    }
}

/// Declared kind of a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Plain data field with no relationship semantics
    Structural,
    /// Possible relationship to another type (entity, collection, or
    /// embedded complex value: resolved by classification, not by this tag)
    Navigation,
    /// Property carries no projection semantics at all
    None,
}

/// What a property points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTarget {
    /// A primitive value
    Primitive(PrimitiveType),
    /// A single instance of another schema type (entity or complex)
    Named(TypeId),
    /// A collection of instances of another schema type
    Collection(TypeId),
}

/// A property declared on a schema type.
#[derive(Debug, Clone)]
pub struct SchemaProperty {
    /// Property name as declared in the schema
    pub name: String,

    /// Declared kind (structural / navigation / none)
    pub kind: PropertyKind,

    /// Target type reference
    pub target: PropertyTarget,

    /// Whether the property admits a null value
    pub nullable: bool,
}

/// A structural type in the schema: name, kind, ordered properties, and an
/// optional base type forming a single-inheritance chain.
#[derive(Debug, Clone)]
pub struct SchemaType {
    /// Type name, unique within its model
    pub name: String,

    /// Entity-shaped or complex
    pub kind: TypeKind,

    /// Base type, if any. Chains are validated acyclic at model build time.
    pub base: Option<TypeId>,

    /// Whether this type itself declares a primary key. Inherited keys do
    /// not set this flag on derived types.
    pub declares_key: bool,

    /// Declared properties, in declaration order
    pub properties: Vec<SchemaProperty>,
}

impl SchemaType {
    /// Looks up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}
