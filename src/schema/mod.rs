//! Schema model layer: structural types, the model arena, and the registry.
//!
//! This module owns the read side of schema metadata:
//! - Type/property definitions and their arena ids ([`types`])
//! - Model construction with load-time validation ([`model`])
//! - The id-keyed store of resolved models ([`registry`])
//!
//! # Architecture
//!
//! Types reference each other only through [`TypeId`] indices into their
//! owning model's arena. Name resolution, dangling-reference checks, and
//! inheritance-cycle rejection all happen once, in
//! [`SchemaModelBuilder::build`]; afterwards the model is immutable and
//! safe to share across threads behind an `Arc`.

mod model;
mod registry;
mod types;

pub use model::{PropertyDecl, SchemaModel, SchemaModelBuilder, TargetDecl, TypeDecl};
pub use registry::SchemaRegistry;
pub use types::{
    PrimitiveType, PropertyKind, PropertyTarget, SchemaProperty, SchemaType, TypeId, TypeKind,
};

use thiserror::Error;

/// Schema construction and resolution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("No schema model registered under id '{id}'")]
    ModelNotFound { id: String },

    #[error("Duplicate type name '{name}' in schema model")]
    DuplicateType { name: String },

    #[error("Reference to undeclared type '{name}'")]
    UnknownType { name: String },

    #[error("Inheritance cycle involving type '{name}'")]
    InheritanceCycle { name: String },

    #[error("Failed to read schema file '{path}': {message}")]
    ConfigRead { path: String, message: String },

    #[error("Failed to parse schema file: {message}")]
    ConfigParse { message: String },
}
