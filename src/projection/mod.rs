//! Projection engine: merge selection-tree data with instance data into one
//! flat, ordered field mapping.
//!
//! The entry point is [`ProjectionWrapper`], created once per projected row.
//! Downstream formatters consume it through three narrow capability traits
//! rather than the concrete type:
//! - [`SchemaTyped`]: what schema type is this row?
//! - [`FieldLookup`]: targeted single-field lookup
//! - [`Materializable`]: the full flattened mapping
//!
//! # Error semantics
//!
//! Materialization either fully succeeds or fails before returning; no
//! partial mapping escapes. Field-not-found during lookup is *not* an error
//! (polymorphic instances legitimately miss fields): only schema/policy
//! misconfiguration is.

mod wrapper;

pub use wrapper::ProjectionWrapper;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::mapper::NameMapperProvider;
use crate::schema::SchemaType;

/// Projection error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Schema type '{name}' not found in model '{model}'")]
    SchemaTypeNotFound { name: String, model: String },

    #[error("No name-mapper provider supplied")]
    MapperProviderMissing,

    #[error("Name-mapper provider returned no mapper for type '{type_name}'")]
    MapperUnavailable { type_name: String },

    #[error("Name mapper produced an empty output name for property '{property}' of type '{type_name}'")]
    InvalidPropertyMapping {
        property: String,
        type_name: String,
    },
}

/// Read-only access to the schema type of a projected row.
pub trait SchemaTyped {
    /// Resolves the schema type this row is projected as.
    fn schema_type(&self) -> Result<&SchemaType, ProjectionError>;
}

/// Targeted single-field lookup over a projected row.
pub trait FieldLookup {
    /// Looks up one field by schema property name.
    fn try_get_field(&self, name: &str) -> Option<&Value>;
}

/// Full materialization of a projected row into an ordered field mapping.
pub trait Materializable {
    /// Materializes with the identity name mapper.
    fn materialize(&self) -> Result<Map<String, Value>, ProjectionError>;

    /// Materializes with a caller-supplied name-mapping policy.
    fn materialize_with(
        &self,
        provider: Option<&dyn NameMapperProvider>,
    ) -> Result<Map<String, Value>, ProjectionError>;
}
