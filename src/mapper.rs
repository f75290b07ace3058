//! Name-mapping contracts for projection output.
//!
//! A [`NameMapper`] converts an internal schema property name into the field
//! name that appears in the output mapping; a [`NameMapperProvider`] picks
//! the mapper to use for a given (model, type) pair. Both are trait seams so
//! hosts can plug in their own naming policy without the core knowing about
//! it. The identity policy is the default everywhere.

use crate::schema::{SchemaModel, SchemaType};

/// Converts a schema property name into an output field name.
///
/// Returning `None` (or a blank string) signals that the mapper has no
/// usable name for the property; what that means is up to the call site:
/// materialization treats it as a configuration error for properties that
/// must be emitted.
pub trait NameMapper {
    fn map(&self, property_name: &str) -> Option<String>;
}

/// Selects a [`NameMapper`] for a (model, schema type) pair.
///
/// Returning `None` means the policy does not support the type at all;
/// materialization fails rather than guessing a fallback.
pub trait NameMapperProvider {
    fn mapper_for<'a>(
        &'a self,
        model: &SchemaModel,
        schema_type: &SchemaType,
    ) -> Option<&'a dyn NameMapper>;
}

/// Output name == schema name.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapper;

impl NameMapper for IdentityMapper {
    fn map(&self, property_name: &str) -> Option<String> {
        Some(property_name.to_string())
    }
}

/// Provider that yields the identity mapper for every (model, type) pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProvider;

static IDENTITY: IdentityMapper = IdentityMapper;

impl NameMapperProvider for IdentityProvider {
    fn mapper_for<'a>(
        &'a self,
        _model: &SchemaModel,
        _schema_type: &SchemaType,
    ) -> Option<&'a dyn NameMapper> {
        Some(&IDENTITY)
    }
}

/// Prepends a fixed prefix to every property name.
#[derive(Debug, Clone)]
pub struct PrefixMapper {
    prefix: String,
}

impl PrefixMapper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl NameMapper for PrefixMapper {
    fn map(&self, property_name: &str) -> Option<String> {
        Some(format!("{}{}", self.prefix, property_name))
    }
}
