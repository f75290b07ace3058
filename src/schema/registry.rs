//! Read-only store of resolved schema models, keyed by model id.

use std::collections::HashMap;
use std::sync::Arc;

use super::{SchemaError, SchemaModel};

/// Id-keyed store of resolved [`SchemaModel`]s.
///
/// The registry is populated during a setup phase and read-only afterwards:
/// `resolve` takes `&self` and touches no interior mutability, so a registry
/// behind an `Arc` can serve unsynchronized concurrent reads from any number
/// of request threads.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    models: HashMap<String, Arc<SchemaModel>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(id, model)` pairs.
    pub fn with_models(models: impl IntoIterator<Item = (String, SchemaModel)>) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|(id, model)| (id, Arc::new(model)))
                .collect(),
        }
    }

    /// Registers a model. Population-phase only; replaces any model already
    /// stored under the same id.
    pub fn insert(&mut self, id: impl Into<String>, model: SchemaModel) {
        self.models.insert(id.into(), Arc::new(model));
    }

    /// Resolves a model id.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ModelNotFound`] for ids that were never
    /// registered. An unregistered id is a setup bug in the caller, so the
    /// failure is loud rather than a silent empty model.
    pub fn resolve(&self, id: &str) -> Result<Arc<SchemaModel>, SchemaError> {
        self.models
            .get(id)
            .cloned()
            .ok_or_else(|| SchemaError::ModelNotFound { id: id.to_string() })
    }

    /// Registered model ids, in arbitrary order.
    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(|s| s.as_str())
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
