//! The projection wrapper: two-source lazy field resolution.
//!
//! # Architecture
//!
//! A wrapper merges two sources of truth for one row:
//! 1. the selection tree: fields explicitly requested or expanded upstream,
//!    possibly carrying pre-materialized values, and
//! 2. the raw instance: everything else, pulled in by "select all
//!    structural/complex fields" semantics via the classifier.
//!
//! Both sources are prepared lazily and at most once per wrapper: the
//! identity-flattened selection mapping and the instance adapter live in
//! `once_cell::unsync::OnceCell` fields. `unsync` is deliberate: a wrapper
//! is created per row and used by a single thread; sharing one wrapper
//! across threads is not supported (share the model, not the wrapper).
//!
//! # Overwrite order
//!
//! During materialization, instance-sourced structural fields are written
//! *after* the selection seed and unconditionally, so they win over
//! same-named selection entries. This precedence is observable and tested;
//! do not reorder the phases.

use std::sync::Arc;

use once_cell::unsync::OnceCell;
use serde_json::{Map, Value};

use super::{FieldLookup, Materializable, ProjectionError, SchemaTyped};
use crate::classify;
use crate::instance::InstanceAdapter;
use crate::mapper::{IdentityMapper, IdentityProvider, NameMapperProvider};
use crate::schema::{SchemaModel, SchemaType, TypeId};
use crate::selection::SelectionNode;

/// Composes selection-tree data with instance data for one projected row.
///
/// Constructed per row and discarded after materialization. The model is
/// injected at construction (no global registry lookups inside the core);
/// `element_type` is the statically declared type of the row, overridable
/// per wrapper with [`with_type_name`](Self::with_type_name) for
/// polymorphic results.
pub struct ProjectionWrapper {
    model: Arc<SchemaModel>,
    element_type: TypeId,
    type_name: Option<String>,
    instance: Option<Arc<Value>>,
    selection: Option<SelectionNode>,

    /// Selection flattened with the identity mapper, auto-selected entries
    /// included. Computed on first targeted lookup.
    flattened: OnceCell<Map<String, Value>>,
    /// Instance adapter, built on first lookup that falls through to the
    /// instance.
    adapter: OnceCell<InstanceAdapter>,
}

impl ProjectionWrapper {
    pub fn new(model: Arc<SchemaModel>, element_type: TypeId) -> Self {
        Self {
            model,
            element_type,
            type_name: None,
            instance: None,
            selection: None,
            flattened: OnceCell::new(),
            adapter: OnceCell::new(),
        }
    }

    /// Sets an explicit schema type name, overriding the declared element
    /// type. Resolution fails if the name is absent from the model.
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Attaches the raw instance for this row.
    pub fn with_instance(mut self, instance: Value) -> Self {
        self.instance = Some(Arc::new(instance));
        self
    }

    /// Attaches the selection tree for this row.
    pub fn with_selection(mut self, selection: SelectionNode) -> Self {
        self.selection = Some(selection);
        self
    }

    /// The model this wrapper projects against.
    pub fn model(&self) -> &Arc<SchemaModel> {
        &self.model
    }

    fn resolved_type_id(&self) -> Result<TypeId, ProjectionError> {
        match &self.type_name {
            Some(name) => {
                self.model
                    .type_id(name)
                    .ok_or_else(|| ProjectionError::SchemaTypeNotFound {
                        name: name.clone(),
                        model: self.model.name().to_string(),
                    })
            }
            None => Ok(self.element_type),
        }
    }

    /// Resolves the schema type this wrapper projects as.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::SchemaTypeNotFound`] when an explicit
    /// type-name override does not exist in the model.
    pub fn resolve_schema_type(&self) -> Result<&SchemaType, ProjectionError> {
        Ok(self.model.schema_type(self.resolved_type_id()?))
    }

    /// Two-phase targeted lookup: flattened selection first (identity names,
    /// auto-selected included), then the raw instance.
    ///
    /// Not-found is a normal negative result, never an error. With an
    /// invalid type-name override the instance phase cannot bind an adapter
    /// and reports not-found; the override error itself surfaces from
    /// [`materialize`](Self::materialize) and
    /// [`resolve_schema_type`](Self::resolve_schema_type).
    pub fn try_get_field(&self, name: &str) -> Option<&Value> {
        if let Some(selection) = &self.selection {
            let flat = self
                .flattened
                .get_or_init(|| selection.flatten(&IdentityMapper, true));
            if let Some(value) = flat.get(name) {
                return Some(value);
            }
        }

        let instance = self.instance.as_ref()?;
        let type_id = self.resolved_type_id().ok()?;
        let adapter = self
            .adapter
            .get_or_init(|| InstanceAdapter::new(self.model.clone(), type_id, instance.clone()));
        adapter.try_get_field(name)
    }

    /// Materializes the row with the identity name mapper.
    pub fn materialize(&self) -> Result<Map<String, Value>, ProjectionError> {
        self.materialize_with(Some(&IdentityProvider))
    }

    /// Materializes the row into an ordered field-name → value mapping.
    ///
    /// Phases, in order:
    /// 1. resolve the schema type and obtain a mapper from `provider`;
    /// 2. seed the mapping from the selection tree, flattened with the
    ///    supplied mapper and *excluding* auto-selected entries;
    /// 3. for each declared property classified structural-or-complex,
    ///    look the field up on the raw instance and write it under its
    ///    mapped name, overwriting any same-named seed entry.
    ///
    /// # Errors
    ///
    /// - `MapperProviderMissing`: `provider` is `None`
    /// - `SchemaTypeNotFound`: explicit type-name override is invalid
    /// - `MapperUnavailable`: the provider declined the resolved type
    /// - `InvalidPropertyMapping`: the mapper produced a blank name for a
    ///   property that must be emitted
    pub fn materialize_with(
        &self,
        provider: Option<&dyn NameMapperProvider>,
    ) -> Result<Map<String, Value>, ProjectionError> {
        let provider = provider.ok_or(ProjectionError::MapperProviderMissing)?;
        let schema_type = self.resolve_schema_type()?;
        let mapper = provider.mapper_for(&self.model, schema_type).ok_or_else(|| {
            ProjectionError::MapperUnavailable {
                type_name: schema_type.name.clone(),
            }
        })?;

        let mut fields = match &self.selection {
            Some(selection) => selection.flatten(mapper, false),
            None => Map::new(),
        };

        if let Some(instance) = &self.instance {
            let type_id = self.resolved_type_id()?;
            // Read the instance directly, not through try_get_field: its
            // selection phase would shadow the instance value and the
            // overwrite would re-insert the seed instead of replacing it.
            let adapter = self
                .adapter
                .get_or_init(|| InstanceAdapter::new(self.model.clone(), type_id, instance.clone()));
            for property in &schema_type.properties {
                if !classify::is_structural_or_complex(&self.model, property) {
                    continue;
                }
                let Some(value) = adapter.try_get_field(&property.name) else {
                    continue;
                };
                let value = value.clone();
                let mapped = mapper
                    .map(&property.name)
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| ProjectionError::InvalidPropertyMapping {
                        property: property.name.clone(),
                        type_name: schema_type.name.clone(),
                    })?;
                fields.insert(mapped, value);
            }
        }

        log::debug!(
            "materialized {} field(s) for type '{}'",
            fields.len(),
            schema_type.name
        );
        Ok(fields)
    }
}

impl SchemaTyped for ProjectionWrapper {
    fn schema_type(&self) -> Result<&SchemaType, ProjectionError> {
        self.resolve_schema_type()
    }
}

impl FieldLookup for ProjectionWrapper {
    fn try_get_field(&self, name: &str) -> Option<&Value> {
        ProjectionWrapper::try_get_field(self, name)
    }
}

impl Materializable for ProjectionWrapper {
    fn materialize(&self) -> Result<Map<String, Value>, ProjectionError> {
        ProjectionWrapper::materialize(self)
    }

    fn materialize_with(
        &self,
        provider: Option<&dyn NameMapperProvider>,
    ) -> Result<Map<String, Value>, ProjectionError> {
        ProjectionWrapper::materialize_with(self, provider)
    }
}
