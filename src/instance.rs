//! Name-indexed field lookup over a raw instance.
//!
//! Instances arrive as `serde_json::Value` trees: the crate's stand-in for
//! runtime member introspection: an object's keys are its members. The
//! adapter binds one instance to its resolved schema type so lookups carry
//! enough context for logging and downstream callers, but lookup itself is
//! purely by name and never consults the schema.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::{SchemaModel, SchemaType, TypeId};

/// Binds a concrete instance to a resolved schema type.
///
/// Construction never fails: an instance that is not an object, or an
/// object missing a member, simply yields not-found on lookup.
#[derive(Debug, Clone)]
pub struct InstanceAdapter {
    model: Arc<SchemaModel>,
    type_id: TypeId,
    instance: Arc<Value>,
}

impl InstanceAdapter {
    pub fn new(model: Arc<SchemaModel>, type_id: TypeId, instance: Arc<Value>) -> Self {
        Self {
            model,
            type_id,
            instance,
        }
    }

    /// The schema type this adapter is bound to.
    pub fn schema_type(&self) -> &SchemaType {
        self.model.schema_type(self.type_id)
    }

    /// Looks up a member of the instance by name.
    ///
    /// Not-found is a normal negative result: the member may legitimately
    /// not apply to this instance (polymorphic branch, sparse row).
    pub fn try_get_field(&self, name: &str) -> Option<&Value> {
        match self.instance.as_ref() {
            Value::Object(members) => members.get(name),
            _ => None,
        }
    }
}
