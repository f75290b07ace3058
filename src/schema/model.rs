//! Schema model arena and builder.
//!
//! A [`SchemaModel`] owns every type of one logical model in a flat arena
//! (`Vec<SchemaType>`) indexed by [`TypeId`], with a name index on the side.
//! Inheritance is a parent index on each arena node, so the ancestor walk
//! used by classification is a plain loop over indices.
//!
//! Models are built from declaration structs ([`TypeDecl`], [`PropertyDecl`])
//! via [`SchemaModelBuilder`], which resolves names to ids and rejects
//! duplicate type names, dangling base/target references, and inheritance
//! cycles. Everything downstream can therefore assume base chains terminate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{
    PrimitiveType, PropertyKind, PropertyTarget, SchemaProperty, SchemaType, TypeId, TypeKind,
};
use super::SchemaError;

/// Declaration form of a property target, with type references by name.
///
/// JSON format is externally tagged: `{"primitive": "int"}`,
/// `{"named": "Address"}`, `{"collection": "Order"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDecl {
    /// A primitive value
    Primitive(PrimitiveType),
    /// A single instance of the named type
    Named(String),
    /// A collection of instances of the named type
    Collection(String),
}

/// Declaration form of a schema property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub kind: PropertyKind,
    pub target: TargetDecl,
    #[serde(default)]
    pub nullable: bool,
}

/// Declaration form of a schema type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    /// Base type name, if the type derives from another
    #[serde(default)]
    pub base: Option<String>,
    /// Whether the type declares its own primary key
    #[serde(default)]
    pub declares_key: bool,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

/// A resolved, immutable schema model.
///
/// From the projection core's perspective a model is read-only: it is built
/// once (typically at startup, from a schema file) and then shared via
/// `Arc<SchemaModel>` across every wrapper that projects rows of this model.
/// All methods take `&self`, so concurrent reads need no synchronization.
#[derive(Debug, Clone)]
pub struct SchemaModel {
    name: String,
    types: Vec<SchemaType>,
    by_name: HashMap<String, TypeId>,
}

impl SchemaModel {
    /// Model identifier (the id it is registered under).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a type name to its arena id.
    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Returns the type for an id minted by this model.
    pub fn schema_type(&self, id: TypeId) -> &SchemaType {
        &self.types[id.0]
    }

    /// Iterates all types in declaration order, with their ids.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &SchemaType)> {
        self.types.iter().enumerate().map(|(i, t)| (TypeId(i), t))
    }

    /// Number of types in the model.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Iterates a type and its ancestors, starting at `id` and following
    /// base links to the root. Terminates because the builder rejects
    /// inheritance cycles.
    pub fn self_and_ancestors(&self, id: TypeId) -> impl Iterator<Item = (TypeId, &SchemaType)> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let current = next?;
            let ty = self.schema_type(current);
            next = ty.base;
            Some((current, ty))
        })
    }
}

/// Builder assembling a [`SchemaModel`] from declarations.
pub struct SchemaModelBuilder {
    name: String,
    decls: Vec<TypeDecl>,
}

impl SchemaModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
        }
    }

    /// Adds a type declaration. Order is preserved in the built arena.
    pub fn add_type(mut self, decl: TypeDecl) -> Self {
        self.decls.push(decl);
        self
    }

    /// Adds every declaration from an iterator.
    pub fn add_types(mut self, decls: impl IntoIterator<Item = TypeDecl>) -> Self {
        self.decls.extend(decls);
        self
    }

    /// Resolves names to ids and validates the model.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - two types share a name (`DuplicateType`)
    /// - a base or target references an undeclared type (`UnknownType`)
    /// - base links form a cycle (`InheritanceCycle`)
    pub fn build(self) -> Result<SchemaModel, SchemaError> {
        let mut by_name = HashMap::with_capacity(self.decls.len());
        for (index, decl) in self.decls.iter().enumerate() {
            if by_name.insert(decl.name.clone(), TypeId(index)).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: decl.name.clone(),
                });
            }
        }

        let resolve = |name: &str| -> Result<TypeId, SchemaError> {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| SchemaError::UnknownType {
                    name: name.to_string(),
                })
        };

        let mut types = Vec::with_capacity(self.decls.len());
        for decl in &self.decls {
            let base = decl.base.as_deref().map(resolve).transpose()?;
            let mut properties = Vec::with_capacity(decl.properties.len());
            for prop in &decl.properties {
                let target = match &prop.target {
                    TargetDecl::Primitive(p) => PropertyTarget::Primitive(*p),
                    TargetDecl::Named(name) => PropertyTarget::Named(resolve(name)?),
                    TargetDecl::Collection(name) => PropertyTarget::Collection(resolve(name)?),
                };
                properties.push(SchemaProperty {
                    name: prop.name.clone(),
                    kind: prop.kind,
                    target,
                    nullable: prop.nullable,
                });
            }
            types.push(SchemaType {
                name: decl.name.clone(),
                kind: decl.kind,
                base,
                declares_key: decl.declares_key,
                properties,
            });
        }

        // A base chain longer than the type count must revisit a node.
        for (index, ty) in types.iter().enumerate() {
            let mut current = ty.base;
            let mut steps = 0;
            while let Some(id) = current {
                steps += 1;
                if steps > types.len() {
                    return Err(SchemaError::InheritanceCycle {
                        name: types[index].name.clone(),
                    });
                }
                current = types[id.0].base;
            }
        }

        log::debug!(
            "built schema model '{}' with {} types",
            self.name,
            types.len()
        );

        Ok(SchemaModel {
            name: self.name,
            types,
            by_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entity, property};

    #[test]
    fn test_build_resolves_names_to_ids() {
        let model = SchemaModelBuilder::new("m")
            .add_type(entity("Address", None, false, vec![]))
            .add_type(entity(
                "Person",
                None,
                true,
                vec![property("Home", PropertyKind::Navigation, TargetDecl::Named("Address".into()))],
            ))
            .build()
            .unwrap();

        let person = model.type_id("Person").unwrap();
        let address = model.type_id("Address").unwrap();
        let home = model.schema_type(person).property("Home").unwrap();
        assert_eq!(home.target, PropertyTarget::Named(address));
    }

    #[test]
    fn test_build_rejects_duplicate_type_names() {
        let err = SchemaModelBuilder::new("m")
            .add_type(entity("Person", None, true, vec![]))
            .add_type(entity("Person", None, false, vec![]))
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaError::DuplicateType { name } if name == "Person"));
    }

    #[test]
    fn test_build_rejects_dangling_base() {
        let err = SchemaModelBuilder::new("m")
            .add_type(entity("Manager", Some("Employee"), false, vec![]))
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaError::UnknownType { name } if name == "Employee"));
    }

    #[test]
    fn test_build_rejects_dangling_property_target() {
        let err = SchemaModelBuilder::new("m")
            .add_type(entity(
                "Person",
                None,
                true,
                vec![property("Home", PropertyKind::Navigation, TargetDecl::Named("Address".into()))],
            ))
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaError::UnknownType { name } if name == "Address"));
    }

    #[test]
    fn test_build_rejects_inheritance_cycle() {
        let err = SchemaModelBuilder::new("m")
            .add_type(entity("A", Some("B"), false, vec![]))
            .add_type(entity("B", Some("A"), false, vec![]))
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaError::InheritanceCycle { .. }));
    }

    #[test]
    fn test_self_and_ancestors_walks_to_root() {
        let model = SchemaModelBuilder::new("m")
            .add_type(entity("Root", None, false, vec![]))
            .add_type(entity("Mid", Some("Root"), false, vec![]))
            .add_type(entity("Leaf", Some("Mid"), false, vec![]))
            .build()
            .unwrap();

        let leaf = model.type_id("Leaf").unwrap();
        let names: Vec<_> = model
            .self_and_ancestors(leaf)
            .map(|(_, t)| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Leaf", "Mid", "Root"]);
    }

    #[test]
    fn test_self_and_ancestors_root_is_single_step() {
        let model = SchemaModelBuilder::new("m")
            .add_type(entity("Root", None, false, vec![]))
            .build()
            .unwrap();

        let root = model.type_id("Root").unwrap();
        assert_eq!(model.self_and_ancestors(root).count(), 1);
    }
}
