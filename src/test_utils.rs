//! Shared test utilities for schema construction and command tests.
//!
//! This module provides declaration helpers and a canonical "sales" model
//! used across classifier, wrapper, and command tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::schema::{
    PrimitiveType, PropertyDecl, PropertyKind, SchemaModel, SchemaModelBuilder, TargetDecl,
    TypeDecl, TypeKind,
};

/// Build an entity type declaration.
pub fn entity(
    name: &str,
    base: Option<&str>,
    declares_key: bool,
    properties: Vec<PropertyDecl>,
) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        kind: TypeKind::Entity,
        base: base.map(str::to_string),
        declares_key,
        properties,
    }
}

/// Build a complex type declaration.
pub fn complex(name: &str, properties: Vec<PropertyDecl>) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        kind: TypeKind::Complex,
        base: None,
        declares_key: false,
        properties,
    }
}

/// Build a property declaration (non-nullable).
pub fn property(name: &str, kind: PropertyKind, target: TargetDecl) -> PropertyDecl {
    PropertyDecl {
        name: name.to_string(),
        kind,
        target,
        nullable: false,
    }
}

/// The canonical test model:
///
/// - `Address`: complex, one structural `City`
/// - `Order`: keyed entity, one structural `Id`
/// - `Person`: keyed entity with `Id`, `Name` (structural), `Address`
///   (navigation to complex), `Orders` (navigation to collection of Order)
pub fn sales_model() -> SchemaModel {
    SchemaModelBuilder::new("sales")
        .add_type(complex(
            "Address",
            vec![property(
                "City",
                PropertyKind::Structural,
                TargetDecl::Primitive(PrimitiveType::String),
            )],
        ))
        .add_type(entity(
            "Order",
            None,
            true,
            vec![property(
                "Id",
                PropertyKind::Structural,
                TargetDecl::Primitive(PrimitiveType::Int),
            )],
        ))
        .add_type(entity(
            "Person",
            None,
            true,
            vec![
                property(
                    "Id",
                    PropertyKind::Structural,
                    TargetDecl::Primitive(PrimitiveType::Int),
                ),
                property(
                    "Name",
                    PropertyKind::Structural,
                    TargetDecl::Primitive(PrimitiveType::String),
                ),
                property(
                    "Address",
                    PropertyKind::Navigation,
                    TargetDecl::Named("Address".to_string()),
                ),
                property(
                    "Orders",
                    PropertyKind::Navigation,
                    TargetDecl::Collection("Order".to_string()),
                ),
            ],
        ))
        .build()
        .expect("sales model should build")
}

/// JSON schema file equivalent of [`sales_model`], for config and command
/// tests.
pub const SALES_SCHEMA_JSON: &str = r#"{
  "models": [
    {
      "id": "sales",
      "types": [
        {
          "name": "Address",
          "kind": "complex",
          "properties": [
            { "name": "City", "kind": "structural", "target": { "primitive": "string" } }
          ]
        },
        {
          "name": "Order",
          "kind": "entity",
          "declares_key": true,
          "properties": [
            { "name": "Id", "kind": "structural", "target": { "primitive": "int" } }
          ]
        },
        {
          "name": "Person",
          "kind": "entity",
          "declares_key": true,
          "properties": [
            { "name": "Id", "kind": "structural", "target": { "primitive": "int" } },
            { "name": "Name", "kind": "structural", "target": { "primitive": "string" }, "nullable": true },
            { "name": "Address", "kind": "navigation", "target": { "named": "Address" } },
            { "name": "Orders", "kind": "navigation", "target": { "collection": "Order" } }
          ]
        }
      ]
    }
  ]
}"#;

/// Create a temporary file containing the given content.
///
/// Used to create schema and instance JSON files for command tests.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}
