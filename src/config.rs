//! Schema file handling.
//!
//! Schema models are described in a JSON document holding one or more model
//! declarations, each a list of type declarations (see
//! [`TypeDecl`](crate::schema::TypeDecl) for the field format). Loading runs
//! every model through [`SchemaModelBuilder`](crate::schema::SchemaModelBuilder),
//! so duplicate names, dangling references, and inheritance cycles are
//! rejected here: downstream projection code never sees an invalid model.
//!
//! Example document:
//!
//! ```json
//! {
//!   "models": [
//!     {
//!       "id": "sales",
//!       "types": [
//!         {
//!           "name": "Person",
//!           "kind": "entity",
//!           "declares_key": true,
//!           "properties": [
//!             { "name": "Id", "kind": "structural", "target": { "primitive": "int" } }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, SchemaModelBuilder, SchemaRegistry, TypeDecl};

/// Top-level schema file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Declared models
    pub models: Vec<ModelDecl>,
}

/// One model declaration: a registry id plus its types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDecl {
    /// Registry id the model is resolved under
    pub id: String,

    /// Type declarations, in declaration order
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Parses a schema document and builds a registry from it.
///
/// # Errors
///
/// Returns `ConfigParse` for malformed JSON, or the underlying builder
/// error for structurally invalid models.
pub fn parse_schema_file(json: &str) -> Result<SchemaRegistry, SchemaError> {
    let file: SchemaFile =
        serde_json::from_str(json).map_err(|e| SchemaError::ConfigParse {
            message: e.to_string(),
        })?;

    let mut registry = SchemaRegistry::new();
    for decl in file.models {
        let model = SchemaModelBuilder::new(decl.id.clone())
            .add_types(decl.types)
            .build()?;
        registry.insert(decl.id, model);
    }
    Ok(registry)
}

/// Loads a schema document from disk and builds a registry from it.
///
/// # Errors
///
/// Returns `ConfigRead` if the file cannot be read, plus everything
/// [`parse_schema_file`] can return.
pub fn load_schema_file(path: &Path) -> Result<SchemaRegistry, SchemaError> {
    let json = fs::read_to_string(path).map_err(|e| SchemaError::ConfigRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let registry = parse_schema_file(&json)?;
    log::debug!(
        "loaded {} model(s) from '{}'",
        registry.len(),
        path.display()
    );
    Ok(registry)
}
