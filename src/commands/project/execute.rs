use std::error::Error;
use std::fs;

use serde::Serialize;
use serde_json::{Map, Value};

use super::ProjectCmd;
use crate::commands::{select_model, Execute};
use crate::config::load_schema_file;
use crate::projection::ProjectionWrapper;

/// Result of the project command
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub model: String,
    pub type_name: String,
    pub total_rows: usize,
    pub rows: Vec<Map<String, Value>>,
}

/// Splits the input document into instance rows: an array is one row per
/// element, anything else is a single row.
fn into_rows(input: Value) -> Vec<Value> {
    match input {
        Value::Array(rows) => rows,
        other => vec![other],
    }
}

impl Execute for ProjectCmd {
    type Output = ProjectResult;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let registry = load_schema_file(&self.schema)?;
        let model = select_model(&registry, self.model.as_deref())?;

        let element_type = model.type_id(&self.type_name).ok_or_else(|| {
            format!(
                "Type '{}' not found in model '{}'",
                self.type_name,
                model.name()
            )
        })?;

        let input: Value = serde_json::from_str(&fs::read_to_string(&self.input)?)?;

        let mut rows = Vec::new();
        for instance in into_rows(input) {
            let wrapper = ProjectionWrapper::new(model.clone(), element_type)
                .with_instance(instance);
            rows.push(wrapper.materialize()?);
        }

        Ok(ProjectResult {
            model: model.name().to_string(),
            type_name: self.type_name,
            total_rows: rows.len(),
            rows,
        })
    }
}
