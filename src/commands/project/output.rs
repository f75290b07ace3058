use serde_json::Value;

use super::execute::ProjectResult;
use crate::output::Outputable;

fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Outputable for ProjectResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Projected {} row(s) as '{}' (model '{}')",
            self.total_rows, self.type_name, self.model
        ));

        if self.rows.is_empty() {
            lines.push(String::new());
            lines.push("No rows in input.".to_string());
            return lines.join("\n");
        }

        for (index, row) in self.rows.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("row {}:", index + 1));
            if row.is_empty() {
                lines.push("  (no fields)".to_string());
            }
            for (name, value) in row {
                lines.push(format!("  {}: {}", name, value_display(value)));
            }
        }

        lines.join("\n")
    }
}
