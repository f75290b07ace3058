use super::execute::{InspectResult, PropertyReport};
use crate::output::Outputable;

fn property_line(prop: &PropertyReport) -> String {
    let mut line = format!("{}: {} [{}]", prop.name, prop.target, prop.kind);
    if prop.nullable {
        line.push_str(" nullable");
    }
    if prop.select_all {
        line.push_str(" select-all");
    }
    line
}

impl Outputable for InspectResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Types in model '{}' ({})",
            self.model, self.total_types
        ));
        lines.push(String::new());

        if self.types.is_empty() {
            lines.push("No types declared.".to_string());
            return lines.join("\n");
        }

        for ty in &self.types {
            let mut header = format!("{} ({}", ty.name, ty.kind);
            if let Some(base) = &ty.base {
                header.push_str(&format!(", base {base}"));
            }
            if ty.declares_key {
                header.push_str(", keyed");
            }
            header.push(')');
            lines.push(header);

            for prop in &ty.properties {
                lines.push(format!("  {}", property_line(prop)));
            }
            lines.push(String::new());
        }

        // Drop the trailing blank line
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.join("\n")
    }
}
