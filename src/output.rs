//! Output formatting for command results.
//!
//! Supports two output formats: table (human-readable) and JSON.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("name: {}", self.name)
        }
    }

    #[test]
    fn test_format_table() {
        let sample = Sample {
            name: "x".to_string(),
        };
        assert_eq!(sample.format(OutputFormat::Table), "name: x");
    }

    #[test]
    fn test_format_json() {
        let sample = Sample {
            name: "x".to_string(),
        };
        let json = sample.format(OutputFormat::Json);
        assert!(json.contains("\"name\": \"x\""));
    }
}
