//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_table() {
        let args = Args::try_parse_from(["schema_project", "inspect"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Table));
    }

    #[test]
    fn test_format_flag_is_global() {
        let args =
            Args::try_parse_from(["schema_project", "inspect", "--format", "json"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }
}
