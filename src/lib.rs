//! schema_project library - Schema-driven field projection
//!
//! Provides the projection core (selection-tree/instance merging, property
//! classification, schema models) plus the command execution and output
//! formatting infrastructure for the CLI.

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod instance;
pub mod mapper;
pub mod output;
pub mod projection;
pub mod schema;
pub mod selection;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
