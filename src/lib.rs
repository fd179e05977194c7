//! Core library entry for the `confgen` CLI.
//!
//! Two independent pipelines live here. The model pipeline turns a
//! class-diagram-style model into a nested configuration schema
//! (`model` → `schema`); the config pipeline computes and applies
//! structural deltas between two flat configurations (`config`).

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod model;
pub mod ports;
pub mod schema;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
