//! Command dispatch and handlers.

pub mod all;
pub mod delta;
pub mod generate;
pub mod patch;

use std::path::Path;

use crate::adapters::live::LiveFileSystem;
use crate::cli::Command;
use crate::config::ConfigMap;
use crate::model::source::ModelDocument;
use crate::model::ModelGraph;
use crate::ports::FileSystem;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let fs = LiveFileSystem;
    match command {
        Command::Generate { model, out } => generate::run(&fs, model, out),
        Command::Delta { base, patched, out } => delta::run(&fs, base, patched, out),
        Command::Patch { base, delta, out } => patch::run(&fs, base, delta, out),
        Command::All { model, base, patched, out } => all::run(&fs, model, base, patched, out),
    }
}

/// Reads and parses the model document, then builds the graph from it.
fn load_model(fs: &dyn FileSystem, path: &Path) -> Result<ModelGraph, String> {
    let text = fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read model {}: {e}", path.display()))?;
    Ok(ModelDocument::from_yaml(&text)?.into_graph())
}

/// Reads and parses a flat JSON configuration.
fn load_config(fs: &dyn FileSystem, path: &Path) -> Result<ConfigMap, String> {
    let text = fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read configuration {}: {e}", path.display()))?;
    crate::config::parse(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Writes a generated artifact, reporting the destination on failure.
fn write_artifact(fs: &dyn FileSystem, path: &Path, contents: &str) -> Result<(), String> {
    fs.write(path, contents).map_err(|e| format!("failed to write {}: {e}", path.display()))
}
