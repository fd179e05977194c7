//! `confgen generate` command.

use std::path::Path;

use crate::model::ModelGraph;
use crate::ports::FileSystem;
use crate::schema::{meta, tree};

use super::{load_model, write_artifact};

/// Output filename for the materialized config tree.
pub const CONFIG_TREE_FILE: &str = "config.xml";

/// Output filename for the class metadata.
pub const META_FILE: &str = "meta.json";

/// Execute the `generate` command.
///
/// Loads the model document, then writes the materialized config tree and
/// the class metadata into `out`.
///
/// # Errors
///
/// Returns an error string if the model cannot be loaded, a schema artifact
/// cannot be derived, or a write fails.
pub fn run(fs: &dyn FileSystem, model_path: &Path, out_dir: &Path) -> Result<(), String> {
    let graph = load_model(fs, model_path)?;
    write_schema(fs, &graph, out_dir)?;
    println!(
        "Schema generated: {} classes, {} aggregations",
        graph.classes.len(),
        graph.aggregations.len(),
    );
    println!("Written to {}", out_dir.display());
    Ok(())
}

/// Derives both schema artifacts from the graph and writes them into `out_dir`.
pub(crate) fn write_schema(
    fs: &dyn FileSystem,
    graph: &ModelGraph,
    out_dir: &Path,
) -> Result<(), String> {
    let tree_text = tree::materialize(graph)
        .map_err(|e| format!("failed to materialize config tree: {e}"))?;
    write_artifact(fs, &out_dir.join(CONFIG_TREE_FILE), &tree_text)?;

    let descriptors =
        meta::generate(graph).map_err(|e| format!("failed to generate metadata: {e}"))?;
    let meta_json = serde_json::to_string_pretty(&descriptors)
        .map_err(|e| format!("failed to serialize metadata: {e}"))?;
    write_artifact(fs, &out_dir.join(META_FILE), &meta_json)
}
