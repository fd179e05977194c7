//! `confgen all` command: the full pipeline in one invocation.

use std::path::Path;

use crate::config::delta::compute;
use crate::config::patch::apply;
use crate::ports::FileSystem;

use super::{delta, generate, load_config, load_model, patch};

/// Execute the `all` command.
///
/// Runs both pipelines: materializes the config tree and metadata from the
/// model, computes the delta between the two configurations, and applies it
/// back to the base. All four artifacts land in `out`.
///
/// # Errors
///
/// Returns an error string if any input cannot be loaded, a schema artifact
/// cannot be derived, or a write fails.
pub fn run(
    fs: &dyn FileSystem,
    model_path: &Path,
    base_path: &Path,
    patched_path: &Path,
    out_dir: &Path,
) -> Result<(), String> {
    let graph = load_model(fs, model_path)?;
    generate::write_schema(fs, &graph, out_dir)?;

    let base = load_config(fs, base_path)?;
    let patched = load_config(fs, patched_path)?;
    let d = compute(&base, &patched);
    delta::write_delta(fs, &d, out_dir)?;

    let result = apply(&base, &d);
    patch::write_result(fs, &result, out_dir)?;

    println!(
        "Pipeline complete: {}, {}, {}, {} in {}",
        generate::CONFIG_TREE_FILE,
        generate::META_FILE,
        delta::DELTA_FILE,
        patch::RESULT_FILE,
        out_dir.display(),
    );
    Ok(())
}
