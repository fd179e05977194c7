//! `confgen delta` command.

use std::path::Path;

use crate::config::delta::{compute, Delta};
use crate::ports::FileSystem;

use super::{load_config, write_artifact};

/// Output filename for the computed delta.
pub const DELTA_FILE: &str = "delta.json";

/// Execute the `delta` command.
///
/// Loads the base and patched configurations, computes the delta between
/// them, and writes it into `out`.
///
/// # Errors
///
/// Returns an error string if either configuration cannot be loaded or the
/// write fails.
pub fn run(
    fs: &dyn FileSystem,
    base_path: &Path,
    patched_path: &Path,
    out_dir: &Path,
) -> Result<(), String> {
    let base = load_config(fs, base_path)?;
    let patched = load_config(fs, patched_path)?;

    let delta = compute(&base, &patched);
    write_delta(fs, &delta, out_dir)?;
    println!(
        "Delta computed: {} additions, {} deletions, {} updates",
        delta.additions.len(),
        delta.deletions.len(),
        delta.updates.len(),
    );
    Ok(())
}

/// Serializes the delta and writes it into `out_dir`.
pub(crate) fn write_delta(fs: &dyn FileSystem, delta: &Delta, out_dir: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(delta)
        .map_err(|e| format!("failed to serialize delta: {e}"))?;
    write_artifact(fs, &out_dir.join(DELTA_FILE), &json)
}
