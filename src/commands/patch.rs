//! `confgen patch` command.

use std::path::Path;

use crate::config::delta::Delta;
use crate::config::{patch, ConfigMap};
use crate::ports::FileSystem;

use super::{load_config, write_artifact};

/// Output filename for the reconstructed configuration.
pub const RESULT_FILE: &str = "res_patched_config.json";

/// Execute the `patch` command.
///
/// Loads the base configuration and a delta document, applies the delta,
/// and writes the reconstructed configuration into `out`.
///
/// # Errors
///
/// Returns an error string if an input cannot be loaded or the write fails.
pub fn run(
    fs: &dyn FileSystem,
    base_path: &Path,
    delta_path: &Path,
    out_dir: &Path,
) -> Result<(), String> {
    let base = load_config(fs, base_path)?;
    let text = fs
        .read_to_string(delta_path)
        .map_err(|e| format!("failed to read delta {}: {e}", delta_path.display()))?;
    let delta: Delta = serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse delta {}: {e}", delta_path.display()))?;

    let result = patch::apply(&base, &delta);
    write_result(fs, &result, out_dir)?;
    println!("Patched configuration written: {} keys", result.len());
    Ok(())
}

/// Serializes the reconstructed configuration and writes it into `out_dir`.
pub(crate) fn write_result(
    fs: &dyn FileSystem,
    result: &ConfigMap,
    out_dir: &Path,
) -> Result<(), String> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("failed to serialize patched configuration: {e}"))?;
    write_artifact(fs, &out_dir.join(RESULT_FILE), &json)
}
