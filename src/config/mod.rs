//! Flat configuration maps and the delta/patch engine over them.
//!
//! This pipeline is entirely independent of the model graph: it compares
//! and reconstructs key-value configurations supplied from outside.

pub mod delta;
pub mod patch;

use indexmap::IndexMap;
use serde_json::Value;

/// An ordered mapping from configuration key to arbitrary JSON value.
///
/// Iteration order follows the source document, which fixes the order of
/// delta entries derived from it.
pub type ConfigMap = IndexMap<String, Value>;

/// Parses a configuration from JSON text.
///
/// # Errors
///
/// Returns an error string when the text is not a JSON object.
pub fn parse(text: &str) -> Result<ConfigMap, String> {
    serde_json::from_str(text).map_err(|e| format!("failed to parse configuration: {e}"))
}
