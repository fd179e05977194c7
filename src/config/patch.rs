//! Patch applier: reconstructs a configuration from a base and a delta.

use super::delta::Delta;
use super::ConfigMap;

/// Applies `delta` to `base`, producing the patched configuration.
///
/// Deletions run first (removing an absent key is a no-op), then updates,
/// then additions. Update and addition writes are blind overwrites; the
/// recorded `from` value is not verified. The fixed order defines the
/// resolution when a hand-built delta lists one key in several categories:
/// later steps overwrite earlier ones.
#[must_use]
pub fn apply(base: &ConfigMap, delta: &Delta) -> ConfigMap {
    let mut result = base.clone();

    for key in &delta.deletions {
        result.shift_remove(key);
    }
    for update in &delta.updates {
        result.insert(update.key.clone(), update.to.clone());
    }
    for addition in &delta.additions {
        result.insert(addition.key.clone(), addition.value.clone());
    }

    result
}
