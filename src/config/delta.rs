//! Delta engine: three-way classification of changes between two configs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConfigMap;

/// A key present only in the patched configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    /// The added key.
    pub key: String,
    /// Its value in the patched configuration.
    pub value: Value,
}

/// A key present in both configurations with differing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// The updated key.
    pub key: String,
    /// Its value in the base configuration.
    pub from: Value,
    /// Its value in the patched configuration.
    pub to: Value,
}

/// The structural difference between two configurations.
///
/// All three categories are always present when serialized, empty or not.
/// A key with equal values in both configurations appears in none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Keys present only in the patched configuration, in its order.
    pub additions: Vec<Addition>,
    /// Keys present only in the base configuration, in its order.
    pub deletions: Vec<String>,
    /// Keys in both with differing values, in base order.
    pub updates: Vec<Update>,
}

impl Delta {
    /// Returns `true` when the delta records no change at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }
}

/// Computes the delta that turns `base` into `patched`.
///
/// Values are compared structurally over their full nested shape; two
/// values are equal iff their canonical JSON forms are identical.
#[must_use]
pub fn compute(base: &ConfigMap, patched: &ConfigMap) -> Delta {
    let additions = patched
        .iter()
        .filter(|(key, _)| !base.contains_key(*key))
        .map(|(key, value)| Addition { key: key.clone(), value: value.clone() })
        .collect();

    let deletions = base.keys().filter(|key| !patched.contains_key(*key)).cloned().collect();

    let updates = base
        .iter()
        .filter_map(|(key, from)| {
            let to = patched.get(key)?;
            if from == to {
                return None;
            }
            Some(Update { key: key.clone(), from: from.clone(), to: to.clone() })
        })
        .collect();

    Delta { additions, deletions, updates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(pairs: &[(&str, Value)]) -> ConfigMap {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn classifies_additions_deletions_and_updates() {
        let base = config(&[("a", json!(1)), ("b", json!(2))]);
        let patched = config(&[("b", json!(3)), ("c", json!(4))]);
        let delta = compute(&base, &patched);
        assert_eq!(
            delta.additions,
            vec![Addition { key: "c".to_string(), value: json!(4) }],
        );
        assert_eq!(delta.deletions, vec!["a".to_string()]);
        assert_eq!(
            delta.updates,
            vec![Update { key: "b".to_string(), from: json!(2), to: json!(3) }],
        );
    }

    #[test]
    fn equal_values_produce_no_entry_anywhere() {
        let base = config(&[("a", json!(1)), ("b", json!({"x": [1, 2]}))]);
        let delta = compute(&base, &base.clone());
        assert!(delta.is_empty());
    }

    #[test]
    fn nested_values_compare_structurally() {
        let base = config(&[("svc", json!({"port": 80, "hosts": ["a"]}))]);
        let patched = config(&[("svc", json!({"port": 80, "hosts": ["a", "b"]}))]);
        let delta = compute(&base, &patched);
        assert_eq!(delta.updates.len(), 1);
        assert_eq!(delta.updates[0].from, json!({"port": 80, "hosts": ["a"]}));
        assert_eq!(delta.updates[0].to, json!({"port": 80, "hosts": ["a", "b"]}));
    }

    #[test]
    fn entry_order_follows_source_map_order() {
        let base = config(&[("d", json!(1)), ("c", json!(1)), ("b", json!(1))]);
        let patched = config(&[("z", json!(1)), ("y", json!(1))]);
        let delta = compute(&base, &patched);
        let added: Vec<&str> = delta.additions.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(added, vec!["z", "y"]);
        assert_eq!(delta.deletions, vec!["d", "c", "b"]);
    }

    #[test]
    fn empty_maps_yield_an_empty_delta() {
        let delta = compute(&ConfigMap::new(), &ConfigMap::new());
        assert!(delta.is_empty());
    }

    #[test]
    fn serialized_delta_always_carries_all_three_categories() {
        let delta = compute(&ConfigMap::new(), &ConfigMap::new());
        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(json, r#"{"additions":[],"deletions":[],"updates":[]}"#);
    }

    #[test]
    fn delta_round_trips_through_json() {
        let base = config(&[("a", json!(1))]);
        let patched = config(&[("a", json!({"deep": true}))]);
        let delta = compute(&base, &patched);
        let text = serde_json::to_string(&delta).unwrap();
        let back: Delta = serde_json::from_str(&text).unwrap();
        assert_eq!(back, delta);
    }
}
