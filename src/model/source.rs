//! Model source document: the serde types the model file deserializes into.
//!
//! Field names in the document are camelCase (`isRoot`,
//! `sourceMultiplicity`) to match the modeling vocabulary the document
//! format inherits. `isRoot`, `documentation`, and `attributes` may be
//! omitted per class.

use serde::{Deserialize, Serialize};

use super::{AggregationEdge, Attribute, ModelGraph};

/// One declared class, before aggregation edges are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Unique class name.
    pub name: String,
    /// Whether this class is the containment root.
    #[serde(rename = "isRoot", default)]
    pub is_root: bool,
    /// Free-text documentation.
    #[serde(default)]
    pub documentation: String,
    /// Declared attributes, in declaration order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// The top-level model document: class and aggregation declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Declared classes, in declaration order.
    pub classes: Vec<ClassDecl>,
    /// Declared aggregation relationships, in declaration order.
    #[serde(default)]
    pub aggregations: Vec<AggregationEdge>,
}

impl ModelDocument {
    /// Parses a model document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error string when the text is not a valid model document.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| format!("failed to parse model document: {e}"))
    }

    /// Consumes the document and builds the model graph from it.
    #[must_use]
    pub fn into_graph(self) -> ModelGraph {
        ModelGraph::build(self.classes, self.aggregations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
classes:
  - name: Hub
    isRoot: true
    documentation: Central unit
    attributes:
      - name: id
        type: uint32
  - name: Device
    documentation: Attached device
aggregations:
  - source: Device
    target: Hub
    sourceMultiplicity: 1..16
    targetMultiplicity: \"1\"
";

    #[test]
    fn parses_camel_case_fields() {
        let doc = ModelDocument::from_yaml(SAMPLE).unwrap();
        assert_eq!(doc.classes.len(), 2);
        assert!(doc.classes[0].is_root);
        assert_eq!(doc.classes[0].attributes[0].ty, "uint32");
        assert_eq!(doc.aggregations[0].source_multiplicity, "1..16");
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let doc = ModelDocument::from_yaml(SAMPLE).unwrap();
        let device = &doc.classes[1];
        assert!(!device.is_root);
        assert!(device.attributes.is_empty());
        assert_eq!(device.documentation, "Attached device");
    }

    #[test]
    fn into_graph_resolves_containment() {
        let graph = ModelDocument::from_yaml(SAMPLE).unwrap().into_graph();
        assert_eq!(graph.root().unwrap().name, "Hub");
        assert_eq!(graph.get("Hub").unwrap().children[0].name, "Device");
    }

    #[test]
    fn rejects_non_model_text() {
        let result = ModelDocument::from_yaml("just a scalar");
        assert!(result.is_err());
    }

    #[test]
    fn missing_aggregations_list_defaults_to_empty() {
        let doc = ModelDocument::from_yaml("classes:\n  - name: Solo\n    isRoot: true\n").unwrap();
        assert!(doc.aggregations.is_empty());
    }
}
