//! Class model graph: classes, aggregation edges, and multiplicity bounds.
//!
//! The graph is built once from a [`source::ModelDocument`] and read-only
//! afterward; the schema generators in `crate::schema` borrow it without
//! mutating it.

pub mod source;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::source::ClassDecl;

/// Errors raised while deriving schema artifacts from a model graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// No class in the graph is marked as root.
    #[error("no class in the model is marked as root")]
    MissingRoot,
    /// Containment looped back onto a class already being materialized.
    #[error("containment cycle detected at class `{0}`")]
    CyclicContainment(String),
    /// A multiplicity string is neither a single token nor a `min..max` pair.
    #[error("malformed multiplicity `{0}`")]
    MalformedMultiplicity(String),
    /// A containment entry references a class that was never declared.
    #[error("class `{0}` is referenced but not declared in the model")]
    UnknownClass(String),
}

/// A typed attribute of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute type name (free-form, e.g. `uint32` or `string`).
    #[serde(rename = "type")]
    pub ty: String,
}

/// A containment reference from a class to one of its child classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRef {
    /// Name of the contained class.
    pub name: String,
    /// Raw multiplicity string bounding how many instances may appear.
    pub multiplicity: String,
}

/// One declared class with its resolved containment children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    /// Unique class name, used as a key across the whole system.
    pub name: String,
    /// Whether this class is the containment root.
    pub is_root: bool,
    /// Free-text documentation, may be empty.
    pub documentation: String,
    /// Declared attributes, in declaration order.
    pub attributes: Vec<Attribute>,
    /// Contained child classes, in aggregation declaration order.
    pub children: Vec<ChildRef>,
}

/// A declared aggregation relationship between two classes.
///
/// The direction is deliberate: an edge means the `target` class contains
/// `source` instances, with `source_multiplicity` bounding how many of them
/// may appear under one `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationEdge {
    /// Name of the contained class.
    pub source: String,
    /// Name of the containing class.
    pub target: String,
    /// Bounds on how many `source` instances one `target` may hold.
    pub source_multiplicity: String,
    /// Bounds on the `target` side of the relationship.
    pub target_multiplicity: String,
}

/// Parsed multiplicity bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplicity {
    /// Lower bound token.
    pub min: String,
    /// Upper bound token (`*` for unbounded).
    pub max: String,
}

impl Multiplicity {
    /// The default bounds when no aggregation constrains a class: `0..*`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { min: "0".to_string(), max: "*".to_string() }
    }

    /// Parses a multiplicity string.
    ///
    /// A string containing `..` splits into min and max; otherwise the
    /// single token is both min and max.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedMultiplicity`] when the string is
    /// empty, has an empty min or max, or has more than one `..` separator.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let malformed = || ModelError::MalformedMultiplicity(raw.to_string());
        match raw.split_once("..") {
            Some((min, max)) => {
                if min.is_empty() || max.is_empty() || max.contains("..") {
                    return Err(malformed());
                }
                Ok(Self { min: min.to_string(), max: max.to_string() })
            }
            None => {
                if raw.is_empty() {
                    return Err(malformed());
                }
                Ok(Self { min: raw.to_string(), max: raw.to_string() })
            }
        }
    }
}

/// The in-memory model: class definitions plus the declared aggregations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGraph {
    /// Class definitions keyed by name, in declaration order.
    pub classes: IndexMap<String, ClassDef>,
    /// All declared aggregation edges, in declaration order.
    ///
    /// Edges whose endpoints did not resolve to declared classes are kept
    /// here even though they contribute no containment children; the
    /// metadata generator still consults them for multiplicity bounds.
    pub aggregations: Vec<AggregationEdge>,
}

impl ModelGraph {
    /// Builds the graph from class and aggregation declarations.
    ///
    /// The class mapping is built first with empty `children`; each
    /// aggregation whose `source` and `target` both name declared classes
    /// then appends a [`ChildRef`] to the target's `children`, preserving
    /// edge declaration order. Edges with an unknown endpoint are dropped
    /// from the tree but retained in [`ModelGraph::aggregations`]. No cycle
    /// detection happens here; the materializer guards traversal instead.
    #[must_use]
    pub fn build(classes: Vec<ClassDecl>, aggregations: Vec<AggregationEdge>) -> Self {
        let mut mapping: IndexMap<String, ClassDef> = classes
            .into_iter()
            .map(|decl| {
                let def = ClassDef {
                    name: decl.name.clone(),
                    is_root: decl.is_root,
                    documentation: decl.documentation,
                    attributes: decl.attributes,
                    children: Vec::new(),
                };
                (decl.name, def)
            })
            .collect();

        for edge in &aggregations {
            if !mapping.contains_key(&edge.source) {
                continue;
            }
            if let Some(target) = mapping.get_mut(&edge.target) {
                target.children.push(ChildRef {
                    name: edge.source.clone(),
                    multiplicity: edge.source_multiplicity.clone(),
                });
            }
        }

        Self { classes: mapping, aggregations }
    }

    /// Returns the first class marked as root, if any.
    ///
    /// With multiple roots declared the first in declaration order wins;
    /// validating against that is the caller's job.
    #[must_use]
    pub fn root(&self) -> Option<&ClassDef> {
        self.classes.values().find(|class| class.is_root)
    }

    /// Looks up a class definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }
}
