//! Metadata generator: one flat parameter descriptor per declared class.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ClassDef, ModelError, ModelGraph, Multiplicity};

/// One typed parameter of a class descriptor.
///
/// Attributes keep their declared type; containment references use the
/// fixed type `class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (attribute name or contained class name).
    pub name: String,
    /// Parameter type name.
    #[serde(rename = "type")]
    pub ty: String,
}

/// Flattened descriptor for one class.
///
/// Field order here fixes the key order of the serialized JSON: `class`,
/// `documentation`, `isRoot`, `parameters`, then `min`/`max` on non-root
/// classes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Class name.
    pub class: String,
    /// Free-text documentation carried over from the declaration.
    pub documentation: String,
    /// Whether this class is the containment root.
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    /// Attributes first, then containment references, in recorded order.
    pub parameters: Vec<Parameter>,
    /// Lower multiplicity bound; absent on the root class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Upper multiplicity bound; absent on the root class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Generates one descriptor per class in the graph, in class-mapping order.
///
/// Non-root classes carry `min`/`max` bounds taken from the last declared
/// aggregation edge whose `source` is the class (later edges overwrite
/// earlier matches), defaulting to `0..*` when no edge matches. Every class
/// gets a descriptor whether or not it is reachable from the root.
///
/// # Errors
///
/// Returns [`ModelError::MalformedMultiplicity`] when a consulted
/// multiplicity string fails to parse.
pub fn generate(graph: &ModelGraph) -> Result<Vec<ClassDescriptor>, ModelError> {
    // Index the raw bounds by source class up front; insertion order of the
    // edge list makes the last matching edge win.
    let mut bounds: HashMap<&str, &str> = HashMap::new();
    for edge in &graph.aggregations {
        bounds.insert(edge.source.as_str(), edge.source_multiplicity.as_str());
    }

    graph.classes.values().map(|class| describe(class, &bounds)).collect()
}

/// Builds the descriptor for a single class.
fn describe(
    class: &ClassDef,
    bounds: &HashMap<&str, &str>,
) -> Result<ClassDescriptor, ModelError> {
    let mut parameters: Vec<Parameter> = class
        .attributes
        .iter()
        .map(|attr| Parameter { name: attr.name.clone(), ty: attr.ty.clone() })
        .collect();
    parameters.extend(
        class
            .children
            .iter()
            .map(|child| Parameter { name: child.name.clone(), ty: "class".to_string() }),
    );

    let (min, max) = if class.is_root {
        (None, None)
    } else {
        let multiplicity = match bounds.get(class.name.as_str()) {
            Some(raw) => Multiplicity::parse(raw)?,
            None => Multiplicity::unbounded(),
        };
        (Some(multiplicity.min), Some(multiplicity.max))
    };

    Ok(ClassDescriptor {
        class: class.name.clone(),
        documentation: class.documentation.clone(),
        is_root: class.is_root,
        parameters,
        min,
        max,
    })
}
