//! Tree materializer: renders the containment hierarchy as nested markup.

use crate::model::{ModelError, ModelGraph};

/// Declaration line emitted at the top of the materialized document.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Indentation unit, one per containment depth level.
const INDENT: &str = "  ";

/// Materializes the containment tree rooted at the graph's root class.
///
/// Each class becomes an element block: opening tag, one line per attribute
/// as `<name>type</name>`, the recursively materialized child blocks in
/// `children` order, closing tag. Output is deterministic and whitespace
/// significant. Names and types are emitted verbatim; the caller supplies
/// markup-safe identifiers.
///
/// # Errors
///
/// Returns [`ModelError::MissingRoot`] when no class is marked as root,
/// [`ModelError::CyclicContainment`] when containment loops back onto a
/// class already on the current path, and [`ModelError::UnknownClass`] when
/// a containment entry names an undeclared class.
pub fn materialize(graph: &ModelGraph) -> Result<String, ModelError> {
    let root = graph.root().ok_or(ModelError::MissingRoot)?;
    let mut lines = vec![XML_DECLARATION.to_string()];
    let mut path = Vec::new();
    emit_class(graph, &root.name, 0, &mut path, &mut lines)?;
    Ok(lines.join("\n"))
}

/// Emits one class block, recursing into its containment children.
///
/// `path` holds the classes currently being emitted, root first; meeting a
/// name already on it means the containment relation is cyclic.
fn emit_class(
    graph: &ModelGraph,
    name: &str,
    depth: usize,
    path: &mut Vec<String>,
    lines: &mut Vec<String>,
) -> Result<(), ModelError> {
    if path.iter().any(|ancestor| ancestor == name) {
        return Err(ModelError::CyclicContainment(name.to_string()));
    }
    let class = graph.get(name).ok_or_else(|| ModelError::UnknownClass(name.to_string()))?;

    let pad = INDENT.repeat(depth);
    lines.push(format!("{pad}<{name}>"));
    for attr in &class.attributes {
        lines.push(format!("{pad}{INDENT}<{0}>{1}</{0}>", attr.name, attr.ty));
    }

    path.push(name.to_string());
    for child in &class.children {
        emit_class(graph, &child.name, depth + 1, path, lines)?;
    }
    path.pop();

    lines.push(format!("{pad}</{name}>"));
    Ok(())
}
