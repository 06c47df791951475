/*!
# Tree Normalizer

Converts a raw, schema-less AST node into a [`DisplayNode`] tree. The walk
is structural: every field of a node is examined in declaration order, and
anything object-shaped carrying a `type` discriminant becomes a child. A
field named `loc` is never a child (it holds source positions).
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Classification, DisplayNode, NodeKind};
use crate::core::{ArtifactError, MAX_TREE_DEPTH};

/// Raw AST node as received from the service: a `type` tag plus an open
/// field set whose declaration order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawNode(pub Value);

impl RawNode {
    pub fn new(value: Value) -> Self {
        RawNode(value)
    }

    /// The `type` discriminant, when present and a string.
    pub fn tag(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Pretty JSON of the raw node, for the debug panel.
    pub fn to_debug_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "null".to_string())
    }
}

/// Normalizes a raw AST into the uniform display tree.
///
/// `None` in, `None` out - callers render a placeholder for the absent
/// tree. A node without a usable `type` tag also maps to no node. The only
/// failure is [`ArtifactError::TooDeep`], the guard against cyclic input.
pub fn normalize(node: Option<&RawNode>) -> Result<Option<DisplayNode>, ArtifactError> {
    match node {
        None => Ok(None),
        Some(raw) => normalize_value(&raw.0, 0),
    }
}

fn normalize_value(value: &Value, depth: usize) -> Result<Option<DisplayNode>, ArtifactError> {
    if depth >= MAX_TREE_DEPTH {
        return Err(ArtifactError::too_deep());
    }

    let fields = match value.as_object() {
        Some(fields) => fields,
        None => return Ok(None),
    };
    let tag = match fields.get("type").and_then(Value::as_str) {
        Some(tag) => tag,
        None => return Ok(None),
    };

    let mut children = Vec::new();
    for (field, field_value) in fields {
        match field_value {
            Value::Array(items) => {
                for item in items {
                    if is_typed_node(item) {
                        if let Some(child) = normalize_value(item, depth + 1)? {
                            children.push(child);
                        }
                    }
                }
            }
            Value::Object(_) if field != "loc" && is_typed_node(field_value) => {
                if let Some(child) = normalize_value(field_value, depth + 1)? {
                    children.push(child);
                }
            }
            _ => {}
        }
    }

    Ok(Some(DisplayNode {
        label: tag.to_string(),
        display_value: derive_display_value(tag, fields),
        classification: Classification::derive(tag),
        children,
    }))
}

/// An object carrying a string `type` discriminant counts as a node.
fn is_typed_node(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|fields| fields.get("type"))
        .map(Value::is_string)
        .unwrap_or(false)
}

/// Display-value extraction; the first matching rule wins.
fn derive_display_value(tag: &str, fields: &Map<String, Value>) -> String {
    let value = scalar(fields.get("value"));
    let derived = match NodeKind::from_tag(tag) {
        // Identificador: su valor, con el nombre como respaldo.
        NodeKind::Identifier => non_empty(value).or_else(|| non_empty(scalar(fields.get("name")))),
        // Expresión binaria: su operador, con el valor como respaldo.
        NodeKind::BinaryExpression => {
            non_empty(scalar(fields.get("operator"))).or_else(|| non_empty(value))
        }
        NodeKind::Literal | NodeKind::StringLiteral => value,
        _ => value,
    };
    derived.unwrap_or_default()
}

/// Scalar rendering of a field value; containers and null have none.
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
