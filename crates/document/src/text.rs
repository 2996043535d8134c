//! Text boundary: turn document text into a tree and back.

use serde_json::Value;

use crate::{DocumentError, DocumentLimits};

/// Parses document text. Malformed text yields `None`, never a partial tree.
pub fn parse(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Parses document text, enforcing `limits`.
///
/// The size limit is checked before any parsing work is done; the depth
/// limit is checked on the parsed tree.
pub fn parse_with_limits(text: &str, limits: &DocumentLimits) -> Result<Value, DocumentError> {
    if text.len() > limits.max_document_bytes {
        return Err(DocumentError::TooLarge {
            actual: text.len(),
            limit: limits.max_document_bytes,
        });
    }
    let value: Value = serde_json::from_str(text)?;
    let actual = depth(&value);
    if actual > limits.max_depth {
        return Err(DocumentError::TooDeep {
            actual,
            limit: limits.max_depth,
        });
    }
    Ok(value)
}

/// Indented rendering used for wire transmission and round trips.
pub fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Single-line rendering.
pub fn render_compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Nesting depth of arrays and objects. Scalars have depth 0.
pub fn depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((node, level)) = stack.pop() {
        match node {
            Value::Array(items) => {
                max = max.max(level + 1);
                stack.extend(items.iter().map(|item| (item, level + 1)));
            }
            Value::Object(map) => {
                max = max.max(level + 1);
                stack.extend(map.values().map(|item| (item, level + 1)));
            }
            _ => {}
        }
    }
    max
}
