use serde_json::Value;

/// Read-only hierarchical field tree.
///
/// Every accessor reports `None` (or `false`) when the node's runtime
/// representation is not the requested one. A missing member and a
/// mistyped one look the same through this trait.
pub trait Document: Sized {
    /// Named member of an object node. `None` for absent members and for
    /// non-object nodes.
    fn member(&self, name: &str) -> Option<&Self>;

    fn boolean(&self) -> Option<bool>;

    /// Non-negative integer that fits in 64 bits. Floats never match.
    fn uint64(&self) -> Option<u64>;

    /// Integer that fits in a signed 64-bit value. Floats never match.
    fn int64(&self) -> Option<i64>;

    fn string(&self) -> Option<&str>;

    /// Elements of an array node, in document order.
    fn elements(&self) -> Option<&[Self]>;

    fn is_object(&self) -> bool;
}

impl Document for Value {
    fn member(&self, name: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn boolean(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn uint64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    fn int64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    fn string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}
