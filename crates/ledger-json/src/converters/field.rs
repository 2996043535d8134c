//! Typed field extraction.
//!
//! A field is read only when it is present *and* holds the expected
//! primitive type. Both failures look the same to the caller: `None`.

use std::fmt;
use std::slice;

use ledger_json_document::Document;

/// Primitive type a document field is expected to hold.
pub trait FieldType<'a, D: Document>: Sized {
    fn extract(value: &'a D) -> Option<Self>;
}

impl<'a, D: Document> FieldType<'a, D> for bool {
    fn extract(value: &'a D) -> Option<Self> {
        value.boolean()
    }
}

/// `Uint` on the wire: values outside 32 bits do not match.
impl<'a, D: Document> FieldType<'a, D> for u32 {
    fn extract(value: &'a D) -> Option<Self> {
        value.uint64().and_then(|n| u32::try_from(n).ok())
    }
}

/// `Uint64` on the wire.
impl<'a, D: Document> FieldType<'a, D> for u64 {
    fn extract(value: &'a D) -> Option<Self> {
        value.uint64()
    }
}

impl<'a, D: Document> FieldType<'a, D> for i64 {
    fn extract(value: &'a D) -> Option<Self> {
        value.int64()
    }
}

impl<'a, D: Document> FieldType<'a, D> for &'a str {
    fn extract(value: &'a D) -> Option<Self> {
        value.string()
    }
}

impl<'a, D: Document> FieldType<'a, D> for Array<'a, D> {
    fn extract(value: &'a D) -> Option<Self> {
        value.elements().map(Array::new)
    }
}

impl<'a, D: Document> FieldType<'a, D> for Object<'a, D> {
    fn extract(value: &'a D) -> Option<Self> {
        value.is_object().then_some(Object { document: value })
    }
}

/// Reads `field` from `document` as `T`.
pub fn deserialize_field<'a, T, D>(document: &'a D, field: &str) -> Option<T>
where
    D: Document,
    T: FieldType<'a, D>,
{
    document.member(field).and_then(T::extract)
}

// ── Array / Object views ──────────────────────────────────────────────────

/// Borrowed array field.
pub struct Array<'a, D> {
    elements: &'a [D],
}

impl<'a, D> Array<'a, D> {
    pub fn new(elements: &'a [D]) -> Self {
        Self { elements }
    }

    pub fn iter(&self) -> slice::Iter<'a, D> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<D> Clone for Array<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Array<'_, D> {}

impl<D> fmt::Debug for Array<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array").field("len", &self.len()).finish()
    }
}

impl<'a, D> IntoIterator for Array<'a, D> {
    type Item = &'a D;
    type IntoIter = slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Borrowed object field; a sub-document for nested decoding.
pub struct Object<'a, D> {
    document: &'a D,
}

impl<'a, D> Object<'a, D> {
    pub fn document(&self) -> &'a D {
        self.document
    }
}

impl<D> Clone for Object<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Object<'_, D> {}

impl<D> fmt::Debug for Object<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn present_field_of_expected_type() {
        let doc = json!({"name": "alice", "height": 5, "ok": true});
        assert_eq!(deserialize_field::<&str, _>(&doc, "name"), Some("alice"));
        assert_eq!(deserialize_field::<u64, _>(&doc, "height"), Some(5));
        assert_eq!(deserialize_field::<u32, _>(&doc, "height"), Some(5));
        assert_eq!(deserialize_field::<bool, _>(&doc, "ok"), Some(true));
    }

    #[test]
    fn missing_and_mistyped_are_both_none() {
        let doc = json!({"name": 12});
        assert_eq!(deserialize_field::<&str, _>(&doc, "name"), None);
        assert_eq!(deserialize_field::<&str, _>(&doc, "other"), None);
    }

    #[test]
    fn uint_rejects_values_beyond_32_bits() {
        let doc = json!({"n": u64::from(u32::MAX) + 1, "m": u32::MAX});
        assert_eq!(deserialize_field::<u32, _>(&doc, "n"), None);
        assert_eq!(
            deserialize_field::<u64, _>(&doc, "n"),
            Some(u64::from(u32::MAX) + 1)
        );
        assert_eq!(deserialize_field::<u32, _>(&doc, "m"), Some(u32::MAX));
    }

    #[test]
    fn negative_numbers_are_not_unsigned() {
        let doc = json!({"n": -1});
        assert_eq!(deserialize_field::<u32, _>(&doc, "n"), None);
        assert_eq!(deserialize_field::<u64, _>(&doc, "n"), None);
        assert_eq!(deserialize_field::<i64, _>(&doc, "n"), Some(-1));
    }

    #[test]
    fn array_and_object_views() {
        let doc = json!({"list": [1, 2, 3], "obj": {"a": 1}});
        let list: Array<'_, Value> = deserialize_field(&doc, "list").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().next(), Some(&json!(1)));
        let obj: Object<'_, Value> = deserialize_field(&doc, "obj").unwrap();
        assert_eq!(obj.document(), &json!({"a": 1}));
        assert!(deserialize_field::<Array<'_, Value>, _>(&doc, "obj").is_none());
        assert!(deserialize_field::<Object<'_, Value>, _>(&doc, "list").is_none());
    }
}
