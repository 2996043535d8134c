//! Field-by-field object builder bound to one document.
//!
//! A target type is described by a list of [`FieldDescriptor`]s, one per
//! member: field name, expected primitive type, converter and a pure
//! update that returns the object with that member replaced. Building
//! folds the descriptors over a default object; the first rejected field
//! discards the object.
//!
//! ```
//! use ledger_json::converters::FieldDeserializer;
//! use ledger_json::model::Signature;
//! use serde_json::json;
//!
//! let doc = json!({"pubkey": "ab", "signature": "cd"});
//! let des = FieldDeserializer::new(&doc);
//! let sig = des.build(
//!     Signature::default(),
//!     [
//!         des.string("pubkey", |s: Signature, pubkey: String| Signature { pubkey, ..s }),
//!         des.string("signature", |s: Signature, signature: String| Signature { signature, ..s }),
//!     ],
//! );
//! assert_eq!(sig, Some(Signature::new("ab", "cd")));
//! ```

use std::fmt;

use ledger_json_document::Document;

use super::convert::Convert;
use super::field::{deserialize_field, Array, FieldType, Object};
use super::pipeline::{self, assign_object_field, Pipeline};

/// One decode step: read a field, convert it, write it into the object.
pub struct FieldDescriptor<'a, B> {
    field: &'static str,
    step: Box<dyn Fn(B) -> Option<B> + 'a>,
}

impl<'a, B> FieldDescriptor<'a, B> {
    pub fn new<S>(field: &'static str, step: S) -> Self
    where
        S: Fn(B) -> Option<B> + 'a,
    {
        Self {
            field,
            step: Box::new(step),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn apply(&self, object: B) -> Option<B> {
        (self.step)(object)
    }
}

impl<B> fmt::Debug for FieldDescriptor<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Builds descriptors against a single borrowed document.
pub struct FieldDeserializer<'a, D> {
    document: &'a D,
}

impl<D> Clone for FieldDeserializer<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for FieldDeserializer<'_, D> {}

impl<'a, D: Document> FieldDeserializer<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &'a D {
        self.document
    }

    /// Descriptor reading `field` as `T`, converting it with `transform`
    /// and storing the result with `assign`.
    pub fn deserialize<T, V, B, C, F>(
        &self,
        field: &'static str,
        assign: F,
        transform: C,
    ) -> FieldDescriptor<'a, B>
    where
        T: FieldType<'a, D> + 'a,
        C: Fn(T) -> Option<V> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
        V: 'a,
    {
        let document = self.document;
        FieldDescriptor::new(field, move |object| {
            Pipeline::from_option(deserialize_field::<T, D>(document, field))
                .then(&transform)
                .then(assign_object_field(object, &assign))
                .finish()
        })
    }

    /// 32-bit unsigned field.
    pub fn uint<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<u32> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<u32, V, B, _, F>(field, assign, V::convert)
    }

    /// 64-bit unsigned field.
    pub fn uint64<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<u64> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<u64, V, B, _, F>(field, assign, V::convert)
    }

    pub fn bool<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<bool> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<bool, V, B, _, F>(field, assign, V::convert)
    }

    pub fn string<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<&'a str> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<&'a str, V, B, _, F>(field, assign, V::convert)
    }

    pub fn array<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<Array<'a, D>> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<Array<'a, D>, V, B, _, F>(field, assign, V::convert)
    }

    /// Array field with an explicit converter instead of `V`'s own.
    pub fn array_with<V, B, C, F>(
        &self,
        field: &'static str,
        assign: F,
        transform: C,
    ) -> FieldDescriptor<'a, B>
    where
        C: Fn(Array<'a, D>) -> Option<V> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
        V: 'a,
    {
        self.deserialize::<Array<'a, D>, V, B, C, F>(field, assign, transform)
    }

    pub fn object<V, B, F>(&self, field: &'static str, assign: F) -> FieldDescriptor<'a, B>
    where
        V: Convert<Object<'a, D>> + 'a,
        F: Fn(B, V) -> B + 'a,
        B: 'a,
    {
        self.deserialize::<Object<'a, D>, V, B, _, F>(field, assign, V::convert)
    }

    /// Reads a string field without storing it, e.g. a type discriminator.
    pub fn string_field(&self, field: &str) -> Option<&'a str> {
        deserialize_field(self.document, field)
    }

    /// Folds `fields` over `initial`. Returns the finished object, or
    /// `None` as soon as one field is rejected.
    pub fn build<B, I>(&self, initial: B, fields: I) -> Option<B>
    where
        I: IntoIterator<Item = FieldDescriptor<'a, B>>,
    {
        let steps = fields.into_iter().map(|descriptor| {
            move |object| {
                let next = descriptor.apply(object);
                if next.is_none() {
                    tracing::debug!(
                        target_type = std::any::type_name::<B>(),
                        field = descriptor.field(),
                        "rejected document field"
                    );
                }
                next
            }
        });
        pipeline::run(Some(initial), steps)
    }
}
