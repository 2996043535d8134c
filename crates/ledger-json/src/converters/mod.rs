//! Decode/encode between JSON documents and ledger objects.
//!
//! The framework part is generic over any [`Document`]:
//!
//! - [`field`]: typed field extraction.
//! - [`convert`]: per-target-type converters.
//! - [`pipeline`]: short-circuiting step composition.
//! - [`deserializer`]: field-descriptor builder for whole objects.
//! - [`accumulate`]: strict and lenient list accumulation.
//!
//! The `json_*` modules apply it to each ledger object and provide the
//! reverse direction (`to_json`).
//!
//! [`Document`]: ledger_json_document::Document

pub mod accumulate;
pub mod convert;
pub mod deserializer;
pub mod field;
pub mod pipeline;

pub mod json_block;
pub mod json_command;
pub mod json_common;
pub mod json_query;
pub mod json_transaction;

pub use accumulate::{accumulate_lenient, accumulate_strict};
pub use convert::Convert;
pub use deserializer::{FieldDescriptor, FieldDeserializer};
pub use field::{deserialize_field, Array, FieldType, Object};
pub use pipeline::{assign_object_field, Pipeline};
