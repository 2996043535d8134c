//! Per-type conversion from an extracted raw value to a member value.
//!
//! Each target type has exactly one [`Convert`] implementation per raw
//! input type. Primitives pass through; blobs decode hex; composite
//! ledger types run a nested builder (see `json_common`, `json_command`,
//! `json_transaction` and `json_query` for those implementations).

use ledger_json_blob::Blob;
use ledger_json_document::Document;

use super::accumulate::accumulate_strict;
use super::field::Array;

/// Converts a raw field value into `Self`, or rejects it.
pub trait Convert<T>: Sized {
    fn convert(raw: T) -> Option<Self>;
}

impl Convert<bool> for bool {
    fn convert(raw: bool) -> Option<Self> {
        Some(raw)
    }
}

impl Convert<u32> for u32 {
    fn convert(raw: u32) -> Option<Self> {
        Some(raw)
    }
}

impl Convert<u64> for u64 {
    fn convert(raw: u64) -> Option<Self> {
        Some(raw)
    }
}

impl Convert<i64> for i64 {
    fn convert(raw: i64) -> Option<Self> {
        Some(raw)
    }
}

/// Narrower members declared as `Uint` on the wire.
impl Convert<u32> for u16 {
    fn convert(raw: u32) -> Option<Self> {
        u16::try_from(raw).ok()
    }
}

impl Convert<u32> for u8 {
    fn convert(raw: u32) -> Option<Self> {
        u8::try_from(raw).ok()
    }
}

impl Convert<&str> for String {
    fn convert(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

/// Hex string of exactly `2 * N` characters.
impl<const N: usize> Convert<&str> for Blob<N> {
    fn convert(raw: &str) -> Option<Self> {
        Blob::from_hex(raw).ok()
    }
}

/// Every element must be a string.
impl<'a, D: Document> Convert<Array<'a, D>> for Vec<String> {
    fn convert(raw: Array<'a, D>) -> Option<Self> {
        accumulate_strict(raw, |element| element.string().map(str::to_owned))
    }
}
