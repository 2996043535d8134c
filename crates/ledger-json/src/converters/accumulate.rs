//! Collection accumulators.
//!
//! Two policies, as two functions:
//!
//! - [`accumulate_strict`]: any element that fails to decode voids the
//!   whole list. Used for signatures, commands and transactions.
//! - [`accumulate_lenient`]: a non-string element voids the whole list,
//!   but a string that fails to decode is skipped. Used for transaction
//!   hash filters in queries.

use ledger_json_document::Document;

use super::field::Array;

/// Decodes every element; the first failure aborts with `None`.
pub fn accumulate_strict<'a, D, V, F>(elements: Array<'a, D>, decode: F) -> Option<Vec<V>>
where
    D: Document,
    F: Fn(&'a D) -> Option<V>,
{
    elements
        .iter()
        .try_fold(Vec::with_capacity(elements.len()), |mut acc, element| {
            acc.push(decode(element)?);
            Some(acc)
        })
}

/// Decodes string elements, skipping strings that `decode` rejects.
///
/// An element that is not a string at all is a structural error and
/// aborts with `None`. Surviving values keep their relative order.
pub fn accumulate_lenient<'a, D, V, F>(elements: Array<'a, D>, decode: F) -> Option<Vec<V>>
where
    D: Document,
    F: Fn(&'a str) -> Option<V>,
{
    elements
        .iter()
        .enumerate()
        .try_fold(Vec::new(), |mut acc, (index, element)| {
            let text = element.string()?;
            match decode(text) {
                Some(value) => acc.push(value),
                None => tracing::trace!(index, "skipping undecodable element"),
            }
            Some(acc)
        })
}
