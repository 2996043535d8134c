//! Blob decoding error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlobError {
    #[error("invalid blob length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHex { character: char, index: usize },
}
