//! Fixed-size binary blobs for ledger objects.
//!
//! Hashes and public keys travel over the wire as hex strings of an exact
//! length. [`Blob`] is the decoded form: a plain byte array of known size.

mod blob;
mod error;

pub use blob::Blob;
pub use error::BlobError;

/// 32-byte hash (block hash, transaction hash, merkle root).
pub type Hash256 = Blob<32>;

/// 32-byte public key.
pub type PubKey = Blob<32>;
