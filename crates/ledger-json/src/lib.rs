//! Typed decode/encode boundary between JSON wire documents and ledger
//! objects (blocks, transactions, queries, signatures).
//!
//! Decoding never produces a partially populated object: every decoder
//! returns `Some(object)` with all required members set, or `None`.
//! Turning `None` into a user-facing rejection is the caller's job.
//!
//! ```
//! use ledger_json::converters::json_transaction;
//!
//! let text = r#"{
//!     "signatures": [{"pubkey": "pk", "signature": "sig"}],
//!     "created_ts": 1500000000000,
//!     "creator_account_id": "admin@test",
//!     "quorum": 1,
//!     "commands": []
//! }"#;
//! let tx = json_transaction::transaction_from_str(text).unwrap();
//! assert_eq!(tx.creator_account_id, "admin@test");
//! ```

pub mod converters;
pub mod generators;
pub mod model;
pub mod peer_query;

pub use converters::json_block::{block_from_str, block_to_string};
pub use converters::json_query::{query_from_str, query_to_string};
pub use converters::json_transaction::{transaction_from_str, transaction_to_string};
pub use ledger_json_document::{Document, DocumentLimits, Value};
