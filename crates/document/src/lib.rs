//! Document capability consumed by the ledger decoders.
//!
//! A [`Document`] is a read-only field tree. Decoders only ever ask two
//! kinds of question of it: "give me this member as type X" and "give me
//! the elements of this array". Everything else about the tree (parsing,
//! printing, size limits) lives here so the decoders stay independent of
//! any concrete representation.

mod config;
mod document;
mod error;
mod text;

pub use config::DocumentLimits;
pub use document::Document;
pub use error::{ConfigError, DocumentError};
pub use text::{depth, parse, parse_with_limits, render, render_compact};

pub use serde_json::Value;
