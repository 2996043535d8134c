//! Resource limits applied before a document reaches any decoder.
//!
//! Decoding runs in time proportional to document size, so bounding the
//! document is the parser's job. Limits are read from the `[limits]`
//! table of a TOML file:
//!
//! ```toml
//! [limits]
//! max_document_bytes = 1048576
//! max_depth = 64
//! ```

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;
const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLimits {
    /// Largest accepted document text, in bytes.
    pub max_document_bytes: usize,
    /// Deepest accepted nesting of arrays and objects. A scalar has depth 0.
    pub max_depth: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LimitsFile {
    #[serde(default)]
    limits: DocumentLimits,
}

impl DocumentLimits {
    /// Loads limits from the `[limits]` table of a TOML document. Missing
    /// keys (or a missing table) fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: LimitsFile = toml::from_str(text)?;
        file.limits.validate()?;
        Ok(file.limits)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_document_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_document_bytes must be greater than zero".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_file() {
        let limits = DocumentLimits::from_toml_str("").unwrap();
        assert_eq!(limits, DocumentLimits::default());
        assert_eq!(limits.max_document_bytes, 1024 * 1024);
        assert_eq!(limits.max_depth, 64);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let limits = DocumentLimits::from_toml_str("[limits]\nmax_depth = 8\n").unwrap();
        assert_eq!(limits.max_depth, 8);
        assert_eq!(limits.max_document_bytes, DEFAULT_MAX_DOCUMENT_BYTES);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let err = DocumentLimits::from_toml_str("[limits]\nmax_document_bytes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = DocumentLimits::from_toml_str("[limits]\nmax_depth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = DocumentLimits::from_toml_str("[limits\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
