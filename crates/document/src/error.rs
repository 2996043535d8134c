//! Document and configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is {actual} bytes, limit is {limit}")]
    TooLarge { actual: usize, limit: usize },
    #[error("document nesting depth {actual} exceeds limit {limit}")]
    TooDeep { actual: usize, limit: usize },
    #[error("syntax error: {0}")]
    Syntax(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
