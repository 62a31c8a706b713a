//! Errors from resolving `maldet.toml`, `MALDET_*` variables, and CLI flags.

use super::error_code::{self, MaldetErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested config file is absent or unreadable.
    #[error("cannot read config {path}")]
    FileNotFound { path: String },

    /// The file is not valid TOML or has a value of the wrong type.
    #[error("{path} is not a valid maldet config: {message}")]
    ParseError { path: String, message: String },

    /// A resolved setting breaks a range rule (finite threshold, non-zero sizes).
    #[error("{field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    /// A single override value, such as a CLI flag, is unusable on its own.
    #[error("bad value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl MaldetErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
