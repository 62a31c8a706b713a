//! Public suffix list loading errors.

use super::error_code::{self, MaldetErrorCode};

/// Errors raised while loading a public suffix list from disk.
#[derive(Debug, thiserror::Error)]
pub enum SuffixListError {
    #[error("cannot read suffix list {path}: {message}")]
    Io { path: String, message: String },

    #[error("suffix list {path} contains no rules")]
    Empty { path: String },
}

impl MaldetErrorCode for SuffixListError {
    fn error_code(&self) -> &'static str {
        error_code::SUFFIX_LIST_ERROR
    }
}
