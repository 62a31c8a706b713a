//! Scan service errors.

use super::error_code::{self, MaldetErrorCode};

/// Errors surfaced by the scan service collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan not found: {id}")]
    NotFound { id: String },

    #[error("scan history unavailable: {reason}")]
    HistoryUnavailable { reason: String },
}

impl MaldetErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::SCAN_NOT_FOUND,
            Self::HistoryUnavailable { .. } => error_code::HISTORY_UNAVAILABLE,
        }
    }
}
