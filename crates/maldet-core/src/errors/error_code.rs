//! Stable, machine-readable codes for maldet errors.

/// Code attached to every maldet error so the CLI and scan callers can
/// match on a fixed string instead of on message text.
pub trait MaldetErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, as printed on stderr by the `maldet` binary.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

/// Config file, environment, or flag could not be resolved.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
/// A suffix list file could not be loaded.
pub const SUFFIX_LIST_ERROR: &str = "SUFFIX_LIST_ERROR";
pub const SCAN_NOT_FOUND: &str = "SCAN_NOT_FOUND";
pub const HISTORY_UNAVAILABLE: &str = "HISTORY_UNAVAILABLE";
