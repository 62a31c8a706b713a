//! Error handling for maldet.
//! One error enum per subsystem, `thiserror` only.
//!
//! The scoring path itself has no error type: malformed URLs degrade to
//! default feature values and value coercion is total.

pub mod config_error;
pub mod error_code;
pub mod scan_error;
pub mod suffix_list_error;

pub use config_error::ConfigError;
pub use error_code::MaldetErrorCode;
pub use scan_error::ScanError;
pub use suffix_list_error::SuffixListError;
