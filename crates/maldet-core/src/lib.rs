//! # maldet-core
//!
//! Foundation crate for the maldet lexical URL detector.
//! Defines feature names, result models, the domain-splitting trait,
//! errors, config, tracing, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MaldetConfig;
pub use errors::{ConfigError, MaldetErrorCode, ScanError, SuffixListError};
pub use models::{Explanation, Feature, FeatureSet, FeatureValue, Label, ScoreResult};
pub use traits::{DomainParts, DomainSplitter};
