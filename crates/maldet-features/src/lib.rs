//! # maldet-features
//!
//! Turns a raw URL string into a fixed [`FeatureSet`] of lexical signals.
//!
//! Extraction is total: schemeless, malformed, or otherwise odd input
//! degrades to empty components and zero counts, never to an error.
//!
//! ## Pipeline
//!
//! 1. Scheme normalization (`http://` prepended when missing)
//! 2. Structural split into host, path, query
//! 3. Public-suffix decomposition of the host via a [`DomainSplitter`]
//! 4. Counting over the original and scheme-stripped strings
//!
//! [`FeatureSet`]: maldet_core::FeatureSet
//! [`DomainSplitter`]: maldet_core::DomainSplitter

pub mod extractor;
pub mod suffix;
pub mod url;

pub use extractor::{extract_lexical_features, extract_with};
pub use suffix::SuffixList;
pub use url::{is_ipv4_literal, UrlParts};
