//! # maldet-scoring
//!
//! Transparent linear scoring over lexical URL features.
//!
//! ```text
//! score = Σ weight[k] × coerce(features[k])   for k in weights ∩ features
//! label = 1 iff score >= threshold
//! ```
//!
//! Weight keys that name no extracted feature are skipped, so weight tables
//! can reference features that do not exist yet.

pub mod coerce;
pub mod engine;
pub mod scorer;
pub mod weights;

pub use engine::Detector;
pub use scorer::{
    explain_features, explain_url, explain_url_using, explain_url_with, predict_url,
    predict_url_with, score_features, score_url, score_url_with, weighted_sum,
};
pub use weights::WeightTable;
