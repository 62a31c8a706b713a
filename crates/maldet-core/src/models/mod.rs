//! Value objects produced by feature extraction and scoring.

pub mod explanation;
pub mod feature;
pub mod feature_set;
pub mod label;
pub mod score_result;

pub use explanation::Explanation;
pub use feature::{Feature, FeatureValue};
pub use feature_set::FeatureSet;
pub use label::Label;
pub use score_result::ScoreResult;
