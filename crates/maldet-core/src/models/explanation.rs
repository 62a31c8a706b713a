use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FeatureSet, Label, ScoreResult};

/// Score breakdown for one URL.
///
/// This is the JSON shape handed to collaborators, field names are fixed.
/// `contributions` holds `weight * value` for every weighted feature, in
/// weight-table order;
/// `features` holds every extracted feature, weighted or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub url: String,
    pub score: f64,
    pub label: Label,
    pub threshold: f64,
    pub contributions: IndexMap<String, f64>,
    pub features: FeatureSet,
}

impl Explanation {
    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            label: self.label,
            score: self.score,
        }
    }

    /// The `n` largest contributions by absolute magnitude. Ties keep
    /// weight-table order.
    pub fn top_contributions(&self, n: usize) -> Vec<(&str, f64)> {
        let mut items: Vec<(&str, f64)> = self
            .contributions
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        items.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        items.truncate(n);
        items
    }
}
