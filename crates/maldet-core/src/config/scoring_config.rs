//! Scoring configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Threshold and weight overrides for the linear scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Malicious-label threshold. Default: 2.5.
    pub threshold: Option<f64>,
    /// Per-feature weight overrides, merged over the default table.
    /// Keys need not name an extracted feature.
    pub weights: BTreeMap<String, f64>,
}

impl ScoringConfig {
    /// Returns the effective threshold, defaulting to 2.5.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(constants::DEFAULT_THRESHOLD)
    }
}
