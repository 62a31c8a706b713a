use std::sync::Arc;

use maldet_core::constants::DEFAULT_THRESHOLD;
use maldet_core::errors::SuffixListError;
use maldet_core::{DomainSplitter, Explanation, Label, MaldetConfig, ScoreResult};
use maldet_features::{extract_with, SuffixList};

use crate::scorer::{explain_url_using, score_features};
use crate::weights::WeightTable;

/// Detector bundling a domain splitter, weight table, and threshold.
///
/// Immutable once built and cheap to clone; share one across threads.
#[derive(Clone)]
pub struct Detector {
    splitter: Arc<dyn DomainSplitter>,
    weights: Arc<WeightTable>,
    threshold: f64,
}

impl Detector {
    /// Default weights, default threshold, embedded suffix list.
    pub fn new() -> Self {
        Self {
            splitter: Arc::new(SuffixList::embedded()),
            weights: Arc::new(WeightTable::default_table().clone()),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Build from configuration: threshold, weight overrides, suffix list path.
    pub fn from_config(config: &MaldetConfig) -> Result<Self, SuffixListError> {
        let splitter: Arc<dyn DomainSplitter> = match &config.domains.suffix_list_path {
            Some(path) => Arc::new(SuffixList::from_file(path)?),
            None => Arc::new(SuffixList::embedded()),
        };
        let weights = WeightTable::default_table().with_overrides(&config.scoring.weights);
        Ok(Self {
            splitter,
            weights: Arc::new(weights),
            threshold: config.scoring.effective_threshold(),
        })
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = Arc::new(weights);
        self
    }

    pub fn with_splitter(mut self, splitter: Arc<dyn DomainSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn score(&self, url: &str) -> f64 {
        score_features(&extract_with(url, self.splitter.as_ref()), &self.weights)
    }

    pub fn predict(&self, url: &str) -> ScoreResult {
        let score = self.score(url);
        ScoreResult {
            label: Label::from_score(score, self.threshold),
            score,
        }
    }

    pub fn explain(&self, url: &str) -> Explanation {
        self.explain_at(url, self.threshold)
    }

    /// Explain against an explicit threshold instead of the configured one.
    pub fn explain_at(&self, url: &str, threshold: f64) -> Explanation {
        explain_url_using(url, threshold, &self.weights, self.splitter.as_ref())
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("weights", &self.weights)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
