//! Score, predict, and explain entry points.
//!
//! All three run the same weighted sum. `explain` additionally records the
//! per-feature products, the threshold, and the full feature set.

use indexmap::IndexMap;
use maldet_core::constants::DEFAULT_THRESHOLD;
use maldet_core::tracing::events;
use maldet_core::{DomainSplitter, Explanation, Feature, FeatureSet, Label, ScoreResult};
use maldet_features::{extract_lexical_features, extract_with};

use crate::coerce::coerce;
use crate::weights::WeightTable;

/// Weighted sum over `weights ∩ features`, in weight-table order.
///
/// Returns the total and the per-feature contributions. The total is
/// accumulated in the same order the contributions are stored, so summing
/// the contributions reproduces it exactly.
pub fn weighted_sum(features: &FeatureSet, weights: &WeightTable) -> (f64, IndexMap<String, f64>) {
    let mut total = 0.0;
    let mut contributions = IndexMap::new();
    for (name, weight) in weights.iter() {
        let Some(feature) = Feature::from_name(name) else {
            continue;
        };
        let contribution = weight * coerce(feature, features.value(feature));
        total += contribution;
        contributions.insert(name.to_string(), contribution);
    }
    (total, contributions)
}

/// Score of an already-extracted feature set.
pub fn score_features(features: &FeatureSet, weights: &WeightTable) -> f64 {
    weighted_sum(features, weights).0
}

/// Build an explanation from an already-extracted feature set.
pub fn explain_features(
    url: &str,
    features: FeatureSet,
    threshold: f64,
    weights: &WeightTable,
) -> Explanation {
    let (score, contributions) = weighted_sum(&features, weights);
    let label = Label::from_score(score, threshold);
    events::url_scored(url, score, label.as_u8());
    Explanation {
        url: url.to_string(),
        score,
        label,
        threshold,
        contributions,
        features,
    }
}

/// Risk score of `url` under the default weights.
pub fn score_url(url: &str) -> f64 {
    score_url_with(url, WeightTable::default_table())
}

pub fn score_url_with(url: &str, weights: &WeightTable) -> f64 {
    score_features(&extract_lexical_features(url), weights)
}

/// Label and score of `url` under the default threshold and weights.
pub fn predict_url(url: &str) -> ScoreResult {
    predict_url_with(url, DEFAULT_THRESHOLD, WeightTable::default_table())
}

pub fn predict_url_with(url: &str, threshold: f64, weights: &WeightTable) -> ScoreResult {
    let score = score_url_with(url, weights);
    ScoreResult {
        label: Label::from_score(score, threshold),
        score,
    }
}

/// Full breakdown of `url` under the default threshold and weights.
pub fn explain_url(url: &str) -> Explanation {
    explain_url_with(url, DEFAULT_THRESHOLD, WeightTable::default_table())
}

pub fn explain_url_with(url: &str, threshold: f64, weights: &WeightTable) -> Explanation {
    explain_features(url, extract_lexical_features(url), threshold, weights)
}

/// `explain_url_with` using a caller-supplied domain splitter.
pub fn explain_url_using(
    url: &str,
    threshold: f64,
    weights: &WeightTable,
    splitter: &dyn DomainSplitter,
) -> Explanation {
    explain_features(url, extract_with(url, splitter), threshold, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_scores_zero() {
        let features = extract_lexical_features("http://1.2.3.4/login");
        let (total, contributions) = weighted_sum(&features, &WeightTable::empty());
        assert_eq!(total, 0.0);
        assert!(contributions.is_empty());
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let weights = WeightTable::empty()
            .with_weight("nonexistent_feature", 100.0)
            .with_weight("has_ip_host", 4.0);
        let features = extract_lexical_features("http://1.2.3.4/");
        let (total, contributions) = weighted_sum(&features, &weights);
        assert_eq!(total, 4.0);
        assert_eq!(contributions.len(), 1);
        assert!(!contributions.contains_key("nonexistent_feature"));
    }

    #[test]
    fn injected_splitter_drives_domain_features() {
        struct WholeHostSuffix;
        impl DomainSplitter for WholeHostSuffix {
            fn split(&self, host: &str) -> maldet_core::DomainParts {
                maldet_core::DomainParts {
                    subdomain: String::new(),
                    domain: String::new(),
                    suffix: host.to_string(),
                }
            }
        }

        let url = "https://deep.sub.example.com/";
        let weights = WeightTable::empty().with_weight("subdomain_len", 1.0);
        let default = explain_url_with(url, 2.5, &weights);
        let injected = explain_url_using(url, 2.5, &weights, &WholeHostSuffix);
        assert_eq!(default.score, 8.0);
        assert_eq!(injected.score, 0.0);
        assert_eq!(injected.features.tld_len, 20);
        assert_eq!(injected.label, Label::Benign);
    }

    #[test]
    fn unweighted_features_still_reported() {
        let ex = explain_url("https://example.com/a");
        assert!(!ex.contributions.contains_key("len_host"));
        assert_eq!(ex.features.len_host, 11);
    }
}
