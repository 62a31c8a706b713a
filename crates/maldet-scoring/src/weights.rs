//! Weight table for the linear scorer.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

static DEFAULT_TABLE: LazyLock<WeightTable> = LazyLock::new(WeightTable::static_defaults);

/// Mapping of feature name to weight.
///
/// Names are free-form: entries that name no extracted feature are kept
/// and skipped at scoring time. Iteration order is insertion order; an
/// override of an existing name keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightTable {
    weights: IndexMap<String, f64>,
}

impl WeightTable {
    /// An empty table. Every URL scores 0.0 against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped weights.
    pub fn static_defaults() -> Self {
        let mut weights = IndexMap::new();
        // strong signals
        weights.insert("has_ip_host".to_string(), 4.0);
        weights.insert("has_at".to_string(), 2.0);
        weights.insert("has_login".to_string(), 1.5);
        weights.insert("has_verify".to_string(), 1.2);
        // medium signals
        weights.insert("path_depth".to_string(), 0.5);
        weights.insert("count_hyphens".to_string(), 0.15);
        weights.insert("count_dots".to_string(), 0.1);
        weights.insert("count_digits".to_string(), 0.02);
        weights.insert("count_punct".to_string(), 0.02);
        // mild signals
        weights.insert("len_url".to_string(), 0.004);
        weights.insert("subdomain_len".to_string(), 0.03);
        weights.insert("num_tokens_host".to_string(), 0.05);
        weights.insert("has_secure".to_string(), 0.7);
        weights.insert("has_hex_path".to_string(), 0.6);
        Self { weights }
    }

    /// Process-wide default table, built on first use and never mutated.
    pub fn default_table() -> &'static WeightTable {
        &DEFAULT_TABLE
    }

    /// A copy of `self` with `overrides` applied. NaN overrides are ignored.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut table = self.clone();
        for (name, &weight) in overrides {
            table.set(name.clone(), weight);
        }
        table
    }

    /// Convenience for `HashMap` overrides.
    pub fn with_override_map(&self, overrides: &HashMap<String, f64>) -> Self {
        self.with_overrides(overrides)
    }

    /// Set one weight. Returns `false` (and leaves the table unchanged) for NaN.
    pub fn set(&mut self, name: impl Into<String>, weight: f64) -> bool {
        if weight.is_nan() {
            return false;
        }
        self.weights.insert(name.into(), weight);
        true
    }

    /// Builder-style `set`.
    pub fn with_weight(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.set(name, weight);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
