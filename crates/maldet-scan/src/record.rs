use chrono::{DateTime, Utc};
use maldet_core::{Explanation, Label};
use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Result of one scan, as returned by `scan` and `lookup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub rule_score: f64,
    pub rule_label: Label,
    /// Threshold the label was derived with.
    pub threshold: f64,
    pub explain: Explanation,
}

impl ScanRecord {
    pub fn new(id: String, timestamp: DateTime<Utc>, explain: Explanation) -> Self {
        Self {
            id,
            url: explain.url.clone(),
            timestamp,
            rule_score: explain.score,
            rule_label: explain.label,
            threshold: explain.threshold,
            explain,
        }
    }

    /// The persisted subset of this record.
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            id: self.id.clone(),
            url: self.url.clone(),
            timestamp: self.timestamp,
            score: self.rule_score,
            label: self.rule_label,
            threshold: self.threshold,
        }
    }
}
