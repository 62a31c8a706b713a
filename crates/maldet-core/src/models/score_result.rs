use serde::{Deserialize, Serialize};

use super::Label;

/// Label and raw score for a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub label: Label,
    pub score: f64,
}
