//! Scan history writer configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Bound of the writer channel. Default: 1024.
    pub channel_capacity: Option<usize>,
}

impl HistoryConfig {
    pub fn effective_channel_capacity(&self) -> usize {
        self.channel_capacity
            .unwrap_or(constants::DEFAULT_HISTORY_CHANNEL_CAPACITY)
    }
}
