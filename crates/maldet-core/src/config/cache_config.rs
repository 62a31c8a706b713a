//! Scan cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the scan-record cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached records. Default: 10000.
    pub max_entries: Option<u64>,
    /// Time-to-live in seconds. Default: 3600.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn effective_max_entries(&self) -> u64 {
        self.max_entries.unwrap_or(constants::DEFAULT_CACHE_MAX_ENTRIES)
    }

    pub fn effective_ttl_secs(&self) -> u64 {
        self.ttl_secs.unwrap_or(constants::DEFAULT_CACHE_TTL_SECS)
    }
}
