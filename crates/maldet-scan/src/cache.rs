//! Scan record cache using moka.
//!
//! Keyed by scan id. Capacity-bounded with a per-entry time-to-live.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use maldet_core::config::CacheConfig;
use moka::sync::Cache;

use crate::record::ScanRecord;

/// Hit/miss counters since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

pub struct ScanCache {
    cache: Cache<String, ScanRecord>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ScanCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.effective_max_entries(),
            Duration::from_secs(config.effective_ttl_secs()),
        )
    }

    pub fn get(&self, id: &str) -> Option<ScanRecord> {
        let found = self.cache.get(id);
        self.count(found.is_some());
        found
    }

    /// Cached record for `id`, or the result of `init` stored under `id`.
    ///
    /// Concurrent callers for the same id run `init` at most once. The flag
    /// is `true` when this call ran it.
    pub fn get_or_insert_with(&self, id: &str, init: impl FnOnce() -> ScanRecord) -> (ScanRecord, bool) {
        let entry = self.cache.entry_by_ref(id).or_insert_with(init);
        let fresh = entry.is_fresh();
        self.count(!fresh);
        (entry.into_value(), fresh)
    }

    pub fn insert(&self, record: ScanRecord) {
        self.cache.insert(record.id.clone(), record);
    }

    pub fn invalidate(&self, id: &str) {
        self.cache.invalidate(id);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Approximate entry count; moka applies evictions lazily.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn count(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maldet_scoring::explain_url;

    fn record(id: &str, url: &str) -> ScanRecord {
        ScanRecord::new(id.into(), Utc::now(), explain_url(url))
    }

    #[test]
    fn init_runs_once_per_id() {
        let cache = ScanCache::default();
        let (first, fresh) = cache.get_or_insert_with("a", || record("a", "http://a.com"));
        assert!(fresh);
        let (second, fresh) = cache.get_or_insert_with("a", || panic!("must not recompute"));
        assert!(!fresh);
        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn invalidate_removes() {
        let cache = ScanCache::new(10, Duration::from_secs(60));
        cache.insert(record("a", "http://a.com"));
        assert!(cache.get("a").is_some());
        cache.invalidate("a");
        assert!(cache.get("a").is_none());
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn clear_empties() {
        let cache = ScanCache::default();
        cache.insert(record("a", "http://a.com"));
        cache.insert(record("b", "http://b.com"));
        cache.clear();
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }
}
