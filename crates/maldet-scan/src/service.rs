//! Scan service.

use std::sync::Arc;

use chrono::Utc;
use maldet_core::errors::SuffixListError;
use maldet_core::tracing::events;
use maldet_core::{MaldetConfig, ScanError};
use maldet_scoring::Detector;

use crate::cache::{CacheStats, ScanCache};
use crate::fingerprint::url_fingerprint;
use crate::history::{HistoryWriter, ScanHistory, WriterStats};
use crate::record::ScanRecord;

/// Scores URLs through a shared detector, caches records by scan id, and
/// persists each new scan through the history writer.
pub struct ScanService {
    detector: Detector,
    cache: ScanCache,
    history: Arc<dyn ScanHistory>,
    writer: HistoryWriter,
}

impl ScanService {
    /// Default cache settings and writer channel capacity.
    pub fn new(detector: Detector, history: Arc<dyn ScanHistory>) -> Self {
        let writer = HistoryWriter::new(Arc::clone(&history));
        Self {
            detector,
            cache: ScanCache::default(),
            history,
            writer,
        }
    }

    pub fn from_config(
        config: &MaldetConfig,
        history: Arc<dyn ScanHistory>,
    ) -> Result<Self, SuffixListError> {
        let detector = Detector::from_config(config)?;
        let writer = HistoryWriter::with_capacity(
            Arc::clone(&history),
            config.history.effective_channel_capacity(),
        );
        Ok(Self {
            detector,
            cache: ScanCache::from_config(&config.cache),
            history,
            writer,
        })
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn history(&self) -> &Arc<dyn ScanHistory> {
        &self.history
    }

    /// Score `url`, or return the cached record for its fingerprint.
    pub fn scan(&self, url: &str) -> ScanRecord {
        let url = url.trim();
        let id = url_fingerprint(url);
        let (record, fresh) = self.cache.get_or_insert_with(&id, || {
            ScanRecord::new(id.clone(), Utc::now(), self.detector.explain(url))
        });

        if !fresh {
            events::scan_cache_hit(&id);
            return record;
        }

        events::scan_recorded(&id, record.rule_label.as_u8(), record.threshold);
        if let Err(e) = self.writer.send(record.history_entry()) {
            events::history_write_failed(&id, &e.to_string());
        }
        record
    }

    /// Record for a scan id.
    ///
    /// Falls back to the history sink when the cache no longer holds the id,
    /// re-explaining the stored url against the threshold stored with it.
    pub fn lookup(&self, id: &str) -> Result<ScanRecord, ScanError> {
        if let Some(record) = self.cache.get(id) {
            events::scan_cache_hit(id);
            return Ok(record);
        }

        let entry = self.history.find(id)?.ok_or_else(|| ScanError::NotFound {
            id: id.to_string(),
        })?;
        let explain = self.detector.explain_at(&entry.url, entry.threshold);
        let record = ScanRecord::new(entry.id, entry.timestamp, explain);
        self.cache.insert(record.clone());
        Ok(record)
    }

    /// Drop `id` from the cache. History is untouched.
    pub fn invalidate(&self, id: &str) {
        self.cache.invalidate(id);
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Wait until every scan so far is persisted.
    pub fn flush(&self) -> Result<(), ScanError> {
        self.writer.flush()
    }

    pub fn shutdown(&self) -> Result<WriterStats, ScanError> {
        self.writer.shutdown()
    }
}

impl std::fmt::Debug for ScanService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanService")
            .field("detector", &self.detector)
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
