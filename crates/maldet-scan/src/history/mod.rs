//! Scan history: the sink trait, an in-memory sink, and the writer thread
//! that feeds it.

pub mod memory;
pub mod writer;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use maldet_core::{Label, ScanError};
use serde::{Deserialize, Serialize};

pub use memory::MemoryHistory;
pub use writer::{HistoryWriter, WriterStats};

/// One persisted scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub label: Label,
    pub threshold: f64,
}

/// Durable store of scans, keyed by scan id.
pub trait ScanHistory: Send + Sync {
    /// Store `entry`, replacing any earlier entry with the same id.
    fn append(&self, entry: HistoryEntry) -> Result<(), ScanError>;

    fn find(&self, id: &str) -> Result<Option<HistoryEntry>, ScanError>;
}

impl<T: ScanHistory + ?Sized> ScanHistory for Arc<T> {
    fn append(&self, entry: HistoryEntry) -> Result<(), ScanError> {
        (**self).append(entry)
    }

    fn find(&self, id: &str) -> Result<Option<HistoryEntry>, ScanError> {
        (**self).find(id)
    }
}
