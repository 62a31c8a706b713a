//! # maldet-scan
//!
//! Scan service around the scoring core: scan ids derived from URL
//! fingerprints, a moka record cache, and a history sink fed by a
//! dedicated writer thread over a bounded crossbeam channel.

pub mod cache;
pub mod fingerprint;
pub mod history;
pub mod record;
pub mod service;

pub use cache::{CacheStats, ScanCache};
pub use fingerprint::url_fingerprint;
pub use history::{HistoryEntry, HistoryWriter, MemoryHistory, ScanHistory, WriterStats};
pub use record::ScanRecord;
pub use service::ScanService;
