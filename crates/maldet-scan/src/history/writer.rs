//! History writer: bounded crossbeam channel, dedicated writer thread.
//!
//! Producers never touch the sink and never wait on it: an entry that finds
//! the channel full is dropped and counted. The writer thread applies
//! entries in send order; a failed append is logged and counted, never
//! retried.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Sender, TrySendError};
use maldet_core::constants::DEFAULT_HISTORY_CHANNEL_CAPACITY;
use maldet_core::tracing::events;
use maldet_core::ScanError;

use super::{HistoryEntry, ScanHistory};

/// Messages understood by the writer thread.
#[derive(Debug)]
enum HistoryCommand {
    Record(HistoryEntry),
    /// Acknowledge once every earlier command has been applied.
    Flush(Sender<()>),
    Shutdown,
}

/// Counters reported when the writer shuts down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    pub entries_written: usize,
    pub write_failures: usize,
    /// Entries rejected by `send` because the channel was full.
    pub dropped: usize,
    pub flushes: usize,
}

pub struct HistoryWriter {
    tx: Sender<HistoryCommand>,
    handle: Mutex<Option<JoinHandle<WriterStats>>>,
    dropped: AtomicUsize,
}

impl HistoryWriter {
    pub fn new(sink: Arc<dyn ScanHistory>) -> Self {
        Self::with_capacity(sink, DEFAULT_HISTORY_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(sink: Arc<dyn ScanHistory>, capacity: usize) -> Self {
        let (tx, rx) = bounded::<HistoryCommand>(capacity.max(1));
        let handle = std::thread::Builder::new()
            .name("maldet-history-writer".to_string())
            .spawn(move || {
                let mut stats = WriterStats::default();
                while let Ok(command) = rx.recv() {
                    match command {
                        HistoryCommand::Record(entry) => {
                            let id = entry.id.clone();
                            match sink.append(entry) {
                                Ok(()) => stats.entries_written += 1,
                                Err(e) => {
                                    stats.write_failures += 1;
                                    events::history_write_failed(&id, &e.to_string());
                                }
                            }
                        }
                        HistoryCommand::Flush(ack) => {
                            stats.flushes += 1;
                            let _ = ack.send(());
                        }
                        HistoryCommand::Shutdown => break,
                    }
                }
                stats
            });

        let handle = match handle {
            Ok(h) => Some(h),
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn history writer thread");
                None
            }
        };

        Self {
            tx,
            handle: Mutex::new(handle),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Queue `entry` without waiting. A full channel drops the entry.
    pub fn send(&self, entry: HistoryEntry) -> Result<(), ScanError> {
        match self.tx.try_send(HistoryCommand::Record(entry)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Err(unavailable("writer channel full, entry dropped"))
            }
            Err(TrySendError::Disconnected(_)) => Err(unavailable("writer channel closed")),
        }
    }

    /// Entries dropped so far because the channel was full.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Wait until every entry sent before this call has been applied.
    pub fn flush(&self) -> Result<(), ScanError> {
        let (ack_tx, ack_rx) = bounded(1);
        self.tx
            .send(HistoryCommand::Flush(ack_tx))
            .map_err(|_| unavailable("writer channel closed"))?;
        ack_rx
            .recv()
            .map_err(|_| unavailable("writer exited before flush"))
    }

    /// Drain pending entries, stop the thread, and return its counters.
    ///
    /// A second call returns `HistoryUnavailable`.
    pub fn shutdown(&self) -> Result<WriterStats, ScanError> {
        let handle = self
            .handle
            .lock()
            .map_err(|_| unavailable("writer handle poisoned"))?
            .take()
            .ok_or_else(|| unavailable("writer already shut down"))?;
        let _ = self.tx.send(HistoryCommand::Shutdown);
        let mut stats = handle
            .join()
            .map_err(|_| unavailable("writer thread panicked"))?;
        stats.dropped = self.dropped();
        Ok(stats)
    }
}

impl Drop for HistoryWriter {
    fn drop(&mut self) {
        let handle = self.handle.get_mut().ok().and_then(Option::take);
        if let Some(handle) = handle {
            let _ = self.tx.send(HistoryCommand::Shutdown);
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for HistoryWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryWriter")
            .field("pending", &self.tx.len())
            .finish_non_exhaustive()
    }
}

fn unavailable(reason: &str) -> ScanError {
    ScanError::HistoryUnavailable {
        reason: reason.to_string(),
    }
}
