use std::collections::HashMap;
use std::sync::RwLock;

use maldet_core::ScanError;

use super::{HistoryEntry, ScanHistory};

/// Process-local history sink.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: RwLock<HashMap<String, HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> ScanError {
    ScanError::HistoryUnavailable {
        reason: "history lock poisoned".to_string(),
    }
}

impl ScanHistory for MemoryHistory {
    fn append(&self, entry: HistoryEntry) -> Result<(), ScanError> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(entry.id.clone(), entry);
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<HistoryEntry>, ScanError> {
        Ok(self.entries.read().map_err(poisoned)?.get(id).cloned())
    }
}
