//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed scoring pass.
pub fn url_scored(url: &str, score: f64, label: u8) {
    ::tracing::debug!(
        event = "url_scored",
        url = %url,
        score = score,
        label = label,
        "url scored"
    );
}

/// Log a scan served from the cache.
pub fn scan_cache_hit(scan_id: &str) {
    ::tracing::debug!(event = "scan_cache_hit", scan_id = %scan_id, "scan cache hit");
}

/// Log a new scan record.
pub fn scan_recorded(scan_id: &str, label: u8, threshold: f64) {
    ::tracing::info!(
        event = "scan_recorded",
        scan_id = %scan_id,
        label = label,
        threshold = threshold,
        "scan recorded"
    );
}

/// Log a history write that could not be applied.
pub fn history_write_failed(scan_id: &str, reason: &str) {
    ::tracing::warn!(
        event = "history_write_failed",
        scan_id = %scan_id,
        reason = %reason,
        "history write failed"
    );
}

/// Log a configuration file being applied.
pub fn config_loaded(source: &str) {
    ::tracing::info!(event = "config_loaded", source = %source, "config loaded");
}

/// Log a suffix list being loaded.
pub fn suffix_list_loaded(source: &str, rules: usize) {
    ::tracing::info!(
        event = "suffix_list_loaded",
        source = %source,
        rules = rules,
        "suffix list loaded"
    );
}
