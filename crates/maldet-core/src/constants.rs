//! Shared constants for the maldet detector.

/// Score at or above which a URL is labelled malicious.
pub const DEFAULT_THRESHOLD: f64 = 2.5;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "maldet.toml";

/// Default maximum number of cached scan records.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

/// Default scan cache TTL in seconds (1 hour).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;

/// Default bound of the history writer channel.
pub const DEFAULT_HISTORY_CHANNEL_CAPACITY: usize = 1_024;

/// Scheme prepended to schemeless input before parsing.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Number of contributions shown by the debug CLI summary.
pub const SUMMARY_TOP_CONTRIBUTIONS: usize = 10;
