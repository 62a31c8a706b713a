//! Domain decomposition configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to load the public suffix list from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DomainsConfig {
    /// Path to a `public_suffix_list.dat` file. `None` uses the embedded list.
    pub suffix_list_path: Option<PathBuf>,
}
