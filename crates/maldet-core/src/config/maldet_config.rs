//! Top-level maldet configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CacheConfig, DomainsConfig, HistoryConfig, ScoringConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::tracing::events;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MALDET_*`)
/// 3. Project config (`maldet.toml` in project root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaldetConfig {
    pub scoring: ScoringConfig,
    pub domains: DomainsConfig,
    pub cache: CacheConfig,
    pub history: HistoryConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threshold: Option<f64>,
    pub suffix_list_path: Option<PathBuf>,
}

impl MaldetConfig {
    /// Load configuration using `maldet.toml` in `root` if it exists.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        let file = project_config_path
            .exists()
            .then_some(project_config_path.as_path());
        Self::resolve(file, cli_overrides)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::resolve(Some(path), cli_overrides)
    }

    fn resolve(file: Option<&Path>, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            Self::merge_toml_file(&mut config, path)?;
            events::config_loaded(&path.display().to_string());
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MaldetConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.scoring.threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.threshold".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        for (name, weight) in &config.scoring.weights {
            if !weight.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scoring.weights.{name}"),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if config.cache.max_entries == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cache.max_entries".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.history.channel_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "history.channel_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MaldetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MaldetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut MaldetConfig, other: &MaldetConfig) {
        if other.scoring.threshold.is_some() {
            base.scoring.threshold = other.scoring.threshold;
        }
        for (name, weight) in &other.scoring.weights {
            base.scoring.weights.insert(name.clone(), *weight);
        }

        if other.domains.suffix_list_path.is_some() {
            base.domains.suffix_list_path = other.domains.suffix_list_path.clone();
        }

        if other.cache.max_entries.is_some() {
            base.cache.max_entries = other.cache.max_entries;
        }
        if other.cache.ttl_secs.is_some() {
            base.cache.ttl_secs = other.cache.ttl_secs;
        }

        if other.history.channel_capacity.is_some() {
            base.history.channel_capacity = other.history.channel_capacity;
        }
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut MaldetConfig) {
        if let Ok(val) = std::env::var("MALDET_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MALDET_SUFFIX_LIST") {
            if !val.is_empty() {
                config.domains.suffix_list_path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("MALDET_CACHE_MAX_ENTRIES") {
            if let Ok(v) = val.parse::<u64>() {
                config.cache.max_entries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MALDET_CACHE_TTL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.cache.ttl_secs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MaldetConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threshold {
            config.scoring.threshold = Some(v);
        }
        if let Some(ref v) = cli.suffix_list_path {
            config.domains.suffix_list_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
