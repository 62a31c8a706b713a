//! Configuration system for maldet.
//! TOML-based, 3-layer resolution: CLI > env > project file > defaults.

pub mod cache_config;
pub mod domains_config;
pub mod history_config;
pub mod maldet_config;
pub mod scoring_config;

pub use cache_config::CacheConfig;
pub use domains_config::DomainsConfig;
pub use history_config::HistoryConfig;
pub use maldet_config::{CliOverrides, MaldetConfig};
pub use scoring_config::ScoringConfig;
