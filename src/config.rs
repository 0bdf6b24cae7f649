use serde::Deserialize;

use crate::collector::{CollectorConfig, DEFAULT_CONCURRENCY, SortOrder};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub collection: CollectionConfig,
    pub polling: PollingConfig,
    pub publishing: PublishingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Control socket path; the platform default socket / named pipe when unset.
    pub socket: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    /// Per-container units in flight at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default)]
    pub sort: SortOrder,
    /// Replace credential-like detail values with a fixed mask.
    #[serde(default)]
    pub mask_secrets: bool,
    /// Forget CPU snapshots of containers that disappeared from the listing.
    #[serde(default)]
    pub evict_stale: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            sort: SortOrder::default(),
            mask_secrets: false,
            evict_stale: false,
        }
    }
}

impl CollectionConfig {
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            concurrency: self.concurrency,
            sort: self.sort,
            evict_stale: self.evict_stale,
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    pub interval_ms: u64,
    /// Upper bound for one cycle; a slower cycle is cancelled and retried on the next tick.
    pub cycle_timeout_ms: u64,
    /// How often to log inventory stats (cycles, failures, ws clients) at INFO level.
    pub stats_log_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// Max number of inventory snapshots kept in the broadcast channel for /ws/containers (slow clients may lag).
    pub broadcast_capacity: usize,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config file {path}: {e}"))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.runtime
                .socket
                .as_deref()
                .is_none_or(|s| !s.trim().is_empty()),
            "runtime.socket must be non-empty when set"
        );
        anyhow::ensure!(
            self.runtime.timeout_secs > 0,
            "runtime.timeout_secs must be > 0, got {}",
            self.runtime.timeout_secs
        );
        anyhow::ensure!(
            self.collection.concurrency > 0,
            "collection.concurrency must be > 0, got {}",
            self.collection.concurrency
        );
        anyhow::ensure!(
            self.polling.interval_ms > 0,
            "polling.interval_ms must be > 0, got {}",
            self.polling.interval_ms
        );
        anyhow::ensure!(
            self.polling.cycle_timeout_ms > 0,
            "polling.cycle_timeout_ms must be > 0, got {}",
            self.polling.cycle_timeout_ms
        );
        anyhow::ensure!(
            self.polling.stats_log_interval_secs > 0,
            "polling.stats_log_interval_secs must be > 0, got {}",
            self.polling.stats_log_interval_secs
        );
        anyhow::ensure!(
            self.publishing.broadcast_capacity > 0,
            "publishing.broadcast_capacity must be > 0, got {}",
            self.publishing.broadcast_capacity
        );
        Ok(())
    }
}
