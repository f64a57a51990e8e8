use serde::Deserialize;

/// Runtime settings for the resolver itself
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Administrative override store
    pub storage: StorageConfig,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

/// Settings for the store holding the administrative record
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Redis connection URL; without it no override store is consulted
    pub redis_url: Option<String>,
    /// Prefix for record keys
    pub key_prefix: String,
    /// Connect and read timeout for a lookup, in milliseconds
    pub timeout_ms: u64,
}

impl Settings {
    /// Load settings from defaults and `RESOLVER_*` environment variables,
    /// e.g. `RESOLVER_STORAGE__REDIS_URL`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            config::Environment::with_prefix("RESOLVER")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    pub(crate) fn load_from<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("storage.key_prefix", "settings")?
            .set_default("storage.timeout_ms", 2000)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            key_prefix: "settings".to_string(),
            timeout_ms: 2000,
        }
    }
}
