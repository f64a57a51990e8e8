//! Configuration management for the setting resolver.
//! These are the resolver's own settings (where the override store lives),
//! loaded from defaults and environment variables.

mod settings;

pub use settings::{Settings, StorageConfig};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, config::ConfigError>;

/// Load the resolver configuration
pub fn load_config() -> ConfigResult<Settings> {
    Settings::load()
}
