use thiserror::Error;

/// Errors raised inside the setting resolver and its storage readers
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Redis related errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Stored record could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Storage backend reported a failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for setting resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;
