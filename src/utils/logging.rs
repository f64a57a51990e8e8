use std::env;
use std::error::Error;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::core::ValueSource;
use crate::utils::{ResolverError, ResolverResult};

/// Initialize the logging system. `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str) -> ResolverResult<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_level(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ResolverError::Internal(format!("failed to set tracing subscriber: {}", e)))
}

/// Report an error with context. Does nothing when there is no error.
pub fn log_error(message: &str, error: Option<&dyn Error>) {
    if let Some(error) = error {
        tracing::error!(
            event = "resolver_error",
            error = %error,
            timestamp = %chrono::Utc::now(),
            "{}",
            message
        );
    }
}

/// Log which source produced a setting
pub fn log_resolution(name: &str, source: ValueSource) {
    tracing::debug!(
        setting = %name,
        source = %source,
        event = "setting_resolved",
        timestamp = %chrono::Utc::now()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_error_without_error_is_noop() {
        // Nothing to assert beyond not panicking without a subscriber.
        log_error("nothing happened", None);
    }
}
