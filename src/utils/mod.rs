//! Utility modules for the setting resolver.
//! This module contains the error type and logging helpers shared across the crate.

mod error;
mod logging;

pub use logging::{init_logging, log_error, log_resolution};

pub use error::{ResolverError, ResolverResult};
