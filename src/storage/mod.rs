//! Readers for the administrative configuration record.
//! The resolver only ever reads through [`AdminConfigReader`]; backends decide
//! where the record lives and how long a lookup may take.

mod memory;
mod redis;

pub use self::memory::InMemoryAdminReader;
pub use self::redis::RedisAdminReader;

use crate::core::AdminConfig;
use crate::utils::ResolverError;

/// Outcome of a record lookup.
///
/// A failed lookup carries its error and no data; a successful lookup may
/// still have no record.
#[derive(Debug, Default)]
pub struct FindResponse {
    error: Option<ResolverError>,
    data: Option<AdminConfig>,
}

impl FindResponse {
    pub fn found(record: AdminConfig) -> Self {
        Self {
            error: None,
            data: Some(record),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failed(error: ResolverError) -> Self {
        Self {
            error: Some(error),
            data: None,
        }
    }

    pub fn error(&self) -> Option<&ResolverError> {
        self.error.as_ref()
    }

    pub fn data(&self) -> Option<&AdminConfig> {
        self.data.as_ref()
    }
}

/// Read access to the store holding the administrative record
pub trait AdminConfigReader: Send + Sync {
    /// Handle passed back into [`AdminConfigReader::find`]
    type Connection;

    fn connection(&self) -> Self::Connection;

    /// Look up the record stored under `table`. Must not block past the
    /// backend's own timeout.
    fn find(&self, connection: &Self::Connection, table: &str) -> FindResponse;
}
