use std::collections::HashMap;
use std::time::Duration;

use redis::{Client, Commands};

use super::{AdminConfigReader, FindResponse};
use crate::config::StorageConfig;
use crate::core::AdminConfig;
use crate::utils::ResolverResult;

/// Reads the administrative record from a Redis hash.
///
/// The record for `table` lives at `<key_prefix>:<table>`, one hash field per
/// column. Every lookup opens its own connection, bounded by the configured
/// timeout for both connecting and reading.
pub struct RedisAdminReader {
    /// Redis client used to open per-lookup connections
    client: Client,
    /// Prefix for record keys
    key_prefix: String,
    /// Connect and read timeout
    timeout: Duration,
}

impl RedisAdminReader {
    /// Create a reader; fails only when `redis_url` is malformed
    pub fn new(redis_url: &str, config: &StorageConfig) -> ResolverResult<Self> {
        let client = Client::open(redis_url)?;

        Ok(Self {
            client,
            key_prefix: config.key_prefix.clone(),
            // std rejects zero timeouts
            timeout: Duration::from_millis(config.timeout_ms.max(1)),
        })
    }

    /// Redis key holding the record for `table`
    pub fn key_for(&self, table: &str) -> String {
        format!("{}:{}", self.key_prefix, table)
    }

    fn fetch(&self, client: &Client, table: &str) -> ResolverResult<Option<AdminConfig>> {
        let mut conn = client.get_connection_with_timeout(self.timeout)?;
        conn.set_read_timeout(Some(self.timeout))?;

        let fields: HashMap<String, String> = conn.hgetall(self.key_for(table))?;
        if fields.is_empty() {
            return Ok(None);
        }

        AdminConfig::from_fields(fields).map(Some)
    }
}

impl AdminConfigReader for RedisAdminReader {
    type Connection = Client;

    fn connection(&self) -> Client {
        self.client.clone()
    }

    fn find(&self, connection: &Client, table: &str) -> FindResponse {
        match self.fetch(connection, table) {
            Ok(Some(record)) => FindResponse::found(record),
            Ok(None) => FindResponse::empty(),
            Err(e) => FindResponse::failed(e),
        }
    }
}
