use std::collections::HashMap;

use super::{AdminConfigReader, FindResponse};
use crate::core::AdminConfig;
use crate::utils::ResolverError;

/// Reader over records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminReader {
    tables: HashMap<String, AdminConfig>,
    failure: Option<String>,
}

impl InMemoryAdminReader {
    /// Reader with no record, so every lookup comes back empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader holding `record` under [`AdminConfig::TABLE`]
    pub fn with_record(record: AdminConfig) -> Self {
        Self::new().insert(AdminConfig::TABLE, record)
    }

    /// Reader whose every lookup fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn insert(mut self, table: impl Into<String>, record: AdminConfig) -> Self {
        self.tables.insert(table.into(), record);
        self
    }
}

impl AdminConfigReader for InMemoryAdminReader {
    type Connection = ();

    fn connection(&self) {}

    fn find(&self, _connection: &(), table: &str) -> FindResponse {
        if let Some(message) = &self.failure {
            return FindResponse::failed(ResolverError::Storage(message.clone()));
        }

        match self.tables.get(table) {
            Some(record) => FindResponse::found(record.clone()),
            None => FindResponse::empty(),
        }
    }
}
