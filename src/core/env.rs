use std::collections::HashMap;
use std::env;

use super::value::{parse_flag, parse_number};

/// Source of process-level variables
pub trait EnvSource: Send + Sync {
    /// Value of `name`, or `None` when it is unset or not valid unicode
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, or `default` when it is unset or empty
    fn value_or_default(&self, name: &str, default: &str) -> String {
        self.get(name)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Reads from the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Fixed set of variables, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Process variable `name`, or `default` when unset or empty
pub fn env_or_default(name: &str, default: &str) -> String {
    ProcessEnv.value_or_default(name, default)
}

/// Boolean form of [`env_or_default`]
pub fn env_or_default_bool(name: &str, default: bool) -> bool {
    parse_flag(&env_or_default(name, &default.to_string()))
}

/// Integer form of [`env_or_default`]; unparsable values are logged and read as 0
pub fn env_or_default_int(name: &str, default: i64) -> i64 {
    parse_number(&env_or_default(name, &default.to_string()))
}
