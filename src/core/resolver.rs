use std::error::Error;

use super::admin::AdminConfig;
use super::env::{EnvSource, ProcessEnv};
use super::value::{ResolvedValue, SettingValue, ValueSource};
use crate::storage::AdminConfigReader;
use crate::utils::{log_error, log_resolution};

/// Resolve `name` from the administrative record, then the environment,
/// then `default`.
///
/// Storage failures are logged and treated as "no override"; this function
/// always produces a value.
pub fn resolve_from_admin_or_default<R, E>(
    reader: &R,
    env: &E,
    name: &str,
    default: &str,
) -> ResolvedValue
where
    R: AdminConfigReader + ?Sized,
    E: EnvSource + ?Sized,
{
    let resolved = match admin_override(reader, name) {
        Some(value) => ResolvedValue::new(value, ValueSource::Admin),
        None => env_or_default(env, name, default),
    };

    log_resolution(name, resolved.source());
    metrics::increment_counter!("setting_resolutions_total", "source" => resolved.source().as_str());
    resolved
}

fn admin_override<R>(reader: &R, name: &str) -> Option<SettingValue>
where
    R: AdminConfigReader + ?Sized,
{
    let response = reader.find(&reader.connection(), AdminConfig::TABLE);
    log_error(
        &format!("Error on get env ({}) on database", name),
        response.error().map(|e| e as &dyn Error),
    );

    let map = match response.data()?.to_map() {
        Ok(map) => map,
        Err(e) => {
            log_error("Error on read admin config record", Some(&e as &dyn Error));
            return None;
        }
    };

    map.get(&name.to_lowercase())
        .filter(|value| !value.is_empty())
        .cloned()
}

fn env_or_default<E>(env: &E, name: &str, default: &str) -> ResolvedValue
where
    E: EnvSource + ?Sized,
{
    match env.get(name).filter(|value| !value.is_empty()) {
        Some(value) => ResolvedValue::new(value, ValueSource::Environment),
        None => ResolvedValue::new(default, ValueSource::Default),
    }
}

/// Reader and environment bundled for repeated lookups
pub struct ValueResolver<R, E = ProcessEnv> {
    reader: R,
    env: E,
}

impl<R: AdminConfigReader> ValueResolver<R> {
    /// Resolver reading the real process environment
    pub fn new(reader: R) -> Self {
        Self::with_env(reader, ProcessEnv)
    }
}

impl<R: AdminConfigReader, E: EnvSource> ValueResolver<R, E> {
    pub fn with_env(reader: R, env: E) -> Self {
        Self { reader, env }
    }

    pub fn resolve(&self, name: &str, default: &str) -> ResolvedValue {
        resolve_from_admin_or_default(&self.reader, &self.env, name, default)
    }

    pub fn resolve_string(&self, name: &str, default: &str) -> String {
        self.resolve(name, default).as_string()
    }

    pub fn resolve_bool(&self, name: &str, default: bool) -> bool {
        self.resolve(name, &default.to_string()).as_bool()
    }

    pub fn resolve_int(&self, name: &str, default: i64) -> i64 {
        self.resolve(name, &default.to_string()).as_int()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StaticEnv;
    use crate::storage::FindResponse;
    use crate::utils::ResolverError;
    use mockall::mock;

    mock! {
        Reader {}

        impl AdminConfigReader for Reader {
            type Connection = ();

            fn connection(&self);
            fn find(&self, connection: &(), table: &str) -> FindResponse;
        }
    }

    fn reader_returning(response: impl Fn() -> FindResponse + Send + 'static) -> MockReader {
        let mut reader = MockReader::new();
        reader.expect_connection().times(1).return_const(());
        reader
            .expect_find()
            .withf(|_, table| table == AdminConfig::TABLE)
            .times(1)
            .returning(move |_, _| response());
        reader
    }

    #[test]
    fn queries_admin_table_once_per_resolution() {
        let reader = reader_returning(|| {
            FindResponse::found(AdminConfig::default().with_setting("log_level", "debug"))
        });

        let value = resolve_from_admin_or_default(&reader, &StaticEnv::new(), "LOG_LEVEL", "info");

        assert_eq!(value.as_string(), "debug");
        assert_eq!(value.source(), ValueSource::Admin);
    }

    #[test]
    fn storage_error_falls_back_to_environment() {
        let reader = reader_returning(|| FindResponse::failed(ResolverError::Storage("down".into())));
        let env = StaticEnv::new().with("LOG_LEVEL", "warn");

        let value = resolve_from_admin_or_default(&reader, &env, "LOG_LEVEL", "info");

        assert_eq!(value.as_string(), "warn");
        assert_eq!(value.source(), ValueSource::Environment);
    }

    #[test]
    fn typed_admin_values_are_kept() {
        let reader = reader_returning(|| {
            FindResponse::found(AdminConfig::default().with_setting("max_retries", 5))
        });

        let value = resolve_from_admin_or_default(&reader, &StaticEnv::new(), "MAX_RETRIES", "1");

        assert_eq!(value.raw(), &SettingValue::Number(5));
        assert_eq!(value.as_int(), 5);
    }

    #[test]
    fn typed_helpers_use_typed_defaults() {
        let resolver = ValueResolver::with_env(
            crate::storage::InMemoryAdminReader::new(),
            StaticEnv::new().with("WORKERS", "8"),
        );

        assert_eq!(resolver.resolve_int("WORKERS", 2), 8);
        assert_eq!(resolver.resolve_int("RETRIES", 3), 3);
        assert!(resolver.resolve_bool("DEBUG", true));
        assert!(!resolver.resolve_bool("VERBOSE", false));
        assert_eq!(resolver.resolve_string("REGION", "eu"), "eu");
    }
}
