
use redis::Commands;
use setting_resolver::config::StorageConfig;
use setting_resolver::core::{AdminConfig, StaticEnv};
use setting_resolver::storage::{AdminConfigReader, RedisAdminReader};
use setting_resolver::utils::ResolverResult;
use setting_resolver::{ValueResolver, ValueSource};
use test_utils::random_setting_name;

// Use a test Redis URL
const REDIS_URL: &str = "redis://localhost:6379";

fn storage_config(key_prefix: &str) -> StorageConfig {
    StorageConfig {
        redis_url: Some(REDIS_URL.to_string()),
        key_prefix: key_prefix.to_string(),
        timeout_ms: 1000,
    }
}

#[test]
#[ignore = "requires a local Redis server"]
fn reads_overrides_from_redis_hash() -> ResolverResult<()> {
    let prefix = random_setting_name().to_lowercase();
    let reader = RedisAdminReader::new(REDIS_URL, &storage_config(&prefix))?;
    let key = reader.key_for(AdminConfig::TABLE);

    let client = redis::Client::open(REDIS_URL)?;
    let mut conn = client.get_connection()?;
    let _: () = conn.hset_multiple(&key, &[("auth_type", "ldap"), ("timeout", ""), ("log_level", "debug")])?;

    let resolver = ValueResolver::with_env(reader, StaticEnv::new().with("TIMEOUT", "30"));
    let auth = resolver.resolve("AUTH_TYPE", "internal");
    let timeout = resolver.resolve("TIMEOUT", "10");
    let level = resolver.resolve("LOG_LEVEL", "info");

    let _: () = conn.del(&key)?;

    assert_eq!(auth.as_string(), "ldap");
    assert_eq!(auth.source(), ValueSource::Admin);
    assert_eq!(timeout.as_int(), 30);
    assert_eq!(timeout.source(), ValueSource::Environment);
    assert_eq!(level.as_string(), "debug");
    Ok(())
}

#[test]
#[ignore = "requires a local Redis server"]
fn missing_hash_means_no_record() -> ResolverResult<()> {
    let prefix = random_setting_name().to_lowercase();
    let reader = RedisAdminReader::new(REDIS_URL, &storage_config(&prefix))?;

    let response = reader.find(&reader.connection(), AdminConfig::TABLE);

    assert!(response.error().is_none());
    assert!(response.data().is_none());
    Ok(())
}

#[test]
fn unreachable_store_degrades_to_default() {
    let config = StorageConfig {
        redis_url: Some("redis://127.0.0.1:1".to_string()),
        key_prefix: "settings".to_string(),
        timeout_ms: 200,
    };
    let reader = RedisAdminReader::new("redis://127.0.0.1:1", &config).unwrap();
    let resolver = ValueResolver::with_env(reader, StaticEnv::new());

    let value = resolver.resolve("LOG_LEVEL", "info");

    assert_eq!(value.as_string(), "info");
    assert_eq!(value.source(), ValueSource::Default);
}
