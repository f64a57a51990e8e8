use anyhow::{bail, Context};
use setting_resolver::config::{load_config, Settings};
use setting_resolver::storage::{InMemoryAdminReader, RedisAdminReader};
use setting_resolver::utils::{init_logging, log_error};
use setting_resolver::{ResolvedValue, ResolverError, ValueResolver};

const USAGE: &str = "usage: setting-resolver [--bool | --int] <NAME> [DEFAULT]";

/// Typed form the caller asked for
enum Output {
    Text,
    Bool,
    Int,
}

fn main() -> anyhow::Result<()> {
    let settings = load_config().map_err(ResolverError::Config)?;
    init_logging(&settings.log_level)?;

    let mut output = Output::Text;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--bool" => output = Output::Bool,
            "--int" => output = Output::Int,
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next().context(USAGE)?;
    let default = positional.next().unwrap_or_default();

    let value = resolve(&settings, &name, &default);
    tracing::info!(setting = %name, source = %value.source(), "Setting resolved");

    match output {
        Output::Text => println!("{}", value.as_string()),
        Output::Bool => println!("{}", value.as_bool()),
        Output::Int => println!("{}", value.as_int()),
    }

    Ok(())
}

fn resolve(settings: &Settings, name: &str, default: &str) -> ResolvedValue {
    if let Some(url) = settings.storage.redis_url.as_deref() {
        match RedisAdminReader::new(url, &settings.storage) {
            Ok(reader) => return ValueResolver::new(reader).resolve(name, default),
            Err(e) => log_error("Ignoring override store with invalid URL", Some(&e as &dyn std::error::Error)),
        }
    }

    ValueResolver::new(InMemoryAdminReader::new()).resolve(name, default)
}
