//! Core functionality for the setting resolver.
//! This module contains the fallback chain (administrative override,
//! environment, default) and the value types it produces.

mod admin;
mod env;
mod resolver;
mod value;

pub use admin::AdminConfig;
pub use env::{env_or_default, env_or_default_bool, env_or_default_int, EnvSource, ProcessEnv, StaticEnv};
pub use resolver::{resolve_from_admin_or_default, ValueResolver};
pub use value::{ResolvedValue, SettingValue, ValueSource};
