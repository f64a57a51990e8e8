//! Resolves runtime settings through a fallback chain: an override stored in
//! the administrative configuration record, then the process environment,
//! then a caller-supplied default.

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

pub use crate::core::{resolve_from_admin_or_default, ResolvedValue, ValueResolver, ValueSource};
pub use crate::utils::{ResolverError, ResolverResult};
