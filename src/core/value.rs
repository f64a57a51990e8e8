use std::error::Error;
use std::fmt;

use crate::utils::log_error;

/// Raw value of a setting before any typed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Plain text, as read from the environment, a default, or a text column
    Text(String),
    /// Boolean column of the administrative record
    Flag(bool),
    /// Integer column of the administrative record
    Number(i64),
}

impl SettingValue {
    /// Whether this value counts as "not set" when deciding fallbacks
    pub fn is_empty(&self) -> bool {
        matches!(self, SettingValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(text) => f.write_str(text),
            SettingValue::Flag(flag) => write!(f, "{}", flag),
            SettingValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Flag(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Number(value)
    }
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Override stored in the administrative record
    Admin,
    /// Process environment variable
    Environment,
    /// Default supplied by the caller
    Default,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Admin => "admin",
            ValueSource::Environment => "environment",
            ValueSource::Default => "default",
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A setting produced by the fallback chain, with lenient typed accessors.
///
/// None of the accessors fail: conversions that cannot succeed fall back to
/// the zero value of the requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    value: SettingValue,
    source: ValueSource,
}

impl ResolvedValue {
    pub fn new(value: impl Into<SettingValue>, source: ValueSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// Source that won the fallback chain
    pub fn source(&self) -> ValueSource {
        self.source
    }

    /// Raw value as it was resolved
    pub fn raw(&self) -> &SettingValue {
        &self.value
    }

    /// String form of the value
    pub fn as_string(&self) -> String {
        self.value.to_string()
    }

    /// `true` for "true" in any case or "1", `false` for anything else
    pub fn as_bool(&self) -> bool {
        parse_flag(&self.as_string())
    }

    /// Base-10 integer form of the value, or 0 when it does not parse.
    /// Parse failures are logged.
    pub fn as_int(&self) -> i64 {
        parse_number(&self.as_string())
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

pub(crate) fn parse_flag(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text == "1"
}

pub(crate) fn parse_number(text: &str) -> i64 {
    let parsed = text.parse::<i64>();
    log_error(
        &format!("Error on convert \"{}\" to int", text),
        parsed.as_ref().err().map(|e| e as &dyn Error),
    );
    parsed.unwrap_or_default()
}
