use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::value::SettingValue;
use crate::utils::ResolverResult;

/// Administrative configuration row that can override runtime settings.
///
/// Known columns are typed fields; any other override lives in `extra`.
/// Every field is optional so partially populated records still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub config_id: Option<Uuid>,
    pub enable_application_admin: Option<String>,
    pub auth_type: Option<String>,
    pub disable_broker: Option<String>,
    pub jwt_secret_key: Option<String>,
    pub keycloak_base_path: Option<String>,
    pub keycloak_client_id: Option<String>,
    pub keycloak_client_secret: Option<String>,
    pub keycloak_realm: Option<String>,
    pub keycloak_otp: Option<String>,
    pub ldap_base: Option<String>,
    pub ldap_host: Option<String>,
    pub ldap_port: Option<String>,
    pub ldap_use_ssl: Option<String>,
    pub ldap_skip_tls: Option<String>,
    pub ldap_insecure_skip_verify: Option<String>,
    pub ldap_bind_dn: Option<String>,
    pub ldap_bind_password: Option<String>,
    pub ldap_user_filter: Option<String>,
    pub ldap_admin_group: Option<String>,
    pub manager_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AdminConfig {
    /// Table (or key) the record is stored under
    pub const TABLE: &'static str = "admin_config";

    /// Build a record from raw string fields, as stored in a hash.
    /// Empty fields are unset and skipped, so they never fail typed columns.
    pub fn from_fields(fields: HashMap<String, String>) -> ResolverResult<Self> {
        let object = fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name, Value::String(value)))
            .collect::<serde_json::Map<_, _>>();
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Add or replace an override outside the known columns
    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Lower-cased setting name to value, skipping absent columns and
    /// values that are not text, boolean or integer
    pub fn to_map(&self) -> ResolverResult<HashMap<String, SettingValue>> {
        let Value::Object(object) = serde_json::to_value(self)? else {
            return Ok(HashMap::new());
        };

        let mut map = HashMap::with_capacity(object.len());
        for (name, value) in object {
            let value = match value {
                Value::String(text) => SettingValue::Text(text),
                Value::Bool(flag) => SettingValue::Flag(flag),
                Value::Number(number) => match number.as_i64() {
                    Some(number) => SettingValue::Number(number),
                    None => continue,
                },
                _ => continue,
            };

            let key = name.to_lowercase();
            match map.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => {
                    // An empty entry never hides a set one; between two set
                    // entries the already lower-case name wins.
                    if value.is_empty() {
                        continue;
                    }
                    if !slot.get().is_empty() {
                        tracing::warn!(
                            setting = %slot.key(),
                            name = %name,
                            event = "setting_name_collision",
                            "Admin config holds the same setting under names differing only by case"
                        );
                        if name != *slot.key() {
                            continue;
                        }
                    }
                    slot.insert(value);
                }
            }
        }

        Ok(map)
    }
}
