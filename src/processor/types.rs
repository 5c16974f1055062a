use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Auth disposition the processor reports on every call.
pub const AUTH_OK: &str = "AUTH";

/// Soft error: account wants an MFA code with these credentials.
pub const SOFT_MFA_REQUIRED: &str = "ACCT_MFA_REQUIRED";
/// Soft error: account has MFA enforced but not yet set up.
pub const SOFT_MFA_GENERATE: &str = "ACCT_MFA_GENERATE";
/// Soft error: account password has expired.
pub const SOFT_PASS_EXPIRED: &str = "ACCT_PASSEXPIRED";

/// System permission that allows listing boarding profiles.
pub const PERM_PROFILE_LIST: &str = "PROFILE_LIST";

/// Identity and permission lookup result.
///
/// Only the fields this service acts on; the processor sends more.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub code: String,
    #[serde(default)]
    pub msoft_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub profile_id: Option<String>,
    /// Pipe-delimited system permission list.
    #[serde(default)]
    pub sys_perms: Option<String>,
}

impl UserInfo {
    pub fn is_authenticated(&self) -> bool {
        self.code == AUTH_OK
    }

    pub fn can_list_profiles(&self) -> bool {
        self.sys_perms
            .as_deref()
            .map(|perms| perms.split('|').any(|p| p == PERM_PROFILE_LIST))
            .unwrap_or(false)
    }
}

/// Boarding report wrapper. A listing without `report` is undecodable and
/// surfaces as a processor error rather than an empty list.
#[derive(Debug, Deserialize)]
pub struct ProfileListing {
    pub report: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub profile_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Result of a key-creation call. `raw` is handed back to the caller
/// untouched on success.
#[derive(Debug)]
pub struct ApiKeyData {
    pub code: String,
    pub verbiage: Option<String>,
    pub raw: Value,
}

impl ApiKeyData {
    pub fn from_raw(raw: Value) -> Self {
        let code = raw
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let verbiage = raw
            .get("verbiage")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self {
            code,
            verbiage,
            raw,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.code == AUTH_OK
    }

    /// Human-readable failure text for a rejected key request.
    pub fn failure_message(&self) -> String {
        self.verbiage
            .clone()
            .unwrap_or_else(|| "API key creation failed.".to_owned())
    }
}

// The processor encodes ids as strings on some endpoints and numbers on
// others; normalize both to String.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_info_parses_numeric_profile_id() {
        let info: UserInfo = serde_json::from_value(json!({
            "code": "AUTH",
            "profile_id": 42,
            "sys_perms": "TOKEN_ADD|PROFILE_LIST"
        }))
        .unwrap();

        assert!(info.is_authenticated());
        assert_eq!(info.profile_id.as_deref(), Some("42"));
        assert!(info.can_list_profiles());
    }

    #[test]
    fn profile_list_permission_requires_exact_segment() {
        let info: UserInfo = serde_json::from_value(json!({
            "code": "AUTH",
            "sys_perms": "PROFILE_LISTING|TOKEN_ADD"
        }))
        .unwrap();
        assert!(!info.can_list_profiles());

        let info: UserInfo = serde_json::from_value(json!({ "code": "AUTH" })).unwrap();
        assert!(!info.can_list_profiles());
    }

    #[test]
    fn denied_lookup_keeps_soft_code() {
        let info: UserInfo = serde_json::from_value(json!({
            "code": "DENY",
            "msoft_code": "ACCT_MFA_REQUIRED"
        }))
        .unwrap();

        assert!(!info.is_authenticated());
        assert_eq!(info.msoft_code.as_deref(), Some(SOFT_MFA_REQUIRED));
    }

    #[test]
    fn listing_without_report_is_undecodable() {
        let result: Result<ProfileListing, _> = serde_json::from_value(json!({
            "code": "AUTH"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn key_data_keeps_raw_payload_and_falls_back_on_missing_verbiage() {
        let granted = ApiKeyData::from_raw(json!({
            "code": "AUTH",
            "apikey_id": "key_123",
            "apikey_secret": "s3cr3t"
        }));
        assert!(granted.is_authenticated());
        assert_eq!(granted.raw["apikey_secret"], "s3cr3t");

        let denied = ApiKeyData::from_raw(json!({ "code": "DENY" }));
        assert!(!denied.is_authenticated());
        assert_eq!(denied.failure_message(), "API key creation failed.");

        let explained = ApiKeyData::from_raw(json!({
            "code": "DENY",
            "verbiage": "Permission denied."
        }));
        assert_eq!(explained.failure_message(), "Permission denied.");
    }
}
