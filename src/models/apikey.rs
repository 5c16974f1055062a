use chrono::Utc;
use serde::Serialize;

use crate::processor::types::ProfileEntry;

/// Admin-scope permissions granted to every generated key.
pub const APIKEY_ADMIN_PERMS: [&str; 6] = [
    "TOKEN_ADD",
    "TOKEN_LIST",
    "TOKEN_EDIT",
    "TOKEN_DEL",
    "TRAN_DETAIL",
    "TICKETREQUEST",
];

/// Transaction-scope permissions granted to every generated key.
pub const APIKEY_TRANS_PERMS: [&str; 7] = [
    "SALE",
    "PREAUTH",
    "PREAUTHCOMPLETE",
    "CAPTURE",
    "REFUND",
    "REVERSAL",
    "VOID",
];

/// Key-creation request body. Permission lists go over the wire
/// pipe-delimited, the way the processor expects them.
#[derive(Debug, Serialize)]
pub struct ApiKeyOptions {
    #[serde(rename = "type")]
    pub key_type: &'static str,
    pub name: String,
    pub admin_perms: String,
    pub trans_perms: String,
    pub expire_sec: &'static str,
    pub profile_id: String,
}

impl ApiKeyOptions {
    /// Fixed-permission, non-expiring key request for a profile. The name
    /// embeds the current Unix timestamp so repeated generations stay
    /// distinguishable in the processor's key list.
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            key_type: "profile",
            name: format!("Magento Key {}", Utc::now().timestamp()),
            admin_perms: APIKEY_ADMIN_PERMS.join("|"),
            trans_perms: APIKEY_TRANS_PERMS.join("|"),
            expire_sec: "infinite",
            profile_id: profile_id.into(),
        }
    }
}

/// One selectable profile, as rendered in the operator's selection prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: String,
    pub display_name: String,
}

impl From<&ProfileEntry> for ProfileSummary {
    fn from(entry: &ProfileEntry) -> Self {
        let mut display_name = entry.profile_name.clone();
        if let Some(name) = &entry.name {
            display_name.push_str(&format!(" ({})", name));
        }
        Self {
            id: entry.id.clone(),
            display_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_options_carry_fixed_permission_bundle() {
        let options = ApiKeyOptions::for_profile("42");

        assert_eq!(options.key_type, "profile");
        assert_eq!(options.expire_sec, "infinite");
        assert_eq!(options.profile_id, "42");
        assert_eq!(
            options.admin_perms,
            "TOKEN_ADD|TOKEN_LIST|TOKEN_EDIT|TOKEN_DEL|TRAN_DETAIL|TICKETREQUEST"
        );
        assert_eq!(
            options.trans_perms,
            "SALE|PREAUTH|PREAUTHCOMPLETE|CAPTURE|REFUND|REVERSAL|VOID"
        );
    }

    #[test]
    fn key_name_embeds_a_timestamp() {
        let options = ApiKeyOptions::for_profile("1");
        let suffix = options.name.strip_prefix("Magento Key ").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn display_name_suffixes_the_account_name_when_present() {
        let plain = ProfileEntry {
            id: "7".into(),
            profile_name: "Main Store".into(),
            name: None,
        };
        let named = ProfileEntry {
            id: "8".into(),
            profile_name: "Outlet".into(),
            name: Some("outlet_llc".into()),
        };

        assert_eq!(ProfileSummary::from(&plain).display_name, "Main Store");
        assert_eq!(
            ProfileSummary::from(&named).display_name,
            "Outlet (outlet_llc)"
        );
    }
}
