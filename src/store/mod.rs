//! Persistent storefront configuration, behind a trait so tests can record
//! deletions without a database.

pub mod postgres;

use async_trait::async_trait;

/// Payment-method code the storefront stores its Monetra settings under.
pub const METHOD_CODE: &str = "monetra_client_ticket";

// Config fields left over from the password-based integrations. Purged once
// a key has been generated; key-based auth supersedes them.
const LEGACY_CREDENTIAL_FIELDS: [&str; 6] = [
    "monetra_username",
    "monetra_ticket_username",
    "monetra_post_username",
    "monetra_password",
    "monetra_ticket_password",
    "monetra_post_password",
];

/// Abstraction over the storefront's configuration storage.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Delete a configuration value by path. Deleting an absent path is not
    /// an error.
    async fn delete(&self, path: &str) -> anyhow::Result<()>;

    /// Liveness probe backing the readiness endpoint.
    async fn ping(&self) -> anyhow::Result<()>;
}

/// Full config paths of the legacy credential fields.
pub fn legacy_credential_paths() -> Vec<String> {
    LEGACY_CREDENTIAL_FIELDS
        .iter()
        .map(|field| format!("payment/{}/{}", METHOD_CODE, field))
        .collect()
}

/// Remove stored credentials from the deprecated password-based
/// integrations.
pub async fn purge_legacy_credentials(store: &dyn ConfigStore) -> anyhow::Result<()> {
    for path in legacy_credential_paths() {
        store.delete(&path).await?;
        tracing::debug!(%path, "deleted legacy credential entry");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_legacy_paths_under_the_payment_namespace() {
        let paths = legacy_credential_paths();

        assert_eq!(paths.len(), 6);
        for path in &paths {
            assert!(path.starts_with("payment/monetra_client_ticket/"));
        }
        assert_eq!(
            paths.iter().filter(|p| p.contains("username")).count(),
            3
        );
        assert_eq!(
            paths.iter().filter(|p| p.contains("password")).count(),
            3
        );
    }
}
