use async_trait::async_trait;
use sqlx::PgPool;

use super::ConfigStore;

/// Storefront configuration table, Postgres-backed.
///
/// Production deployments point `DATABASE_URL` at the storefront's own
/// database; the bundled migration only bootstraps the table for
/// standalone and dev setups.
#[derive(Clone)]
pub struct PgConfigStore {
    pool: PgPool,
}

impl PgConfigStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run pending migrations from the migrations/ directory.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for PgConfigStore {
    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM core_config_data WHERE path = $1")
            .bind(path)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
