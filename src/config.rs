use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Connection string for the storefront database holding `core_config_data`.
    pub database_url: String,
    /// Base URL of the Monetra REST API.
    /// Set via MONETRA_PROCESSOR_URL env var. Default: the TranSafe test host.
    pub processor_url: String,
    pub admin_key: Option<String>,
    /// Total per-call timeout for processor requests, in seconds.
    /// Set via MONETRA_PROCESSOR_TIMEOUT_SECS env var. Default: 30.
    pub processor_timeout_secs: u64,
    /// Origin allowed to call the admin API from a browser.
    pub dashboard_origin: String,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let admin_key = std::env::var("MONETRA_ADMIN_KEY").ok();

    if admin_key.is_none() {
        let env_mode = std::env::var("MONETRA_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default();
        if env_mode == "production" {
            anyhow::bail!(
                "MONETRA_ADMIN_KEY is not set. The key-generation endpoint must not \
                 run unauthenticated in production."
            );
        }
        eprintln!("⚠️  MONETRA_ADMIN_KEY is not set — the admin API will reject every request until it is configured.");
    }

    Ok(Config {
        port: std::env::var("MONETRA_ADMIN_PORT")
            .unwrap_or_else(|_| "8460".into())
            .parse()
            .unwrap_or(8460),
        database_url: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/storefront".into()),
        processor_url: std::env::var("MONETRA_PROCESSOR_URL")
            .unwrap_or_else(|_| "https://test.transafe.com/api/v1".into()),
        admin_key,
        processor_timeout_secs: std::env::var("MONETRA_PROCESSOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30),
        dashboard_origin: std::env::var("DASHBOARD_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string()),
    })
}
