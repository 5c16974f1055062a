use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monetra_admin::processor::ProcessorClient;
use monetra_admin::store::postgres::PgConfigStore;
use monetra_admin::{api, cli, config, store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "monetra_admin=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Serve { port }) => {
            let port = port.unwrap_or(cfg.port);
            run_server(cfg, port).await
        }
        Some(cli::Commands::PurgeLegacy) => {
            let config_store = PgConfigStore::connect(&cfg.database_url).await?;
            store::purge_legacy_credentials(&config_store).await?;
            println!("Legacy credential entries removed.");
            Ok(())
        }
        None => {
            let port = cfg.port;
            run_server(cfg, port).await
        }
    };

    if let Err(ref e) = result {
        eprintln!("Error: {:?}", e);
    }
    result
}

async fn run_server(cfg: config::Config, port: u16) -> anyhow::Result<()> {
    tracing::info!("Connecting to storefront database...");
    let config_store = PgConfigStore::connect(&cfg.database_url).await?;

    tracing::info!("Running migrations...");
    config_store.migrate().await?;

    let processor = ProcessorClient::new(
        &cfg.processor_url,
        Duration::from_secs(cfg.processor_timeout_secs),
    )?;
    tracing::info!(processor_url = %cfg.processor_url, "Processor client ready");

    let dashboard_origin = cfg.dashboard_origin.clone();

    let state = Arc::new(AppState {
        processor,
        config_store: Arc::new(config_store),
        config: cfg,
    });

    let app = axum::Router::new()
        // Health endpoints (no auth)
        .route("/healthz", axum::routing::get(|| async { "ok" }))
        .route("/readyz", axum::routing::get(readiness_check))
        // Admin API — nested under /api/v1 (preserves middleware + fallback)
        .nest("/api/v1", api::api_router(state.clone()))
        .with_state(state)
        // Form bodies are tiny; anything bigger is not a credential submission
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_layer(&dashboard_origin))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn(security_headers_middleware));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Monetra admin service listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.config_store.ping().await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!("readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
        }
    }
}

/// Restrict CORS to the admin dashboard origin (plus localhost for dev).
fn cors_layer(dashboard_origin: &str) -> CorsLayer {
    use axum::http::{HeaderName, Method};
    use tower_http::cors::AllowOrigin;

    let dashboard_origin = dashboard_origin.to_owned();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            let origin_str = origin.to_str().unwrap_or("");
            origin_str == dashboard_origin
                || origin_str.starts_with("http://localhost:")
                || origin_str.starts_with("http://127.0.0.1:")
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-admin-key"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(true)
}

/// Middleware: injects a unique X-Request-Id into every response.
/// This allows operators to correlate errors with service logs.
async fn request_id_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let req_id = uuid::Uuid::new_v4().to_string();
    let mut resp = next.run(req).await;
    if let Ok(val) = axum::http::HeaderValue::from_str(&req_id) {
        resp.headers_mut().insert("x-request-id", val);
    }
    resp
}

/// Middleware: injects security headers into every response.
async fn security_headers_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let mut resp = next.run(req).await;
    let headers = resp.headers_mut();

    // Responses carry key material; keep them out of caches and frames
    headers.insert("X-Content-Type-Options", "nosniff".parse().unwrap());
    headers.insert("X-Frame-Options", "DENY".parse().unwrap());
    headers.insert("Cache-Control", "no-store".parse().unwrap());
    headers.insert("Referrer-Policy", "no-referrer".parse().unwrap());
    headers.remove("Server");

    resp
}
