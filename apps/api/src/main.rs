mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod profiles;
mod rate_limit;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::PgJobCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::profiles::PgProfileStore;
use crate::rate_limit::RateLimiter;
use crate::recommend::orchestrator::Orchestrator;
use crate::recommend::scorer::HttpScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Data access and scoring behind the trait seams
    let catalog = Arc::new(PgJobCatalog::new(db.clone()));
    let profiles = Arc::new(PgProfileStore::new(db));
    let scorer = Arc::new(HttpScorer::new(
        &config.scoring_url,
        Duration::from_secs(config.scoring_timeout_secs),
    ));
    info!(
        "Scoring backend: {} (timeout {}s)",
        config.scoring_url, config.scoring_timeout_secs
    );

    let orchestrator = Arc::new(Orchestrator::new(catalog.clone(), profiles, scorer));

    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    // Build app state
    let state = AppState {
        orchestrator,
        catalog,
        rate_limiter,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
