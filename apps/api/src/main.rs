mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod profiles;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::careers::default_catalog;
use crate::catalog::explorer::CareerCatalog;
use crate::config::Config;
use crate::matching::rules::CATEGORY_RULES;
use crate::profiles::store::InMemoryProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on an unparseable PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Profiles live only as long as this process
    let profiles = Arc::new(InMemoryProfileStore::new());
    info!("In-memory profile store initialized");

    let catalog = Arc::new(CareerCatalog::new(default_catalog()));
    info!("Career matcher ready ({} category rules)", CATEGORY_RULES.len());

    let state = AppState {
        config: config.clone(),
        profiles,
        catalog,
    };

    // Browser clients are served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
