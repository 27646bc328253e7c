mod config;
mod content;
mod errors;
mod render;
mod routes;
mod state;
mod variant;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::ContentRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Static page copy, checked once before serving anything
    let registry = ContentRegistry::builtin();
    registry
        .validate()
        .context("Built-in content failed validation")?;

    for (prefix, variant) in config.host_patterns.entries() {
        info!("Host prefix '{prefix}' -> {variant}");
    }
    match &config.site_domain {
        Some(domain) => info!("Cross-variant links use site domain {domain}"),
        None => info!("SITE_DOMAIN not set; cross-variant links use /v/:variant"),
    }

    let state = AppState::new(config.clone(), registry);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(config.bind_addr, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
