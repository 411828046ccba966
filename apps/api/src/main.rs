use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use atslens::config::Config;
use atslens::profiles::github::GitHubProfileSource;
use atslens::routes::build_router;
use atslens::state::AppState;

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

    info!("Starting ATS Lens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize GitHub profile importer
    let profiles =
        GitHubProfileSource::new(config.github_api_url.clone(), config.github_token.clone())?;
    info!(
        "GitHub profile source initialized ({}, authenticated: {})",
        config.github_api_url,
        config.github_token.is_some()
    );

    let state = AppState::new(config.clone(), Arc::new(profiles));
    info!(
        "Analysis defaults: industry={} threshold={}",
        state.analysis.industry, state.analysis.fuzzy_threshold
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
