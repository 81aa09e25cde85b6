mod config;
mod documents;
mod errors;
mod matching;
mod routes;
mod state;
mod truthy;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Matcher API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone());
    info!("Document parser initialized (backend: {})", state.parser.backend());
    info!(
        "CORS origin: {:?}, upload limit: {} bytes",
        config.frontend_origin, config.upload_limit_bytes
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.frontend_origin.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Backend running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
