mod config;
mod errors;
mod export;
mod form;
mod models;
mod photo;
mod preview;
mod render;
mod routes;
mod selection;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::preview::registry::spawn_idle_sweeper;
use crate::routes::build_router;
use crate::selection::{MemorySchemeStore, RedisSchemeStore, SchemeStore};
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

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // Color scheme persistence: Redis when configured, memory otherwise
    let scheme_store: Arc<dyn SchemeStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis scheme store initialized");
            Arc::new(RedisSchemeStore::new(client))
        }
        None => {
            info!("REDIS_URL not set, keeping color scheme in memory");
            Arc::new(MemorySchemeStore::default())
        }
    };

    info!(
        "Preview debounce {}ms, default theme {}, photo limit {} bytes",
        config.debounce_ms, config.default_theme_color, config.max_photo_bytes
    );

    let state = AppState::new(config.clone(), scheme_store);
    spawn_idle_sweeper(state.sessions.clone(), config.session_idle());
    info!("Idle preview sessions expire after {}s", config.session_idle_secs);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
