//! boxoffice-server: HTTP front end for the inventory engine
//!
//! Run with: cargo run --bin boxoffice-server
//! Create:   POST http://localhost:8000/api/v1/events
//! List:     GET  http://localhost:8000/api/v1/events
//! Book:     POST http://localhost:8000/api/v1/events/:id/book?tickets=N

use anyhow::Context;
use boxoffice_api::{router, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.admission_limit);
    let app = router(state);

    info!(
        addr = %config.addr,
        admission_limit = config.admission_limit,
        "starting boxoffice server"
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .await
        .context("server failed")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
