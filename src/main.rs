//! Credibility Guard binary entrypoint.
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.
//!
//! See `README.md` for quickstart and `DESIGN.md` for architecture notes.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credibility_guard::api::AppState;
use credibility_guard::create_router;
use credibility_guard::heuristics::Heuristics;
use credibility_guard::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("credibility_guard=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    // This enables HEURISTICS_CONFIG_PATH / PORT from .env.
    let _ = dotenvy::dotenv();
    init_tracing();

    let heuristics = Arc::new(Heuristics::load_or_seed());
    let metrics = Metrics::init();
    let state = AppState::new(heuristics);
    let app = create_router(state).merge(metrics.router());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "credibility guard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
