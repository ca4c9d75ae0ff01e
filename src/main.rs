//! Multi-tenant MCP gateway for the Asana API.
//!
//! This binary serves the stateless HTTP transport: `POST /mcp` dispatches
//! MCP requests authenticated per request with the `X-Asana-Access-Token`
//! header, `GET /health` reports liveness, and any other path returns the
//! capability document.
//!
//! # Usage
//!
//! ```bash
//! asana-gateway --bind 0.0.0.0:3000
//! ```

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use asana_gateway::{transport, GatewayConfig, StatefulSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::parse();

    if config.session_mode {
        // Kept for parity with the legacy single-tenant deployment; the
        // per-request credential model cannot back it, so this always exits
        // with an error.
        StatefulSession::initialize(&config)?;
        return Ok(());
    }

    let app = transport::router(config.clone()).layer(TraceLayer::new_for_http());

    tracing::info!(bind = %config.bind, "asana-gateway listening");
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
