//! screencast-gateway server entry point.
//!
//! Starts the Axum server with the WebSocket relay endpoint and the static
//! viewer page.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use screencast_gateway::api;
use screencast_gateway::app_state::AppState;
use screencast_gateway::config::RelayConfig;
use screencast_gateway::domain::{FrameBus, SessionRegistry};
use screencast_gateway::frame::FrameValidator;
use screencast_gateway::service::RelayService;
use screencast_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env();
    tracing::info!(
        addr = %config.listen_addr,
        target = %config.target_resolution,
        "starting screencast-gateway"
    );

    // Build domain layer
    let sessions = Arc::new(SessionRegistry::new());
    let frames = FrameBus::new(config.frame_channel_capacity);
    let validator = FrameValidator::new(config.target_resolution);

    // Build service layer
    let relay = Arc::new(RelayService::new(sessions, frames, validator));

    // Build application state
    let app_state = AppState {
        relay,
        echo_to_sender: config.echo_to_sender,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
