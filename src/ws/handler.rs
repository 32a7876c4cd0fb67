//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /ws` — Upgrade HTTP connection to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let frame_rx = state.relay.frames().subscribe();
    let service = std::sync::Arc::clone(&state.relay);
    let echo_to_sender = state.echo_to_sender;

    ws.on_upgrade(move |socket| run_connection(socket, frame_rx, service, echo_to_sender))
}
