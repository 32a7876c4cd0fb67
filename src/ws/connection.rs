//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching inbound client events and forwarding broadcast frames.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::messages::{ClientEvent, ServerEvent};
use crate::domain::{ConnectionId, FrameBroadcast};
use crate::service::{ANONYMOUS_USER, RelayService};

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads events from the client: `client_connected` registers the
///   session, `screen_data` runs the validate-then-relay path. Malformed
///   input is logged and dropped without disturbing the connection.
/// - Forwards frames from the [`broadcast::Receiver`] to the client as
///   `screen_update` events, skipping this connection's own frames unless
///   `echo_to_sender` is set.
///
/// On exit the connection is unregistered; double teardown is a no-op.
pub async fn run_connection(
    socket: WebSocket,
    mut frame_rx: broadcast::Receiver<FrameBroadcast>,
    service: Arc<RelayService>,
    echo_to_sender: bool,
) {
    let id = ConnectionId::new();
    tracing::info!(connection = %id, "viewer connected");

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming event from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_client_event(&service, id, &text).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Frame from the bus
            frame = frame_rx.recv() => {
                match frame {
                    Ok(frame) => {
                        if frame.origin == id && !echo_to_sender {
                            continue;
                        }
                        let update = ServerEvent::ScreenUpdate {
                            user: &frame.user,
                            image: &frame.image,
                        };
                        let json = serde_json::to_string(&update).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(connection = %id, skipped = n, "viewer lagged behind frame bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    service.disconnect(id).await;
    tracing::debug!(connection = %id, "ws connection closed");
}

/// Dispatches one inbound text event.
///
/// Every failure is terminal for this event only: it is logged with the
/// sender's display name when one is available and otherwise ignored, so a
/// malformed or rejected frame never affects other connections.
async fn handle_client_event(service: &RelayService, id: ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(connection = %id, %err, "unparseable client event dropped");
            return;
        }
    };

    match event {
        ClientEvent::ClientConnected { user } => {
            service.announce(id, user).await;
        }
        ClientEvent::ScreenData { user, image } => {
            if let Err(err) = service.handle_frame(id, user.as_deref(), &image).await {
                let user = user.as_deref().unwrap_or(ANONYMOUS_USER);
                tracing::error!(
                    connection = %id,
                    user,
                    reason = err.reason(),
                    %err,
                    "frame rejected"
                );
            }
        }
    }
}
