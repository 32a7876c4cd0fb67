//! Shared helpers for integration tests.
#![allow(clippy::panic, dead_code)]

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures_util::StreamExt;
use image::{DynamicImage, ImageFormat};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use screencast_gateway::api;
use screencast_gateway::app_state::AppState;
use screencast_gateway::domain::{FrameBus, Resolution, SessionRegistry};
use screencast_gateway::frame::FrameValidator;
use screencast_gateway::service::RelayService;
use screencast_gateway::ws::handler::ws_handler;

/// Client-side WebSocket stream type.
pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Builds the full application router with a 1280x720 target resolution.
pub fn test_app(echo_to_sender: bool) -> Router {
    let sessions = Arc::new(SessionRegistry::new());
    let frames = FrameBus::new(64);
    let validator = FrameValidator::new(Resolution::new(1280, 720));
    let relay = Arc::new(RelayService::new(sessions, frames, validator));

    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .with_state(AppState {
            relay,
            echo_to_sender,
        })
}

/// Serves the test app on an ephemeral port, returning its `ws://` URL.
pub async fn spawn_server(echo_to_sender: bool) -> String {
    let app = test_app(echo_to_sender);
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("failed to read test listener address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("ws://127.0.0.1:{}", addr.port())
}

/// Connects a WebSocket client to the served app.
pub async fn connect(url: &str) -> WsClient {
    let Ok((ws, _)) = tokio_tungstenite::connect_async(format!("{url}/ws")).await else {
        panic!("failed to connect websocket client");
    };
    ws
}

/// Encodes a blank image of the given size as a base64 string.
pub fn encoded_frame(width: u32, height: u32, format: ImageFormat) -> String {
    let img = DynamicImage::new_rgb8(width, height);
    let mut bytes = Vec::new();
    let Ok(()) = img.write_to(&mut Cursor::new(&mut bytes), format) else {
        panic!("image encoding failed");
    };
    BASE64.encode(&bytes)
}

/// Waits for the next text message and parses it as JSON.
///
/// Skips over control frames. Panics if nothing arrives within 5 seconds.
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    let deadline = Duration::from_secs(5);
    loop {
        let next = tokio::time::timeout(deadline, ws.next()).await;
        let Ok(msg) = next else {
            panic!("timed out waiting for a websocket message");
        };
        let Some(Ok(msg)) = msg else {
            panic!("websocket stream ended unexpectedly");
        };
        if let Message::Text(text) = msg {
            let Ok(value) = serde_json::from_str(&text) else {
                panic!("received unparseable message: {text}");
            };
            return value;
        }
    }
}

/// Asserts that no text message arrives within the given window.
pub async fn expect_silence(ws: &mut WsClient, window: Duration) {
    let result = tokio::time::timeout(window, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return text,
                Some(Ok(_)) => {}
                Some(Err(_)) | None => futures_util::future::pending().await,
            }
        }
    })
    .await;
    if let Ok(text) = result {
        panic!("expected silence but received: {text}");
    }
}
