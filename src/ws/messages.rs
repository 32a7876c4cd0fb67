//! WebSocket event types: inbound client events and outbound updates.
//!
//! Events are JSON objects tagged by an `event` field in snake_case, e.g.
//!
//! ```json
//! {"event": "screen_data", "user": "alice", "image": "data:image/jpeg;base64,..."}
//! ```

use serde::{Deserialize, Serialize};

/// Events a client may send over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    /// A sender announces itself with a display name.
    ClientConnected {
        /// Display name to register. Absent is treated as `"unknown"`.
        user: Option<String>,
    },
    /// A sender pushes one encoded screen frame.
    ScreenData {
        /// Display name the frame claims, independent of any registration.
        user: Option<String>,
        /// Encoded image payload, optionally data-URI prefixed.
        image: String,
    },
}

/// Events the relay sends to clients.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerEvent<'a> {
    /// One validated frame, fanned out to every live viewer.
    ScreenUpdate {
        /// Display name the sender supplied with the frame.
        user: &'a str,
        /// Encoded image payload, byte-identical to what the sender sent.
        image: &'a str,
    },
}
