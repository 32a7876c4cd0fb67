//! # screencast-gateway
//!
//! WebSocket relay that fans out validated screen-capture frames to live
//! viewers. Senders push encoded still images over a persistent connection;
//! every other live connection receives the mirrored feed in real time.
//!
//! Malformed or mis-sized input never reaches a viewer: each frame passes a
//! decode-and-normalize gate before fan-out, and every frame-path failure is
//! contained to that single frame.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket senders and viewers)
//!     │
//!     ├── WS Handler (ws/)
//!     │
//!     ├── RelayService (service/)
//!     ├── FrameValidator (frame/)
//!     │
//!     ├── FrameBus (domain/)
//!     └── SessionRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod frame;
pub mod service;
pub mod ws;
