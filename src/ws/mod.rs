//! WebSocket layer: connection handling and event routing.
//!
//! The WebSocket endpoint at `/ws` is the duplex channel every sender and
//! viewer holds for the lifetime of its session.

pub mod connection;
pub mod handler;
pub mod messages;
