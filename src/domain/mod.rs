//! Domain layer: core types, session registry, and frame broadcast bus.
//!
//! This module contains the server-side domain model including connection
//! identity, the session registry binding connections to display names,
//! the broadcast payload, and the frame bus that fans validated frames out
//! to every live connection.

pub mod connection_id;
pub mod frame_broadcast;
pub mod frame_bus;
pub mod resolution;
pub mod session_registry;

pub use connection_id::ConnectionId;
pub use frame_broadcast::FrameBroadcast;
pub use frame_bus::FrameBus;
pub use resolution::Resolution;
pub use session_registry::SessionRegistry;
