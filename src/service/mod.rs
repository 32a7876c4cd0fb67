//! Service layer: relay orchestration.
//!
//! [`RelayService`] coordinates session lifecycle, gates every frame through
//! the validator, and emits accepted frames through the
//! [`crate::domain::FrameBus`].

pub mod relay_service;

pub use relay_service::{ANONYMOUS_USER, RelayService};
