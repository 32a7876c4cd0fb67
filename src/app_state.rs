//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::RelayService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay service owning the session registry, validator, and frame bus.
    pub relay: Arc<RelayService>,
    /// Whether a sender receives its own frames back.
    pub echo_to_sender: bool,
}
