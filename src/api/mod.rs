//! HTTP layer: the viewer page and system endpoints.
//!
//! Deliberately thin — the relay's real interface is the WebSocket at
//! `/ws`; this router only serves the static viewer page and a health
//! check.

pub mod system;
pub mod viewer;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete HTTP router.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(viewer::routes()).merge(system::routes())
}
