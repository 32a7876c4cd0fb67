//! Relay service: orchestrates session lifecycle and frame fan-out.

use std::sync::Arc;

use crate::domain::{ConnectionId, FrameBroadcast, FrameBus, SessionRegistry};
use crate::error::FrameError;
use crate::frame::FrameValidator;

/// Display name recorded when a client never supplied one.
pub const ANONYMOUS_USER: &str = "unknown";

/// Orchestration layer for the relay.
///
/// Stateless coordinator: owns references to [`SessionRegistry`] for session
/// lifecycle and [`FrameBus`] for fan-out, plus the [`FrameValidator`] gate.
/// Every frame follows the pattern: validate → publish → log. The registry
/// is never consulted on the frame path; frames carry their own
/// caller-supplied display name.
#[derive(Debug, Clone)]
pub struct RelayService {
    sessions: Arc<SessionRegistry>,
    frames: FrameBus,
    validator: FrameValidator,
}

impl RelayService {
    /// Creates a new `RelayService`.
    #[must_use]
    pub fn new(sessions: Arc<SessionRegistry>, frames: FrameBus, validator: FrameValidator) -> Self {
        Self {
            sessions,
            frames,
            validator,
        }
    }

    /// Returns a reference to the inner [`FrameBus`].
    #[must_use]
    pub fn frames(&self) -> &FrameBus {
        &self.frames
    }

    /// Returns a reference to the inner [`SessionRegistry`].
    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    /// Registers the session announced by a connection.
    ///
    /// An absent display name is recorded as [`ANONYMOUS_USER`]. Announcing
    /// twice overwrites the previous name.
    pub async fn announce(&self, id: ConnectionId, user: Option<String>) {
        let name = user.unwrap_or_else(|| ANONYMOUS_USER.to_string());
        self.sessions.register(id, name).await;
    }

    /// Validates one frame and, on success, fans it out to all subscribers.
    ///
    /// The forwarded bytes are the original payload, unchanged. Returns the
    /// number of receivers the frame was delivered to.
    ///
    /// # Errors
    ///
    /// Returns the [`FrameError`] naming the validation step that failed.
    /// The frame is dropped; no viewer sees it and the sender is not
    /// notified.
    pub async fn handle_frame(
        &self,
        id: ConnectionId,
        user: Option<&str>,
        payload: &str,
    ) -> Result<usize, FrameError> {
        let frame = self.validator.validate(payload)?;
        let user = user.unwrap_or(ANONYMOUS_USER);

        let delivered = self
            .frames
            .publish(FrameBroadcast::new(id, user, frame.payload()));
        tracing::debug!(
            connection = %id,
            user,
            delivered,
            resized = frame.resized(),
            "frame relayed"
        );
        Ok(delivered)
    }

    /// Handles a connection teardown.
    ///
    /// Idempotent: repeated calls for the same connection are no-ops after
    /// the first. Returns the display name that was registered, if any.
    pub async fn disconnect(&self, id: ConnectionId) -> Option<String> {
        self.sessions.unregister(id).await
    }
}
