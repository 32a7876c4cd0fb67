//! Broadcast payload for one validated frame.

use std::sync::Arc;

use super::ConnectionId;

/// One validated frame as it travels through the [`super::FrameBus`].
///
/// The display name and encoded image are `Arc`'d so that fanning a frame
/// out to N viewers clones two pointers, not the (potentially hundreds of
/// kilobytes of) payload. The image is the sender's original encoded bytes,
/// forwarded verbatim after validation.
#[derive(Debug, Clone)]
pub struct FrameBroadcast {
    /// Connection the frame arrived on. Receivers compare this against
    /// their own id to implement sender exclusion.
    pub origin: ConnectionId,
    /// Caller-supplied display name, not sanitized and not required to
    /// match the session registry.
    pub user: Arc<str>,
    /// Encoded image payload exactly as received, data-URI prefix included.
    pub image: Arc<str>,
}

impl FrameBroadcast {
    /// Creates a new broadcast payload.
    #[must_use]
    pub fn new(origin: ConnectionId, user: &str, image: &str) -> Self {
        Self {
            origin,
            user: Arc::from(user),
            image: Arc::from(image),
        }
    }
}
