//! Broadcast channel for validated frames.
//!
//! [`FrameBus`] wraps a [`tokio::sync::broadcast`] channel. Every validated
//! frame is published through the bus, and each WebSocket connection holds
//! one receiver. The receiver set at publish time is the broadcast group:
//! a connection that disconnected before the send is excluded, one that
//! connects after the send does not see that frame.

use tokio::sync::broadcast;

use super::FrameBroadcast;

/// Broadcast bus for [`FrameBroadcast`]s.
///
/// Backed by a `tokio::broadcast` ring of configurable capacity. The ring
/// doubles as the bounded per-viewer queue: a receiver that falls more than
/// `capacity` frames behind skips the oldest frames (`RecvError::Lagged`)
/// and resumes at the live edge, so one slow viewer never stalls the relay.
#[derive(Debug, Clone)]
pub struct FrameBus {
    sender: broadcast::Sender<FrameBroadcast>,
}

impl FrameBus {
    /// Creates a new `FrameBus` with the given ring capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes a frame to all subscribers.
    ///
    /// Returns the number of receivers the frame was delivered to. With no
    /// active receivers the frame is silently dropped — frames are ephemeral
    /// and never buffered for future viewers.
    pub fn publish(&self, frame: FrameBroadcast) -> usize {
        self.sender.send(frame).unwrap_or(0)
    }

    /// Creates a new receiver that will observe all future frames.
    ///
    /// Each WebSocket connection calls this once at upgrade time.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FrameBroadcast> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
