//! Concurrent session storage mapping connections to display names.
//!
//! [`SessionRegistry`] stores the display name announced by each live
//! connection in a `HashMap` protected by a [`tokio::sync::RwLock`]. The
//! registry is informational only: the broadcast path never consults it,
//! since every frame carries its own caller-supplied display name.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::ConnectionId;

/// Central store of announced sessions.
///
/// Uses a `RwLock<HashMap<...>>`; values are immutable once inserted (there
/// is no rename operation), so no per-entry locking is needed.
///
/// # Concurrency
///
/// - Concurrent `register`/`unregister` for different connections never
///   corrupt the map or lose entries.
/// - `lookup` and `len` may run concurrently with each other.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<ConnectionId, String>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or overwrites the mapping for `id`.
    ///
    /// Display names are not required to be unique across connections.
    /// Emits an info-level log entry as part of the contract.
    pub async fn register(&self, id: ConnectionId, display_name: String) {
        let mut map = self.sessions.write().await;
        tracing::info!(connection = %id, user = %display_name, "client connected");
        map.insert(id, display_name);
    }

    /// Removes and returns the mapping for `id`, or `None` if absent.
    ///
    /// Idempotent: a second call for the same connection is a silent no-op.
    /// The info-level log entry is emitted only when a mapping existed, so a
    /// connection that never announced disconnects without a named log line.
    pub async fn unregister(&self, id: ConnectionId) -> Option<String> {
        let mut map = self.sessions.write().await;
        let removed = map.remove(&id);
        if let Some(ref user) = removed {
            tracing::info!(connection = %id, user = %user, "client disconnected");
        }
        removed
    }

    /// Returns a clone of the display name registered for `id`, if any.
    pub async fn lookup(&self, id: ConnectionId) -> Option<String> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Returns the number of announced sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session has been announced.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
