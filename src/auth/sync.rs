//! Cross-instance session synchronization
//!
//! Keeps every open instance consistent with the most recent login or
//! logout performed in any instance. The subscription only carries writes
//! made through *other* store handles, so reconciliation can never feed back
//! into a write loop: this task reads events and updates the in-memory slot,
//! nothing else.

use crate::auth::SessionSlot;
use crate::core::models::Identity;
use crate::storage::{StorageEvent, StorageEvents};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Reconciles the in-memory identity with external session-key changes
pub struct SessionSync;

impl SessionSync {
    /// Spawn the sync task
    ///
    /// Runs until the handle is dropped (which aborts the task) or the
    /// backing store goes away.
    pub fn spawn(
        mut events: StorageEvents,
        session_key: String,
        slot: SessionSlot,
    ) -> SessionSyncHandle {
        let task = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                Self::reconcile(&session_key, &event, &slot);
            }
            debug!("Session sync ended: store closed");
        });

        SessionSyncHandle { task }
    }

    /// Apply one storage event to the identity slot
    ///
    /// Events for other keys are ignored. A removed value means another
    /// instance logged out; a present value that parses replaces the
    /// identity; a value that fails to parse is logged and ignored.
    /// Applying the same value twice is a no-op, so replays are harmless.
    pub fn reconcile(session_key: &str, event: &StorageEvent, slot: &SessionSlot) {
        if event.key != session_key {
            return;
        }

        let Some(raw) = &event.new_value else {
            debug!("Session cleared by another instance");
            *slot.write() = None;
            return;
        };

        match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => {
                debug!(username = %identity.username, "Session updated by another instance");
                *slot.write() = Some(identity);
            }
            Err(err) => {
                warn!(%err, "Ignoring unparseable session from another instance");
            }
        }
    }
}

/// Owner of the running sync task
///
/// Dropping the handle aborts the task, so no listener outlives the
/// instance that subscribed it.
pub struct SessionSyncHandle {
    task: JoinHandle<()>,
}

impl SessionSyncHandle {
    /// Stop the sync task
    pub fn shutdown(self) {
        self.task.abort();
    }
}

impl Drop for SessionSyncHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
