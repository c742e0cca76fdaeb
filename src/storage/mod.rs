//! Local key-value storage
//!
//! This module provides the persistence layer: a shared string key-value
//! store opened through per-instance handles. Each handle stands for one
//! running instance of the application, the way a browser tab is one
//! instance over shared local storage. Writes made through one handle are broadcast to
//! subscribers on every *other* handle; a handle never observes its own
//! writes, which is the property the session-sync layer relies on to avoid
//! feedback loops.

pub mod file;

use crate::utils::error::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use file::FileSnapshot;

/// Capacity of the change-notification channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change to one key, as seen by other instances
#[derive(Debug, Clone)]
pub struct StorageEvent {
    /// Key that changed
    pub key: String,
    /// Value after the change; `None` means the key was removed
    pub new_value: Option<String>,
    /// Handle that performed the write
    pub origin: Uuid,
}

struct StoreInner {
    map: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
    snapshot: Option<FileSnapshot>,
}

/// Shared key-value store
///
/// Cloneable; all clones and all handles see the same data.
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<StoreInner>,
}

impl LocalStore {
    /// Create a purely in-memory store
    pub fn in_memory() -> Self {
        debug!("Opening in-memory store");
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                map: RwLock::new(HashMap::new()),
                events,
                snapshot: None,
            }),
        }
    }

    /// Create a store backed by a JSON snapshot file
    ///
    /// An existing snapshot is loaded; a corrupt one degrades to an empty
    /// store with a warning. Every write is flushed to the file before it
    /// returns.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot = FileSnapshot::new(path.as_ref());
        let map = snapshot.load();
        info!(path = %path.as_ref().display(), keys = map.len(), "Opened file-backed store");

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            inner: Arc::new(StoreInner {
                map: RwLock::new(map),
                events,
                snapshot: Some(snapshot),
            }),
        })
    }

    /// Open a handle onto this store
    ///
    /// Each handle gets a fresh identity; events carry the identity of the
    /// writing handle so subscribers can skip their own writes.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Arc::clone(&self.inner),
            id: Uuid::new_v4(),
        }
    }
}

/// One instance's view of the shared store
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<StoreInner>,
    id: Uuid,
}

impl StoreHandle {
    /// Identity of this handle
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read a value
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.map.read().get(key).cloned()
    }

    /// Write a value, flushing any file snapshot before returning
    ///
    /// The in-memory map only changes once the snapshot write has
    /// succeeded, so a failed write leaves both views unchanged.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        {
            let mut map = self.inner.map.write();
            if let Some(snapshot) = &self.inner.snapshot {
                let mut next = map.clone();
                next.insert(key.to_string(), value.to_string());
                snapshot.persist(&next)?;
                *map = next;
            } else {
                map.insert(key.to_string(), value.to_string());
            }
        }
        self.notify(key, Some(value.to_string()));
        Ok(())
    }

    /// Remove a key, flushing any file snapshot before returning
    pub fn remove(&self, key: &str) -> Result<()> {
        let removed = {
            let mut map = self.inner.map.write();
            if !map.contains_key(key) {
                false
            } else if let Some(snapshot) = &self.inner.snapshot {
                let mut next = map.clone();
                next.remove(key);
                snapshot.persist(&next)?;
                *map = next;
                true
            } else {
                map.remove(key);
                true
            }
        };
        if removed {
            self.notify(key, None);
        }
        Ok(())
    }

    /// Subscribe to changes made through other handles
    pub fn subscribe(&self) -> StorageEvents {
        StorageEvents {
            rx: self.inner.events.subscribe(),
            local: self.id,
        }
    }

    fn notify(&self, key: &str, new_value: Option<String>) {
        let event = StorageEvent {
            key: key.to_string(),
            new_value,
            origin: self.id,
        };
        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }
}

/// Stream of external changes for one handle
pub struct StorageEvents {
    rx: broadcast::Receiver<StorageEvent>,
    local: Uuid,
}

impl StorageEvents {
    /// Receive the next change made by a different handle
    ///
    /// Returns `None` once the store has been dropped. A lagged receiver
    /// logs a warning and keeps going; the session-sync consumer is
    /// idempotent, so missed intermediate states are harmless.
    pub async fn recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.origin == self.local => continue,
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Storage event subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
