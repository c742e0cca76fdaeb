//! Persisted session identity

use crate::core::models::Identity;
use crate::storage::{StorageEvents, StoreHandle};
use crate::utils::error::Result;
use tracing::warn;

/// Single-key persistence for the current session identity
pub struct SessionStore {
    handle: StoreHandle,
    key: String,
}

impl SessionStore {
    /// Create a session store over the given store handle and key
    pub fn new(handle: StoreHandle, key: impl Into<String>) -> Self {
        Self {
            handle,
            key: key.into(),
        }
    }

    /// Storage key this session persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subscribe to changes made through other store handles
    pub fn subscribe(&self) -> StorageEvents {
        self.handle.subscribe()
    }

    /// Read the persisted identity, if any
    ///
    /// Absent key, parse failure, and unrecognized role all yield `None`
    /// without error; corruption is logged and swallowed.
    pub fn restore(&self) -> Option<Identity> {
        let raw = self.handle.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                warn!(%err, "Failed to parse persisted session, ignoring");
                None
            }
        }
    }

    /// Persist an identity, synchronously
    pub fn persist(&self, identity: &Identity) -> Result<()> {
        let raw = serde_json::to_string(identity)?;
        self.handle.set(&self.key, &raw)
    }

    /// Erase the persisted identity
    pub fn clear(&self) -> Result<()> {
        self.handle.remove(&self.key)
    }
}
