//! Persisted user registry

use crate::core::models::UserRecord;
use crate::storage::StoreHandle;
use crate::utils::error::Result;
use tracing::warn;

/// Registry of registered users, persisted as a JSON array under one key
///
/// The registry is append-only: records are created at registration and
/// never mutated or deleted afterwards.
pub struct UserRegistry {
    handle: StoreHandle,
    key: String,
}

impl UserRegistry {
    /// Create a registry over the given store handle and key
    pub fn new(handle: StoreHandle, key: impl Into<String>) -> Self {
        Self {
            handle,
            key: key.into(),
        }
    }

    /// Load all records
    ///
    /// An absent key, a parse failure, or a value that is not an array all
    /// degrade to an empty registry.
    pub fn load(&self) -> Vec<UserRecord> {
        let Some(raw) = self.handle.get(&self.key) else {
            return Vec::new();
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) if value.is_array() => {
                serde_json::from_value(value).unwrap_or_else(|err| {
                    warn!(%err, "Registry entries malformed, treating as empty");
                    Vec::new()
                })
            }
            Ok(_) => {
                warn!("Registry value is not an array, treating as empty");
                Vec::new()
            }
            Err(err) => {
                warn!(%err, "Failed to parse registry, treating as empty");
                Vec::new()
            }
        }
    }

    /// Find a record by exact username
    pub fn find(&self, username: &str) -> Option<UserRecord> {
        self.load().into_iter().find(|u| u.username == username)
    }

    /// Append a record and persist the registry
    pub fn append(&self, record: UserRecord) -> Result<()> {
        let mut users = self.load();
        users.push(record);
        let raw = serde_json::to_string(&users)?;
        self.handle.set(&self.key, &raw)
    }
}
