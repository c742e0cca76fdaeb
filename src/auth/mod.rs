//! Authentication and session lifecycle
//!
//! This module owns the current identity: restored from storage at startup,
//! mutated only through login, registration, and logout, and reconciled with
//! external changes by [`sync::SessionSync`].

pub mod rbac;
pub mod registry;
pub mod session;
pub mod sync;

pub use rbac::{rank_value, Role, ROLE_ORDER};
pub use sync::{SessionSync, SessionSyncHandle};

use crate::config::AuthConfig;
use crate::core::models::{Identity, UserRecord};
use crate::storage::LocalStore;
use crate::utils::error::{GateError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use registry::UserRegistry;
use session::SessionStore;

/// Shared slot holding the in-memory identity
pub type SessionSlot = Arc<RwLock<Option<Identity>>>;

/// Main authentication system
///
/// One `AuthSystem` corresponds to one running instance of the application.
/// Open several against the same [`LocalStore`] to model several tabs.
pub struct AuthSystem {
    session: SessionStore,
    registry: UserRegistry,
    current: SessionSlot,
    min_password_len: usize,
}

impl AuthSystem {
    /// Create a new authentication system over a store
    ///
    /// Rehydrates the in-memory identity from the persisted session key.
    pub fn new(config: &AuthConfig, store: &LocalStore) -> Self {
        info!("Initializing authentication system");

        let handle = store.handle();
        let session = SessionStore::new(handle.clone(), &config.session_key);
        let registry = UserRegistry::new(handle, &config.users_key);

        let current = Arc::new(RwLock::new(session.restore()));
        if current.read().is_some() {
            debug!("Rehydrated session from storage");
        }

        Self {
            session,
            registry,
            current,
            min_password_len: config.min_password_len,
        }
    }

    /// Snapshot of the current in-memory identity
    pub fn current(&self) -> Option<Identity> {
        self.current.read().clone()
    }

    /// Re-read the persisted session key
    pub fn restore(&self) -> Option<Identity> {
        self.session.restore()
    }

    /// Register a new user and sign them in
    ///
    /// Fails with [`GateError::Validation`] on empty or too-short fields and
    /// [`GateError::UsernameTaken`] on a duplicate trimmed username. On
    /// success the record is appended to the registry and the new identity
    /// is persisted as the current session.
    pub fn register(&self, username: &str, password: &str, role: Role) -> Result<Identity> {
        let trimmed = username.trim();
        if trimmed.is_empty() || password.is_empty() {
            return Err(GateError::validation("Please fill in all fields."));
        }
        if password.len() < self.min_password_len {
            return Err(GateError::validation(format!(
                "Password must be at least {} characters long.",
                self.min_password_len
            )));
        }

        if self.registry.find(trimmed).is_some() {
            return Err(GateError::username_taken(trimmed));
        }

        info!(username = trimmed, %role, "Registering new user");
        self.registry.append(UserRecord {
            username: trimmed.to_string(),
            password: password.to_string(),
            role,
        })?;

        let identity = Identity::new(trimmed, role);
        self.establish(identity.clone())?;
        Ok(identity)
    }

    /// Sign in with registered credentials
    ///
    /// Fails with [`GateError::InvalidCredentials`] when no record matches
    /// the trimmed username exactly or the stored password differs.
    pub fn login(&self, username: &str, password: &str) -> Result<Identity> {
        let trimmed = username.trim();
        debug!(username = trimmed, "Login attempt");

        let record = self
            .registry
            .find(trimmed)
            .ok_or(GateError::InvalidCredentials)?;
        if record.password != password {
            return Err(GateError::InvalidCredentials);
        }

        let identity = Identity::new(record.username, record.role);
        self.establish(identity.clone())?;
        info!(username = %identity.username, role = %identity.role, "User logged in");
        Ok(identity)
    }

    /// Sign out, erasing the persisted session key
    ///
    /// Storage first, like every other state change: if the erase fails,
    /// the in-memory identity is left in place.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        *self.current.write() = None;
        info!("User logged out");
        Ok(())
    }

    /// Spawn the cross-instance session sync for this system
    pub fn spawn_sync(&self) -> SessionSyncHandle {
        SessionSync::spawn(
            self.session.subscribe(),
            self.session.key().to_string(),
            Arc::clone(&self.current),
        )
    }

    /// Slot shared with the sync task; exposed for deterministic tests
    pub fn session_slot(&self) -> SessionSlot {
        Arc::clone(&self.current)
    }

    // Write-through: storage first, then the in-memory slot.
    fn establish(&self, identity: Identity) -> Result<()> {
        self.session.persist(&identity)?;
        *self.current.write() = Some(identity);
        Ok(())
    }
}
