//! Identity and registry record types

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};

/// The currently authenticated user
///
/// Held in process memory plus one persisted copy under the session key.
/// Destroyed on logout or when another instance erases the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Username (non-empty)
    pub username: String,
    /// Role granted at login or registration
    pub role: Role,
}

impl Identity {
    /// Create a new identity
    pub fn new<S: Into<String>>(username: S, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

/// A registered user in the persisted registry
///
/// Created by registration, never mutated or deleted, read on login for the
/// credential check. The password is stored in clear, which makes this
/// registry unfit for anything beyond local demos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique username (trimmed, case-sensitive)
    pub username: String,
    /// Opaque password string
    pub password: String,
    /// Role assigned at registration
    pub role: Role,
}
