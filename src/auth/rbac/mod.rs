//! Role-based access control
//!
//! The role model is a three-level total order: Viewer < Editor < Admin.
//! Every access decision in the crate reduces to comparing two ranks.


use serde::{Deserialize, Serialize};

/// User role, ordered by privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Read-only access to Viewer-level resources
    Viewer,
    /// Can manage content; includes everything Viewer can do
    Editor,
    /// Full access, including destructive operations
    Admin,
}

/// Roles in ascending privilege order
pub const ROLE_ORDER: [Role; 3] = [Role::Viewer, Role::Editor, Role::Admin];

impl Role {
    /// Position of this role in the privilege order
    pub fn rank(self) -> i32 {
        match self {
            Role::Viewer => 0,
            Role::Editor => 1,
            Role::Admin => 2,
        }
    }

    /// Whether a user with this role may access something requiring `required`
    pub fn can_access(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Viewer => write!(f, "Viewer"),
            Role::Editor => write!(f, "Editor"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Viewer" => Ok(Role::Viewer),
            "Editor" => Ok(Role::Editor),
            "Admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Rank of an arbitrary role string
///
/// Unrecognized values rank below every valid role, so they fail every
/// access check instead of erroring.
pub fn rank_value(value: &str) -> i32 {
    value.parse::<Role>().map(Role::rank).unwrap_or(-1)
}
