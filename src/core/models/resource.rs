//! Resource record types
//!
//! Wire names are camelCase, matching the persisted dataset format.

use crate::auth::rbac::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Visible in the active list
    Active,
    /// Kept but moved to the archived list
    Archived,
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Active => write!(f, "active"),
            ResourceStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Mutable resource metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
    /// Current lifecycle status
    pub status: ResourceStatus,
    /// Free-form category label
    pub category: String,
    /// Refreshed on every archive/restore
    pub last_updated_at: DateTime<Utc>,
}

/// A gated resource record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Minimum role required to view this resource
    pub min_role_required: Role,
    /// Mutable metadata
    pub meta: ResourceMeta,
}

impl Resource {
    /// Whether this resource is archived
    pub fn is_archived(&self) -> bool {
        self.meta.status == ResourceStatus::Archived
    }
}
