//! In-memory resource collection
//!
//! This module provides the resource store the dashboard view renders from:
//! seeded from a static dataset, filtered by role, and mutated by
//! role-checked archive/restore/delete operations. Nothing here is
//! persisted; the collection lives for the session.

pub mod access;
pub mod dataset;

pub use access::{guard_direct_access, visible_resources, AccessDecision};
pub use dataset::seed_resources;

use crate::auth::rbac::Role;
use crate::core::models::{Resource, ResourceStatus};
use crate::utils::error::{GateError, Result};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};

/// Fetch the seeded dataset after an artificial delay
///
/// A simulated API call. Dropping the returned future
/// before it resolves discards the result, which is the cancellation
/// behavior a torn-down view needs.
pub async fn fetch_seeded(delay: Duration) -> Vec<Resource> {
    debug!(?delay, "Fetching seeded resources");
    tokio::time::sleep(delay).await;
    seed_resources()
}

/// Owned, mutable resource collection
pub struct ResourceStore {
    resources: Vec<Resource>,
}

impl ResourceStore {
    /// Create a store over an explicit collection
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Create a store seeded with the built-in dataset
    pub fn seeded() -> Self {
        Self::new(seed_resources())
    }

    /// All resources, in insertion order
    pub fn all(&self) -> &[Resource] {
        &self.resources
    }

    /// Look up a resource by id
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources currently active
    pub fn active(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.meta.status == ResourceStatus::Active)
            .collect()
    }

    /// Resources currently archived
    pub fn archived(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.meta.status == ResourceStatus::Archived)
            .collect()
    }

    /// Archive a resource
    ///
    /// Requires Editor rank or above. Refreshes `lastUpdatedAt`. Every
    /// mutation checks the role before looking up the id, so an
    /// insufficient role gets `Denied` even for unknown ids.
    pub fn archive(&mut self, id: &str, role: Role) -> Result<()> {
        if !access::can_manage(role) {
            return Err(GateError::denied(format!(
                "Role {} cannot archive resources",
                role
            )));
        }
        self.set_status(id, ResourceStatus::Archived)
    }

    /// Restore an archived resource
    ///
    /// Requires Editor rank or above. Refreshes `lastUpdatedAt`.
    pub fn restore(&mut self, id: &str, role: Role) -> Result<()> {
        if !access::can_manage(role) {
            return Err(GateError::denied(format!(
                "Role {} cannot restore resources",
                role
            )));
        }
        self.set_status(id, ResourceStatus::Active)
    }

    /// Delete a resource entirely
    ///
    /// Admin only. The role is re-checked here even though callers hide the
    /// affordance from lower roles.
    pub fn delete(&mut self, id: &str, role: Role) -> Result<()> {
        if !access::can_delete(role) {
            return Err(GateError::denied(format!(
                "Role {} cannot delete resources",
                role
            )));
        }

        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        if self.resources.len() == before {
            return Err(GateError::not_found(format!("No resource with id {}", id)));
        }

        info!(id, "Deleted resource");
        Ok(())
    }

    fn set_status(&mut self, id: &str, status: ResourceStatus) -> Result<()> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GateError::not_found(format!("No resource with id {}", id)))?;

        resource.meta.status = status;
        resource.meta.last_updated_at = Utc::now();
        info!(id, %status, "Updated resource status");
        Ok(())
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::seeded()
    }
}
