//! # rolegate
//!
//! A local-first role-based access engine: the non-UI core of a
//! permission-gated resource dashboard with persistent sessions and
//! cross-instance session synchronization.
//!
//! ## Features
//!
//! - **Three-level RBAC**: Viewer < Editor < Admin, compared by rank;
//!   unknown roles fail every check instead of erroring
//! - **Persistent sessions**: identity stored under a single key in a
//!   local key-value store, restored on startup, erased on logout
//! - **Cross-instance sync**: every open instance converges on the most
//!   recent login/logout performed anywhere, without polling
//! - **Gated resources**: visibility filtering, direct-access guarding,
//!   and role-checked archive/restore/delete with explicit refusals
//!
//! ## Quick Start
//!
//! ```rust
//! use rolegate::{AuthSystem, Config, LocalStore, Role, ResourceStore};
//!
//! # fn main() -> rolegate::Result<()> {
//! let config = Config::default();
//! let store = LocalStore::in_memory();
//! let auth = AuthSystem::new(&config.auth, &store);
//!
//! let identity = auth.register("alice", "secret", Role::Editor)?;
//!
//! let mut resources = ResourceStore::seeded();
//! let visible = rolegate::visible_resources(resources.all(), Some(&identity));
//! assert_eq!(visible.len(), 2);
//!
//! resources.archive("2", identity.role)?;
//! auth.logout()?;
//! # Ok(())
//! # }
//! ```
//!
//! Two `AuthSystem`s opened against the same [`LocalStore`] model two
//! tabs of the same application; spawn [`AuthSystem::spawn_sync`] on each
//! and a logout in one clears the identity in the other.

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AuthSystem, Role, SessionSync, SessionSyncHandle};
pub use config::Config;
pub use core::models::{Identity, Resource, ResourceMeta, ResourceStatus, UserRecord};
pub use core::resources::{
    fetch_seeded, guard_direct_access, seed_resources, visible_resources, AccessDecision,
    ResourceStore,
};
pub use storage::{LocalStore, StorageEvent, StorageEvents, StoreHandle};
pub use utils::error::{GateError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
