//! Core data models

pub mod identity;
pub mod resource;

pub use identity::{Identity, UserRecord};
pub use resource::{Resource, ResourceMeta, ResourceStatus};
