//! Visibility filtering and direct-access guarding

use crate::auth::rbac::Role;
use crate::core::models::{Identity, Resource};

/// Outcome of a direct-access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The resource exists and the identity's role is sufficient
    Allowed,
    /// No identity, or the role is below the resource's minimum
    ///
    /// Callers redirect to a safe default view rather than surfacing this
    /// as an error.
    Denied,
    /// No resource with that id
    NotFound,
}

/// Resources the given identity may see, in input order
///
/// No identity means no visible resources.
pub fn visible_resources<'a>(
    all: &'a [Resource],
    identity: Option<&Identity>,
) -> Vec<&'a Resource> {
    let Some(identity) = identity else {
        return Vec::new();
    };
    all.iter()
        .filter(|resource| identity.role.can_access(resource.min_role_required))
        .collect()
}

/// Decide whether a direct navigation to `resource_id` is allowed
pub fn guard_direct_access(
    resource_id: &str,
    all: &[Resource],
    identity: Option<&Identity>,
) -> AccessDecision {
    let Some(resource) = all.iter().find(|r| r.id == resource_id) else {
        return AccessDecision::NotFound;
    };

    match identity {
        Some(identity) if identity.role.can_access(resource.min_role_required) => {
            AccessDecision::Allowed
        }
        _ => AccessDecision::Denied,
    }
}

/// Whether `role` may archive or restore resources
pub fn can_manage(role: Role) -> bool {
    role.can_access(Role::Editor)
}

/// Whether `role` may delete resources
pub fn can_delete(role: Role) -> bool {
    role.can_access(Role::Admin)
}
