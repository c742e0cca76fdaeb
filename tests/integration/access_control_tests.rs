//! Role-gated access integration tests
//!
//! Full path from authenticated identity to visible resources and
//! permitted mutations.

#[cfg(test)]
mod tests {
    use crate::common::{instance, test_store};
    use rolegate::{
        guard_direct_access, visible_resources, AccessDecision, GateError, ResourceStore, Role,
    };
    use std::time::Duration;

    #[test]
    fn test_viewer_sees_and_touches_only_viewer_resources() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);
        let identity = auth.register("viewer", "secret", Role::Viewer).unwrap();

        let mut resources = ResourceStore::seeded();
        let visible = visible_resources(resources.all(), Some(&identity));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");

        assert_eq!(
            guard_direct_access("1", resources.all(), Some(&identity)),
            AccessDecision::Denied
        );
        assert!(matches!(
            resources.archive("3", identity.role),
            Err(GateError::Denied(_))
        ));
    }

    #[test]
    fn test_editor_manages_but_cannot_delete() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);
        let identity = auth.register("editor", "secret", Role::Editor).unwrap();

        let mut resources = ResourceStore::seeded();
        resources.archive("2", identity.role).unwrap();
        resources.restore("2", identity.role).unwrap();

        assert!(matches!(
            resources.delete("2", identity.role),
            Err(GateError::Denied(_))
        ));
        assert!(resources.get("2").is_some());
    }

    #[test]
    fn test_admin_full_path() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);
        let identity = auth.register("admin", "secret", Role::Admin).unwrap();

        let mut resources = ResourceStore::seeded();
        assert_eq!(visible_resources(resources.all(), Some(&identity)).len(), 4);
        assert_eq!(
            guard_direct_access("1", resources.all(), Some(&identity)),
            AccessDecision::Allowed
        );

        resources.delete("1", identity.role).unwrap();
        assert_eq!(
            guard_direct_access("1", resources.all(), Some(&identity)),
            AccessDecision::NotFound
        );
    }

    /// After logout there is no identity, so nothing is visible and every
    /// guard denies
    #[test]
    fn test_logged_out_identity_gates_everything() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);
        auth.register("admin", "secret", Role::Admin).unwrap();
        auth.logout().unwrap();

        let resources = ResourceStore::seeded();
        let identity = auth.current();
        assert!(visible_resources(resources.all(), identity.as_ref()).is_empty());
        assert_eq!(
            guard_direct_access("3", resources.all(), identity.as_ref()),
            AccessDecision::Denied
        );
    }

    #[tokio::test]
    async fn test_fetched_dataset_matches_seeded() {
        let fetched = rolegate::fetch_seeded(Duration::from_millis(5)).await;
        assert_eq!(fetched, rolegate::seed_resources());
    }
}
