//! Cross-instance session synchronization tests
//!
//! Two auth systems over one store model two open tabs. Each spawns its
//! sync task; a login or logout in one must reconcile into the other
//! without that instance writing anything itself.

#[cfg(test)]
mod tests {
    use crate::common::{instance, test_store};
    use rolegate::{Identity, Role};
    use std::time::Duration;

    async fn settle() {
        // Give the spawned sync task a moment to drain the channel.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    /// A logout in one instance clears the identity in another
    #[tokio::test]
    async fn test_external_logout_clears_identity() {
        let (config, store) = test_store();
        let tab_a = instance(&config, &store);
        let tab_b = instance(&config, &store);

        tab_a.register("alice", "secret", Role::Admin).unwrap();

        // Tab B starts after the login, so it rehydrates the session.
        let tab_b = {
            drop(tab_b);
            instance(&config, &store)
        };
        assert!(tab_b.current().is_some());

        let _sync_b = tab_b.spawn_sync();
        tab_a.logout().unwrap();
        settle().await;

        assert_eq!(tab_b.current(), None);
        // Tab B never wrote: the persisted key is gone because A removed it.
        assert_eq!(tab_b.restore(), None);
    }

    /// A login in one instance appears in another
    #[tokio::test]
    async fn test_external_login_replaces_identity() {
        let (config, store) = test_store();
        let tab_a = instance(&config, &store);
        let tab_b = instance(&config, &store);
        let _sync_b = tab_b.spawn_sync();

        tab_a.register("bob", "secret", Role::Editor).unwrap();
        settle().await;

        assert_eq!(tab_b.current(), Some(Identity::new("bob", Role::Editor)));
    }

    /// An instance's own writes do not echo back through its sync task
    #[tokio::test]
    async fn test_own_writes_do_not_self_notify() {
        let (config, store) = test_store();
        let tab = instance(&config, &store);
        let _sync = tab.spawn_sync();

        let identity = tab.register("carol", "secret", Role::Viewer).unwrap();
        tab.logout().unwrap();
        let again = tab.login("carol", "secret").unwrap();
        settle().await;

        assert_eq!(identity, again);
        assert_eq!(tab.current(), Some(again));
    }

    /// Sequential logins in one tab converge the other tab on the last one
    #[tokio::test]
    async fn test_latest_login_wins() {
        let (config, store) = test_store();
        let tab_a = instance(&config, &store);
        let tab_b = instance(&config, &store);
        let _sync_b = tab_b.spawn_sync();

        tab_a.register("first", "secret", Role::Viewer).unwrap();
        tab_a.logout().unwrap();
        tab_a.register("second", "secret", Role::Admin).unwrap();
        settle().await;

        assert_eq!(
            tab_b.current(),
            Some(Identity::new("second", Role::Admin))
        );
    }

    /// Dropping the sync handle stops reconciliation
    #[tokio::test]
    async fn test_sync_handle_drop_unsubscribes() {
        let (config, store) = test_store();
        let tab_a = instance(&config, &store);
        let tab_b = instance(&config, &store);

        let sync_b = tab_b.spawn_sync();
        drop(sync_b);
        settle().await;

        tab_a.register("dana", "secret", Role::Editor).unwrap();
        settle().await;

        // No sync task, so tab B's in-memory identity is not updated.
        assert_eq!(tab_b.current(), None);
        // The persisted session is still visible on demand.
        assert!(tab_b.restore().is_some());
    }
}
