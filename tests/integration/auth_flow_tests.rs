//! Registration and login flow integration tests
//!
//! These tests drive the auth system against real (in-memory and
//! file-backed) storage and verify the persisted side effects.

#[cfg(test)]
mod tests {
    use crate::common::{instance, test_store};
    use rolegate::{GateError, LocalStore, Role};

    /// Register, log out, log back in: same username, same role
    #[test]
    fn test_register_then_login_round_trip() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);

        let registered = auth.register("alice", "secret", Role::Editor).unwrap();
        auth.logout().unwrap();
        assert_eq!(auth.current(), None);

        let logged_in = auth.login("alice", "secret").unwrap();
        assert_eq!(logged_in, registered);
    }

    /// A second instance started after login restores the same session
    #[test]
    fn test_new_instance_restores_persisted_session() {
        let (config, store) = test_store();
        let first = instance(&config, &store);
        let identity = first.register("bob", "hunter22", Role::Admin).unwrap();

        let second = instance(&config, &store);
        assert_eq!(second.current(), Some(identity));
    }

    /// The registry survives process restart through the file snapshot
    #[test]
    fn test_registry_survives_reopen_of_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let config = rolegate::Config::default();

        {
            let store = LocalStore::with_file(&path).unwrap();
            let auth = instance(&config, &store);
            auth.register("carol", "pass-word", Role::Viewer).unwrap();
            auth.logout().unwrap();
        }

        let store = LocalStore::with_file(&path).unwrap();
        let auth = instance(&config, &store);
        assert_eq!(auth.current(), None);

        let identity = auth.login("carol", "pass-word").unwrap();
        assert_eq!(identity.role, Role::Viewer);
    }

    /// A failed erase of the persisted key leaves the instance logged in,
    /// the same storage-first ordering every other state change follows
    #[test]
    fn test_failed_logout_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let config = rolegate::Config::default();

        let store = LocalStore::with_file(&path).unwrap();
        let auth = instance(&config, &store);
        let identity = auth.register("erin", "secret", Role::Editor).unwrap();

        // Turn the snapshot path into a directory so further writes fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(auth.logout().is_err());
        assert_eq!(auth.current(), Some(identity.clone()));
        assert_eq!(auth.restore(), Some(identity));
    }

    #[test]
    fn test_registration_errors_do_not_establish_sessions() {
        let (config, store) = test_store();
        let auth = instance(&config, &store);
        auth.register("alice", "secret", Role::Viewer).unwrap();
        auth.logout().unwrap();

        assert!(matches!(
            auth.register("alice", "secret", Role::Viewer),
            Err(GateError::UsernameTaken(_))
        ));
        assert!(matches!(
            auth.register("", "secret", Role::Viewer),
            Err(GateError::Validation(_))
        ));
        assert_eq!(auth.current(), None);
        assert_eq!(auth.restore(), None);
    }
}
