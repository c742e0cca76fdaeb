//! Shared test fixtures

use rolegate::{AuthSystem, Config, LocalStore};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once; respects RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory store with default configuration
pub fn test_store() -> (Config, LocalStore) {
    init_tracing();
    (Config::default(), LocalStore::in_memory())
}

/// An auth system over the given store, as one application instance
pub fn instance(config: &Config, store: &LocalStore) -> AuthSystem {
    AuthSystem::new(&config.auth, store)
}
