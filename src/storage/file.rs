//! JSON snapshot persistence for the key-value store

use crate::utils::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes the whole store map to one JSON file
///
/// The snapshot holds only a session object and a user registry; each
/// mutation rewrites the whole file before returning.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    /// Create a snapshot writer for `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the snapshot, degrading to an empty map on any failure
    pub fn load(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet");
                return HashMap::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Failed to read snapshot");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Corrupt snapshot, starting empty");
                HashMap::new()
            }
        }
    }

    /// Persist the full map, synchronously
    pub fn persist(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
