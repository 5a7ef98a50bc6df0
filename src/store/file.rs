//! JSON-file implementation of [`NameStore`].
//!
//! Persists to `~/.namecast/names.json`. A missing file loads as an empty
//! store; a corrupt file is logged and replaced on the next write.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{NameStore, SavedName};
use crate::config::Config;

/// Persistent store serialized to JSON.
#[derive(Debug, Serialize, Deserialize, Default)]
struct StoreFile {
    names: HashMap<String, SavedName>,
}

/// File-backed saved-name store.
pub struct FileNameStore {
    store: StoreFile,
    path: PathBuf,
}

impl FileNameStore {
    /// Open the store at the default location, `~/.namecast/names.json`.
    pub fn open_default() -> Self {
        Self::open(Config::dir().join("names.json"))
    }

    /// Open a store at a custom path (tests, config override).
    pub fn open(path: PathBuf) -> Self {
        let store = Self::load_from_disk(&path);
        Self { store, path }
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.store.names.len()
    }

    /// `true` if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.store.names.is_empty()
    }

    fn load_from_disk(path: &Path) -> StoreFile {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(store) => store,
                Err(e) => {
                    warn!("Saved-name file is corrupt, starting empty: {}", e);
                    StoreFile::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(e) => {
                warn!("Failed to read saved-name file, starting empty: {}", e);
                StoreFile::default()
            }
        }
    }

    fn save_to_disk(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(data) = serde_json::to_string_pretty(&self.store) {
            if let Err(e) = std::fs::write(&self.path, data) {
                warn!("Failed to save names to {:?}: {}", self.path, e);
            }
        }
    }
}

impl NameStore for FileNameStore {
    fn get(&self, name: &str) -> Option<SavedName> {
        self.store.names.get(name).cloned()
    }

    fn put(&mut self, entry: SavedName) {
        debug!(name = %entry.name, gender = %entry.gender, "Saving name");
        self.store.names.insert(entry.name.clone(), entry);
        self.save_to_disk();
    }

    fn delete(&mut self, name: &str) -> bool {
        let removed = self.store.names.remove(name).is_some();
        if removed {
            self.save_to_disk();
        }
        removed
    }

    fn list(&self) -> Vec<SavedName> {
        let mut entries: Vec<SavedName> = self.store.names.values().cloned().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}
