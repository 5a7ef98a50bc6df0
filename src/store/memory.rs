//! In-memory implementation of [`NameStore`] for tests and ephemeral runs.

use std::collections::HashMap;

use super::{NameStore, SavedName};

/// HashMap-backed store with no persistence.
#[derive(Debug, Default)]
pub struct MemoryNameStore {
    names: HashMap<String, SavedName>,
}

impl MemoryNameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameStore for MemoryNameStore {
    fn get(&self, name: &str) -> Option<SavedName> {
        self.names.get(name).cloned()
    }

    fn put(&mut self, entry: SavedName) {
        self.names.insert(entry.name.clone(), entry);
    }

    fn delete(&mut self, name: &str) -> bool {
        self.names.remove(name).is_some()
    }

    fn list(&self) -> Vec<SavedName> {
        let mut entries: Vec<SavedName> = self.names.values().cloned().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}
