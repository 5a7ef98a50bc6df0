//! Local saved-name storage.
//!
//! The store is the injected key-value seam: [`FileNameStore`] persists to
//! a JSON file under `~/.namecast`, [`MemoryNameStore`] backs tests and
//! ephemeral runs. One entry per distinct name string; entries never expire.

pub mod file;
pub mod memory;

pub use file::FileNameStore;
pub use memory::MemoryNameStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Gender;

/// A user-confirmed (name, gender) pair, independent of any prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedName {
    /// The exact validated name string; the store key.
    pub name: String,
    /// The confirmed gender.
    pub gender: Gender,
    /// When the entry was saved. Display metadata only; never used for
    /// expiry or lookup.
    pub saved_at: DateTime<Utc>,
}

impl SavedName {
    /// Build an entry stamped with the current time.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            saved_at: Utc::now(),
        }
    }
}

/// Synchronous key-value storage for saved names.
///
/// All operations are idempotent for repeated identical input. `put`
/// overwrites; `delete` reports whether anything was actually removed.
pub trait NameStore {
    /// Look up the entry for `name`, if any.
    fn get(&self, name: &str) -> Option<SavedName>;

    /// Insert or overwrite the entry for `entry.name`.
    fn put(&mut self, entry: SavedName);

    /// Remove the entry for `name`. Returns `true` iff one existed.
    fn delete(&mut self, name: &str) -> bool;

    /// All entries, sorted by name.
    fn list(&self) -> Vec<SavedName>;
}
