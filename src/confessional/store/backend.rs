use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// The fixed set of keys confessional persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Confessions,
    Favorites,
    DarkMode,
    AutoSave,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Confessions,
        StorageKey::Favorites,
        StorageKey::DarkMode,
        StorageKey::AutoSave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Confessions => "confessions",
            StorageKey::Favorites => "favorites",
            StorageKey::DarkMode => "darkMode",
            StorageKey::AutoSave => "autoSave",
        }
    }

    /// File name used by file-based backends.
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageKey::Confessions => "confessions.json",
            StorageKey::Favorites => "favorites.json",
            StorageKey::DarkMode => "darkMode",
            StorageKey::AutoSave => "autoSave.txt",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ConfessionStore handles the "what" (typed snapshots, validation).
///
/// All methods take `&self`; implementations that need mutation use
/// interior mutability since confessional is single-threaded.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn read(&self, key: StorageKey) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial snapshots.
    fn write(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is not an error.
    fn remove(&self, key: StorageKey) -> Result<()>;

    /// Where the value for `key` lives. A real path for FsBackend, a virtual one for MemBackend.
    fn location(&self, key: StorageKey) -> PathBuf;
}
