use super::backend::{StorageBackend, StorageKey};
use crate::error::{ConfessionError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed storage: one file per key inside `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ConfessionError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>> {
        let path = self.location(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ConfessionError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic Write
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", key.as_str(), Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(ConfessionError::Io)?;
        fs::rename(&tmp_path, self.location(key)).map_err(ConfessionError::Io)?;

        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let path = self.location(key);
        if path.exists() {
            fs::remove_file(path).map_err(ConfessionError::Io)?;
        }
        Ok(())
    }

    fn location(&self, key: StorageKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}
