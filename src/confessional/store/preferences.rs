use super::backend::{StorageBackend, StorageKey};
use crate::error::Result;

/// Presentation preferences persisted next to the confessions.
pub struct Preferences<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> Preferences<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Anything other than the literal `"true"` reads as light mode.
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.backend.read(StorageKey::DarkMode)?.as_deref() == Some("true"))
    }

    pub fn toggle_dark_mode(&self) -> Result<bool> {
        let enabled = !self.dark_mode()?;
        self.backend
            .write(StorageKey::DarkMode, if enabled { "true" } else { "false" })?;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn toggles_and_persists() {
        let backend = MemBackend::new();
        let prefs = Preferences::new(&backend);
        assert!(!prefs.dark_mode().unwrap());
        assert!(prefs.toggle_dark_mode().unwrap());
        assert_eq!(
            backend.read(StorageKey::DarkMode).unwrap().as_deref(),
            Some("true")
        );
        assert!(!prefs.toggle_dark_mode().unwrap());
    }

    #[test]
    fn garbage_value_is_light_mode() {
        let backend = MemBackend::new();
        backend.insert_raw(StorageKey::DarkMode, "yes");
        assert!(!Preferences::new(&backend).dark_mode().unwrap());
    }
}
