//! The autosave slot: at most one unsubmitted confession text.
//!
//! Every change overwrites the slot; there is no history and no debounce.

use super::backend::{StorageBackend, StorageKey};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftLevel {
    Normal,
    Warning,
    Danger,
}

/// Character counter for a draft, as shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftStatus {
    pub chars: usize,
    pub level: DraftLevel,
}

impl DraftStatus {
    pub fn of(text: &str, warn_length: usize, danger_length: usize) -> Self {
        let chars = text.chars().count();
        let level = if chars > danger_length {
            DraftLevel::Danger
        } else if chars > warn_length {
            DraftLevel::Warning
        } else {
            DraftLevel::Normal
        };
        Self { chars, level }
    }
}

pub struct DraftBuffer<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<'a, B: StorageBackend> DraftBuffer<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn save(&self, text: &str) -> Result<()> {
        self.backend.write(StorageKey::AutoSave, text)
    }

    /// A blank slot loads as `None`.
    pub fn load(&self) -> Result<Option<String>> {
        Ok(self
            .backend
            .read(StorageKey::AutoSave)?
            .filter(|text| !text.trim().is_empty()))
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(StorageKey::AutoSave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn save_overwrites_previous_draft() {
        let backend = MemBackend::new();
        let draft = DraftBuffer::new(&backend);
        draft.save("I").unwrap();
        draft.save("I once").unwrap();
        assert_eq!(draft.load().unwrap().as_deref(), Some("I once"));
    }

    #[test]
    fn whitespace_draft_loads_as_none() {
        let backend = MemBackend::new();
        let draft = DraftBuffer::new(&backend);
        draft.save("   \n").unwrap();
        assert_eq!(draft.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_slot() {
        let backend = MemBackend::new();
        let draft = DraftBuffer::new(&backend);
        draft.save("something").unwrap();
        draft.clear().unwrap();
        assert_eq!(backend.read(StorageKey::AutoSave).unwrap(), None);
    }

    #[test]
    fn status_levels() {
        assert_eq!(DraftStatus::of("abc", 350, 450).level, DraftLevel::Normal);
        assert_eq!(
            DraftStatus::of(&"x".repeat(351), 350, 450).level,
            DraftLevel::Warning
        );
        let danger = DraftStatus::of(&"é".repeat(451), 350, 450);
        assert_eq!(danger.chars, 451);
        assert_eq!(danger.level, DraftLevel::Danger);
    }
}
