use super::backend::{StorageBackend, StorageKey};
use crate::error::{ConfessionError, Result};
use crate::model::{Confession, ConfessionId, FavoriteSet};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Typed, in-memory view of the persisted confession collection.
///
/// The collection is loaded once in [`ConfessionStore::open`] and kept in memory;
/// every mutation writes a full snapshot back through the backend.
pub struct ConfessionStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for commands that use the raw keys (draft, theme).
    pub(crate) backend: B,
    confessions: Vec<Confession>,
    favorites: FavoriteSet,
}

impl<B: StorageBackend> ConfessionStore<B> {
    /// Load the confession and favorite snapshots. Absent keys start empty.
    pub fn open(backend: B) -> Result<Self> {
        let confessions: Vec<Confession> =
            load_json(&backend, StorageKey::Confessions)?.unwrap_or_default();
        let favorites: FavoriteSet =
            load_json(&backend, StorageKey::Favorites)?.unwrap_or_default();
        validate_snapshot(&confessions)?;

        tracing::debug!(
            confessions = confessions.len(),
            favorites = favorites.len(),
            "loaded snapshot"
        );

        Ok(Self {
            backend,
            confessions,
            favorites,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All confessions, newest first.
    pub fn confessions(&self) -> &[Confession] {
        &self.confessions
    }

    pub fn len(&self) -> usize {
        self.confessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confessions.is_empty()
    }

    pub fn get(&self, id: ConfessionId) -> Result<&Confession> {
        self.confessions
            .iter()
            .find(|c| c.id == id)
            .ok_or(ConfessionError::NotFound(id))
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Creation time in milliseconds, bumped past the largest existing id.
    pub fn next_id(&self) -> Result<ConfessionId> {
        let now = Utc::now().timestamp_millis();
        let max = self.confessions.iter().map(|c| c.id.0).max();
        match max {
            Some(max) if max >= now => max
                .checked_add(1)
                .map(ConfessionId)
                .ok_or_else(|| ConfessionError::Store("Confession ids exhausted".to_string())),
            _ => Ok(ConfessionId(now)),
        }
    }

    /// Insert at the front of the collection and persist.
    pub fn prepend(&mut self, confession: Confession) -> Result<()> {
        if self.confessions.iter().any(|c| c.id == confession.id) {
            return Err(ConfessionError::Store(format!(
                "Duplicate confession id: {}",
                confession.id
            )));
        }
        self.confessions.insert(0, confession);
        self.save_confessions()
    }

    /// Apply `f` to the confession in place, persist, and return the updated record.
    pub fn modify<F>(&mut self, id: ConfessionId, f: F) -> Result<Confession>
    where
        F: FnOnce(&mut Confession),
    {
        let confession = self
            .confessions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ConfessionError::NotFound(id))?;
        f(confession);
        let updated = confession.clone();
        self.save_confessions()?;
        Ok(updated)
    }

    /// Returns `true` when the id was added, `false` when it was removed.
    pub fn toggle_favorite(&mut self, id: ConfessionId) -> Result<bool> {
        let added = self.favorites.toggle(id);
        self.save_favorites()?;
        Ok(added)
    }

    fn save_confessions(&self) -> Result<()> {
        let json = serde_json::to_string(&self.confessions)?;
        self.write_snapshot(StorageKey::Confessions, &json)
    }

    fn save_favorites(&self) -> Result<()> {
        let json = serde_json::to_string(&self.favorites)?;
        self.write_snapshot(StorageKey::Favorites, &json)
    }

    fn write_snapshot(&self, key: StorageKey, json: &str) -> Result<()> {
        match self.backend.write(key, json) {
            Ok(()) => {
                tracing::debug!(%key, bytes = json.len(), "snapshot written");
                Ok(())
            }
            Err(e) => {
                tracing::error!(%key, error = %e, "failed to write snapshot");
                Err(e)
            }
        }
    }
}

/// Ids must be unique and ratings at most 5 stars.
fn validate_snapshot(confessions: &[Confession]) -> Result<()> {
    let mut seen = HashSet::with_capacity(confessions.len());
    for confession in confessions {
        if !seen.insert(confession.id) {
            return Err(ConfessionError::Store(format!(
                "Duplicate confession id in snapshot: {}",
                confession.id
            )));
        }
        if confession.rating > 5 {
            return Err(ConfessionError::Store(format!(
                "Confession {} has an invalid rating of {} stars",
                confession.id, confession.rating
            )));
        }
    }
    Ok(())
}

fn load_json<B: StorageBackend, T: DeserializeOwned>(
    backend: &B,
    key: StorageKey,
) -> Result<Option<T>> {
    match backend.read(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}
