//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every UI. It dispatches to `commands/*.rs`, supplies the ambient inputs commands
//! take as arguments (the random source, today's date, configuration) and returns
//! structured [`CmdResult`] values.
//!
//! It does no I/O of its own beyond what the store does, and never formats output.
//!
//! `ConfessionApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ConfessionApi<FsBackend>`
//! - Testing: `ConfessionApi<MemBackend>`

use crate::commands;
use crate::config::ConfessionConfig;
use crate::error::Result;
use crate::model::{Category, ConfessionId, ReactionKind};
use crate::store::{ConfessionStore, DraftBuffer, StorageBackend};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

pub struct ConfessionApi<B: StorageBackend> {
    store: ConfessionStore<B>,
    config: ConfessionConfig,
    config_dir: Option<PathBuf>,
    rng: StdRng,
}

impl<B: StorageBackend> ConfessionApi<B> {
    pub fn new(store: ConfessionStore<B>, config: ConfessionConfig) -> Self {
        Self {
            store,
            config,
            config_dir: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Directory holding `config.json`, required by [`ConfessionApi::config`].
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Use a seeded random source, for reproducible shuffles and picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn store(&self) -> &ConfessionStore<B> {
        &self.store
    }

    /// Post a confession. A successful post also discards the saved draft.
    ///
    /// Failing to discard the draft does not fail the post; the confession is already saved.
    pub fn create(&mut self, text: &str, category: Category) -> Result<commands::CmdResult> {
        let mut result =
            commands::create::run(&mut self.store, text, category, self.config.min_length)?;
        if let Err(e) = DraftBuffer::new(self.store.backend()).clear() {
            tracing::warn!(error = %e, "failed to clear draft after posting");
            result.add_message(commands::CmdMessage::warning(
                "Posted, but the saved draft could not be cleared",
            ));
        }
        Ok(result)
    }

    pub fn query(&mut self, query: &Query) -> Result<commands::CmdResult> {
        commands::query::run(&self.store, query, &mut self.rng)
    }

    pub fn get(&self, id: ConfessionId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn react(&mut self, id: ConfessionId, kind: ReactionKind) -> Result<commands::CmdResult> {
        commands::react::run(&mut self.store, id, kind)
    }

    pub fn rate(&mut self, id: ConfessionId, stars: u8) -> Result<commands::CmdResult> {
        commands::rate::run(&mut self.store, id, stars)
    }

    pub fn comment(&mut self, id: ConfessionId, text: &str) -> Result<commands::CmdResult> {
        commands::comment::run(&mut self.store, id, text)
    }

    pub fn toggle_favorite(&mut self, id: ConfessionId) -> Result<commands::CmdResult> {
        commands::favorite::toggle(&mut self.store, id)
    }

    pub fn favorites(&self) -> Result<commands::CmdResult> {
        commands::favorite::list(&self.store)
    }

    pub fn pick_random(&mut self) -> Result<commands::CmdResult> {
        commands::pick::random(&self.store, &mut self.rng)
    }

    pub fn pick_daily_top(&self) -> Result<commands::CmdResult> {
        commands::pick::daily_top(&self.store, today())
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, today())
    }

    pub fn save_draft(&self, text: &str) -> Result<commands::CmdResult> {
        commands::draft::save(&self.store, text, &self.config)
    }

    pub fn load_draft(&self) -> Result<commands::CmdResult> {
        commands::draft::load(&self.store, &self.config)
    }

    pub fn clear_draft(&self) -> Result<commands::CmdResult> {
        commands::draft::clear(&self.store)
    }

    pub fn dark_mode(&self) -> Result<commands::CmdResult> {
        commands::theme::show(&self.store)
    }

    pub fn toggle_dark_mode(&self) -> Result<commands::CmdResult> {
        commands::theme::toggle(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self.config_dir.as_ref().ok_or_else(|| {
            crate::error::ConfessionError::Api("No configuration directory set".to_string())
        })?;
        commands::config::run(dir, action)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::config::ConfigAction;
pub use commands::query::{CategoryFilter, Query, SortOrder};
pub use commands::{CmdMessage, CmdResult, MessageLevel, Stats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfessionError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::StorageKey;

    fn api() -> ConfessionApi<MemBackend> {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        ConfessionApi::new(store, ConfessionConfig::default()).with_seed(42)
    }

    #[test]
    fn create_clears_draft() {
        let mut api = api();
        api.save_draft("I have a confession").unwrap();
        api.create("I have a confession", Category::General).unwrap();
        assert_eq!(
            api.store().backend().read(StorageKey::AutoSave).unwrap(),
            None
        );
    }

    #[test]
    fn failed_create_keeps_draft() {
        let mut api = api();
        api.save_draft("too short").unwrap();
        assert!(matches!(
            api.create("too short", Category::General),
            Err(ConfessionError::TooShort { .. })
        ));
        assert_eq!(api.load_draft().unwrap().draft.as_deref(), Some("too short"));
    }

    #[test]
    fn min_length_from_config_raises_but_never_lowers_the_bar() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let config = ConfessionConfig {
            min_length: 0,
            ..Default::default()
        };
        let mut api = ConfessionApi::new(store, config);
        assert!(matches!(
            api.create("a", Category::General),
            Err(ConfessionError::TooShort { min: 10, .. })
        ));
        assert!(api.store().is_empty());

        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let config = ConfessionConfig {
            min_length: 20,
            ..Default::default()
        };
        let mut api = ConfessionApi::new(store, config);
        assert!(matches!(
            api.create("only fifteen ch", Category::General),
            Err(ConfessionError::TooShort { min: 20, actual: 15 })
        ));
        assert!(api.store().is_empty());
    }

    #[test]
    fn create_after_the_largest_id_is_an_error() {
        let backend = MemBackend::new();
        backend.insert_raw(
            StorageKey::Confessions,
            &format!(
                r#"[{{"id":{},"text":"the very last id","createdAt":"2026-10-19T10:00:00Z","createdDate":"2026-10-19"}}]"#,
                i64::MAX
            ),
        );
        let store = ConfessionStore::open(backend).unwrap();
        let mut api = ConfessionApi::new(store, ConfessionConfig::default());
        assert!(matches!(
            api.create("a perfectly valid text", Category::General),
            Err(ConfessionError::Store(_))
        ));
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn draft_clear_failure_does_not_fail_the_post() {
        let mut api = api();
        api.save_draft("a draft that sticks around").unwrap();
        api.store().backend().set_simulate_remove_error(true);

        let result = api
            .create("a draft that sticks around", Category::General)
            .unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert_eq!(api.store().len(), 1);
        assert!(api.load_draft().unwrap().draft.is_some());
    }

    #[test]
    fn dispatches_mutations_to_the_same_record() {
        let mut api = api();
        let id = api
            .create("the api routes everything", Category::Work)
            .unwrap()
            .affected[0]
            .id;
        api.react(id, ReactionKind::Love).unwrap();
        api.rate(id, 4).unwrap();
        api.comment(id, "nice").unwrap();

        let shown = api.get(id).unwrap();
        let c = &shown.listed[0];
        assert_eq!(c.reactions.love, 1);
        assert_eq!(c.rating, 4);
        assert_eq!(shown.comments.len(), 1);

        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.total_likes_and_loves, 1);
        assert_eq!(stats.today, 1);
        assert_eq!(api.pick_daily_top().unwrap().listed[0].id, id);
    }

    #[test]
    fn config_without_dir_is_an_error() {
        let api = api();
        assert!(matches!(
            api.config(ConfigAction::ShowAll),
            Err(ConfessionError::Api(_))
        ));
    }
}
