use crate::commands::{CmdMessage, CmdResult};
use crate::config::ConfessionConfig;
use crate::error::Result;
use crate::store::draft::{DraftBuffer, DraftStatus};
use crate::store::{ConfessionStore, StorageBackend};

pub fn save<B: StorageBackend>(
    store: &ConfessionStore<B>,
    text: &str,
    config: &ConfessionConfig,
) -> Result<CmdResult> {
    DraftBuffer::new(store.backend()).save(text)?;

    let mut result = CmdResult::default();
    result.draft = Some(text.to_string());
    result.draft_status = Some(DraftStatus::of(
        text,
        config.warn_length,
        config.danger_length,
    ));
    Ok(result)
}

pub fn load<B: StorageBackend>(
    store: &ConfessionStore<B>,
    config: &ConfessionConfig,
) -> Result<CmdResult> {
    let draft = DraftBuffer::new(store.backend()).load()?;

    let mut result = CmdResult::default();
    match &draft {
        Some(text) => {
            result.draft_status = Some(DraftStatus::of(
                text,
                config.warn_length,
                config.danger_length,
            ));
        }
        None => result.add_message(CmdMessage::info("No saved draft")),
    }
    result.draft = draft;
    Ok(result)
}

pub fn clear<B: StorageBackend>(store: &ConfessionStore<B>) -> Result<CmdResult> {
    DraftBuffer::new(store.backend()).clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Draft cleared"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::draft::DraftLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn save_then_load_round_trips() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let config = ConfessionConfig::default();
        let saved = save(&store, "half a thought", &config).unwrap();
        assert_eq!(saved.draft_status.unwrap().chars, 14);

        let loaded = load(&store, &config).unwrap();
        assert_eq!(loaded.draft.as_deref(), Some("half a thought"));
        assert_eq!(loaded.draft_status.unwrap().level, DraftLevel::Normal);
    }

    #[test]
    fn clear_then_load_is_empty() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let config = ConfessionConfig::default();
        save(&store, "half a thought", &config).unwrap();
        clear(&store).unwrap();

        let loaded = load(&store, &config).unwrap();
        assert_eq!(loaded.draft, None);
        assert_eq!(loaded.messages.len(), 1);
    }

    #[test]
    fn status_uses_configured_thresholds() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let config = ConfessionConfig {
            warn_length: 3,
            danger_length: 5,
            ..Default::default()
        };
        let result = save(&store, "four", &config).unwrap();
        assert_eq!(result.draft_status.unwrap().level, DraftLevel::Warning);
    }
}
