use crate::commands::{CmdMessage, CmdResult};
use crate::config::MIN_TEXT_LENGTH;
use crate::error::{ConfessionError, Result};
use crate::model::{Category, Confession};
use crate::store::{ConfessionStore, StorageBackend};

/// Trim and check a confession text, returning the text that will be stored.
///
/// `min_length` below [`MIN_TEXT_LENGTH`] is raised to it.
pub fn validate_text(text: &str, min_length: usize) -> Result<String> {
    let min_length = min_length.max(MIN_TEXT_LENGTH);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConfessionError::EmptyText);
    }
    let actual = trimmed.chars().count();
    if actual < min_length {
        return Err(ConfessionError::TooShort {
            min: min_length,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

pub fn run<B: StorageBackend>(
    store: &mut ConfessionStore<B>,
    text: &str,
    category: Category,
    min_length: usize,
) -> Result<CmdResult> {
    let text = validate_text(text, min_length)?;
    let confession = Confession::new(store.next_id()?, text, category);
    store.prepend(confession.clone())?;

    tracing::info!(id = %confession.id, category = confession.category.key(), "confession created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Confession posted! ✨"));
    result.affected.push(confession);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query::{self, Query};
    use crate::model::ReactionKind;
    use crate::store::mem_backend::MemBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> ConfessionStore<MemBackend> {
        ConfessionStore::open(MemBackend::new()).unwrap()
    }

    #[test]
    fn creates_with_zeroed_reactions_and_appears_first() {
        let mut store = store();
        run(&mut store, "an older confession", Category::Work, 10).unwrap();
        let result = run(&mut store, "  I ate my roommate's cake  ", Category::Regret, 10).unwrap();

        let created = &result.affected[0];
        assert_eq!(created.text, "I ate my roommate's cake");
        assert_eq!(created.rating, 0);
        assert!(created.comments.is_empty());
        for kind in ReactionKind::ALL {
            assert_eq!(created.reactions.get(kind), 0);
        }

        let mut rng = StdRng::seed_from_u64(1);
        let listed = query::run(&store, &Query::default(), &mut rng)
            .unwrap()
            .listed;
        assert_eq!(listed[0].id, created.id);
    }

    #[test]
    fn empty_and_blank_text_are_rejected() {
        let mut store = store();
        assert!(matches!(
            run(&mut store, "", Category::General, 10),
            Err(ConfessionError::EmptyText)
        ));
        assert!(matches!(
            run(&mut store, " ", Category::General, 10),
            Err(ConfessionError::EmptyText)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn short_text_is_rejected_after_trimming() {
        let mut store = store();
        let result = run(&mut store, "   123456789   ", Category::General, 10);
        assert!(matches!(
            result,
            Err(ConfessionError::TooShort { min: 10, actual: 9 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn exactly_minimum_length_is_accepted() {
        let mut store = store();
        run(&mut store, "1234567890", Category::General, 10).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn configured_minimum_never_drops_below_ten() {
        let mut store = store();
        assert!(matches!(
            run(&mut store, "a", Category::General, 0),
            Err(ConfessionError::TooShort { min: 10, actual: 1 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn configured_minimum_can_raise_the_bar() {
        let mut store = store();
        assert!(matches!(
            run(&mut store, "twelve chars", Category::General, 15),
            Err(ConfessionError::TooShort { min: 15, actual: 12 })
        ));
    }
}
