use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConfessionError, Result};
use crate::model::Confession;
use crate::store::{ConfessionStore, StorageBackend};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform pick over the whole collection, ignoring any active filter.
pub fn random<B: StorageBackend, R: Rng + ?Sized>(
    store: &ConfessionStore<B>,
    rng: &mut R,
) -> Result<CmdResult> {
    let confession = store
        .confessions()
        .choose(rng)
        .cloned()
        .ok_or(ConfessionError::Empty)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Showing a random confession! 🎲"));
    Ok(result.with_listed(vec![confession]))
}

/// The most liked+loved confession created on `today`. Earliest in collection order wins ties.
pub fn daily_top<B: StorageBackend>(
    store: &ConfessionStore<B>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let top = store
        .confessions()
        .iter()
        .filter(|c| c.created_date == today)
        .fold(None::<&Confession>, |best, current| match best {
            Some(prev)
                if prev.reactions.likes_and_loves() >= current.reactions.likes_and_loves() =>
            {
                Some(prev)
            }
            _ => Some(current),
        })
        .cloned()
        .ok_or(ConfessionError::Empty)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Today's most loved confession! ⭐"));
    Ok(result.with_listed(vec![top]))
}
