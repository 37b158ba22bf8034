use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConfessionError, Result};
use crate::model::ConfessionId;
use crate::store::{ConfessionStore, StorageBackend};

/// Overwrite the rating. There is one rater per store, so the last value wins.
pub fn run<B: StorageBackend>(
    store: &mut ConfessionStore<B>,
    id: ConfessionId,
    stars: u8,
) -> Result<CmdResult> {
    if !(1..=5).contains(&stars) {
        return Err(ConfessionError::InvalidRating(stars));
    }
    let confession = store.modify(id, |c| c.rating = stars)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("You gave {} stars! ⭐", stars)));
    result.affected.push(confession);
    Ok(result)
}
