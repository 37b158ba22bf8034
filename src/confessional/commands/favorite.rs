use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ConfessionId;
use crate::store::{ConfessionStore, StorageBackend};

/// Flip the favorite state of `id`. The id does not need a backing confession.
pub fn toggle<B: StorageBackend>(
    store: &mut ConfessionStore<B>,
    id: ConfessionId,
) -> Result<CmdResult> {
    let added = store.toggle_favorite(id)?;

    let mut result = CmdResult::default();
    result.favorite_added = Some(added);
    result.add_message(if added {
        CmdMessage::success("Added to favorites! ❤️")
    } else {
        CmdMessage::info("Removed from favorites")
    });
    Ok(result)
}

/// Favorited confessions in collection order. Dangling ids are skipped.
pub fn list<B: StorageBackend>(store: &ConfessionStore<B>) -> Result<CmdResult> {
    let favorites = store.favorites();
    let listed: Vec<_> = store
        .confessions()
        .iter()
        .filter(|c| favorites.contains(c.id))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No favorite confessions yet! ❤️"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Showing {} favorite confessions ❤️",
            listed.len()
        )));
    }
    Ok(result.with_listed(listed))
}
