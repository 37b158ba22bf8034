use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConfessionError, Result};
use crate::model::{Comment, ConfessionId};
use crate::store::{ConfessionStore, StorageBackend};

/// Append a comment. Comments are never edited or removed.
pub fn run<B: StorageBackend>(
    store: &mut ConfessionStore<B>,
    id: ConfessionId,
    text: &str,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConfessionError::EmptyText);
    }
    let comment = Comment::new(text.to_string());
    let confession = store.modify(id, |c| c.comments.push(comment))?;
    tracing::debug!(%id, comments = confession.comments.len(), "comment added");

    let mut result = CmdResult::default();
    result.comments = confession.comments.clone();
    result.add_message(CmdMessage::success("Comment added! 💬"));
    result.affected.push(confession);
    Ok(result)
}
