use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ConfessionId, ReactionKind};
use crate::store::{ConfessionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut ConfessionStore<B>,
    id: ConfessionId,
    kind: ReactionKind,
) -> Result<CmdResult> {
    let confession = store.modify(id, |c| c.reactions.increment(kind))?;
    tracing::debug!(%id, %kind, count = confession.reactions.get(kind), "reaction added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} {}",
        kind.emoji(),
        confession.reactions.get(kind)
    )));
    result.affected.push(confession);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::ConfessionError;
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn n_reactions_increment_by_n() {
        let mut store = ConfessionStore::open(MemBackend::new()).unwrap();
        let id = create::run(&mut store, "I sing in the shower", Category::Happiness, 10)
            .unwrap()
            .affected[0]
            .id;

        for _ in 0..4 {
            run(&mut store, id, ReactionKind::Laugh).unwrap();
        }

        let confession = store.get(id).unwrap();
        assert_eq!(confession.reactions.laugh, 4);
        for kind in [
            ReactionKind::Like,
            ReactionKind::Love,
            ReactionKind::Sad,
            ReactionKind::Angry,
        ] {
            assert_eq!(confession.reactions.get(kind), 0);
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = ConfessionStore::open(MemBackend::new()).unwrap();
        assert!(matches!(
            run(&mut store, ConfessionId(1), ReactionKind::Like),
            Err(ConfessionError::NotFound(ConfessionId(1)))
        ));
    }
}
