use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ConfessionId;
use crate::store::{ConfessionStore, StorageBackend};

/// Show one confession together with its comment thread.
pub fn run<B: StorageBackend>(store: &ConfessionStore<B>, id: ConfessionId) -> Result<CmdResult> {
    let confession = store.get(id)?.clone();
    let mut result = CmdResult::default();
    result.comments = confession.comments.clone();
    result.listed.push(confession);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{comment, create};
    use crate::error::ConfessionError;
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn returns_confession_and_comments() {
        let mut store = ConfessionStore::open(MemBackend::new()).unwrap();
        let id = create::run(&mut store, "a secret worth keeping", Category::Fear, 10)
            .unwrap()
            .affected[0]
            .id;
        comment::run(&mut store, id, "me too").unwrap();

        let result = run(&store, id).unwrap();
        assert_eq!(result.listed[0].id, id);
        assert_eq!(result.comments.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        assert!(matches!(
            run(&store, ConfessionId(9)),
            Err(ConfessionError::NotFound(_))
        ));
    }
}
