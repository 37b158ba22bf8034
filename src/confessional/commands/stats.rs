use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Confession;
use crate::store::{ConfessionStore, StorageBackend};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub total_likes_and_loves: u64,
    pub today: usize,
}

impl Stats {
    pub fn compute(confessions: &[Confession], today: NaiveDate) -> Self {
        Self {
            total: confessions.len(),
            total_likes_and_loves: confessions
                .iter()
                .map(|c| c.reactions.likes_and_loves())
                .sum(),
            today: confessions
                .iter()
                .filter(|c| c.created_date == today)
                .count(),
        }
    }
}

pub fn run<B: StorageBackend>(store: &ConfessionStore<B>, today: NaiveDate) -> Result<CmdResult> {
    let stats = Stats::compute(store.confessions(), today);
    Ok(CmdResult::default().with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, react};
    use crate::model::{Category, ReactionKind};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn aggregates_counts() {
        let mut store = ConfessionStore::open(MemBackend::new()).unwrap();
        let a = create::run(&mut store, "first of the day", Category::General, 10)
            .unwrap()
            .affected[0]
            .id;
        let b = create::run(&mut store, "second of the day", Category::Love, 10)
            .unwrap()
            .affected[0]
            .id;
        react::run(&mut store, a, ReactionKind::Like).unwrap();
        react::run(&mut store, b, ReactionKind::Love).unwrap();
        react::run(&mut store, b, ReactionKind::Angry).unwrap();
        store
            .modify(a, |c| c.created_date = c.created_date.pred_opt().unwrap())
            .unwrap();

        let today = store.get(b).unwrap().created_date;
        let stats = run(&store, today).unwrap().stats.unwrap();
        assert_eq!(
            stats,
            Stats {
                total: 2,
                total_likes_and_loves: 2,
                today: 1,
            }
        );
    }

    #[test]
    fn empty_store_is_all_zero() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        let today = chrono::Local::now().date_naive();
        assert_eq!(run(&store, today).unwrap().stats, Some(Stats::default()));
    }
}
