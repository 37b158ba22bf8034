//! The list pipeline: search, then category filter, then sort.
//!
//! Search and category filter compose with AND. An empty result is not an error; the
//! command attaches an info message explaining why the list is empty.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConfessionError, Result};
use crate::model::{Category, Confession};
use crate::store::{ConfessionStore, StorageBackend};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, confession: &Confession) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => confession.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ConfessionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Collection order, newest first.
    #[default]
    Newest,
    Oldest,
    /// Descending like+love, ties keep collection order.
    MostReacted,
    Random,
}

impl FromStr for SortOrder {
    type Err = ConfessionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "mostreacted" | "most-reacted" | "mostliked" | "most-liked" => {
                Ok(SortOrder::MostReacted)
            }
            "random" => Ok(SortOrder::Random),
            _ => Err(ConfessionError::UnknownSort(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::MostReacted => "mostReacted",
            SortOrder::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl Query {
    pub fn new(filter: CategoryFilter, search: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            filter,
            search: search.into(),
            sort,
        }
    }
}

/// Case-insensitive substring match on the text, the category key or its display name.
fn matches_search(confession: &Confession, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    confession.text.to_lowercase().contains(term_lower)
        || confession.category.key().contains(term_lower)
        || confession
            .category
            .display_name()
            .to_lowercase()
            .contains(term_lower)
}

/// Filter and order `confessions` (given newest first) according to `query`.
pub fn apply<R: Rng + ?Sized>(
    confessions: &[Confession],
    query: &Query,
    rng: &mut R,
) -> Vec<Confession> {
    let term_lower = query.search.to_lowercase();

    let mut listed: Vec<Confession> = confessions
        .iter()
        .filter(|c| matches_search(c, &term_lower))
        .filter(|c| query.filter.matches(c))
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Newest => {}
        SortOrder::Oldest => listed.reverse(),
        SortOrder::MostReacted => {
            listed.sort_by_key(|c| Reverse(c.reactions.likes_and_loves()));
        }
        SortOrder::Random => listed.shuffle(rng),
    }

    listed
}

pub fn run<B: StorageBackend, R: Rng + ?Sized>(
    store: &ConfessionStore<B>,
    query: &Query,
    rng: &mut R,
) -> Result<CmdResult> {
    let listed = apply(store.confessions(), query, rng);
    tracing::debug!(
        filter = ?query.filter,
        sort = %query.sort,
        matched = listed.len(),
        "query"
    );

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = if !query.search.is_empty() {
            "No confessions match your search. 🔍"
        } else if query.filter != CategoryFilter::All {
            "No confessions in this category yet. 📝"
        } else {
            "No confessions yet. Be the first to share! 🌟"
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed(listed))
}
