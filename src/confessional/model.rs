//! # Data Model
//!
//! A [`Confession`] is the only durable record. It is serialized as one element of the
//! `confessions` JSON array, using camelCase field names:
//!
//! ```text
//! {
//!   "id": 1760871234567,
//!   "text": "I still sleep with a night light",
//!   "category": "fear",
//!   "createdAt": "2026-10-19T11:33:54.567Z",
//!   "createdDate": "2026-10-19",
//!   "reactionCounts": { "like": 2, "love": 0, "laugh": 1, "sad": 0, "angry": 0 },
//!   "rating": 4,
//!   "comments": [{ "text": "same", "timestamp": "2026-10-19T12:00:00Z" }]
//! }
//! ```
//!
//! Missing reaction kinds, rating and comments deserialize to their zero values so that
//! older snapshots keep loading.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfessionError;

/// Stable identifier of a confession: the creation time in milliseconds,
/// bumped when needed so ids stay strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfessionId(pub i64);

impl fmt::Display for ConfessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConfessionId {
    type Err = ConfessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ConfessionId)
            .map_err(|_| ConfessionError::Api(format!("Invalid confession id: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[serde(alias = "genel")]
    General,
    #[serde(alias = "ask")]
    Love,
    #[serde(alias = "is")]
    Work,
    #[serde(alias = "aile")]
    Family,
    #[serde(alias = "arkadas")]
    Friendship,
    #[serde(alias = "korku")]
    Fear,
    #[serde(alias = "mutluluk")]
    Happiness,
    #[serde(alias = "pisman")]
    Regret,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Love,
        Category::Work,
        Category::Family,
        Category::Friendship,
        Category::Fear,
        Category::Happiness,
        Category::Regret,
    ];

    /// Storage key, as written in snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Love => "love",
            Category::Work => "work",
            Category::Family => "family",
            Category::Friendship => "friendship",
            Category::Fear => "fear",
            Category::Happiness => "happiness",
            Category::Regret => "regret",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Love => "Love",
            Category::Work => "Work/School",
            Category::Family => "Family",
            Category::Friendship => "Friendship",
            Category::Fear => "Fear/Anxiety",
            Category::Happiness => "Happiness",
            Category::Regret => "Regret",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::General => "🌟",
            Category::Love => "💕",
            Category::Work => "💼",
            Category::Family => "👨‍👩‍👧‍👦",
            Category::Friendship => "👫",
            Category::Fear => "😱",
            Category::Happiness => "😊",
            Category::Regret => "😔",
        }
    }

    fn legacy_key(&self) -> &'static str {
        match self {
            Category::General => "genel",
            Category::Love => "ask",
            Category::Work => "is",
            Category::Family => "aile",
            Category::Friendship => "arkadas",
            Category::Fear => "korku",
            Category::Happiness => "mutluluk",
            Category::Regret => "pisman",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = ConfessionError;

    /// Accepts the storage key, the legacy key or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.key() == needle
                    || c.legacy_key() == needle
                    || c.display_name().to_lowercase() == needle
            })
            .ok_or_else(|| ConfessionError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Laugh,
    Sad,
    Angry,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Like,
        ReactionKind::Love,
        ReactionKind::Laugh,
        ReactionKind::Sad,
        ReactionKind::Angry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Love => "love",
            ReactionKind::Laugh => "laugh",
            ReactionKind::Sad => "sad",
            ReactionKind::Angry => "angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Like => "❤️",
            ReactionKind::Love => "😍",
            ReactionKind::Laugh => "😂",
            ReactionKind::Sad => "😢",
            ReactionKind::Angry => "😡",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReactionKind {
    type Err = ConfessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" | "likes" => Ok(ReactionKind::Like),
            "love" => Ok(ReactionKind::Love),
            "laugh" => Ok(ReactionKind::Laugh),
            "sad" => Ok(ReactionKind::Sad),
            "angry" => Ok(ReactionKind::Angry),
            _ => Err(ConfessionError::UnknownReaction(s.to_string())),
        }
    }
}

/// Per-kind reaction counters. Only ever incremented, one per event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reactions {
    pub like: u64,
    pub love: u64,
    pub laugh: u64,
    pub sad: u64,
    pub angry: u64,
}

impl Reactions {
    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Love => self.love,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Sad => self.sad,
            ReactionKind::Angry => self.angry,
        }
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        let counter = match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Love => &mut self.love,
            ReactionKind::Laugh => &mut self.laugh,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Angry => &mut self.angry,
        };
        *counter = counter.saturating_add(1);
    }

    /// The popularity score used by "most reacted" sorting and the daily pick.
    pub fn likes_and_loves(&self) -> u64 {
        self.like + self.love
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self {
            text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confession {
    pub id: ConfessionId,
    pub text: String,
    #[serde(default)]
    pub category: Category,
    pub created_at: DateTime<Utc>,
    /// Local calendar day of creation, used for "today" grouping.
    pub created_date: NaiveDate,
    #[serde(default, rename = "reactionCounts")]
    pub reactions: Reactions,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Confession {
    pub fn new(id: ConfessionId, text: String, category: Category) -> Self {
        let now = Local::now();
        Self {
            id,
            text,
            category,
            created_at: now.with_timezone(&Utc),
            created_date: now.date_naive(),
            reactions: Reactions::default(),
            rating: 0,
            comments: Vec::new(),
        }
    }
}

/// Ids the user marked as favorite, in the order they were added.
///
/// Ids are not checked against the confession collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<ConfessionId>);

impl FavoriteSet {
    pub fn contains(&self, id: ConfessionId) -> bool {
        self.0.contains(&id)
    }

    /// Adds the id if absent, removes it otherwise. Returns `true` when added.
    pub fn toggle(&mut self, id: ConfessionId) -> bool {
        if let Some(pos) = self.0.iter().position(|f| *f == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
