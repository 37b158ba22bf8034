use crate::config::ConfessionConfig;
use crate::model::{Comment, Confession};
use crate::store::draft::DraftStatus;

pub mod comment;
pub mod config;
pub mod create;
pub mod draft;
pub mod favorite;
pub mod get;
pub mod pick;
pub mod query;
pub mod rate;
pub mod react;
pub mod stats;
pub mod theme;

pub use stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification emitted by a command.
///
/// The library never prints; the presentation layer decides how these are shown.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or mutated by the command.
    pub affected: Vec<Confession>,
    /// Records to display, in display order.
    pub listed: Vec<Confession>,
    pub comments: Vec<Comment>,
    pub stats: Option<Stats>,
    pub favorite_added: Option<bool>,
    pub draft: Option<String>,
    pub draft_status: Option<DraftStatus>,
    pub dark_mode: Option<bool>,
    pub config: Option<ConfessionConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, confessions: Vec<Confession>) -> Self {
        self.listed = confessions;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ConfessionConfig) -> Self {
        self.config = Some(config);
        self
    }
}
