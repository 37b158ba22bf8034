use crate::model::ConfessionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfessionError {
    #[error("Please write a confession first")]
    EmptyText,

    #[error("Confession must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Rating must be between 1 and 5 stars (got {0})")]
    InvalidRating(u8),

    #[error("Confession not found: {0}")]
    NotFound(ConfessionId),

    #[error("No confessions to pick from")]
    Empty,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown reaction: {0}")]
    UnknownReaction(String),

    #[error("Unknown sort order: {0}")]
    UnknownSort(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ConfessionError>;
