//! Common types for the word-search engine: game errors shared across modules.

use crate::config::{MAX_WORD_COUNT, MIN_WORD_COUNT};

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested word count falls outside the allowed range.
    WordCountOutOfRange(usize),
    /// No word list exists for the requested language.
    LanguageNotFound(String),
    /// The requested category does not exist for the current language.
    CategoryNotFound(String),
    /// No word in the pool fits the grid after filtering.
    EmptyWordPool,
    /// A round is already in progress.
    RoundInProgress,
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::WordCountOutOfRange(n) => write!(
                f,
                "word count {} is invalid; enter a number between {} and {}",
                n, MIN_WORD_COUNT, MAX_WORD_COUNT
            ),
            GameError::LanguageNotFound(lang) => {
                write!(f, "no word categories found for language {:?}", lang)
            }
            GameError::CategoryNotFound(cat) => write!(f, "category {:?} not found", cat),
            GameError::EmptyWordPool => write!(f, "no words fit the grid"),
            GameError::RoundInProgress => write!(f, "a round is already in progress"),
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

impl std::error::Error for GameError {}
