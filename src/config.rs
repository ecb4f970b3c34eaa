//! Game constants and difficulty configuration.

use serde::{Deserialize, Serialize};

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 10;

/// Valid range for the requested number of hidden words.
pub const MIN_WORD_COUNT: usize = 1;
pub const MAX_WORD_COUNT: usize = 10;

/// Random placements tried per word before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Substitute words drawn across one round build. Bounds the placement loop
/// even when the category pool keeps offering words that do not fit.
pub const MAX_SUBSTITUTION_ROUNDS: usize = 50;

pub const STARTING_SCORE: u32 = 200;

/// Seconds until the round is forfeit.
pub const TIME_LIMIT_SECS: u64 = 600;

/// Difficulty steers how often words run diagonally instead of straight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Weights for (horizontal/vertical, diagonal) placement directions.
    pub fn direction_bias(&self) -> (f64, f64) {
        match self {
            Difficulty::Easy => (0.8, 0.2),
            Difficulty::Medium => (0.6, 0.4),
            Difficulty::Hard => (0.3, 0.7),
        }
    }
}

/// Score tier for a given elapsed time: 200 under 5 minutes, 100 under 7,
/// 50 under 9, nothing from 9 minutes on.
pub fn score_for_elapsed(elapsed_secs: u64) -> u32 {
    if elapsed_secs < 300 {
        200
    } else if elapsed_secs < 420 {
        100
    } else if elapsed_secs < 540 {
        50
    } else {
        0
    }
}
