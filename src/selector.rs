//! Word selection: filters a category pool down to the words that will hide
//! in the grid.

use crate::common::GameError;
use crate::config::{MAX_WORD_COUNT, MIN_WORD_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;

/// A word fits when it leaves a two-cell margin in both grid dimensions.
pub fn word_fits_grid(word: &str, width: usize, height: usize) -> bool {
    let len = word.chars().count();
    len <= width.saturating_sub(2) && len <= height.saturating_sub(2)
}

/// Pick up to `count` uppercase words from `pool`, without replacement and in
/// random order, keeping only words that fit the grid.
///
/// `count` outside [1, 10] is a hard validation error that must block the
/// round; it is never clamped. A pool that filters down to nothing is also an
/// error, since the round could not start meaningfully.
pub fn select_words<R: Rng>(
    rng: &mut R,
    pool: &[String],
    count: usize,
    width: usize,
    height: usize,
) -> Result<Vec<String>, GameError> {
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
        return Err(GameError::WordCountOutOfRange(count));
    }

    let mut fitting: Vec<String> = Vec::new();
    for word in pool {
        let upper = word.to_uppercase();
        if word_fits_grid(&upper, width, height) && !fitting.contains(&upper) {
            fitting.push(upper);
        }
    }
    if fitting.is_empty() {
        return Err(GameError::EmptyWordPool);
    }

    fitting.shuffle(rng);
    fitting.truncate(count);
    Ok(fitting)
}
