//! One round of play: grid state, found words, timing, score and the
//! win/lose transitions.

use crate::common::GameError;
use crate::config::{score_for_elapsed, GRID_HEIGHT, GRID_WIDTH, STARTING_SCORE, TIME_LIMIT_SECS};
use crate::direction::Coord;
use crate::grid::Grid;
use crate::matcher::match_selection;
use crate::placer::{place_words, Puzzle};
use crate::selection::SelectionTracker;
use crate::selector::select_words;
use crate::settings::Settings;
use crate::wordlist::WordList;
use rand::Rng;
use std::collections::BTreeSet;
use std::time::Duration;

/// Lifecycle of a session: `Idle → InRound → RoundWon | RoundLost → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InRound,
    RoundWon,
    RoundLost,
}

/// Final score and time, captured the moment a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub score: u32,
    pub elapsed_secs: u64,
}

/// Orchestrates one round at a time. Owns the grid and placements for the
/// duration of the round; every round rebuilds from scratch.
///
/// The session never schedules its own timer: the embedding event loop
/// measures elapsed time and calls [`tick`](Self::tick). A tick arriving
/// outside `InRound` is a no-op, which makes a late tick after teardown
/// harmless by construction.
pub struct GameSession {
    state: SessionState,
    puzzle: Option<Puzzle>,
    found: BTreeSet<String>,
    tracker: SelectionTracker,
    elapsed: Duration,
    score: u32,
    result: Option<RoundResult>,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            state: SessionState::Idle,
            puzzle: None,
            found: BTreeSet::new(),
            tracker: SelectionTracker::new(),
            elapsed: Duration::ZERO,
            score: STARTING_SCORE,
            result: None,
        }
    }

    /// Build a fresh puzzle from the settings and enter `InRound`.
    ///
    /// Any failure (word count out of range, missing language or category,
    /// empty pool) leaves the session `Idle` and untouched.
    pub fn start_round<R: Rng>(
        &mut self,
        rng: &mut R,
        words: &WordList,
        lang: &str,
        settings: &Settings,
    ) -> Result<(), GameError> {
        if self.state != SessionState::Idle {
            return Err(GameError::RoundInProgress);
        }

        let pool = words.category_words(lang, &settings.category)?;
        let selected = select_words(rng, &pool, settings.count, GRID_WIDTH, GRID_HEIGHT)?;
        let substitute_pool = words.all_words(lang)?;
        let puzzle = place_words(
            rng,
            GRID_WIDTH,
            GRID_HEIGHT,
            selected,
            settings.count,
            &substitute_pool,
            settings.difficulty,
        );

        log::info!(
            "round started: {} words hidden, {:?} difficulty, category {:?}",
            puzzle.placements().len(),
            settings.difficulty,
            settings.category
        );

        self.puzzle = Some(puzzle);
        self.found.clear();
        self.tracker = SelectionTracker::new();
        self.elapsed = Duration::ZERO;
        self.score = STARTING_SCORE;
        self.result = None;
        self.state = SessionState::InRound;
        Ok(())
    }

    /// Report externally measured elapsed time. Recomputes the score tier and
    /// forfeits the round once the time limit is reached.
    pub fn tick(&mut self, elapsed: Duration) -> SessionState {
        if self.state != SessionState::InRound {
            return self.state;
        }
        self.elapsed = elapsed;
        let secs = elapsed.as_secs();
        self.score = score_for_elapsed(secs);
        if secs >= TIME_LIMIT_SECS {
            log::info!("time is up after {}s", secs);
            self.result = Some(RoundResult {
                score: self.score,
                elapsed_secs: secs,
            });
            self.state = SessionState::RoundLost;
            self.tracker = SelectionTracker::new();
        }
        self.state
    }

    /// Pointer-down: start a selection at `coord`.
    pub fn begin_selection(&mut self, coord: Coord) {
        if self.state == SessionState::InRound {
            self.tracker.begin(coord);
        }
    }

    /// Pointer-move: offer the next cell. Direction-inconsistent input is
    /// ignored per-cell, never aborting the gesture.
    pub fn extend_selection(&mut self, coord: Coord) -> bool {
        if self.state != SessionState::InRound {
            return false;
        }
        self.tracker.extend(coord)
    }

    /// Pointer-up: finish the gesture and check it against the hidden words.
    ///
    /// Returns the matched word, if any. Re-selecting an already-found word
    /// reports the word again but changes no state. Finding the last word
    /// transitions to `RoundWon`, capturing score and time at that moment.
    pub fn end_selection(&mut self) -> Option<String> {
        if self.state != SessionState::InRound {
            return None;
        }
        let path = self.tracker.end();
        let (word, total) = {
            let puzzle = self.puzzle.as_ref()?;
            let word = match_selection(puzzle.placements(), &path)?.to_string();
            (word, puzzle.placements().len())
        };

        if self.found.insert(word.clone()) {
            log::info!("found {:?} ({}/{})", word, self.found.len(), total);
            if self.found.len() == total {
                self.result = Some(RoundResult {
                    score: self.score,
                    elapsed_secs: self.elapsed.as_secs(),
                });
                self.state = SessionState::RoundWon;
            }
        }
        Some(word)
    }

    /// A random unrevealed cell of a random unfound word, or `None` when
    /// everything is found.
    pub fn hint<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        if self.state != SessionState::InRound {
            return None;
        }
        let puzzle = self.puzzle.as_ref()?;
        let unfound: Vec<&String> = puzzle
            .placements()
            .keys()
            .filter(|w| !self.found.contains(*w))
            .collect();
        if unfound.is_empty() {
            return None;
        }
        let word = unfound[rng.random_range(0..unfound.len())];

        let revealed: BTreeSet<Coord> = self
            .found
            .iter()
            .filter_map(|w| puzzle.placements().get(w))
            .flatten()
            .copied()
            .collect();
        let unmarked: Vec<Coord> = puzzle.placements()[word]
            .iter()
            .filter(|c| !revealed.contains(c))
            .copied()
            .collect();
        if unmarked.is_empty() {
            return None;
        }
        Some(unmarked[rng.random_range(0..unmarked.len())])
    }

    /// Abort the round or leave a finished round's results; returns to `Idle`
    /// and drops all round state.
    pub fn abort(&mut self) {
        log::debug!("session reset to idle");
        self.state = SessionState::Idle;
        self.puzzle = None;
        self.found.clear();
        self.tracker = SelectionTracker::new();
        self.elapsed = Duration::ZERO;
        self.score = STARTING_SCORE;
        self.result = None;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The grid of the current round, if one is active or just finished.
    pub fn grid(&self) -> Option<&Grid> {
        self.puzzle.as_ref().map(Puzzle::grid)
    }

    /// Words actually hidden in this round's grid.
    pub fn words(&self) -> Vec<&str> {
        self.puzzle.as_ref().map(|p| p.words().collect()).unwrap_or_default()
    }

    /// Path of one placed word, for revealing found cells in a view.
    pub fn word_path(&self, word: &str) -> Option<&[Coord]> {
        self.puzzle
            .as_ref()
            .and_then(|p| p.placements().get(word))
            .map(Vec::as_slice)
    }

    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.found
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Number of words that must be found to win (the placed set, which may
    /// be smaller than the requested count).
    pub fn target_count(&self) -> usize {
        self.puzzle.as_ref().map(|p| p.placements().len()).unwrap_or(0)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Final score and time once the round has ended.
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
