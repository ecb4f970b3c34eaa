//! Word placement: lays the chosen words onto an empty grid with
//! difficulty-biased random directions and fills the rest with noise letters.

use crate::config::{Difficulty, MAX_PLACEMENT_ATTEMPTS, MAX_SUBSTITUTION_ROUNDS};
use crate::direction::{Coord, Direction, DIAGONAL_DIRS, STRAIGHT_DIRS};
use crate::grid::Grid;
use crate::selector::word_fits_grid;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Word → ordered cell path, one entry per successfully placed word.
pub type Placements = BTreeMap<String, Vec<Coord>>;

/// A generated puzzle: the filled grid and the paths of the hidden words.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    placements: Placements,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Words that actually made it into the grid. Win-condition counting must
    /// use this set, not the originally requested one.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.keys().map(String::as_str)
    }
}

/// Place up to `target` of `words` onto a fresh `width × height` grid.
///
/// Each word gets [`MAX_PLACEMENT_ATTEMPTS`] random tries; a word that still
/// does not fit is dropped and a random unused grid-fitting word from
/// `substitute_pool` is queued in its place. Substitution is capped at
/// [`MAX_SUBSTITUTION_ROUNDS`] per build so the loop terminates even on tiny
/// pools. Ending up with fewer than `target` placements is accepted.
pub fn place_words<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    words: Vec<String>,
    target: usize,
    substitute_pool: &[String],
    difficulty: Difficulty,
) -> Puzzle {
    let mut grid = Grid::new(width, height);
    let mut placements = Placements::new();
    let dir_pool = direction_pool(difficulty);

    let mut used: BTreeSet<String> = words.iter().cloned().collect();
    let mut queue: VecDeque<String> = words.into();
    let mut substitutions = 0usize;

    while placements.len() < target {
        let Some(word) = queue.pop_back() else {
            break;
        };
        let letters: Vec<char> = word.chars().collect();

        let mut placed = false;
        if letters.is_empty() || letters.len() > width.min(height) {
            // oversized words are filtered upstream
            log::warn!("word {:?} cannot fit a {}x{} grid", word, width, height);
        } else {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let dir = dir_pool[rng.random_range(0..dir_pool.len())];
                let anchor = random_anchor(rng, dir, letters.len(), width, height);
                if let Some(path) = placement_path(&grid, &letters, anchor, dir) {
                    for (&coord, &letter) in path.iter().zip(letters.iter()) {
                        // every coord was probed by placement_path
                        let _ = grid.set(coord, letter);
                    }
                    placements.insert(word.clone(), path);
                    placed = true;
                    break;
                }
            }
        }

        if !placed {
            log::debug!(
                "dropping {:?} after {} failed placement attempts",
                word,
                MAX_PLACEMENT_ATTEMPTS
            );
            if substitutions < MAX_SUBSTITUTION_ROUNDS {
                if let Some(sub) = random_substitute(rng, substitute_pool, &used, width, height) {
                    used.insert(sub.clone());
                    queue.push_front(sub);
                    substitutions += 1;
                }
            }
        }
    }

    if placements.len() < target {
        log::warn!(
            "placed {} of {} requested words; round proceeds with the reduced set",
            placements.len(),
            target
        );
    }

    fill_noise(rng, &mut grid);
    Puzzle { grid, placements }
}

/// Weighted multiset of directions: straight and diagonal vectors repeated in
/// proportion to the difficulty bias. Sampling a direction is a uniform draw
/// from this pool.
fn direction_pool(difficulty: Difficulty) -> Vec<Direction> {
    let (straight, diagonal) = difficulty.direction_bias();
    let mut pool = Vec::new();
    for _ in 0..(straight * 10.0).round() as usize {
        pool.extend(STRAIGHT_DIRS);
    }
    for _ in 0..(diagonal * 10.0).round() as usize {
        pool.extend(DIAGONAL_DIRS);
    }
    pool
}

/// Random anchor such that a `len`-letter word stays in bounds along `dir`.
fn random_anchor<R: Rng>(
    rng: &mut R,
    dir: Direction,
    len: usize,
    width: usize,
    height: usize,
) -> Coord {
    let row = match dir.dr {
        1 => rng.random_range(0..=height - len),
        -1 => rng.random_range(len - 1..=height - 1),
        _ => rng.random_range(0..height),
    };
    let col = match dir.dc {
        1 => rng.random_range(0..=width - len),
        -1 => rng.random_range(len - 1..=width - 1),
        _ => rng.random_range(0..width),
    };
    (row, col)
}

/// Cell path the word would occupy, or `None` if any cell is out of bounds or
/// holds a different letter. Cells may be shared only when the letter matches.
fn placement_path(
    grid: &Grid,
    letters: &[char],
    anchor: Coord,
    dir: Direction,
) -> Option<Vec<Coord>> {
    let mut path = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let coord = dir.offset(anchor, i)?;
        match grid.get(coord) {
            Ok(None) => {}
            Ok(Some(existing)) if existing == letter => {}
            _ => return None,
        }
        path.push(coord);
    }
    Some(path)
}

/// Random unused word from the full pool that fits the grid.
fn random_substitute<R: Rng>(
    rng: &mut R,
    pool: &[String],
    used: &BTreeSet<String>,
    width: usize,
    height: usize,
) -> Option<String> {
    let candidates: Vec<String> = pool
        .iter()
        .map(|w| w.to_uppercase())
        .filter(|w| word_fits_grid(w, width, height) && !used.contains(w))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let i = rng.random_range(0..candidates.len());
    Some(candidates[i].clone())
}

/// Fill every still-empty cell with a uniformly random letter A-Z.
fn fill_noise<R: Rng>(rng: &mut R, grid: &mut Grid) {
    for coord in grid.empty_cells() {
        let letter = (b'A' + rng.random_range(0..26)) as char;
        // empty_cells only yields in-bounds coords
        let _ = grid.set(coord, letter);
    }
}
