//! Matching a finished selection path against the placed-word paths.

use crate::direction::Coord;
use crate::placer::Placements;

/// Find the word whose path equals `selection` coordinate-by-coordinate,
/// either forward or exactly reversed. Matching is exact-length and
/// exact-order; a strict prefix of a word's path matches nothing.
///
/// Placement keys are unique, so at most one word can own a given path.
pub fn match_selection<'a>(placements: &'a Placements, selection: &[Coord]) -> Option<&'a str> {
    if selection.is_empty() {
        return None;
    }
    for (word, path) in placements {
        if path.as_slice() == selection || path.iter().rev().eq(selection.iter()) {
            return Some(word);
        }
    }
    None
}
