//! Drag-gesture accumulator: collects selected cells and holds them to one
//! consistent direction.

use crate::direction::{Coord, Direction};

/// Stateful tracker for one pointer-down-to-pointer-up gesture.
///
/// The second accepted cell locks the path direction (reduced to its smallest
/// integer step). From then on a cell is accepted only when its raw delta from
/// the last accepted cell equals the locked direction; anything else is
/// ignored without disturbing the gesture, so pointer jitter along the line
/// still works while a direction change is simply dropped.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    path: Vec<Coord>,
    direction: Option<Direction>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh path at `coord`, discarding any previous gesture.
    pub fn begin(&mut self, coord: Coord) {
        self.path.clear();
        self.direction = None;
        self.path.push(coord);
    }

    /// Offer the next cell. Returns `true` when the cell was accepted.
    ///
    /// Cells already in the path are never accepted, so a drag cannot
    /// backtrack onto itself.
    pub fn extend(&mut self, coord: Coord) -> bool {
        let Some(&last) = self.path.last() else {
            // no gesture in progress
            return false;
        };
        if self.path.contains(&coord) {
            return false;
        }

        match self.direction {
            None => {
                // second cell: lock the direction
                let Some(dir) = Direction::between(last, coord) else {
                    return false;
                };
                self.direction = Some(dir);
                self.path.push(coord);
                true
            }
            Some(dir) => {
                if Direction::delta(last, coord) == dir {
                    self.path.push(coord);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Finish the gesture: hand back the accumulated path and reset.
    pub fn end(&mut self) -> Vec<Coord> {
        self.direction = None;
        std::mem::take(&mut self.path)
    }

    /// Cells accepted so far, in order.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Direction locked by the second cell, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}
