//! Letter grid the puzzle is played on.

use crate::common::GameError;
use crate::direction::Coord;
use core::fmt;

/// A `height × width` matrix of letters. Cells start empty and are filled by
/// word placement plus random noise; a finished puzzle grid has no empty
/// cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, (row, col): Coord) -> Result<usize, GameError> {
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(row * self.width + col)
    }

    /// Letter at `coord`, `None` while the cell is still empty.
    pub fn get(&self, coord: Coord) -> Result<Option<char>, GameError> {
        Ok(self.cells[self.index(coord)?])
    }

    pub fn set(&mut self, coord: Coord, letter: char) -> Result<(), GameError> {
        let i = self.index(coord)?;
        self.cells[i] = Some(letter);
        Ok(())
    }

    /// `true` once every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Coordinates of all still-empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Rows of the grid as strings, empty cells rendered as spaces. This is
    /// the read-only view handed to a rendering layer.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.unwrap_or(' ')).collect())
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        for row in self.rows() {
            writeln!(f, "  {}", row)?;
        }
        write!(f, "}}")
    }
}
