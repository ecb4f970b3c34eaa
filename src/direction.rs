//! Placement and selection directions as grid step vectors.

/// Grid coordinate as (row, col).
pub type Coord = (usize, usize);

/// A constant (row, col) step between consecutive cells of a word or a
/// selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i64,
    pub dc: i64,
}

/// Horizontal and vertical placement directions.
pub const STRAIGHT_DIRS: [Direction; 2] = [Direction::new(0, 1), Direction::new(1, 0)];

/// Diagonal placement directions. Reverse duplicates are omitted since words
/// may be read backwards during matching.
pub const DIAGONAL_DIRS: [Direction; 2] = [Direction::new(1, 1), Direction::new(-1, 1)];

impl Direction {
    pub const fn new(dr: i64, dc: i64) -> Self {
        Self { dr, dc }
    }

    /// Raw step from `from` to `to`, without normalization.
    pub fn delta(from: Coord, to: Coord) -> Self {
        Self {
            dr: to.0 as i64 - from.0 as i64,
            dc: to.1 as i64 - from.1 as i64,
        }
    }

    /// Step from `from` to `to` reduced to its smallest integer form, so a
    /// two-cell jump of (0, 2) becomes (0, 1). Returns `None` when the
    /// coordinates coincide.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let d = Self::delta(from, to);
        if d.dr == 0 && d.dc == 0 {
            return None;
        }
        let norm = gcd(d.dr.unsigned_abs(), d.dc.unsigned_abs()) as i64;
        Some(Self {
            dr: d.dr / norm,
            dc: d.dc / norm,
        })
    }

    /// Coordinate reached after taking `steps` steps from `start`. Returns
    /// `None` when the walk leaves the non-negative quadrant.
    pub fn offset(&self, start: Coord, steps: usize) -> Option<Coord> {
        let r = start.0 as i64 + self.dr * steps as i64;
        let c = start.1 as i64 + self.dc * steps as i64;
        if r < 0 || c < 0 {
            return None;
        }
        Some((r as usize, c as usize))
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
