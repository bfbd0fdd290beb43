//! Strongly-typed identifiers: [`Cell`] coordinates and [`TickId`].

use std::fmt;

/// A validated `(row, col)` coordinate on a square grid.
///
/// A `Cell` carries no dimension of its own; it is only meaningful
/// against the grid that produced it (see
/// [`GridState::cell_at`](crate::GridState::cell_at)). Indexing a grid
/// with a cell outside `[0, dim)²` is a programming error and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (first axis).
    pub row: usize,
    /// Column index (second axis).
    pub col: usize,
}

impl Cell {
    /// Construct a cell from its row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index for a grid of side `dim`.
    #[inline]
    pub fn flat(self, dim: usize) -> usize {
        self.row * dim + self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step; reset to 0
/// together with the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
