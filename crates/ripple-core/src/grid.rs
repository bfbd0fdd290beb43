//! The authoritative simulation grid: height, velocity, obstacle and
//! source fields over an `N×N` square lattice.

use crate::id::Cell;

/// Dense row-major storage for every per-cell field of the simulation.
///
/// All four arrays share the same dimension and indexing convention.
/// The dimension is fixed at construction; [`reset`](GridState::reset)
/// zeroes the contents in place without reallocating.
///
/// Per-cell accessors take a [`Cell`] and assert that it lies inside
/// `[0, dim)²`. Coordinates coming from outside the core must be
/// validated first with [`cell_at`](GridState::cell_at).
///
/// # Examples
///
/// ```
/// use ripple_core::{Cell, GridState};
///
/// let mut grid = GridState::new(5);
/// let centre = Cell::new(2, 2);
/// grid.set_height(centre, 1.0);
/// grid.set_obstacle(Cell::new(1, 1), true);
///
/// assert_eq!(grid.height(centre), 1.0);
/// assert!(grid.is_obstacle(Cell::new(1, 1)));
/// assert_eq!(grid.cell_at(-1, 2), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    dim: usize,
    height: Vec<f64>,
    velocity: Vec<f64>,
    obstacles: Vec<bool>,
    sources: Vec<bool>,
}

impl GridState {
    /// Create a zeroed grid of side `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim == 0` or `dim * dim` overflows `usize`. Callers
    /// building from user configuration validate the dimension first.
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "grid dimension must be at least 1");
        let n = dim
            .checked_mul(dim)
            .unwrap_or_else(|| panic!("grid dimension {dim} overflows the cell count"));
        Self {
            dim,
            height: vec![0.0; n],
            velocity: vec![0.0; n],
            obstacles: vec![false; n],
            sources: vec![false; n],
        }
    }

    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells (`dim * dim`).
    pub fn cell_count(&self) -> usize {
        self.height.len()
    }

    /// Validate an external coordinate. Returns `None` when either axis is
    /// outside `[0, dim)`.
    pub fn cell_at(&self, row: i64, col: i64) -> Option<Cell> {
        let dim = self.dim as i64;
        if (0..dim).contains(&row) && (0..dim).contains(&col) {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Whether `cell` lies on the outer ring (row or column 0 or `dim - 1`).
    pub fn is_boundary(&self, cell: Cell) -> bool {
        self.check(cell);
        let last = self.dim - 1;
        cell.row == 0 || cell.col == 0 || cell.row == last || cell.col == last
    }

    #[inline]
    #[track_caller]
    fn check(&self, cell: Cell) {
        assert!(
            cell.row < self.dim && cell.col < self.dim,
            "cell {cell} out of range for {0}x{0} grid",
            self.dim
        );
    }

    #[inline]
    #[track_caller]
    fn index(&self, cell: Cell) -> usize {
        self.check(cell);
        cell.flat(self.dim)
    }

    /// Height at `cell`.
    #[track_caller]
    pub fn height(&self, cell: Cell) -> f64 {
        self.height[self.index(cell)]
    }

    /// Overwrite the height at `cell`.
    #[track_caller]
    pub fn set_height(&mut self, cell: Cell, value: f64) {
        let i = self.index(cell);
        self.height[i] = value;
    }

    /// Velocity at `cell`.
    #[track_caller]
    pub fn velocity(&self, cell: Cell) -> f64 {
        self.velocity[self.index(cell)]
    }

    /// Overwrite the velocity at `cell`.
    #[track_caller]
    pub fn set_velocity(&mut self, cell: Cell, value: f64) {
        let i = self.index(cell);
        self.velocity[i] = value;
    }

    /// Whether `cell` is a rigid obstacle.
    #[track_caller]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles[self.index(cell)]
    }

    /// Set or clear the obstacle flag at `cell`.
    #[track_caller]
    pub fn set_obstacle(&mut self, cell: Cell, value: bool) {
        let i = self.index(cell);
        self.obstacles[i] = value;
    }

    /// Whether `cell` is an oscillating source.
    #[track_caller]
    pub fn is_source(&self, cell: Cell) -> bool {
        self.sources[self.index(cell)]
    }

    /// Set or clear the source flag at `cell`.
    #[track_caller]
    pub fn set_source(&mut self, cell: Cell, value: bool) {
        let i = self.index(cell);
        self.sources[i] = value;
    }

    /// Row-major height field.
    pub fn heights(&self) -> &[f64] {
        &self.height
    }

    /// Mutable row-major height field.
    pub fn heights_mut(&mut self) -> &mut [f64] {
        &mut self.height
    }

    /// Row-major velocity field.
    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    /// Mutable row-major velocity field.
    pub fn velocities_mut(&mut self) -> &mut [f64] {
        &mut self.velocity
    }

    /// Row-major obstacle mask.
    pub fn obstacle_mask(&self) -> &[bool] {
        &self.obstacles
    }

    /// Row-major source mask.
    pub fn source_mask(&self) -> &[bool] {
        &self.sources
    }

    /// Split borrow for the integrator: mutable height and velocity plus
    /// the read-only obstacle mask.
    pub fn dynamics_mut(&mut self) -> (&mut [f64], &mut [f64], &[bool]) {
        (&mut self.height, &mut self.velocity, &self.obstacles)
    }

    /// Split borrow for the source driver: mutable height plus the
    /// read-only source mask.
    pub fn forcing_mut(&mut self) -> (&mut [f64], &[bool]) {
        (&mut self.height, &self.sources)
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&b| b).count()
    }

    /// Number of source cells.
    pub fn source_count(&self) -> usize {
        self.sources.iter().filter(|&&b| b).count()
    }

    /// Overwrite every field with `other`'s contents, reusing this grid's
    /// allocation.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn copy_from(&mut self, other: &GridState) {
        assert_eq!(
            self.dim, other.dim,
            "cannot copy a {0}x{0} grid into a {1}x{1} grid",
            other.dim, self.dim
        );
        self.height.copy_from_slice(&other.height);
        self.velocity.copy_from_slice(&other.velocity);
        self.obstacles.copy_from_slice(&other.obstacles);
        self.sources.copy_from_slice(&other.sources);
    }

    /// Zero height and velocity and clear both masks, keeping the
    /// allocation and dimension.
    pub fn reset(&mut self) {
        self.height.fill(0.0);
        self.velocity.fill(0.0);
        self.obstacles.fill(false);
        self.sources.fill(false);
    }
}
