//! Display snapshots handed to the renderer.
//!
//! A [`DisplaySnapshot`] is an owned copy of the height field with
//! obstacle cells and the probe cell overwritten by sentinels. Both
//! sentinels lie outside any finite height, so a renderer can colour
//! them distinctly without guessing at the live value range.

use ripple_core::{Cell, GridState, TickId};

/// Marks obstacle cells.
pub const OBSTACLE_SENTINEL: f64 = f64::NEG_INFINITY;

/// Marks the probe cell while probing is enabled. Wins over
/// [`OBSTACLE_SENTINEL`] when the probe sits on an obstacle.
pub const PROBE_SENTINEL: f64 = f64::INFINITY;

/// Immutable, sentinel-marked copy of the height field.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySnapshot {
    dim: usize,
    values: Vec<f64>,
    tick_id: TickId,
    elapsed: f64,
}

impl DisplaySnapshot {
    /// Copy `grid`'s heights, then mark obstacles, then mark `probe`
    /// if given.
    pub fn capture(grid: &GridState, probe: Option<Cell>, tick_id: TickId, elapsed: f64) -> Self {
        let dim = grid.dim();
        let mut values = grid.heights().to_vec();
        for (v, &obstacle) in values.iter_mut().zip(grid.obstacle_mask()) {
            if obstacle {
                *v = OBSTACLE_SENTINEL;
            }
        }
        if let Some(cell) = probe {
            values[cell.flat(dim)] = PROBE_SENTINEL;
        }
        Self {
            dim,
            values,
            tick_id,
            elapsed,
        }
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major display values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Display value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.dim && col < self.dim {
            Some(self.values[row * self.dim + col])
        } else {
            None
        }
    }

    /// Tick the snapshot was taken after.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Simulation time at capture.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Largest absolute finite value, ignoring sentinels. Useful for
    /// colour scaling.
    pub fn max_abs_height(&self) -> f64 {
        self.values
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }
}
