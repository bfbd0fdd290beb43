//! Benchmark profiles and utilities for the Ripple wave simulation.
//!
//! Provides pre-built controllers for benchmarking and examples:
//!
//! - [`reference_profile`]: 300x300 grid (90K cells), the interactive default
//! - [`stress_profile`]: 1000x1000 grid (1M cells) for stress testing
//! - [`scatter_cells`]: deterministic cell placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use ripple_core::{Button, Cell, Command, Tool};
use ripple_engine::{ConfigError, SimConfig, SimulationController};

/// Build the reference benchmark profile: 300x300 grid (90K cells).
///
/// Default settings, `dt = 0.1` (well inside the CFL limit of ~0.707 at
/// `c = 1`), four 3x3 sources placed from `seed` and a vertical wall
/// with a gap through the middle of the grid.
pub fn reference_profile(seed: u64) -> Result<SimulationController, ConfigError> {
    populated(300, seed)
}

/// Build a stress benchmark profile: 1000x1000 grid (1M cells).
///
/// Same layout as [`reference_profile`] at ~11x the cell count.
pub fn stress_profile(seed: u64) -> Result<SimulationController, ConfigError> {
    populated(1000, seed)
}

fn populated(dim: usize, seed: u64) -> Result<SimulationController, ConfigError> {
    let mut sim = SimulationController::new(SimConfig {
        dim,
        ..SimConfig::default()
    })?;

    let mut setup = vec![
        Command::SetFrequency(0.3),
        Command::SetTool(Tool::Source),
        Command::SetBrushSize(2),
    ];
    // Sources go in the left half so the wall sits between them and
    // the right half.
    for cell in scatter_cells(dim, 4, seed) {
        setup.push(Command::Pointer {
            row: cell.row as i64,
            col: (cell.col / 2) as i64,
            button: Button::Paint,
        });
    }
    setup.push(Command::SetTool(Tool::Obstacle));
    setup.push(Command::SetBrushSize(1));
    let mid = (dim / 2) as i64;
    let gap = (dim / 20) as i64;
    for row in 1..(dim as i64 - 1) {
        if (row - mid).abs() > gap {
            setup.push(Command::Pointer {
                row,
                col: mid,
                button: Button::Paint,
            });
        }
    }
    sim.apply_all(setup);
    Ok(sim)
}

/// Pick `n` distinct cells of a `dim x dim` grid deterministically.
///
/// Spreads cells with a simple hash of the seed and linear-probes on
/// collision.
pub fn scatter_cells(dim: usize, n: usize, seed: u64) -> Vec<Cell> {
    let cell_count = dim * dim;
    let n = n.min(cell_count);
    let mut cells = Vec::with_capacity(n);
    let mut occupied = HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;

        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        cells.push(Cell::new(pos / dim, pos % dim));
    }

    cells
}
