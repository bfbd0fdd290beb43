//! Ripple Quickstart: a complete, minimal wave simulation.
//!
//! Demonstrates:
//!   1. Building a SimConfig and SimulationController
//!   2. Painting a source and an obstacle wall with commands
//!   3. Ticking, reading snapshots and the probe history
//!   4. Resetting
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use ripple_core::{Button, Command, Tool};
use ripple_engine::{SimConfig, SimulationController, OBSTACLE_SENTINEL, PROBE_SENTINEL};
use tracing_subscriber::EnvFilter;

// ─── Grid parameters ────────────────────────────────────────────

const DIM: usize = 64;
const TICKS: usize = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut sim = SimulationController::new(SimConfig {
        dim: DIM,
        history_duration: 10.0,
        ..SimConfig::default()
    })?;

    // A source on the left, a wall with a gap in the middle.
    let mut setup = vec![
        Command::SetTool(Tool::Source),
        Command::SetBrushSize(2),
        Command::Pointer {
            row: 32,
            col: 12,
            button: Button::Paint,
        },
        Command::SetTool(Tool::Obstacle),
        Command::SetBrushSize(1),
        Command::SetFrequency(0.3),
        Command::SetAmplitude(2.0),
        Command::SetSelectedPoint { row: 32, col: 48 },
    ];
    for row in 1..(DIM as i64 - 1) {
        if !(29..=35).contains(&row) {
            setup.push(Command::Pointer {
                row,
                col: 32,
                button: Button::Paint,
            });
        }
    }
    sim.apply_all(setup);

    for _ in 0..TICKS {
        let result = sim.tick()?;
        if result.tick_id.0 % 50 == 0 {
            println!(
                "tick {:>4}  t={:>5.1}  probe={:+.4}  max|h|={:.4}  {}us",
                result.tick_id,
                result.elapsed,
                result.probe_sample.unwrap_or(0.0),
                result.snapshot.max_abs_height(),
                result.metrics.total_us,
            );
        }
    }

    let snap = sim.snapshot();
    let walls = snap.values().iter().filter(|&&v| v == OBSTACLE_SENTINEL).count();
    let probes = snap.values().iter().filter(|&&v| v == PROBE_SENTINEL).count();
    println!("snapshot: {walls} obstacle cells, {probes} probe cell");

    let history = sim.history();
    println!(
        "probe history: {} of {} samples, latest {:?}",
        history.len(),
        history.cap(),
        history.latest()
    );
    println!("state hash: {:016x}", sim.state_hash());

    sim.reset();
    println!("after reset: tick {}, hash {:016x}", sim.current_tick(), sim.state_hash());
    Ok(())
}
