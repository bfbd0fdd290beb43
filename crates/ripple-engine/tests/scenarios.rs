//! End-to-end scenarios through the controller.
//!
//! These drive `SimulationController` the way a UI adapter would and
//! check the documented behaviour of a full tick.

use ripple_core::{Button, Cell, Command, GridState, StepError, TickId, Tool};
use ripple_engine::{SimConfig, SimulationController, OBSTACLE_SENTINEL, PROBE_SENTINEL};
use ripple_propagator::Propagator;
use ripple_test_utils::{boundary_cells, FailingPropagator};

fn controller(dim: usize) -> SimulationController {
    SimulationController::new(SimConfig {
        dim,
        ..SimConfig::default()
    })
    .unwrap()
}

#[test]
fn brush_two_paints_three_by_three_on_reference_grid() {
    let mut sim = SimulationController::new(SimConfig::default()).unwrap();
    sim.set_brush_size(2);
    sim.apply_pointer(10, 10, Button::Paint);

    let grid = sim.grid();
    assert_eq!(grid.obstacle_count(), 9);
    for r in 9..=11 {
        for c in 9..=11 {
            assert!(grid.is_obstacle(Cell::new(r, c)), "({r}, {c}) not painted");
        }
    }
    assert!(!grid.is_obstacle(Cell::new(8, 10)));
    assert!(!grid.is_obstacle(Cell::new(12, 10)));
}

#[test]
fn source_reaches_peak_at_quarter_period() {
    let mut sim = SimulationController::new(SimConfig {
        dim: 9,
        dt: 0.25,
        ..SimConfig::default()
    })
    .unwrap();
    sim.apply_all([
        Command::SetTool(Tool::Source),
        Command::SetAmplitude(2.0),
        Command::SetFrequency(1.0),
        Command::Pointer {
            row: 4,
            col: 4,
            button: Button::Paint,
        },
    ]);

    // Tick 1 drives at t = 0, tick 2 at t = 0.25.
    sim.tick().unwrap();
    assert_eq!(sim.grid().height(Cell::new(4, 4)), 0.0);
    sim.tick().unwrap();
    assert!((sim.grid().height(Cell::new(4, 4)) - 2.0).abs() < 1e-12);
}

#[test]
fn flat_grid_is_a_fixed_point_through_ticks() {
    let mut sim = controller(5);
    for _ in 0..20 {
        sim.tick().unwrap();
    }
    assert_eq!(sim.grid(), &GridState::new(5));
    assert!(sim.history().values().all(|v| v == 0.0));
}

#[test]
fn ring_and_obstacles_hold_after_every_tick() {
    let mut sim = controller(24);
    sim.set_tool(Tool::Source);
    sim.set_brush_size(2);
    sim.apply_pointer(6, 6, Button::Paint);
    sim.set_tool(Tool::Obstacle);
    sim.set_brush_size(1);
    for c in 2..20 {
        sim.apply_pointer(12, c, Button::Paint);
    }
    sim.set_frequency(0.5);

    for _ in 0..60 {
        sim.tick().unwrap();
        let grid = sim.grid();
        for cell in boundary_cells(24) {
            assert_eq!(grid.height(cell), 0.0);
        }
        for c in 2..20 {
            let wall = Cell::new(12, c);
            assert_eq!(grid.height(wall), 0.0);
            assert_eq!(grid.velocity(wall), 0.0);
        }
    }
    // Waves reach the source side of the wall.
    let near: f64 = (0..24).map(|c| sim.grid().height(Cell::new(8, c)).abs()).sum();
    assert!(near > 0.0);
}

#[test]
fn obstacle_painted_over_source_is_still_driven() {
    let mut sim = controller(9);
    sim.apply_all([
        Command::SetTool(Tool::Source),
        Command::Pointer {
            row: 4,
            col: 4,
            button: Button::Paint,
        },
        Command::SetTool(Tool::Obstacle),
        Command::Pointer {
            row: 4,
            col: 4,
            button: Button::Paint,
        },
        Command::SetFrequency(0.5),
    ]);
    let cell = Cell::new(4, 4);
    assert!(sim.grid().is_obstacle(cell) && sim.grid().is_source(cell));

    sim.tick().unwrap();
    sim.tick().unwrap();
    let expected = (std::f64::consts::TAU * 0.5 * 0.1).sin();
    assert!((sim.grid().height(cell) - expected).abs() < 1e-12);
    assert_eq!(sim.grid().velocity(cell), 0.0);

    sim.apply_pointer(4, 4, Button::Erase);
    assert!(!sim.grid().is_obstacle(cell) && !sim.grid().is_source(cell));
}

#[test]
fn history_keeps_most_recent_window() {
    let mut sim = SimulationController::new(SimConfig {
        dim: 8,
        history_duration: 1.0,
        ..SimConfig::default()
    })
    .unwrap();
    assert_eq!(sim.history_cap(), 10);

    for _ in 0..25 {
        sim.tick().unwrap();
    }
    assert_eq!(sim.history().len(), 10);
    let first = sim.history().times().next().unwrap();
    let (last, _) = sim.history().latest().unwrap();
    assert!((first - 1.5).abs() < 1e-9);
    assert!((last - 2.4).abs() < 1e-9);
}

#[test]
fn snapshot_sentinels_never_touch_heights() {
    let mut sim = controller(12);
    sim.set_tool(Tool::Source);
    sim.apply_pointer(6, 6, Button::Paint);
    sim.set_tool(Tool::Obstacle);
    sim.apply_pointer(3, 3, Button::Paint);
    sim.set_frequency(0.5);

    for _ in 0..10 {
        let result = sim.tick().unwrap();
        assert_eq!(result.snapshot.get(3, 3), Some(OBSTACLE_SENTINEL));
        assert_eq!(result.snapshot.get(6, 6), Some(PROBE_SENTINEL));
        assert!(sim.grid().heights().iter().all(|h| h.is_finite()));
    }
}

#[test]
fn toggling_probe_suspends_but_keeps_history() {
    let mut sim = controller(8);
    for _ in 0..4 {
        sim.tick().unwrap();
    }
    sim.apply(Command::ToggleProbe);
    for _ in 0..4 {
        let r = sim.tick().unwrap();
        assert_eq!(r.probe_sample, None);
        assert!(!r.snapshot.values().contains(&PROBE_SENTINEL));
    }
    assert_eq!(sim.history().len(), 4);
    sim.apply(Command::ToggleProbe);
    sim.tick().unwrap();
    assert_eq!(sim.history().len(), 5);
}

#[test]
fn reset_is_idempotent() {
    let mut sim = controller(10);
    sim.set_tool(Tool::Source);
    sim.apply_pointer(5, 5, Button::Paint);
    for _ in 0..8 {
        sim.tick().unwrap();
    }
    sim.reset();
    let once = (sim.state_hash(), sim.elapsed(), sim.current_tick(), sim.history().len());
    sim.reset();
    let twice = (sim.state_hash(), sim.elapsed(), sim.current_tick(), sim.history().len());
    assert_eq!(once, twice);
    assert_eq!(sim.grid(), &GridState::new(10));
    assert_eq!(sim.current_tick(), TickId(0));
}

#[test]
fn drag_outside_stroke_does_nothing() {
    let mut sim = controller(10);
    sim.apply(Command::PointerDrag { row: 5, col: 5 });
    assert_eq!(sim.grid().obstacle_count(), 0);

    sim.apply_all([
        Command::PointerPress {
            row: 2,
            col: 2,
            button: Button::Paint,
        },
        Command::PointerDrag { row: 2, col: 3 },
        Command::PointerDrag { row: 20, col: 3 },
        Command::PointerRelease,
        Command::PointerDrag { row: 7, col: 7 },
    ]);
    assert_eq!(sim.grid().obstacle_count(), 2);
}

#[test]
fn select_press_moves_probe_without_stroke() {
    let mut sim = controller(10);
    sim.apply(Command::PointerPress {
        row: 1,
        col: 8,
        button: Button::Select,
    });
    sim.apply(Command::PointerDrag { row: 3, col: 3 });
    assert_eq!(sim.settings().selected, Cell::new(1, 8));
    assert_eq!(sim.grid().obstacle_count(), 0);
    assert_eq!(sim.snapshot().get(1, 8), Some(PROBE_SENTINEL));
}

#[test]
fn failed_tick_leaves_clock_untouched() {
    let pipeline: Vec<Box<dyn Propagator>> = vec![Box::new(FailingPropagator::new("broken", 0))];
    let config = SimConfig {
        dim: 6,
        ..SimConfig::default()
    };
    let mut sim = SimulationController::with_pipeline(config, pipeline).unwrap();
    for _ in 0..3 {
        let err = sim.tick().unwrap_err();
        assert!(matches!(err, StepError::PropagatorFailed { ref name, .. } if name == "broken"));
    }
    assert_eq!(sim.current_tick(), TickId(0));
    assert_eq!(sim.elapsed(), 0.0);
    assert!(sim.history().is_empty());
    assert_eq!(sim.grid(), &GridState::new(6));
}
