//! The top-level simulation controller.
//!
//! [`SimulationController`] owns the grid, the propagator pipeline, the
//! runtime [`Settings`], the probe history and the clock. A UI adapter
//! pushes configuration and pointer events in through setters or
//! [`Command`]s and pulls a [`DisplaySnapshot`] plus the probe history
//! out after every [`tick()`](SimulationController::tick).
//!
//! # Ownership model
//!
//! `SimulationController` is [`Send`] (a driver may own it on any
//! thread) but not [`Sync`]. All mutation goes through `&mut self`; there
//! are no locks and no background threads.

use std::time::Instant;

use ripple_core::{grid_hash, Button, Command, GridState, StepError, TickId, Tool};
use ripple_propagator::{dt_limit, validate_pipeline, DtLimit, Propagator, StepContext};
use ripple_propagators::default_pipeline;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;
use crate::paint::{Brush, PaintEditor, PaintOutcome};
use crate::probe::{history_cap, ProbeHistory, ProbeRecorder};
use crate::settings::{clamp_brush_size, parse_brush_size, Settings};
use crate::snapshot::DisplaySnapshot;

// Compile-time assertion: SimulationController is Send.
// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationController>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`SimulationController::tick()`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// The tick just completed.
    pub tick_id: TickId,
    /// Simulation time after the clock advance.
    pub elapsed: f64,
    /// Height sampled at the probe cell, if probing is enabled.
    pub probe_sample: Option<f64>,
    /// Sentinel-marked height field after this tick.
    pub snapshot: DisplaySnapshot,
    /// Performance metrics for this tick.
    pub metrics: StepMetrics,
}

// ── SimulationController ────────────────────────────────────────

/// Single-threaded wave simulation driven one tick at a time.
///
/// Each [`tick()`](Self::tick) runs, in order: the propagator pipeline
/// (wave integrator, then source driver) → probe record (if enabled) →
/// clock advance → display snapshot. The source driver and the probe both
/// see the clock value from before the advance.
///
/// # Example
///
/// ```
/// use ripple_core::{Button, Tool};
/// use ripple_engine::{SimConfig, SimulationController};
///
/// let mut sim = SimulationController::new(SimConfig {
///     dim: 32,
///     ..SimConfig::default()
/// })
/// .unwrap();
/// sim.set_tool(Tool::Source);
/// sim.apply_pointer(16, 16, Button::Paint);
/// sim.set_frequency(0.5);
///
/// for _ in 0..10 {
///     let result = sim.tick().unwrap();
///     assert!(result.snapshot.values().len() == 32 * 32);
/// }
/// assert_eq!(sim.history().len(), 10);
/// ```
pub struct SimulationController {
    config: SimConfig,
    settings: Settings,
    grid: GridState,
    /// Pre-tick copy used to roll back failed ticks.
    backup: GridState,
    pipeline: Vec<Box<dyn Propagator>>,
    editor: PaintEditor,
    history: ProbeHistory,
    elapsed: f64,
    current_tick: TickId,
    last_metrics: StepMetrics,
}

impl SimulationController {
    /// Create a controller running the default pipeline.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_pipeline(config, default_pipeline())
    }

    /// Create a controller running a custom propagator pipeline.
    ///
    /// Validates the configuration and the pipeline. Consumes both.
    pub fn with_pipeline(
        config: SimConfig,
        pipeline: Vec<Box<dyn Propagator>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_pipeline(&pipeline, config.dt)?;

        let settings = Settings::new(config.dim);
        let limit = dt_limit(&pipeline, &settings.params())?;
        let cap = history_cap(config.history_duration, config.dt);
        let grid = GridState::new(config.dim);

        info!(
            "Simulation ready: {0}x{0} grid, dt={1}, probe history cap {2}, {3} propagators",
            config.dim,
            config.dt,
            cap,
            pipeline.len()
        );

        let controller = Self {
            backup: grid.clone(),
            grid,
            settings,
            pipeline,
            editor: PaintEditor::new(),
            history: ProbeHistory::with_capacity(cap),
            elapsed: 0.0,
            current_tick: TickId(0),
            last_metrics: StepMetrics::default(),
            config,
        };
        controller.warn_if_unstable(limit.as_ref());
        Ok(controller)
    }

    // ── Ticking ─────────────────────────────────────────────────

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::PropagatorFailed`] if a stage fails, or
    /// [`StepError::Diverged`] if the divergence check is enabled and a
    /// height went non-finite. In both cases the grid is rolled back to
    /// its pre-tick state and neither the clock nor the history change.
    pub fn tick(&mut self) -> Result<StepResult, StepError> {
        let tick_start = Instant::now();
        let next_tick = TickId(self.current_tick.0 + 1);
        let params = self.settings.params();

        // 1. Save the pre-tick state.
        self.backup.copy_from(&self.grid);

        // 2. Run the pipeline.
        let mut propagator_us = Vec::with_capacity(self.pipeline.len());
        let mut failure = None;
        {
            let mut ctx = StepContext::new(
                &mut self.grid,
                params,
                next_tick,
                self.config.dt,
                self.elapsed,
            );
            for prop in &self.pipeline {
                let prop_start = Instant::now();
                if let Err(reason) = prop.step(&mut ctx) {
                    failure = Some(StepError::PropagatorFailed {
                        name: prop.name().to_string(),
                        reason,
                    });
                    break;
                }
                propagator_us.push((
                    prop.name().to_string(),
                    prop_start.elapsed().as_micros() as u64,
                ));
            }
        }

        // 3. Optional divergence check.
        if failure.is_none() && self.config.divergence_check {
            if let Some(cell_index) = self.grid.heights().iter().position(|h| !h.is_finite()) {
                failure = Some(StepError::Diverged { cell_index });
            }
        }

        if let Some(err) = failure {
            self.grid.copy_from(&self.backup);
            warn!("Tick {} rolled back: {}", next_tick, err);
            return Err(err);
        }

        // 4. Probe.
        let probe_start = Instant::now();
        let probe_sample = self.settings.probe_enabled.then(|| {
            ProbeRecorder.record(
                &self.grid,
                self.settings.selected,
                self.elapsed,
                &mut self.history,
            )
        });
        let probe_us = probe_start.elapsed().as_micros() as u64;

        // 5. Advance the clock.
        self.elapsed += self.config.dt;
        self.current_tick = next_tick;

        // 6. Snapshot.
        let snapshot_start = Instant::now();
        let snapshot = self.snapshot();
        let snapshot_us = snapshot_start.elapsed().as_micros() as u64;

        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            propagator_us,
            probe_us,
            snapshot_us,
        };
        self.last_metrics = metrics.clone();
        trace!("Tick {} complete in {}us", next_tick, metrics.total_us);

        Ok(StepResult {
            tick_id: next_tick,
            elapsed: self.elapsed,
            probe_sample,
            snapshot,
            metrics,
        })
    }

    /// Build a display snapshot of the current state.
    ///
    /// Obstacles are marked with
    /// [`OBSTACLE_SENTINEL`](crate::OBSTACLE_SENTINEL) and, while probing
    /// is enabled, the probe cell with
    /// [`PROBE_SENTINEL`](crate::PROBE_SENTINEL).
    pub fn snapshot(&self) -> DisplaySnapshot {
        let probe = self.settings.probe_enabled.then_some(self.settings.selected);
        DisplaySnapshot::capture(&self.grid, probe, self.current_tick, self.elapsed)
    }

    /// Zero the grid, clear both masks and the probe history, rewind the
    /// clock, and end any active stroke. Settings are kept.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.history.clear();
        self.elapsed = 0.0;
        self.current_tick = TickId(0);
        self.editor.release();
        self.last_metrics = StepMetrics::default();
        info!("Simulation reset");
    }

    // ── Settings ────────────────────────────────────────────────

    /// Set the source oscillator frequency.
    pub fn set_frequency(&mut self, value: f64) {
        if accept_finite("frequency", value) {
            self.settings.frequency = value;
        }
    }

    /// Set the source oscillator amplitude.
    pub fn set_amplitude(&mut self, value: f64) {
        if accept_finite("amplitude", value) {
            self.settings.amplitude = value;
        }
    }

    /// Set the wave speed `c`. Warns when the new speed puts `dt` above
    /// the pipeline's stability limit; the value is applied regardless.
    pub fn set_wave_speed(&mut self, value: f64) {
        if accept_finite("wave_speed", value) {
            self.settings.wave_speed = value;
            match dt_limit(&self.pipeline, &self.settings.params()) {
                Ok(limit) => self.warn_if_unstable(limit.as_ref()),
                Err(e) => warn!("Cannot compute stability limit: {}", e),
            }
        }
    }

    /// Set the velocity attenuation coefficient.
    pub fn set_attenuation(&mut self, value: f64) {
        if accept_finite("attenuation", value) {
            if value < 0.0 {
                warn!("Negative attenuation {} adds energy every tick", value);
            }
            self.settings.attenuation = value;
        }
    }

    /// Set the brush radius, clamped to at least 1.
    pub fn set_brush_size(&mut self, size: i64) {
        self.settings.brush_size = clamp_brush_size(size);
        debug!("Brush size set to {}", self.settings.brush_size);
    }

    /// Set the brush radius from entry-box text. Unparsable text means 1.
    pub fn set_brush_size_text(&mut self, text: &str) {
        self.settings.brush_size = parse_brush_size(text);
        debug!("Brush size set to {} from {:?}", self.settings.brush_size, text);
    }

    /// Choose the painting tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.settings.tool = tool;
    }

    /// Enable or disable probing. Disabling keeps the recorded history.
    pub fn set_probe_enabled(&mut self, enabled: bool) {
        self.settings.probe_enabled = enabled;
        debug!("Probe {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Flip the probe-enabled flag.
    pub fn toggle_probe(&mut self) {
        self.set_probe_enabled(!self.settings.probe_enabled);
    }

    /// Move the probe to `(row, col)`. Ignored when out of range.
    pub fn set_selected_point(&mut self, row: i64, col: i64) {
        match self.grid.cell_at(row, col) {
            Some(cell) => {
                self.settings.selected = cell;
                debug!("Probe moved to {}", cell);
            }
            None => debug!("Ignoring out-of-range probe point ({}, {})", row, col),
        }
    }

    // ── Pointer ─────────────────────────────────────────────────

    fn brush(&self) -> Brush {
        Brush {
            tool: self.settings.tool,
            radius: self.settings.brush_size,
        }
    }

    /// Apply a single pointer event without starting a stroke.
    pub fn apply_pointer(&mut self, row: i64, col: i64, button: Button) -> PaintOutcome {
        let brush = self.brush();
        let outcome = PaintEditor::apply(
            &mut self.grid,
            row,
            col,
            button,
            brush,
            &mut self.settings.selected,
        );
        log_outcome(button, row, col, &outcome);
        outcome
    }

    /// Pointer pressed: apply, and start a stroke for paint or erase.
    pub fn pointer_press(&mut self, row: i64, col: i64, button: Button) -> PaintOutcome {
        let brush = self.brush();
        let outcome = self.editor.press(
            &mut self.grid,
            row,
            col,
            button,
            brush,
            &mut self.settings.selected,
        );
        log_outcome(button, row, col, &outcome);
        outcome
    }

    /// Pointer moved: keep painting if a stroke is active.
    pub fn pointer_drag(&mut self, row: i64, col: i64) -> PaintOutcome {
        let brush = self.brush();
        let outcome = self.editor.drag(
            &mut self.grid,
            row,
            col,
            brush,
            &mut self.settings.selected,
        );
        if let Some(button) = self.editor.active_stroke() {
            log_outcome(button, row, col, &outcome);
        }
        outcome
    }

    /// Pointer released: end the active stroke.
    pub fn pointer_release(&mut self) {
        self.editor.release();
    }

    // ── Commands ────────────────────────────────────────────────

    /// Dispatch a single command to the matching setter or pointer method.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetFrequency(v) => self.set_frequency(v),
            Command::SetAmplitude(v) => self.set_amplitude(v),
            Command::SetWaveSpeed(v) => self.set_wave_speed(v),
            Command::SetAttenuation(v) => self.set_attenuation(v),
            Command::SetBrushSize(size) => self.set_brush_size(size),
            Command::SetBrushSizeText(text) => self.set_brush_size_text(&text),
            Command::SetTool(tool) => self.set_tool(tool),
            Command::SetProbeEnabled(enabled) => self.set_probe_enabled(enabled),
            Command::ToggleProbe => self.toggle_probe(),
            Command::SetSelectedPoint { row, col } => self.set_selected_point(row, col),
            Command::Pointer { row, col, button } => {
                self.apply_pointer(row, col, button);
            }
            Command::PointerPress { row, col, button } => {
                self.pointer_press(row, col, button);
            }
            Command::PointerDrag { row, col } => {
                self.pointer_drag(row, col);
            }
            Command::PointerRelease => self.pointer_release(),
            Command::Reset => self.reset(),
        }
    }

    /// Dispatch commands in order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The authoritative grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Current runtime settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Construction-time configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Recorded probe samples.
    pub fn history(&self) -> &ProbeHistory {
        &self.history
    }

    /// Maximum number of probe samples retained.
    pub fn history_cap(&self) -> usize {
        self.history.cap()
    }

    /// Simulation time (0 after construction or reset).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current tick ID (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// FNV-1a fingerprint of the grid, for determinism checks.
    pub fn state_hash(&self) -> u64 {
        grid_hash(&self.grid)
    }

    /// The tightest stable timestep under the current settings, if any
    /// stage imposes one.
    pub fn stability_limit(&self) -> Option<DtLimit> {
        dt_limit(&self.pipeline, &self.settings.params()).ok().flatten()
    }

    /// Button of the active pointer stroke, if any.
    pub fn active_stroke(&self) -> Option<Button> {
        self.editor.active_stroke()
    }

    fn warn_if_unstable(&self, limit: Option<&DtLimit>) {
        if let Some(limit) = limit {
            if self.config.dt > limit.max_dt {
                warn!(
                    "dt={} exceeds the stable limit {:.4} imposed by '{}' at wave_speed={}; the simulation will diverge",
                    self.config.dt, limit.max_dt, limit.constraining_propagator, self.settings.wave_speed
                );
            }
        }
    }
}

impl std::fmt::Debug for SimulationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationController")
            .field("dim", &self.config.dim)
            .field("current_tick", &self.current_tick)
            .field("elapsed", &self.elapsed)
            .field("propagators", &self.pipeline.len())
            .finish()
    }
}

fn accept_finite(name: &str, value: f64) -> bool {
    if value.is_finite() {
        true
    } else {
        warn!("Ignoring non-finite {} value {}", name, value);
        false
    }
}

fn log_outcome(button: Button, row: i64, col: i64, outcome: &PaintOutcome) {
    if outcome.is_noop() {
        debug!("{:?} at ({}, {}) missed the grid", button, row, col);
    } else if let Some(cell) = outcome.selected {
        debug!("Probe moved to {}", cell);
    } else {
        debug!(
            "{:?} at ({}, {}): {} cells covered, {} changed",
            button, row, col, outcome.cells_covered, outcome.cells_changed
        );
    }
}
