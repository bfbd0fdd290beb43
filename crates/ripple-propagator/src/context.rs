//! Execution context passed to pipeline stages during a tick.
//!
//! [`StepContext`] gives a stage exclusive mutable access to the grid
//! together with the tick's parameters and clock. Stages run strictly in
//! pipeline order, so each one sees every earlier stage's writes
//! (Euler-style sequential composition).

use crate::params::WaveParams;
use ripple_core::{GridState, TickId};

/// Execution context passed to each stage's `step()` method.
pub struct StepContext<'a> {
    grid: &'a mut GridState,
    params: WaveParams,
    tick_id: TickId,
    dt: f64,
    elapsed: f64,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the controller, not by stages directly.
    /// `elapsed` is the clock value at the start of the tick, before
    /// this tick's `dt` is added.
    pub fn new(
        grid: &'a mut GridState,
        params: WaveParams,
        tick_id: TickId,
        dt: f64,
        elapsed: f64,
    ) -> Self {
        Self {
            grid,
            params,
            tick_id,
            dt,
            elapsed,
        }
    }

    /// Read-only view of the grid, including writes from earlier stages.
    pub fn grid(&self) -> &GridState {
        self.grid
    }

    /// Mutable grid access.
    pub fn grid_mut(&mut self) -> &mut GridState {
        self.grid
    }

    /// Wave parameters in force for this tick.
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Tick being computed.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Configured timestep.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Simulation time at the start of this tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
