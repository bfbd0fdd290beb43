//! Sinusoidal forcing of source cells.
//!
//! Every source cell's height is overwritten (not incremented) with
//! `amplitude * sin(2π * frequency * t)`, where `t` is the simulation time
//! at the start of the tick. Velocity is left alone.

use ripple_core::{GridState, PropagatorError};
use ripple_propagator::{Propagator, StepContext, WaveParams};

use std::f64::consts::TAU;

/// Drives source cells with a shared sinusoid.
///
/// Runs after [`WaveIntegrator`](crate::WaveIntegrator), so a source on
/// the outer ring or on an obstacle cell still reads the driven value
/// until the next integration step clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceDriver;

impl SourceDriver {
    /// Source height at time `t`.
    pub fn oscillation(amplitude: f64, frequency: f64, t: f64) -> f64 {
        amplitude * (TAU * frequency * t).sin()
    }

    /// Set every source cell's height to the oscillation value at `elapsed`.
    pub fn drive(&self, grid: &mut GridState, amplitude: f64, frequency: f64, elapsed: f64) {
        let value = Self::oscillation(amplitude, frequency, elapsed);
        let (height, sources) = grid.forcing_mut();
        for (h, &is_source) in height.iter_mut().zip(sources) {
            if is_source {
                *h = value;
            }
        }
    }
}

impl Propagator for SourceDriver {
    fn name(&self) -> &str {
        "SourceDriver"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let WaveParams {
            amplitude,
            frequency,
            ..
        } = *ctx.params();
        let elapsed = ctx.elapsed();
        self.drive(ctx.grid_mut(), amplitude, frequency, elapsed);
        Ok(())
    }
}
