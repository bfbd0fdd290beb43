//! The [`Propagator`] trait.
//!
//! Propagators are modular, stateless stages executed in sequence each
//! tick. The default pipeline is the wave integrator followed by the
//! source driver.

use crate::context::StepContext;
use crate::params::WaveParams;
use ripple_core::PropagatorError;

/// A stateless stage in the per-tick pipeline.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same grid, parameters and clock
///   produce bit-identical output.
/// - `&self`: stages hold configuration only; all mutable state lives in
///   the [`GridState`](ripple_core::GridState).
///
/// # Object safety
///
/// This trait is object-safe; the controller stores stages as
/// `Vec<Box<dyn Propagator>>`.
///
/// # Examples
///
/// A stage that damps every height by a constant factor:
///
/// ```
/// use ripple_core::PropagatorError;
/// use ripple_propagator::{Propagator, StepContext};
///
/// struct Damp(f64);
///
/// impl Propagator for Damp {
///     fn name(&self) -> &str { "damp" }
///
///     fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
///         for h in ctx.grid_mut().heights_mut() {
///             *h *= self.0;
///         }
///         Ok(())
///     }
/// }
///
/// assert_eq!(Damp(0.5).name(), "damp");
/// ```
pub trait Propagator: Send + 'static {
    /// Human-readable name for error reporting and metrics.
    fn name(&self) -> &str;

    /// Largest stable timestep under `params` (e.g. a CFL bound).
    ///
    /// Return `None` to impose no constraint.
    fn max_dt(&self, params: &WaveParams) -> Option<f64> {
        let _ = params;
        None
    }

    /// Execute the stage for one tick.
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError>;
}
