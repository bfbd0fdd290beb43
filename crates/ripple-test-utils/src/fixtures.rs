//! Reusable propagator test fixtures.
//!
//! - [`ConstHeightPropagator`] writes one value into every height cell.
//! - [`FailingPropagator`] fails deterministically after N calls.

use ripple_core::PropagatorError;
use ripple_propagator::{Propagator, StepContext};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes a constant height to every cell.
///
/// With a non-finite value this is the quickest way to trip the
/// controller's divergence check.
pub struct ConstHeightPropagator {
    pub name: String,
    pub value: f64,
}

impl ConstHeightPropagator {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Propagator for ConstHeightPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        ctx.grid_mut().heights_mut().fill(self.value);
        Ok(())
    }
}

/// Fails deterministically after a configurable number of successful calls.
///
/// Useful for testing rollback and error propagation in the controller.
/// Uses `AtomicUsize` for the call counter so it satisfies `Send`.
pub struct FailingPropagator {
    pub name: String,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingPropagator {
    /// Create a propagator that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl Propagator for FailingPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            // Scribble first so a missing rollback is visible.
            ctx.grid_mut().heights_mut().fill(f64::MAX);
            return Err(PropagatorError::ExecutionFailed {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        // On success, fill heights with the call index for traceability.
        ctx.grid_mut().heights_mut().fill(n as f64);
        Ok(())
    }
}
