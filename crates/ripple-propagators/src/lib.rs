//! Pipeline stages for the Ripple wave simulation.
//!
//! # Pipeline order (each tick)
//!
//! 1. [`WaveIntegrator`]: damped discrete-Laplacian update of height and
//!    velocity, obstacle pinning, absorbing outer ring.
//! 2. [`SourceDriver`]: overwrites source-cell heights with the oscillator.
//!
//! [`default_pipeline`] builds exactly this sequence.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod grid_helpers;
pub mod source_driver;
pub mod wave_integrator;

pub use source_driver::SourceDriver;
pub use wave_integrator::WaveIntegrator;

use ripple_propagator::Propagator;

/// The reference pipeline: periodic-lookup integrator, then source driver.
pub fn default_pipeline() -> Vec<Box<dyn Propagator>> {
    vec![Box::new(WaveIntegrator::default()), Box::new(SourceDriver)]
}
