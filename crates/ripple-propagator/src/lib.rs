//! Pipeline stage trait and step context for Ripple simulations.
//!
//! The [`Propagator`] trait defines the `&self` step function. Each stage
//! receives a [`StepContext`] carrying exclusive access to the grid, the
//! wave parameters in force for this tick, and the clock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod params;
pub mod pipeline;
pub mod propagator;

pub use context::StepContext;
pub use params::WaveParams;
pub use pipeline::{dt_limit, validate_pipeline, DtLimit, PipelineError};
pub use propagator::Propagator;
