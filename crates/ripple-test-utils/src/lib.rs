//! Test utilities for Ripple development.
//!
//! Provides grid builders for common starting states and a set of
//! fixture propagators for exercising the controller's pipeline and
//! error handling.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod grids;

pub use fixtures::{ConstHeightPropagator, FailingPropagator};
pub use grids::{boundary_cells, impulse_grid, seeded_grid};
