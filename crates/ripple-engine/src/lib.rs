//! Tick controller for Ripple wave simulations.
//!
//! Owns the grid, runs the propagator pipeline once per tick, applies
//! pointer edits through the [`PaintEditor`], samples the probe cell into
//! a bounded [`ProbeHistory`] and produces sentinel-marked
//! [`DisplaySnapshot`]s for a renderer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod metrics;
pub mod paint;
pub mod probe;
pub mod settings;
pub mod snapshot;

pub use config::{ConfigError, SimConfig, MIN_DIM};
pub use controller::{SimulationController, StepResult};
pub use metrics::StepMetrics;
pub use paint::{Brush, PaintEditor, PaintOutcome};
pub use probe::{history_cap, ProbeHistory, ProbeRecorder};
pub use settings::{clamp_brush_size, parse_brush_size, Settings};
pub use snapshot::{DisplaySnapshot, OBSTACLE_SENTINEL, PROBE_SENTINEL};
