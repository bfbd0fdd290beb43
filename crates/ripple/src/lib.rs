//! Ripple: an interactive 2D damped wave simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let mut sim = SimulationController::new(SimConfig {
//!     dim: 32,
//!     ..SimConfig::default()
//! })
//! .unwrap();
//!
//! // Paint a source in the middle and drive it.
//! sim.apply_all([
//!     Command::SetTool(Tool::Source),
//!     Command::SetFrequency(0.5),
//!     Command::Pointer { row: 16, col: 16, button: Button::Paint },
//! ]);
//!
//! let result = sim.tick().unwrap();
//! assert_eq!(result.tick_id, TickId(1));
//! assert_eq!(result.snapshot.dim(), 32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Grid state, cells, commands, errors, hashing |
//! | [`propagator`] | `ripple-propagator` | Stage trait and pipeline validation |
//! | [`propagators`] | `ripple-propagators` | Wave integrator and source driver |
//! | [`engine`] | `ripple-engine` | Controller, painting, probe, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, commands, and errors (`ripple-core`).
///
/// Contains [`types::GridState`], cell coordinates, the UI command
/// vocabulary and the tick error types.
pub use ripple_core as types;

/// Stage trait and pipeline validation (`ripple-propagator`).
///
/// The [`propagator::Propagator`] trait is the extension point for
/// custom pipeline stages.
pub use ripple_propagator as propagator;

/// Reference stages (`ripple-propagators`).
///
/// Includes [`propagators::WaveIntegrator`] and
/// [`propagators::SourceDriver`].
pub use ripple_propagators as propagators;

/// The tick controller and its collaborators (`ripple-engine`).
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{Button, Cell, Command, EdgeBehavior, GridState, TickId, Tool};

    // Errors
    pub use ripple_core::{PropagatorError, StepError};

    // Propagator
    pub use ripple_propagator::{Propagator, StepContext, WaveParams};

    // Engine
    pub use ripple_engine::{
        ConfigError, DisplaySnapshot, ProbeHistory, Settings, SimConfig, SimulationController,
        StepMetrics, StepResult,
    };
}
