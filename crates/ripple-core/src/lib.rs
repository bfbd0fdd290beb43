//! Core types for the Ripple wave simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid state shared by every stage of a tick, cell coordinates and
//! tick identifiers, the command vocabulary pushed in by a UI adapter,
//! error types, and state fingerprinting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod edge;
pub mod error;
pub mod grid;
pub mod hash;
pub mod id;

pub use command::{Button, Command, Tool};
pub use edge::EdgeBehavior;
pub use error::{PropagatorError, StepError};
pub use grid::GridState;
pub use hash::grid_hash;
pub use id::{Cell, TickId};
