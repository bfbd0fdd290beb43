//! Error types for the Ripple simulation, organised by subsystem:
//! tick execution ([`StepError`]) and individual pipeline stages
//! ([`PropagatorError`]).
//!
//! Invalid UI input is sanitised at the boundary and never surfaces here.
//! Out-of-range indexing from inside the core is a programming error and
//! panics instead.

use std::error::Error;
use std::fmt;

/// Errors from the simulation controller during `tick()`.
///
/// When a tick fails the clock does not advance, no probe sample is
/// recorded and no display snapshot is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A pipeline stage returned an error during execution.
    PropagatorFailed {
        /// Name of the failing stage.
        name: String,
        /// The underlying stage error.
        reason: PropagatorError,
    },
    /// The divergence guard found a non-finite height after the pipeline ran.
    ///
    /// Only reported when the guard is enabled in the simulation config.
    Diverged {
        /// Flat index of the first non-finite cell.
        cell_index: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropagatorFailed { name, reason } => {
                write!(f, "propagator '{name}' failed: {reason}")
            }
            Self::Diverged { cell_index } => {
                write!(f, "height field diverged at cell {cell_index}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PropagatorFailed { reason, .. } => Some(reason),
            Self::Diverged { .. } => None,
        }
    }
}

/// Errors from individual pipeline stages.
///
/// Returned by `Propagator::step()` and wrapped in
/// [`StepError::PropagatorFailed`] by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagatorError {
    /// The stage's step function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A stage produced a non-finite value.
    NonFinite {
        /// Flat index of the first offending cell, if known.
        cell_index: Option<usize>,
    },
}

impl fmt::Display for PropagatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::NonFinite { cell_index } => {
                write!(f, "non-finite value produced")?;
                if let Some(idx) = cell_index {
                    write!(f, " at cell {idx}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for PropagatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_chains_propagator_source() {
        let err = StepError::PropagatorFailed {
            name: "WaveIntegrator".into(),
            reason: PropagatorError::ExecutionFailed {
                reason: "boom".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "propagator 'WaveIntegrator' failed: execution failed: boom"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "execution failed: boom");
    }

    #[test]
    fn non_finite_display_with_and_without_index() {
        let with = PropagatorError::NonFinite {
            cell_index: Some(12),
        };
        let without = PropagatorError::NonFinite { cell_index: None };
        assert_eq!(with.to_string(), "non-finite value produced at cell 12");
        assert_eq!(without.to_string(), "non-finite value produced");
    }

    #[test]
    fn diverged_has_no_source() {
        let err = StepError::Diverged { cell_index: 3 };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "height field diverged at cell 3");
    }
}
