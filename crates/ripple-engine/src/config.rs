//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] holds the construction-time constants of a simulation.
//! [`validate()`](SimConfig::validate) checks them once at startup; the
//! controller constructor also validates its propagator pipeline and
//! surfaces failures as [`ConfigError::Pipeline`].

use std::error::Error;
use std::fmt;

use ripple_propagator::PipelineError;

/// Smallest accepted grid dimension. Anything smaller has no interior.
pub const MIN_DIM: usize = 3;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`] or controller
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Propagator pipeline validation failed.
    Pipeline(PipelineError),
    /// Grid dimension is below [`MIN_DIM`].
    GridTooSmall {
        /// The configured dimension.
        dim: usize,
    },
    /// `dim * dim` does not fit in `u32`.
    CellCountOverflow {
        /// The configured dimension.
        dim: usize,
    },
    /// dt is NaN, infinite, zero, or negative.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// History duration is NaN, infinite, zero, or negative.
    InvalidHistoryDuration {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
            Self::GridTooSmall { dim } => {
                write!(f, "grid dimension {dim} is below minimum of {MIN_DIM}")
            }
            Self::CellCountOverflow { dim } => {
                write!(f, "cell count {dim}x{dim} exceeds u32::MAX")
            }
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidHistoryDuration { value } => {
                write!(f, "history_duration must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pipeline(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PipelineError> for ConfigError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Construction-time constants for a simulation.
///
/// Runtime knobs (frequency, wave speed, brush size, ...) live in
/// [`Settings`](crate::Settings) instead and can change between ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid side length `N`. Default: 300.
    pub dim: usize,
    /// Integration timestep. Default: 0.1.
    pub dt: f64,
    /// Seconds of probe history to retain. Default: 60.0.
    pub history_duration: f64,
    /// Reject ticks that leave a non-finite height. Default: off.
    pub divergence_check: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dim: 300,
            dt: 0.1,
            history_duration: 60.0,
            divergence_check: false,
        }
    }
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must have an interior.
        if self.dim < MIN_DIM {
            return Err(ConfigError::GridTooSmall { dim: self.dim });
        }
        // 2. Cell count must fit in u32.
        let fits = self
            .dim
            .checked_mul(self.dim)
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits {
            return Err(ConfigError::CellCountOverflow { dim: self.dim });
        }
        // 3. dt finite and positive.
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidDt { value: self.dt });
        }
        // 4. History duration finite and positive.
        if !self.history_duration.is_finite() || self.history_duration <= 0.0 {
            return Err(ConfigError::InvalidHistoryDuration {
                value: self.history_duration,
            });
        }
        Ok(())
    }
}
