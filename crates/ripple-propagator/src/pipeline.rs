//! Pipeline validation and timestep limits.
//!
//! [`validate_pipeline`] runs once at controller construction. Because
//! the wave speed is a live setting, stability is not a construction-time
//! property here; [`dt_limit`] recomputes the tightest `max_dt` whenever
//! parameters change so the controller can report it.

use crate::params::WaveParams;
use crate::propagator::Propagator;

use std::error::Error;
use std::fmt;

/// The tightest timestep bound across a pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct DtLimit {
    /// Largest stable dt.
    pub max_dt: f64,
    /// Name of the stage imposing it.
    pub constraining_propagator: String,
}

/// Errors from pipeline validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// No stages registered.
    EmptyPipeline,

    /// The configured dt is not a valid timestep (NaN, infinity, zero, or negative).
    InvalidDt {
        /// The invalid dt value.
        value: f64,
    },

    /// A stage's `max_dt()` returned a non-finite or non-positive value.
    InvalidMaxDt {
        /// Which stage.
        propagator: String,
        /// The invalid max_dt value.
        value: f64,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no propagators"),
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidMaxDt { propagator, value } => {
                write!(
                    f,
                    "propagator '{propagator}' returned invalid max_dt: {value} \
                     (must be finite and positive)"
                )
            }
        }
    }
}

impl Error for PipelineError {}

/// Validate a pipeline for a fixed `dt`.
///
/// Checks performed:
///
/// 1. `dt` is finite and positive.
/// 2. The pipeline is non-empty.
pub fn validate_pipeline(
    propagators: &[Box<dyn Propagator>],
    dt: f64,
) -> Result<(), PipelineError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PipelineError::InvalidDt { value: dt });
    }
    if propagators.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }
    Ok(())
}

/// Compute the tightest `max_dt` across all stages for `params`.
///
/// Returns `Ok(None)` when no stage constrains the timestep.
pub fn dt_limit(
    propagators: &[Box<dyn Propagator>],
    params: &WaveParams,
) -> Result<Option<DtLimit>, PipelineError> {
    let mut limit: Option<DtLimit> = None;
    for prop in propagators {
        if let Some(max) = prop.max_dt(params) {
            if !max.is_finite() || max <= 0.0 {
                return Err(PipelineError::InvalidMaxDt {
                    propagator: prop.name().to_string(),
                    value: max,
                });
            }
            if limit.as_ref().is_none_or(|l| max < l.max_dt) {
                limit = Some(DtLimit {
                    max_dt: max,
                    constraining_propagator: prop.name().to_string(),
                });
            }
        }
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StepContext;
    use ripple_core::PropagatorError;

    struct Fixed {
        name: &'static str,
        max: Option<f64>,
    }

    impl Propagator for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn max_dt(&self, _params: &WaveParams) -> Option<f64> {
            self.max
        }

        fn step(&self, _ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
            Ok(())
        }
    }

    fn boxed(name: &'static str, max: Option<f64>) -> Box<dyn Propagator> {
        Box::new(Fixed { name, max })
    }

    #[test]
    fn empty_pipeline_rejected() {
        assert_eq!(
            validate_pipeline(&[], 0.1),
            Err(PipelineError::EmptyPipeline)
        );
    }

    #[test]
    fn invalid_dt_rejected() {
        let props = vec![boxed("a", None)];
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_pipeline(&props, dt),
                Err(PipelineError::InvalidDt { .. })
            ));
        }
        assert!(validate_pipeline(&props, 0.1).is_ok());
    }

    #[test]
    fn dt_limit_picks_tightest() {
        let props = vec![boxed("loose", Some(1.0)), boxed("free", None), boxed("tight", Some(0.2))];
        let limit = dt_limit(&props, &WaveParams::default()).unwrap().unwrap();
        assert_eq!(limit.max_dt, 0.2);
        assert_eq!(limit.constraining_propagator, "tight");
    }

    #[test]
    fn dt_limit_none_when_unconstrained() {
        let props = vec![boxed("free", None)];
        assert_eq!(dt_limit(&props, &WaveParams::default()).unwrap(), None);
    }

    #[test]
    fn dt_limit_rejects_invalid_max_dt() {
        let props = vec![boxed("bad", Some(f64::NAN))];
        let err = dt_limit(&props, &WaveParams::default()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidMaxDt { ref propagator, .. } if propagator == "bad"));
        assert!(err.to_string().contains("bad"));
    }
}
