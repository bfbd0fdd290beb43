//! Per-tick timing metrics for the simulation controller.
//!
//! [`StepMetrics`] captures timing data for a single tick, for
//! telemetry and profiling.

/// Timing metrics collected during a single tick.
///
/// All durations are in microseconds. The controller populates these
/// fields after each `tick()` call and keeps the most recent set
/// available through `last_metrics()`.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Per-propagator execution times: `(name, microseconds)`.
    pub propagator_us: Vec<(String, u64)>,
    /// Time spent sampling the probe, in microseconds.
    pub probe_us: u64,
    /// Time spent building the display snapshot, in microseconds.
    pub snapshot_us: u64,
}
