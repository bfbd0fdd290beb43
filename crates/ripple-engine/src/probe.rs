//! Point-probe sampling into a bounded time series.

use std::collections::VecDeque;

use ripple_core::{Cell, GridState};

/// Number of samples covering `duration` seconds at timestep `dt`.
///
/// Computes `floor(duration / dt)` with a small tolerance so that
/// `60.0 / 0.1` gives 600 rather than 599. Never returns less than 1.
pub fn history_cap(duration: f64, dt: f64) -> usize {
    let ratio = (duration / dt + 1e-9).floor();
    if ratio.is_finite() && ratio >= 1.0 {
        // Float-to-int `as` saturates.
        ratio as usize
    } else {
        1
    }
}

/// Sliding window of `(elapsed, height)` samples.
///
/// Holds at most [`cap`](Self::cap) samples; recording past the cap drops
/// the oldest first, so the window always holds the most recent samples
/// in call order.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeHistory {
    cap: usize,
    samples: VecDeque<(f64, f64)>,
}

impl ProbeHistory {
    /// Create an empty history holding at most `cap` samples (minimum 1).
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            samples: VecDeque::with_capacity(cap),
        }
    }

    /// Append a sample, dropping the oldest if the window is full.
    pub fn record(&mut self, elapsed: f64, value: f64) {
        while self.samples.len() >= self.cap {
            self.samples.pop_front();
        }
        self.samples.push_back((elapsed, value));
    }

    /// Maximum number of retained samples.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().copied()
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<(f64, f64)> {
        self.samples.back().copied()
    }

    /// Sample times, oldest first.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|&(t, _)| t)
    }

    /// Sampled heights, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|&(_, v)| v)
    }

    /// Drop every sample, keeping the cap.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Samples the height field at the probe cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProbeRecorder;

impl ProbeRecorder {
    /// Append `(elapsed, height[selected])` to `history` and return the
    /// sampled height.
    ///
    /// `selected` must lie inside the grid; the controller only stores
    /// validated cells.
    #[track_caller]
    pub fn record(
        &self,
        grid: &GridState,
        selected: Cell,
        elapsed: f64,
        history: &mut ProbeHistory,
    ) -> f64 {
        let value = grid.height(selected);
        history.record(elapsed, value);
        value
    }
}
