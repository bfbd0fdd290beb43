//! Runtime settings pushed in by the UI between ticks.

use ripple_core::{Cell, Tool};
use ripple_propagator::WaveParams;

/// Every independently settable runtime knob.
///
/// The only invariant linking fields is `brush_size >= 1`; the
/// controller's setters enforce it.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Oscillator frequency of source cells.
    pub frequency: f64,
    /// Oscillator amplitude of source cells.
    pub amplitude: f64,
    /// Wave propagation speed `c`.
    pub wave_speed: f64,
    /// Velocity attenuation coefficient.
    pub attenuation: f64,
    /// Brush radius; the painted square has side `2 * brush_size - 1`.
    pub brush_size: usize,
    /// Active painting tool.
    pub tool: Tool,
    /// Probe cell.
    pub selected: Cell,
    /// Whether the probe records and is marked in snapshots.
    pub probe_enabled: bool,
}

impl Settings {
    /// Defaults for a `dim x dim` grid, with the probe at the centre.
    pub fn new(dim: usize) -> Self {
        let params = WaveParams::default();
        Self {
            frequency: params.frequency,
            amplitude: params.amplitude,
            wave_speed: params.wave_speed,
            attenuation: params.attenuation,
            brush_size: 1,
            tool: Tool::default(),
            selected: Cell::new(dim / 2, dim / 2),
            probe_enabled: true,
        }
    }

    /// The subset of settings the propagators read.
    pub fn params(&self) -> WaveParams {
        WaveParams {
            frequency: self.frequency,
            amplitude: self.amplitude,
            wave_speed: self.wave_speed,
            attenuation: self.attenuation,
        }
    }
}

/// Clamp an integer brush size to at least 1.
pub fn clamp_brush_size(size: i64) -> usize {
    usize::try_from(size.max(1)).unwrap_or(usize::MAX)
}

/// Parse brush-size text from an entry box.
///
/// Surrounding whitespace is ignored. Anything that is not an integer
/// yields 1; integers below 1 are clamped to 1.
pub fn parse_brush_size(text: &str) -> usize {
    text.trim().parse::<i64>().map_or(1, clamp_brush_size)
}
