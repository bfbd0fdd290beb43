//! Wave parameters sampled once per tick.

/// The physical parameters a tick runs with.
///
/// The controller copies these out of its live settings at the start of
/// every tick, so a setter called between ticks takes effect on the next
/// one and a tick never sees a half-applied change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Oscillation frequency of source cells (cycles per unit time).
    pub frequency: f64,
    /// Oscillation amplitude of source cells.
    pub amplitude: f64,
    /// Wave propagation speed `c`.
    pub wave_speed: f64,
    /// Velocity attenuation coefficient. Negative values amplify.
    pub attenuation: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            amplitude: 1.0,
            wave_speed: 1.0,
            attenuation: 0.1,
        }
    }
}
