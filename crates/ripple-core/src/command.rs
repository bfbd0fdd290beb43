//! Commands pushed into the simulation by a UI adapter.
//!
//! The UI layer owns no simulation state. It translates widget callbacks
//! (sliders, the brush text box, the tool radio, pointer events, the
//! reset and graph buttons) into [`Command`] values and hands them to the
//! controller between ticks.

/// The active painting tool. Exactly one is selected at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Paint rigid obstacle cells.
    #[default]
    Obstacle,
    /// Paint oscillating source cells.
    Source,
}

/// Pointer button semantics.
///
/// `Paint` and `Erase` edit the masks under the brush; `Select` moves
/// the probe to the pointer cell and never edits masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Set the active tool's mask under the brush.
    Paint,
    /// Clear both masks under the brush.
    Erase,
    /// Move the selected probe point.
    Select,
}

/// A single configuration change or pointer event.
///
/// # Examples
///
/// ```
/// use ripple_core::{Button, Command, Tool};
///
/// let script = vec![
///     Command::SetTool(Tool::Source),
///     Command::SetBrushSizeText("3".into()),
///     Command::PointerPress { row: 150, col: 150, button: Button::Paint },
///     Command::PointerRelease,
///     Command::SetFrequency(0.5),
/// ];
/// assert_eq!(script.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Oscillator frequency of source cells.
    SetFrequency(f64),
    /// Oscillator amplitude of source cells.
    SetAmplitude(f64),
    /// Wave propagation speed `c`.
    SetWaveSpeed(f64),
    /// Velocity attenuation coefficient.
    SetAttenuation(f64),
    /// Brush radius as an integer; clamped to at least 1.
    SetBrushSize(i64),
    /// Brush radius as raw text from an entry box; unparsable text means 1.
    SetBrushSizeText(String),
    /// Choose the painting tool.
    SetTool(Tool),
    /// Enable or disable probe recording and display.
    SetProbeEnabled(bool),
    /// Flip the probe-enabled flag.
    ToggleProbe,
    /// Move the probe to a cell; ignored when out of range.
    SetSelectedPoint {
        /// Pointer row.
        row: i64,
        /// Pointer column.
        col: i64,
    },
    /// One-shot brush application without starting a stroke.
    Pointer {
        /// Pointer row.
        row: i64,
        /// Pointer column.
        col: i64,
        /// Which action to apply.
        button: Button,
    },
    /// Pointer pressed: apply immediately and start a stroke for paint/erase.
    PointerPress {
        /// Pointer row.
        row: i64,
        /// Pointer column.
        col: i64,
        /// Which action to apply.
        button: Button,
    },
    /// Pointer moved: re-apply the stroke button if a stroke is active.
    PointerDrag {
        /// Pointer row.
        row: i64,
        /// Pointer column.
        col: i64,
    },
    /// Pointer released: end the active stroke.
    PointerRelease,
    /// Reinitialise grid, history and clock.
    Reset,
}
