//! Brush editing of the obstacle and source masks.
//!
//! [`PaintEditor::apply`] is the stateless core: one pointer event, one
//! square brush footprint. The editor itself only remembers which button
//! started the current stroke, so that drags keep painting between a
//! press and its release.

use ripple_core::{Button, Cell, GridState, Tool};

/// Tool and radius of the brush in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    /// Which mask a paint stroke sets.
    pub tool: Tool,
    /// Radius; covers the square of half-width `radius - 1`.
    pub radius: usize,
}

/// What a single pointer event did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintOutcome {
    /// Grid cells under the (clipped) brush footprint.
    pub cells_covered: usize,
    /// Cells whose mask value actually changed.
    pub cells_changed: usize,
    /// New probe cell, for select events inside the grid.
    pub selected: Option<Cell>,
}

impl PaintOutcome {
    /// True when the event hit nothing (pointer outside the grid, or a
    /// drag with no active stroke).
    pub fn is_noop(&self) -> bool {
        self.cells_covered == 0 && self.selected.is_none()
    }
}

/// Pointer-driven mask editor with stroke tracking.
#[derive(Debug, Default)]
pub struct PaintEditor {
    stroke: Option<Button>,
}

impl PaintEditor {
    /// Create an editor with no active stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// The button of the active stroke, if any.
    pub fn active_stroke(&self) -> Option<Button> {
        self.stroke
    }

    /// Apply one pointer event at `(row, col)`.
    ///
    /// A pointer outside the grid does nothing. Otherwise:
    ///
    /// - `Paint` sets the brush tool's mask on every cell of the square
    ///   of half-width `radius - 1` centred on the pointer, clipped to
    ///   the grid. The other mask is left alone, so painting obstacles
    ///   over sources leaves both flags set.
    /// - `Erase` clears both masks over the same square.
    /// - `Select` moves `selected` to the pointer cell.
    pub fn apply(
        grid: &mut GridState,
        row: i64,
        col: i64,
        button: Button,
        brush: Brush,
        selected: &mut Cell,
    ) -> PaintOutcome {
        let Some(centre) = grid.cell_at(row, col) else {
            return PaintOutcome::default();
        };

        if button == Button::Select {
            *selected = centre;
            return PaintOutcome {
                selected: Some(centre),
                ..PaintOutcome::default()
            };
        }

        let last = grid.dim() - 1;
        let half = brush.radius.saturating_sub(1);
        let rows = centre.row.saturating_sub(half)..=centre.row.saturating_add(half).min(last);
        let cols = centre.col.saturating_sub(half)..=centre.col.saturating_add(half).min(last);

        let mut outcome = PaintOutcome::default();
        for r in rows {
            for c in cols.clone() {
                let cell = Cell::new(r, c);
                outcome.cells_covered += 1;
                let changed = match (button, brush.tool) {
                    (Button::Paint, Tool::Obstacle) => {
                        let was = grid.is_obstacle(cell);
                        grid.set_obstacle(cell, true);
                        !was
                    }
                    (Button::Paint, Tool::Source) => {
                        let was = grid.is_source(cell);
                        grid.set_source(cell, true);
                        !was
                    }
                    _ => {
                        let was = grid.is_obstacle(cell) || grid.is_source(cell);
                        grid.set_obstacle(cell, false);
                        grid.set_source(cell, false);
                        was
                    }
                };
                if changed {
                    outcome.cells_changed += 1;
                }
            }
        }
        outcome
    }

    /// Pointer pressed. Applies immediately; `Paint` and `Erase` also
    /// start a stroke that lasts until [`release`](Self::release).
    pub fn press(
        &mut self,
        grid: &mut GridState,
        row: i64,
        col: i64,
        button: Button,
        brush: Brush,
        selected: &mut Cell,
    ) -> PaintOutcome {
        self.stroke = match button {
            Button::Paint | Button::Erase => Some(button),
            Button::Select => None,
        };
        Self::apply(grid, row, col, button, brush, selected)
    }

    /// Pointer moved. Re-applies the stroke button while a stroke is
    /// active; otherwise does nothing.
    pub fn drag(
        &self,
        grid: &mut GridState,
        row: i64,
        col: i64,
        brush: Brush,
        selected: &mut Cell,
    ) -> PaintOutcome {
        match self.stroke {
            Some(button) => Self::apply(grid, row, col, button, brush, selected),
            None => PaintOutcome::default(),
        }
    }

    /// Pointer released. Ends the active stroke.
    pub fn release(&mut self) {
        self.stroke = None;
    }
}
