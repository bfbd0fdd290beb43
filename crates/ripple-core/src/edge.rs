//! Neighbour edge behavior for the Laplacian stencil.

/// How the wave stencil resolves a neighbour that falls off the grid.
///
/// This controls only the *lookup* of neighbour heights. Independently of
/// the choice here, the integrator pins the outer ring of cells to zero
/// height after every step.
///
/// # Examples
///
/// ```
/// use ripple_core::EdgeBehavior;
///
/// // Periodic lookup is the default, matching the reference simulator.
/// assert_eq!(EdgeBehavior::default(), EdgeBehavior::Wrap);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Off-grid neighbour wraps to the opposite side (periodic, modulo N).
    #[default]
    Wrap,
    /// Off-grid neighbour mirrors the cell itself.
    Clamp,
    /// Off-grid neighbour contributes zero height.
    Absorb,
}
