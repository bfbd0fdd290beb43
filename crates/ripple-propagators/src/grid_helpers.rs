//! Shared square-grid helpers for the wave stencil.
//!
//! Provides axis resolution (wrap/clamp/absorb) and 4-connected neighbour
//! lookup for cells on the outer ring, where the plain `i ± 1`, `i ± dim`
//! offsets would leave the grid.

use ripple_core::EdgeBehavior;
use smallvec::SmallVec;

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i64, len: i64, edge: EdgeBehavior) -> Option<i64> {
    if val >= 0 && val < len {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(val.clamp(0, len - 1)),
        EdgeBehavior::Wrap => Some(val.rem_euclid(len)),
    }
}

/// Flat indices of the 4-connected neighbours of `(r, c)` in stencil order
/// (up, down, left, right). Absorbed neighbours are omitted.
pub(crate) fn neighbours_flat(
    r: usize,
    c: usize,
    dim: usize,
    edge: EdgeBehavior,
) -> SmallVec<[usize; 4]> {
    const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let len = dim as i64;
    let mut result = SmallVec::new();
    for (dr, dc) in OFFSETS {
        let nr = resolve_axis(r as i64 + dr, len, edge);
        let nc = resolve_axis(c as i64 + dc, len, edge);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            result.push(nr as usize * dim + nc as usize);
        }
    }
    result
}
