//! State fingerprinting for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they exist so two runs
//! can be compared with a single integer.

use crate::grid::GridState;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash every field of a grid.
///
/// Folds in the dimension, then every height and velocity as
/// `f64::to_bits()`, then both masks. A section tag separates the
/// fields so swapping two fields changes the hash. Bit-identical grids
/// hash equal; `0.0` and `-0.0` hash differently.
pub fn grid_hash(grid: &GridState) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, grid.dim() as u64);

    hash = fnv1a_byte(hash, b'h');
    for &v in grid.heights() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash = fnv1a_byte(hash, b'v');
    for &v in grid.velocities() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash = fnv1a_byte(hash, b'o');
    for &b in grid.obstacle_mask() {
        hash = fnv1a_byte(hash, b as u8);
    }
    hash = fnv1a_byte(hash, b's');
    for &b in grid.source_mask() {
        hash = fnv1a_byte(hash, b as u8);
    }
    hash
}
