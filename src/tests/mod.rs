use super::*;

/// Deterministic pseudo-random byte generator (LCG, constants from
/// Numerical Recipes) used for the no-panic fuzz property instead of
/// pulling in `proptest`. Mirrors the teacher's `lcg_sizes` helper.
fn lcg_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut x = seed;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        out.push((x >> 24) as u8);
    }
    out
}

mod comma_adjacency;
mod scenarios;
mod wildcards;
