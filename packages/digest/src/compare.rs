//! Constant-time digest comparison
//!
//! Lengths are public, so a length mismatch returns early. For equal lengths
//! every byte pair is visited and the differences are folded together before
//! a single zero test.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte strings without an early exit on the first mismatch.
///
/// Returns `false` immediately when the lengths differ; neither buffer is
/// read in that case.
#[must_use]
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    fold_differences(a, b, |_| {}).into()
}

/// OR together the XOR of every positional pair, calling `visit` once per
/// position, then test the accumulator against zero.
#[inline]
fn fold_differences(a: &[u8], b: &[u8], mut visit: impl FnMut(usize)) -> Choice {
    let mut diff = 0u8;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        diff |= x ^ y;
        visit(i);
    }
    diff.ct_eq(&0)
}
