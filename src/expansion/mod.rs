//! Arithmetic on floating point *expansions*: sequences of `f64` limbs whose (exact, unrounded)
//! sum represents a real number to more precision than a single `f64` can hold.
//!
//! Every function here works on plain slices and returns a freshly allocated `Vec<f64>`. The
//! conventions are:
//!
//!   - Limbs are ordered by **decreasing** magnitude: `e[0]` is the most significant.
//!   - A *valid* expansion is non-empty, finite, has no zero limbs except for the single-limb
//!     expansion `[0.0]`, and is non-overlapping: `|e[i]| ≥ 2^53 · |e[i+1]|`. See
//!     [`validate`].
//!   - A *canonical* expansion is a valid one that is moreover stable under rounding:
//!     `fl(e[i] + e[i+1]) == e[i]` for every pair of adjacent limbs. See [`is_canonical`]. Every
//!     expansion returned by this module is canonical.
//!
//! Inputs need **not** be valid. Every operation that produces an expansion ends with an
//! unconditional [`renormalize`] pass, so overlapping, unordered, or zero-padded limbs are
//! accepted and yield a canonical, exact result.
//!
//! Non-finite limbs are not errors either: an operation involving any infinite or NaN limb returns
//! a single limb holding the IEEE result of the same operation on the [`estimate`]s.

use alloc::vec::Vec;

/// Checks and utilities for the expansion invariants.
mod invariants;
pub use invariants::*;

/// Renormalization (distillation) of arbitrary limbs into a canonical expansion, and compression
/// to a fixed number of limbs.
mod renormalize;
pub use renormalize::*;

/// Sums of expansions.
mod sum;
pub use sum::*;

/// Products, quotients, and square roots of expansions.
mod product;
pub use product::*;

/// Comparison of expansions.
mod compare;
pub use compare::*;

/// Conversion to and from decimal.
pub(crate) mod decimal;


/// Collapse an expansion to a single `f64`, by plain floating point summation of the limbs, from
/// least to most significant.
///
/// This is fast but lossy; the result is not always the correctly rounded value of the expansion.
#[inline]
pub fn estimate(e: &[f64]) -> f64 {
  let sum = e.iter().rev().fold(0., |acc, &x| acc + x);
  match e.first() {
    // A zero sum takes the sign of the leading limb, so that `[-0., 0.]` is -0.
    Some(&head) if sum == 0. => libm::copysign(sum, head),
    _ => sum,
  }
}

/// The sign of a valid expansion (`-1`, `0`, or `+1`), which is the sign of its leading limb.
/// NaN has sign `0`.
#[inline]
pub fn sign(e: &[f64]) -> i32 {
  match e.first() {
    Some(&x) if x > 0. => 1,
    Some(&x) if x < 0. => -1,
    _ => 0,
  }
}

/// The expansion `-e`.
#[inline]
pub fn negate(e: &[f64]) -> Vec<f64> {
  e.iter().map(|&x| -x).collect()
}

/// Whether any limb is infinite or NaN.
#[inline]
pub(crate) fn any_nonfinite(e: &[f64]) -> bool {
  e.iter().any(|x| !x.is_finite())
}

/// If `result` is not finite (e.g. because a partial sum overflowed somewhere), replace it by the
/// IEEE result of the operation on the estimates.
#[inline]
pub(crate) fn or_ieee(result: Vec<f64>, ieee: impl FnOnce() -> f64) -> Vec<f64> {
  if any_nonfinite(&result) {
    alloc::vec![ieee()]
  } else {
    result
  }
}
