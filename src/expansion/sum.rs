use alloc::vec;
use alloc::vec::Vec;

use crate::eft::{fast_two_sum, two_sum};
use super::{any_nonfinite, estimate, negate, or_ieee, renormalize};

/// The expansion `e + b`, exactly.
///
/// Carries `b` up through the limbs of `e`, from least to most significant, keeping every rounding
/// error along the way (Shewchuk's *grow-expansion*), then renormalizes.
pub fn grow_expansion(e: &[f64], b: f64) -> Vec<f64> {
  if any_nonfinite(e) || !b.is_finite() {
    return vec![estimate(e) + b]
  }
  let mut out = Vec::with_capacity(e.len() + 1);
  let mut q = b;
  for &x in e.iter().rev() {
    let (s, h) = two_sum(q, x);
    if h != 0. {
      out.push(h)
    }
    q = s;
  }
  if !q.is_finite() {
    // A partial sum overflowed; renormalize rescales the original limbs instead.
    out.clear();
    out.extend_from_slice(e);
    out.push(b);
  } else {
    out.push(q);
  }
  or_ieee(renormalize(&out), || estimate(e) + b)
}

/// The limbs of `e` and `f` merged into a single list by increasing magnitude, assuming each of
/// them is sorted by decreasing magnitude. If not, the result is still a permutation of all limbs.
fn merge_increasing(e: &[f64], f: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(e.len() + f.len());
  let (mut i, mut j) = (e.len(), f.len());
  while i > 0 && j > 0 {
    if e[i - 1].abs() <= f[j - 1].abs() {
      out.push(e[i - 1]);
      i -= 1;
    } else {
      out.push(f[j - 1]);
      j -= 1;
    }
  }
  out.extend(e[.. i].iter().rev());
  out.extend(f[.. j].iter().rev());
  out
}

/// The expansion `e + f`, exactly.
///
/// The limbs of both operands are merged by magnitude into a single stream, which is then summed
/// with a running [`two_sum`] accumulator, keeping every rounding error (Shewchuk's
/// *linear-expansion-sum*), and finally renormalized.
///
/// The final renormalization is unconditional, so `e` and `f` need not be valid expansions
/// themselves: overlapping or unordered inputs still yield a canonical expansion of the exact sum.
///
/// ```
/// # use float_expansion::expansion::*;
/// // Neither operand is a valid expansion.
/// let sum = linear_expansion_sum(&[1., 0.5, 0.25], &[3., 1e-20, 1e-20]);
/// assert!(verify_nonoverlapping(&sum));
/// assert_eq!(sum, [4.75, 2e-20]);
/// ```
pub fn linear_expansion_sum(e: &[f64], f: &[f64]) -> Vec<f64> {
  if any_nonfinite(e) || any_nonfinite(f) {
    return vec![estimate(e) + estimate(f)]
  }
  let merged = merge_increasing(e, f);
  let Some((&first, rest)) = merged.split_first() else { return vec![0.] };
  let mut out = Vec::with_capacity(merged.len());
  let mut q = first;
  for &g in rest {
    let (s, h) = two_sum(q, g);
    if h != 0. {
      out.push(h)
    }
    q = s;
  }
  if !q.is_finite() {
    // A partial sum overflowed; renormalize rescales the merged limbs instead.
    return or_ieee(renormalize(&merged), || estimate(e) + estimate(f))
  }
  out.push(q);
  or_ieee(renormalize(&out), || estimate(e) + estimate(f))
}

/// The expansion `e + f`, exactly; same result as [`linear_expansion_sum`].
///
/// The first step of the merge uses [`fast_two_sum`] (Shewchuk's *fast-expansion-sum*), which is
/// valid whenever the merged stream is really sorted, i.e. whenever `e` and `f` are sorted by
/// decreasing magnitude.
pub fn fast_expansion_sum(e: &[f64], f: &[f64]) -> Vec<f64> {
  if any_nonfinite(e) || any_nonfinite(f) {
    return vec![estimate(e) + estimate(f)]
  }
  let merged = merge_increasing(e, f);
  let mut out = Vec::with_capacity(merged.len());
  let mut q = match merged.as_slice() {
    [] => return vec![0.],
    [g0] => *g0,
    [g0, g1, ..] => {
      let (s, h) = if g1.abs() >= g0.abs() {fast_two_sum(*g1, *g0)} else {two_sum(*g0, *g1)};
      if h != 0. {
        out.push(h)
      }
      s
    }
  };
  for &g in merged.iter().skip(2) {
    let (s, h) = two_sum(q, g);
    if h != 0. {
      out.push(h)
    }
    q = s;
  }
  if !q.is_finite() {
    // A partial sum overflowed; renormalize rescales the merged limbs instead.
    return or_ieee(renormalize(&merged), || estimate(e) + estimate(f))
  }
  out.push(q);
  or_ieee(renormalize(&out), || estimate(e) + estimate(f))
}

/// The expansion `e - f`, exactly.
pub fn expansion_difference(e: &[f64], f: &[f64]) -> Vec<f64> {
  linear_expansion_sum(e, &negate(f))
}
