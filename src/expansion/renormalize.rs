use alloc::vec;
use alloc::vec::Vec;

use crate::eft::{fast_two_sum, two_sum};
use super::{any_nonfinite, estimate};

/// Turn an arbitrary list of limbs (possibly unordered, overlapping, or containing zeros) into a
/// canonical expansion with exactly the same sum.
///
/// The algorithm is a distillation: sort the nonzero limbs by increasing magnitude, and if any
/// adjacent pair is not yet stable under rounding, sweep once through the list carrying a running
/// [`two_sum`] accumulator (keeping every rounding error as a new limb); repeat until stable. Each
/// sweep preserves the exact sum, and the sweeps converge quickly (almost always one or two).
///
/// If any limb is infinite or NaN, the result is the single limb `[estimate(limbs)]`, i.e. the IEEE
/// sum of the limbs. If the limbs are finite but their exact sum rounds beyond `f64::MAX`, the
/// result is the single limb `[±∞]`.
///
/// Partial sums may overflow even when the exact sum does not; the large limbs are then scaled
/// down by a power of two, distilled, and scaled back, so the result never depends on the order of
/// the limbs.
///
/// ```
/// # use float_expansion::expansion::*;
/// // Sorting alone is not enough: 1 and 2^-52 are ordered but overlap.
/// let e = renormalize(&[f64::powi(2., -52), 0., 1.]);
/// assert_eq!(e, [1. + f64::EPSILON]);
/// assert_eq!(renormalize(&[1e-17, 1.]), [1., 1e-17]);
/// assert_eq!(renormalize(&[1., -1.]), [0.]);
/// assert_eq!(renormalize(&[f64::MAX, f64::MAX, -f64::MAX]), [f64::MAX]);
/// ```
pub fn renormalize(limbs: &[f64]) -> Vec<f64> {
  if any_nonfinite(limbs) {
    return vec![estimate(limbs)]
  }
  let terms: Vec<f64> = limbs.iter().copied().filter(|x| *x != 0.).collect();
  match distill(terms) {
    Some(terms) => into_decreasing(terms),
    None => distill_rescaled(limbs),
  }
}

/// Limbs at least this large are the ones scaled down by [`distill_rescaled`]; scaling smaller
/// ones could round away their low bits.
const RESCALE_FLOOR: f64 = 1.1754943508222875e-38;  // 2^-126

/// Sort by increasing magnitude and sweep until every adjacent pair is stable, preserving the exact
/// sum. `None` if a partial sum overflows.
fn distill(mut terms: Vec<f64>) -> Option<Vec<f64>> {
  let mut scratch = Vec::with_capacity(terms.len() + 1);
  // Sweeps are exact, and in practice converge after one or two. Should the cap ever be reached,
  // the terms still hold the exact sum, sorted.
  let max_sweeps = 64 + 2 * terms.len();
  for _ in 0 .. max_sweeps {
    terms.sort_unstable_by(|a, b| a.abs().total_cmp(&b.abs()));
    if is_stable_increasing(&terms) {
      break
    }
    if !sweep(&terms, &mut scratch) {
      return None
    }
    core::mem::swap(&mut terms, &mut scratch);
  }
  Some(terms)
}

/// Distill the limbs of at least [`RESCALE_FLOOR`] scaled by 2<sup>-k</sup>, with `2^k` at least
/// the number of limbs, so that no partial sum can overflow. Scale the result back, and merge it
/// with the smaller limbs.
fn distill_rescaled(limbs: &[f64]) -> Vec<f64> {
  let k = (usize::BITS - limbs.len().leading_zeros()) as i32 + 1;
  let (down, up) = (libm::ldexp(1., -k), libm::ldexp(1., k));
  let (high, mut low): (Vec<f64>, Vec<f64>) = limbs.iter()
    .copied()
    .filter(|x| *x != 0.)
    .partition(|x| x.abs() >= RESCALE_FLOOR);
  let Some(high) = distill(high.iter().map(|x| x * down).collect()) else {
    return vec![estimate(limbs)]  // Unreachable with 2^k ≥ limbs.len()
  };
  // The high limbs are multiples of 2^(-126-52-k), so scaling back up is exact, except for a head
  // that overflows, which only happens if the exact sum rounds beyond `f64::MAX`.
  let Some(&head) = high.last() else { return into_decreasing(low) };
  if !(head * up).is_finite() {
    return vec![head * up]
  }
  low.extend(high.iter().map(|x| x * up));
  match distill(low) {
    Some(terms) => into_decreasing(terms),
    None => vec![libm::copysign(f64::INFINITY, head)],
  }
}

/// Distilled terms, by increasing magnitude, into a canonical expansion.
#[inline]
fn into_decreasing(mut terms: Vec<f64>) -> Vec<f64> {
  if terms.is_empty() {
    vec![0.]
  } else {
    terms.reverse();
    terms
  }
}

/// Whether every adjacent pair of `terms`, which are sorted by increasing magnitude, is stable
/// under rounding.
#[inline]
fn is_stable_increasing(terms: &[f64]) -> bool {
  terms.windows(2).all(|w| fast_two_sum(w[1], w[0]) == (w[1], w[0]))
}

/// One distillation sweep, from the least to the most significant term. Writes into `out` a list
/// of nonzero terms with the same exact sum as `terms`. Returns `false` if a partial sum overflows.
#[inline]
fn sweep(terms: &[f64], out: &mut Vec<f64>) -> bool {
  out.clear();
  let Some((&first, rest)) = terms.split_first() else { return true };
  let mut acc = first;
  for &t in rest {
    let (s, e) = two_sum(acc, t);
    if !s.is_finite() {
      return false
    }
    if e != 0. {
      out.push(e)
    }
    acc = s;
  }
  if acc != 0. {
    out.push(acc)
  }
  true
}

/// Round an expansion to at most `n` limbs, returning exactly `n` limbs (padded with trailing
/// zeros if the value needs fewer).
///
/// The rule is **round to nearest at the last kept limb**: the result is the first `n - 1` limbs
/// of the canonical expansion, followed by the correctly rounded value of (limb `n - 1` + everything
/// below it). Ties are broken towards the discarded remainder if there is one, and to even if the
/// tie is exact. This is achieved by rounding the first discarded limb *to odd* in the direction of
/// the remainder below it, which makes the final rounding correct.
///
/// ```
/// # use float_expansion::expansion::*;
/// let two = |k| f64::powi(2., k);
/// assert_eq!(compress_to(&[1., two(-53)], 1), [1.]);  // Exact tie, to even
/// assert_eq!(compress_to(&[1., two(-53), two(-120)], 1), [1. + two(-52)]);  // Above the tie
/// assert_eq!(compress_to(&[1., two(-53), -two(-120)], 1), [1.]);  // Below the tie
/// assert_eq!(compress_to(&[3.], 3), [3., 0., 0.]);
/// ```
pub fn compress_to(e: &[f64], n: usize) -> Vec<f64> {
  assert!(n > 0, "cannot compress to zero limbs");
  let mut e = renormalize(e);
  if e.len() > n && !any_nonfinite(&e) {
    let mut guard = e[n];
    if let Some(&sticky) = e.get(n + 1) {
      guard = round_to_odd(guard, sticky);
    }
    e[n - 1] = two_sum(e[n - 1], guard).0;
    e.truncate(n);
    e = renormalize(&e);
  }
  e.resize(n, 0.);
  e
}

/// Same as [`compress_to`], but without the trailing zero limbs (keeping at least one limb), i.e.
/// a canonical expansion of at most `n` limbs.
pub(crate) fn round_to(e: &[f64], n: usize) -> Vec<f64> {
  let mut e = compress_to(e, n);
  while e.len() > 1 && e.last() == Some(&0.) {
    e.pop();
  }
  e
}

/// Same as [`compress_to`], into an array.
pub fn compress<const N: usize>(e: &[f64]) -> [f64; N] {
  let mut out = [0.; N];
  out.copy_from_slice(&compress_to(e, N));
  out
}

/// Round `guard + sticky` to odd, where `sticky` is nonzero and lies strictly within the gap
/// between `guard` and its neighbour in the direction of `sticky`. That is: if the significand of
/// `guard` is odd, return it, otherwise return that neighbour (whose significand is odd).
#[inline]
fn round_to_odd(guard: f64, sticky: f64) -> f64 {
  let bits = guard.to_bits();
  if bits & 1 == 1 || sticky == 0. {
    guard
  } else if guard.is_sign_negative() == sticky.is_sign_negative() {
    f64::from_bits(bits + 1)  // Away from zero
  } else {
    f64::from_bits(bits - 1)  // Towards zero
  }
}
