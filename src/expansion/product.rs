use alloc::vec;
use alloc::vec::Vec;

use crate::eft::two_prod;
use super::{any_nonfinite, estimate, expansion_difference, linear_expansion_sum, or_ieee};
use super::{renormalize, round_to};

/// The expansion `e × b`, exactly.
///
/// Each limb is multiplied by `b` with [`two_prod`], giving a head and a tail per limb. These
/// `2 × len(e)` terms are then **renormalized**: merely sorting them by magnitude is not enough,
/// since the head of one product and the tail of the next can share significant bits (this was
/// the historical non-overlap bug of this operation).
///
/// ```
/// # use float_expansion::expansion::*;
/// let e = scale_expansion(&[1., 1e-17], 0.1);
/// assert!(verify_nonoverlapping(&e));
/// assert!((estimate(&e) - 0.1).abs() < 1e-30);
/// ```
pub fn scale_expansion(e: &[f64], b: f64) -> Vec<f64> {
  if any_nonfinite(e) || !b.is_finite() {
    return vec![estimate(e) * b]
  }
  let mut terms = Vec::with_capacity(2 * e.len());
  for &x in e {
    let (p, err) = two_prod(x, b);
    terms.push(p);
    terms.push(err);
  }
  or_ieee(renormalize(&terms), || estimate(e) * b)
}

/// The expansion `e × f`, exactly (also known as the *expansion product*).
///
/// Every pair of limbs is multiplied with [`two_prod`], and the resulting `2 × len(e) × len(f)`
/// terms are renormalized, same as in [`scale_expansion`]. Fixed-size number types then round this
/// to their own number of limbs.
pub fn multiply_cascades(e: &[f64], f: &[f64]) -> Vec<f64> {
  if any_nonfinite(e) || any_nonfinite(f) {
    return vec![estimate(e) * estimate(f)]
  }
  let mut terms = Vec::with_capacity(2 * e.len() * f.len());
  for &x in e {
    for &y in f {
      let (p, err) = two_prod(x, y);
      terms.push(p);
      terms.push(err);
    }
  }
  or_ieee(renormalize(&terms), || estimate(e) * estimate(f))
}

/// The expansion `e ÷ f`, to (at least) `limbs` limbs' worth of precision.
///
/// This is long division, one `f64` "digit" at a time: each quotient digit is the quotient of the
/// leading limbs of the current remainder and of `f`, and the next remainder `r - q × f` is
/// computed exactly with [`scale_expansion`] and [`linear_expansion_sum`]. Each step gains about 51
/// bits. The division stops early if the remainder becomes exactly zero, in which case the result
/// is exact.
///
/// Division by zero gives the IEEE result (±∞ or NaN) in a single limb.
pub fn expansion_quotient(e: &[f64], f: &[f64], limbs: usize) -> Vec<f64> {
  if any_nonfinite(e) || any_nonfinite(f) {
    return vec![estimate(e) / estimate(f)]
  }
  let divisor = renormalize(f);
  if divisor[0] == 0. {
    return vec![estimate(e) / estimate(f)]
  }
  let mut remainder = renormalize(e);
  let mut digits = Vec::with_capacity(limbs);
  while digits.len() < limbs && remainder[0] != 0. {
    let q = remainder[0] / divisor[0];
    if q == 0. || !q.is_finite() {
      // Underflow or overflow; nothing more to gain.
      digits.push(q);
      break
    }
    digits.push(q);
    remainder = expansion_difference(&remainder, &scale_expansion(&divisor, q));
  }
  or_ieee(renormalize(&digits), || estimate(e) / estimate(f))
}

/// The square root of `e`, to `limbs` limbs, rounded per [`compress_to`](super::compress_to).
///
/// Starts from the `f64` square root of the leading limb and refines it with Newton's iteration
/// `x ← x + (e - x²) / 2x`, where the residual `e - x²` is computed exactly. Each step doubles the
/// number of correct bits.
///
/// The square root of a negative number is NaN.
pub fn expansion_sqrt(e: &[f64], limbs: usize) -> Vec<f64> {
  if any_nonfinite(e) {
    return vec![libm::sqrt(estimate(e))]
  }
  let a = renormalize(e);
  if a[0] == 0. {
    return vec![0.]
  } else if a[0] < 0. {
    return vec![f64::NAN]
  }
  let working = limbs + 1;
  let mut x = vec![libm::sqrt(a[0])];
  let mut bits = f64::MANTISSA_DIGITS as usize;
  while bits < f64::MANTISSA_DIGITS as usize * working {
    let residual = expansion_difference(&a, &multiply_cascades(&x, &x));
    let twice = x.iter().map(|x| 2. * x).collect::<Vec<_>>();
    let delta = expansion_quotient(&residual, &twice, working);
    x = round_to(&linear_expansion_sum(&x, &delta), working);
    bits *= 2;
  }
  or_ieee(round_to(&x, limbs), || libm::sqrt(estimate(e)))
}
