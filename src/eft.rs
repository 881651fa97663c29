//! Error-free transformations: each function here takes one or two `f64`s and returns a pair
//! `(head, tail)`, where `head` is the ordinary rounded result of an operation and `tail` is its
//! *exact* rounding error. In other words, `head + tail` equals the real result of the operation,
//! with no rounding whatsoever.
//!
//! The guarantees hold for all finite inputs, barring overflow of the head and (for the products)
//! underflow of the tail below the subnormal range. Infinities and NaNs propagate through the usual
//! IEEE semantics, and are never reported otherwise.

/// `(1 << 27) + 1`, the Veltkamp splitting constant for a 53-bit significand.
const SPLITTER: f64 = 134217729.0;

/// Above this, `SPLITTER * a` would overflow, so [`split`] scales its argument down first.
const SPLIT_THRESHOLD: f64 = 6.69692879491417e+299;

/// 2<sup>-28</sup> and 2<sup>28</sup>.
const SPLIT_DOWN: f64 = 3.7252902984619140625e-09;
const SPLIT_UP: f64 = 268435456.0;

/// Returns `(s, e)` such that `s = fl(a + b)` and `a + b = s + e` exactly.
///
/// This is Knuth's branch-free algorithm; it has no precondition on the magnitudes of `a` and `b`.
/// If they are known to be ordered, [`fast_two_sum`] is cheaper.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

/// Returns `(s, e)` such that `s = fl(a + b)` and `a + b = s + e` exactly, **provided that**
/// `|a| ≥ |b|` (or `a` is zero). If this does not hold, `e` is not necessarily exact.
///
/// This is Dekker's algorithm, half the cost of [`two_sum`].
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
  debug_assert!(
    !(a.is_finite() && b.is_finite()) || a == 0. || a.abs() >= b.abs(),
    "fast_two_sum precondition violated: |{a:e}| < |{b:e}|",
  );
  let s = a + b;
  let e = b - (s - a);
  (s, e)
}

/// Returns `(d, e)` such that `d = fl(a - b)` and `a - b = d + e` exactly.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
  let d = a - b;
  let bb = d - a;
  let e = (a - (d - bb)) - (b + bb);
  (d, e)
}

/// Same as [`two_diff`], with the precondition `|a| ≥ |b|` of [`fast_two_sum`].
#[inline]
pub fn fast_two_diff(a: f64, b: f64) -> (f64, f64) {
  fast_two_sum(a, -b)
}

/// Split `a` into `(hi, lo)`, where `hi + lo = a` and both halves fit in 26 bits of significand,
/// so that a product of any two halves is exact.
///
/// Arguments so large that the splitting would overflow are scaled down by 2<sup>28</sup> and back
/// up afterwards, which is exact. The exception is the top of the range, `|a| ≥ 2^1024 - 2^997`,
/// where `hi` rounds up to 2<sup>1024</sup> and overflows; [`two_prod_dekker`] never splits such
/// values.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
  if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
    let (hi, lo) = veltkamp(a * SPLIT_DOWN);
    (hi * SPLIT_UP, lo * SPLIT_UP)
  } else {
    veltkamp(a)
  }
}

/// Veltkamp's splitting, for `|a| ≤ 2^996`.
#[inline]
fn veltkamp(a: f64) -> (f64, f64) {
  let t = SPLITTER * a;
  let hi = t - (t - a);
  let lo = a - hi;
  (hi, lo)
}

/// Returns `(p, e)` such that `p = fl(a × b)` and `a × b = p + e` exactly, using Dekker's product
/// (four partial products of the Veltkamp halves). Needs no fused multiply-add.
///
/// When an operand or the product is close enough to overflow that a partial product could
/// overflow, the larger operand is scaled down by 2<sup>28</sup> first, and the error scaled back
/// up, which is exact.
///
/// ```
/// # use float_expansion::eft::two_prod_dekker;
/// let (p, e) = two_prod_dekker(f64::MAX, 0.75);
/// assert_eq!(p, f64::MAX * 0.75);
/// assert_eq!(e, f64::powi(2., 969));
/// ```
#[inline]
pub fn two_prod_dekker(a: f64, b: f64) -> (f64, f64) {
  let p = a * b;
  if !p.is_finite() {
    // As `fma(a, b, -p)` would give.
    return (p, if a.is_finite() && b.is_finite() {-p} else {f64::NAN})
  }
  let huge = |x: f64| x > SPLIT_THRESHOLD || x < -SPLIT_THRESHOLD;
  if huge(a) || huge(b) || huge(2. * p) {
    let (a, b) = if a.abs() >= b.abs() {(a * SPLIT_DOWN, b)} else {(a, b * SPLIT_DOWN)};
    (p, dekker_error(a, b, a * b) * SPLIT_UP)
  } else {
    (p, dekker_error(a, b, p))
  }
}

/// The exact error `a × b - p` of `p = fl(a × b)`, for operands and product that are far enough
/// from overflow.
#[inline]
fn dekker_error(a: f64, b: f64, p: f64) -> f64 {
  let (a_hi, a_lo) = veltkamp(a);
  let (b_hi, b_lo) = veltkamp(b);
  ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo
}

/// Returns `(p, e)` such that `p = fl(a × b)` and `a × b = p + e` exactly.
///
/// On targets with a hardware fused multiply-add, the error is simply `fma(a, b, -p)`. Elsewhere
/// this falls back to [`two_prod_dekker`]; both give bit-identical results.
#[inline]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
  #[cfg(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "fma"),
    target_arch = "aarch64",
  ))]
  {
    let p = a * b;
    (p, libm::fma(a, b, -p))
  }
  #[cfg(not(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "fma"),
    target_arch = "aarch64",
  )))]
  {
    two_prod_dekker(a, b)
  }
}

/// Same as `two_prod(a, a)`.
#[inline]
pub fn two_sqr(a: f64) -> (f64, f64) {
  #[cfg(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "fma"),
    target_arch = "aarch64",
  ))]
  {
    let p = a * a;
    (p, libm::fma(a, a, -p))
  }
  #[cfg(not(any(
    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "fma"),
    target_arch = "aarch64",
  )))]
  {
    let p = a * a;
    let (hi, lo) = split(a);
    let e = ((hi * hi - p) + 2. * hi * lo) + lo * lo;
    (p, e)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expansion::test::{exact, finite, float_in};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn two_sum_small() {
    // 1 + 11·2^-54 rounds to 1 + 3·2^-52, leaving -2^-54 behind.
    let b = 11. * f64::powi(2., -54);
    assert_eq!(two_sum(1., b), (1. + 3. * f64::EPSILON, -f64::powi(2., -54)));
    assert_eq!(two_sum(b, 1.), (1. + 3. * f64::EPSILON, -f64::powi(2., -54)));
    assert_eq!(two_sum(1., 1e-17), (1., 1e-17));
    assert_eq!(two_sum(0.1, 0.2), (0.30000000000000004, -2.7755575615628914e-17));
  }

  #[test]
  fn two_sum_special() {
    assert!(two_sum(f64::NAN, 1.).0.is_nan());
    assert_eq!(two_sum(f64::INFINITY, 1.).0, f64::INFINITY);
    assert!(two_sum(f64::INFINITY, f64::NEG_INFINITY).0.is_nan());
  }

  #[test]
  fn two_prod_small() {
    // (1 + 2^-52)² = 1 + 2^-51 + 2^-104
    let a = 1. + f64::EPSILON;
    assert_eq!(two_prod(a, a), (1. + 2. * f64::EPSILON, f64::powi(2., -104)));
    assert_eq!(two_sqr(a), (1. + 2. * f64::EPSILON, f64::powi(2., -104)));
    assert_eq!(two_prod(3., 7.), (21., 0.));
  }

  #[test]
  fn split_halves() {
    for a in [1., 0.1, -3.14159, 1e300, -1.7e308, f64::MAX * 0.999, 1e-300] {
      let (hi, lo) = split(a);
      assert_eq!(hi + lo, a);
      assert_eq!(hi.to_bits() & ((1 << 26) - 1), 0, "{a:e}");
    }
  }

  #[test]
  fn two_prod_huge() {
    // Exercises the rescaled split.
    let a = 1.5e300 + 1e284;
    let (p, e) = two_prod_dekker(a, 1e-10);
    assert_eq!(exact(&[p, e]), exact(&[a]) * exact(&[1e-10]));
  }

  #[test]
  fn two_prod_near_overflow() {
    let (p, e) = two_prod_dekker(f64::MAX, 0.5);
    assert_eq!(exact(&[p, e]), exact(&[f64::MAX]) * exact(&[0.5]));
    for (a, b) in [(f64::MAX, 0.75), (f64::MAX, -1. / 3.), (1e154 + 1., 1.7e154), (3., 5.9e307), (0.1, f64::MAX)] {
      let (p, e) = two_prod_dekker(a, b);
      assert_eq!(p, a * b);
      assert_eq!(exact(&[p, e]), exact(&[a]) * exact(&[b]), "{a:e} × {b:e}");
      assert_eq!(two_prod(a, b), (p, e));
    }
  }

  #[test]
  fn two_prod_overflowing() {
    assert_eq!(two_prod_dekker(f64::MAX, 2.), (f64::INFINITY, f64::NEG_INFINITY));
    assert!(two_prod_dekker(f64::INFINITY, 2.).1.is_nan());
  }

  /// Both factors and the product are finite, and the error of the product is not below the
  /// subnormal range.
  fn representable_product(a: f64, b: f64) -> bool {
    let p = a * b;
    p.is_finite() && p.abs() >= f64::powi(2., -969)
  }

  /// Pairs of normal floats over the whole exponent range, whose product has an exponent between
  /// -969 and 1023.
  fn full_range_factors() -> impl Strategy<Value = (f64, f64)> {
    float_in(-1022 ..= 1023).prop_flat_map(|a| {
      let exp = ((a.to_bits() >> 52) & 0x7ff) as i32 - 1023;
      (Just(a), float_in((-969 - exp).max(-1022) ..= (1022 - exp).min(1023)))
    })
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn two_sum_exact_full_range(a in finite(), b in finite()) {
      if (a + b).is_finite() && a.abs() < f64::MAX / 2. {
        let (s, e) = two_sum(a, b);
        prop_assert_eq!(exact(&[s, e]), exact(&[a]) + exact(&[b]));
      }
    }

    #[test]
    fn two_prod_exact_full_range((a, b) in full_range_factors()) {
      if representable_product(a, b) {
        let (p, e) = two_prod(a, b);
        prop_assert_eq!(p, a * b);
        prop_assert_eq!(exact(&[p, e]), exact(&[a]) * exact(&[b]));
        prop_assert_eq!(two_prod_dekker(a, b), (p, e));
      }
    }

    #[test]
    fn two_sqr_full_range(a in float_in(-1022 ..= 1023)) {
      if representable_product(a, a) {
        prop_assert_eq!(two_sqr(a), two_prod(a, a));
      }
    }

    #[test]
    fn two_sum_exact(a in float_in(-300 ..= 300), b in float_in(-300 ..= 300)) {
      let (s, e) = two_sum(a, b);
      prop_assert_eq!(s, a + b);
      prop_assert_eq!(exact(&[s, e]), exact(&[a]) + exact(&[b]));
    }

    #[test]
    fn two_diff_exact(a in float_in(-300 ..= 300), b in float_in(-300 ..= 300)) {
      let (d, e) = two_diff(a, b);
      prop_assert_eq!(d, a - b);
      prop_assert_eq!(exact(&[d, e]), exact(&[a]) - exact(&[b]));
    }

    #[test]
    fn fast_two_sum_agrees(a in float_in(-300 ..= 300), b in float_in(-300 ..= 300)) {
      let (a, b) = if a.abs() >= b.abs() {(a, b)} else {(b, a)};
      prop_assert_eq!(fast_two_sum(a, b), two_sum(a, b));
      prop_assert_eq!(fast_two_diff(a, b), two_diff(a, b));
    }

    #[test]
    fn two_prod_exact(a in float_in(-250 ..= 250), b in float_in(-250 ..= 250)) {
      let (p, e) = two_prod(a, b);
      prop_assert_eq!(p, a * b);
      prop_assert_eq!(exact(&[p, e]), exact(&[a]) * exact(&[b]));
    }

    #[test]
    fn two_prod_dekker_agrees(a in float_in(-250 ..= 250), b in float_in(-250 ..= 250)) {
      prop_assert_eq!(two_prod_dekker(a, b), two_prod(a, b));
      prop_assert_eq!(two_sqr(a), two_prod(a, a));
    }

    #[test]
    fn two_sum_tail_is_small(a in float_in(-300 ..= 300), b in float_in(-300 ..= 300)) {
      let (s, e) = two_sum(a, b);
      // The tail lies within half an ulp of the head.
      use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};
      let half_ulp = Rational::try_from(s).unwrap() * Rational::power_of_2(-53i64);
      prop_assert!(Rational::try_from(e).unwrap().abs() <= half_ulp.abs());
    }
  }
}
