use crate::InvariantViolation;

/// 2<sup>53</sup>, the minimum ratio between adjacent limbs of a non-overlapping expansion.
const RATIO: f64 = 9007199254740992.;

/// Whether the limbs of `e` are sorted by decreasing magnitude.
pub fn is_decreasing_magnitude(e: &[f64]) -> bool {
  e.windows(2).all(|w| w[0].abs() >= w[1].abs())
}

/// Whether the nonzero limbs of `e` are non-overlapping: each one is at least 2<sup>53</sup> times
/// larger in magnitude than the next. Zero limbs are skipped.
///
/// This is the invariant that must hold after every expansion-producing operation; it is the one
/// that was historically broken by scaling an expansion without renormalizing it.
///
/// ```
/// # use float_expansion::expansion::*;
/// assert!(verify_nonoverlapping(&[1., 1e-17]));
/// assert!(!verify_nonoverlapping(&[1., 1e-10]));
/// ```
pub fn verify_nonoverlapping(e: &[f64]) -> bool {
  let mut nonzero = e.iter().filter(|x| **x != 0.);
  let Some(mut prev) = nonzero.next() else { return true };
  for next in nonzero {
    // Multiplying by a power of two is exact (or overflows to ∞, which also gives the right answer).
    if !(prev.abs() >= next.abs() * RATIO) {
      return false
    }
    prev = next;
  }
  true
}

/// Check that `e` is a valid expansion, reporting the first violation found.
///
/// ```
/// # use float_expansion::{expansion::validate, InvariantViolation};
/// assert_eq!(validate(&[1., 1e-17]), Ok(()));
/// assert_eq!(validate(&[1e-17, 1.]), Err(InvariantViolation::Unordered { index: 1 }));
/// assert_eq!(validate(&[1., 0., 1e-40]), Err(InvariantViolation::SpuriousZero { index: 1 }));
/// ```
pub fn validate(e: &[f64]) -> Result<(), InvariantViolation> {
  if e.is_empty() {
    return Err(InvariantViolation::Empty)
  }
  if let Some(index) = e.iter().position(|x| !x.is_finite()) {
    return Err(InvariantViolation::NonFinite { index })
  }
  if e.len() > 1 && let Some(index) = e.iter().position(|x| *x == 0.) {
    return Err(InvariantViolation::SpuriousZero { index })
  }
  for (i, w) in e.windows(2).enumerate() {
    if w[0].abs() < w[1].abs() {
      return Err(InvariantViolation::Unordered { index: i + 1 })
    }
    if w[0].abs() < w[1].abs() * RATIO {
      return Err(InvariantViolation::Overlapping { index: i + 1 })
    }
  }
  Ok(())
}

/// Whether `e` is a canonical expansion: valid, and moreover `fl(e[i] + e[i+1]) == e[i]` for every
/// pair of adjacent limbs. This is the form produced by [`renormalize`](super::renormalize).
///
/// Canonical implies non-overlapping; the converse fails only at exact ties, e.g.
/// `[1 + 2^-52, 2^-53]` is valid but not canonical, since `1 + 2^-52 + 2^-53` rounds (to even) to
/// `1 + 2^-51`.
pub fn is_canonical(e: &[f64]) -> bool {
  validate(e).is_ok() && e.windows(2).all(|w| w[0] + w[1] == w[0])
}
