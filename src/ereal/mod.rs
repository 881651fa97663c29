//! Numbers of adaptive precision, as expansions stored on the heap.
//!
//! An [`Ereal`] holds a canonical expansion of any length up to `MAXLIMBS`. Sums, differences,
//! and products are exact: the result simply has as many limbs as it needs. Only when that
//! exceeds `MAXLIMBS` is it rounded, per [`compress_to`](crate::expansion::compress_to).
//! Quotients and square roots cannot be exact in general, and are computed to a few more limbs
//! than their operands.
//!
//! Unlike [`Cascade`](crate::Cascade), `Ereal` has no [`Policy`](crate::Policy): NaN and ±∞ simply
//! propagate, as a single limb.

use alloc::vec;
use alloc::vec::Vec;

use crate::expansion::*;

/// An adaptive-precision number: a canonical expansion of at most `MAXLIMBS` limbs.
///
/// ```
/// # use float_expansion::Ereal;
/// let x = Ereal::<1024>::from(1.) + Ereal::from(1e-300);
/// assert_eq!(x.limbs(), &[1., 1e-300]);
/// assert_eq!(x - 1., Ereal::from(1e-300));
/// ```
#[derive(Clone)]
pub struct Ereal<const MAXLIMBS: usize = 1024>(pub(crate) Vec<f64>);

/// Arithmetic operators.
mod ops;

/// Comparisons.
mod traits;

/// Conversions to and from floats, ints, and cascades.
mod convert;

/// Formatting.
mod fmt;

impl<const MAXLIMBS: usize> Ereal<MAXLIMBS> {
  /// The maximum number of limbs of this type (i.e. parameter `MAXLIMBS`).
  pub const MAX_LIMBS: usize = {
    assert!(
      MAXLIMBS >= 1,
      "An ereal must be allowed at least one limb",
    );
    MAXLIMBS
  };

  /// Construct an `Ereal` from limbs that must already be a canonical expansion, of at most
  /// `MAXLIMBS` limbs, **without** any checks or normalization.
  ///
  /// As for [`Cascade::from_limbs_unchecked`](crate::Cascade::from_limbs_unchecked), arithmetic
  /// on malformed limbs is still correct for their sum, but accessors that look only at the
  /// leading limb may not be.
  #[inline]
  pub fn from_limbs_unchecked(limbs: Vec<f64>) -> Self {
    Self(limbs)
  }

  /// Construct an `Ereal` whose value is the sum of arbitrary `limbs` (rounded, only if it needs
  /// more than `MAXLIMBS` limbs).
  ///
  /// ```
  /// # use float_expansion::Ereal;
  /// let x = Ereal::<8>::from_limbs(vec![0.25, 1e-20, 1.]);
  /// assert_eq!(x.limbs(), &[1.25, 1e-20]);
  /// assert_eq!(Ereal::<8>::from_limbs(vec![]).limbs(), &[0.]);
  /// ```
  pub fn from_limbs(limbs: Vec<f64>) -> Self {
    Self::from_expansion(renormalize(&limbs))
  }

  /// Wrap the result of an expansion kernel, which is already canonical, rounding it if it is
  /// too long.
  #[inline]
  pub(crate) fn from_expansion(e: Vec<f64>) -> Self {
    if e.len() > Self::MAX_LIMBS {
      Self(round_to(&e, MAXLIMBS))
    } else if e.is_empty() {
      Self(vec![0.])
    } else {
      Self(e)
    }
  }

  /// The limbs of `self`, most significant first.
  #[inline]
  pub fn limbs(&self) -> &[f64] {
    &self.0
  }

  /// The limbs of `self`, most significant first.
  #[inline]
  pub fn into_limbs(self) -> Vec<f64> {
    self.0
  }

  /// The number of limbs; at least 1.
  #[allow(clippy::len_without_is_empty)]
  #[inline]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether the limbs are a canonical expansion, as guaranteed for every result of arithmetic.
  pub fn is_canonical(&self) -> bool {
    match self.0.as_slice() {
      [x] => !x.is_finite() || is_canonical(&self.0),
      _ => is_canonical(&self.0),
    }
  }

  /// `true` if `self` is ±0.
  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0[0] == 0.
  }

  /// `true` if `self` is NaN.
  #[inline]
  pub fn is_nan(&self) -> bool {
    self.0[0].is_nan()
  }

  /// `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub fn is_finite(&self) -> bool {
    self.0[0].is_finite()
  }

  /// `true` if `self` has a negative sign, including `-0.0` and `-∞`.
  #[inline]
  pub fn is_sign_negative(&self) -> bool {
    self.0[0].is_sign_negative()
  }

  /// `1` if `self` is positive, `-1` if negative; `self` itself if it is ±0 or NaN.
  pub fn signum(&self) -> Self {
    let head = self.0[0];
    if head == 0. || head.is_nan() {
      Self(vec![head])
    } else {
      Self(vec![head.signum()])
    }
  }

  /// Return the absolute value of `self`, which is exact.
  pub fn abs(&self) -> Self {
    if self.is_sign_negative() {-self} else {self.clone()}
  }

  /// Return the square root of `self`, to one more limb than `self` has (and at least 3), but no
  /// more than `MAXLIMBS`. The square root of a negative number is NaN.
  ///
  /// ```
  /// # use float_expansion::Ereal;
  /// let two = Ereal::<16>::from(2.);
  /// let root = two.sqrt();
  /// assert_eq!(root.len(), 3);
  /// assert_eq!(root.limbs()[0], 2f64.sqrt());
  /// ```
  pub fn sqrt(&self) -> Self {
    let limbs = (self.len().max(2) + 1).min(Self::MAX_LIMBS);
    Self::from_expansion(expansion_sqrt(&self.0, limbs))
  }
}

impl<const MAXLIMBS: usize>
core::ops::Neg for Ereal<MAXLIMBS> {
  type Output = Ereal<MAXLIMBS>;

  /// Exact: every limb changes sign.
  #[inline]
  fn neg(mut self) -> Self::Output {
    for x in self.0.iter_mut() {
      *x = -*x;
    }
    self
  }
}

impl<const MAXLIMBS: usize>
core::ops::Neg for &Ereal<MAXLIMBS> {
  type Output = Ereal<MAXLIMBS>;

  #[inline]
  fn neg(self) -> Self::Output {
    Ereal(negate(&self.0))
  }
}

impl<const MAXLIMBS: usize>
Default for Ereal<MAXLIMBS> {
  #[inline]
  fn default() -> Self {
    Self(vec![0.])
  }
}
