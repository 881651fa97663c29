use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// Long division, with `N + 1` quotient digits (one more than needed, for the final rounding).
  ///
  /// `x / 0` is ±∞ for nonzero, finite `x`, and raises [`ArithmeticError::DivisionByZero`].
  #[inline]
  pub(crate) fn div_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    let quotient = expansion_quotient(&self.0, &other.0, N + 1);
    Self::div_screen(&quotient, self.0[0], other.0[0])
  }

  #[inline]
  pub(crate) fn div_f64_kernel(self, other: f64) -> (Self, Option<ArithmeticError>) {
    let quotient = expansion_quotient(&self.0, &[other], N + 1);
    Self::div_screen(&quotient, self.0[0], other)
  }

  /// `other / self`
  #[inline]
  pub(crate) fn f64_div_kernel(self, other: f64) -> (Self, Option<ArithmeticError>) {
    let quotient = expansion_quotient(&[other], &self.0, N + 1);
    Self::div_screen(&quotient, other, self.0[0])
  }

  #[inline]
  fn div_screen(quotient: &[f64], dividend: f64, divisor: f64) -> (Self, Option<ArithmeticError>) {
    let (result, error) = Self::from_result(quotient, [dividend, divisor]);
    if divisor == 0. && dividend != 0. && dividend.is_finite() {
      (result, Some(ArithmeticError::DivisionByZero))
    } else {
      (result, error)
    }
  }

  pub(crate) fn div(self, other: Self) -> Self {
    let (result, error) = self.div_kernel(other);
    P::resolve(result, error)
  }

  pub(crate) fn div_f64(self, other: f64) -> Self {
    let (result, error) = self.div_f64_kernel(other);
    P::resolve(result, error)
  }

  pub(crate) fn f64_div(self, other: f64) -> Self {
    let (result, error) = self.f64_div_kernel(other);
    P::resolve(result, error)
  }

  /// Divide `self` by `other`, reporting division by zero, invalid operations (such as `0 / 0` or
  /// `∞ / ∞`), and overflow as an error, regardless of the [`Policy`] of the type.
  ///
  /// ```
  /// # use float_expansion::{dd, ArithmeticError};
  /// assert_eq!(dd::ONE.try_div(dd::from(4.)), Ok(dd::from(0.25)));
  /// assert_eq!(dd::ONE.try_div(dd::ZERO), Err(ArithmeticError::DivisionByZero));
  /// assert_eq!(dd::ZERO.try_div(dd::ZERO), Err(ArithmeticError::InvalidOperation));
  /// ```
  pub fn try_div(self, other: Self) -> Result<Self, ArithmeticError> {
    match self.div_kernel(other) {
      (_, Some(error)) => Err(error),
      (result, None) => Ok(result),
    }
  }

  /// Return `1 / self`.
  #[inline]
  pub fn recip(self) -> Self {
    self.f64_div(1.)
  }

  /// Return `1 / self`, reporting exceptional conditions as in [`Self::try_div`].
  pub fn try_recip(self) -> Result<Self, ArithmeticError> {
    match self.f64_div_kernel(1.) {
      (_, Some(error)) => Err(error),
      (result, None) => Ok(result),
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
super::mk_ops_f64!{Div, DivAssign, div, div_assign, div_f64, f64_div}

#[cfg(test)]
mod tests {
  mod div {
    super::super::mk_tests!{/, /=, 3}
  }

  use crate::{ArithmeticError, Cascade, Trap, dd, qd};
  use crate::expansion::test::is_close;
  use malachite::rational::Rational;

  #[test]
  fn exact_quotients() {
    assert_eq!(dd::from(1.) / 4., dd::from(0.25));
    assert_eq!((dd::from(6.) / dd::from(3.)).limbs(), &[2., 0.]);
    assert_eq!((1. / dd::from(8.)).limbs(), &[0.125, 0.]);
  }

  #[test]
  fn third() {
    let third = qd::ONE / 3.;
    assert!(third.is_canonical());
    assert!(is_close(third.limbs(), &(Rational::from(1) / Rational::from(3)), 210));
    assert!(is_close(third.recip().limbs(), &Rational::from(3), 208));
  }

  #[test]
  fn by_zero() {
    assert_eq!((dd::ONE / 0.).limbs(), &[f64::INFINITY, 0.]);
    assert_eq!((dd::MINUS_ONE / dd::ZERO).limbs(), &[f64::NEG_INFINITY, 0.]);
    assert!((dd::ZERO / dd::ZERO).is_nan());
    assert_eq!((dd::ONE / dd::from(-0.)).limbs(), &[f64::NEG_INFINITY, 0.]);
    assert_eq!((dd::ONE / dd::from(-0.)).limbs(), (dd::ONE / -0.).limbs());
    assert_eq!((dd::MINUS_ONE / -dd::ZERO).limbs(), &[f64::INFINITY, 0.]);
    assert_eq!(dd::ONE.try_recip(), Ok(dd::ONE));
    assert_eq!(dd::ZERO.try_recip(), Err(ArithmeticError::DivisionByZero));
    // Infinite operands are not exceptional.
    assert!(dd::INFINITY.try_div(dd::ZERO).is_ok());
    assert_eq!(dd::ONE.try_div(dd::INFINITY), Ok(dd::ZERO));
  }

  #[test]
  fn try_div_overflow() {
    assert_eq!(dd::MAX.try_div(dd::from(0.5)), Err(ArithmeticError::Overflow));
    assert_eq!(dd::INFINITY.try_div(dd::INFINITY), Err(ArithmeticError::InvalidOperation));
  }

  #[test]
  #[should_panic(expected = "division by zero")]
  fn trap_division_by_zero() {
    let _ = Cascade::<4, Trap>::ONE / 0.;
  }

  #[test]
  fn trap_quiet() {
    let x = Cascade::<4, Trap>::ONE / 3.;
    assert!(x.is_finite());
  }
}
