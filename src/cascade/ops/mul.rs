use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// All `N × N` partial products are computed exactly, and their sum rounded to `N` limbs.
  #[inline]
  pub(crate) fn mul_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    let product = multiply_cascades(&self.0, &other.0);
    Self::from_result(&product, [self.0[0], other.0[0]])
  }

  #[inline]
  pub(crate) fn mul_f64_kernel(self, other: f64) -> (Self, Option<ArithmeticError>) {
    let product = scale_expansion(&self.0, other);
    Self::from_result(&product, [self.0[0], other])
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    let (result, error) = self.mul_kernel(other);
    P::resolve(result, error)
  }

  pub(crate) fn mul_f64(self, other: f64) -> Self {
    let (result, error) = self.mul_f64_kernel(other);
    P::resolve(result, error)
  }

  /// Return `self²`.
  ///
  /// ```
  /// # use float_expansion::dd;
  /// let x = dd::ONE + 1e-20;
  /// assert_eq!(x.sqr(), dd::ONE + 2e-20);
  /// ```
  #[inline]
  pub fn sqr(self) -> Self {
    self.mul(self)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
super::mk_ops_f64!{Mul, MulAssign, mul, mul_assign, mul_f64, mul_f64}
