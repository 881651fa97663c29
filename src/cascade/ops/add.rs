use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// The sum of the limbs of both operands is computed exactly, as an expansion, then rounded to
  /// `N` limbs.
  #[inline]
  pub(crate) fn add_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    let sum = linear_expansion_sum(&self.0, &other.0);
    Self::from_result(&sum, [self.0[0], other.0[0]])
  }

  #[inline]
  pub(crate) fn add_f64_kernel(self, other: f64) -> (Self, Option<ArithmeticError>) {
    let sum = grow_expansion(&self.0, other);
    Self::from_result(&sum, [self.0[0], other])
  }

  pub(crate) fn add(self, other: Self) -> Self {
    let (result, error) = self.add_kernel(other);
    P::resolve(result, error)
  }

  pub(crate) fn sub(self, other: Self) -> Self {
    let (result, error) = self.add_kernel(-other);
    P::resolve(result, error)
  }

  pub(crate) fn add_f64(self, other: f64) -> Self {
    let (result, error) = self.add_f64_kernel(other);
    P::resolve(result, error)
  }

  pub(crate) fn sub_f64(self, other: f64) -> Self {
    let (result, error) = self.add_f64_kernel(-other);
    P::resolve(result, error)
  }

  /// `other - self`
  pub(crate) fn f64_sub(self, other: f64) -> Self {
    let (result, error) = (-self).add_f64_kernel(other);
    P::resolve(result, error)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
super::mk_ops_f64!{Add, AddAssign, add, add_assign, add_f64, add_f64}
super::mk_ops_f64!{Sub, SubAssign, sub, sub_assign, sub_f64, f64_sub}
