use super::*;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl<const MAXLIMBS: usize> Ereal<MAXLIMBS> {
  /// Number of quotient digits for operands of `a` and `b` limbs.
  #[inline]
  fn quotient_limbs(a: usize, b: usize) -> usize {
    (a.max(b) + 2).min(Self::MAX_LIMBS)
  }

  fn sum(&self, other: &Self) -> Self {
    Self::from_expansion(linear_expansion_sum(&self.0, &other.0))
  }

  fn difference(&self, other: &Self) -> Self {
    Self::from_expansion(expansion_difference(&self.0, &other.0))
  }

  fn product(&self, other: &Self) -> Self {
    Self::from_expansion(multiply_cascades(&self.0, &other.0))
  }

  fn quotient(&self, other: &Self) -> Self {
    let limbs = Self::quotient_limbs(self.len(), other.len());
    Self::from_expansion(expansion_quotient(&self.0, &other.0, limbs))
  }

  fn sum_f64(&self, other: f64) -> Self {
    Self::from_expansion(grow_expansion(&self.0, other))
  }

  fn difference_f64(&self, other: f64) -> Self {
    Self::from_expansion(grow_expansion(&self.0, -other))
  }

  /// `other - self`
  fn f64_difference(&self, other: f64) -> Self {
    Self::from_expansion(grow_expansion(&negate(&self.0), other))
  }

  fn product_f64(&self, other: f64) -> Self {
    Self::from_expansion(scale_expansion(&self.0, other))
  }

  fn quotient_f64(&self, other: f64) -> Self {
    let limbs = Self::quotient_limbs(self.len(), 1);
    Self::from_expansion(expansion_quotient(&self.0, &[other], limbs))
  }

  /// `other / self`
  fn f64_quotient(&self, other: f64) -> Self {
    let limbs = Self::quotient_limbs(1, self.len());
    Self::from_expansion(expansion_quotient(&[other], &self.0, limbs))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference, and with
/// `f64` on either side. `$kernel` takes two `&Ereal`s; `$with_f64` computes `ereal ⋅ f64`, and
/// `$f64_with` computes `f64 ⋅ ereal`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident, $with_f64:ident, $f64_with:ident) => {
    impl<const M: usize>
    $trait<Ereal<M>> for Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: Ereal<M>) -> Self::Output { self.$kernel(&rhs) }
    }

    impl<const M: usize>
    $trait<&Ereal<M>> for Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: &Ereal<M>) -> Self::Output { self.$kernel(rhs) }
    }

    impl<const M: usize>
    $trait<Ereal<M>> for &Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: Ereal<M>) -> Self::Output { self.$kernel(&rhs) }
    }

    impl<const M: usize>
    $trait<&Ereal<M>> for &Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: &Ereal<M>) -> Self::Output { self.$kernel(rhs) }
    }

    impl<const M: usize>
    $trait<f64> for Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { self.$with_f64(rhs) }
    }

    impl<const M: usize>
    $trait<f64> for &Ereal<M> {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { self.$with_f64(rhs) }
    }

    impl<const M: usize>
    $trait<Ereal<M>> for f64 {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: Ereal<M>) -> Self::Output { rhs.$f64_with(self) }
    }

    impl<const M: usize>
    $trait<&Ereal<M>> for f64 {
      type Output = Ereal<M>;

      #[inline]
      fn $name(self, rhs: &Ereal<M>) -> Self::Output { rhs.$f64_with(self) }
    }

    impl<const M: usize>
    $trait_assign<Ereal<M>> for Ereal<M> {
      #[inline]
      fn $name_assign(&mut self, rhs: Ereal<M>) { *self = self.$kernel(&rhs) }
    }

    impl<const M: usize>
    $trait_assign<&Ereal<M>> for Ereal<M> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Ereal<M>) { *self = self.$kernel(rhs) }
    }

    impl<const M: usize>
    $trait_assign<f64> for Ereal<M> {
      #[inline]
      fn $name_assign(&mut self, rhs: f64) { *self = self.$with_f64(rhs) }
    }
  }
}

mk_ops!{Add, AddAssign, add, add_assign, sum, sum_f64, sum_f64}
mk_ops!{Sub, SubAssign, sub, sub_assign, difference, difference_f64, f64_difference}
mk_ops!{Mul, MulAssign, mul, mul_assign, product, product_f64, product_f64}
mk_ops!{Div, DivAssign, div, div_assign, quotient, quotient_f64, f64_quotient}
