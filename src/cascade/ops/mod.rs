use super::*;

/// Addition and subtraction (`a - b` is simply `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

impl<const N: usize, P: Policy> Cascade<N, P> {
  /// Round the exact (or, for division, sufficiently precise) result `e` of an operation on
  /// operands whose heads are `operands` to `N` limbs, and flag it if it is exceptional.
  #[inline]
  pub(crate) fn from_result(e: &[f64], operands: [f64; 2]) -> (Self, Option<ArithmeticError>) {
    let result = Self::from_expansion(e);
    (result, ArithmeticError::screen(&operands, result.0[0]))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: usize, P: Policy>
    $trait<Cascade<N, P>> for Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait<&Cascade<N, P>> for Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait<Cascade<N, P>> for &Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: Cascade<N, P>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait<&Cascade<N, P>> for &Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: &Cascade<N, P>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait_assign<Cascade<N, P>> for Cascade<N, P> {
      #[inline]
      fn $name_assign(&mut self, rhs: Cascade<N, P>) { *self = self.$name(rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait_assign<&Cascade<N, P>> for Cascade<N, P> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Cascade<N, P>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Helper macro for implementing operators between cascades and `f64`s, on either side.
/// `$with_f64` computes `cascade ⋅ f64`, `$f64_with` computes `f64 ⋅ cascade`.
macro_rules! mk_ops_f64 {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $with_f64:ident, $f64_with:ident) => {
    impl<const N: usize, P: Policy>
    $trait<f64> for Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { self.$with_f64(rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait<f64> for &Cascade<N, P> {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { (*self).$with_f64(rhs) }
    }

    impl<const N: usize, P: Policy>
    $trait<Cascade<N, P>> for f64 {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: Cascade<N, P>) -> Self::Output { rhs.$f64_with(self) }
    }

    impl<const N: usize, P: Policy>
    $trait<&Cascade<N, P>> for f64 {
      type Output = Cascade<N, P>;

      #[inline]
      fn $name(self, rhs: &Cascade<N, P>) -> Self::Output { (*rhs).$f64_with(self) }
    }

    impl<const N: usize, P: Policy>
    $trait_assign<f64> for Cascade<N, P> {
      #[inline]
      fn $name_assign(&mut self, rhs: f64) { *self = self.$with_f64(rhs) }
    }
  }
}

pub(crate) use mk_ops_f64;

/// Macro for instantiating the suite of tests for a binary operator of cascades.
///
/// `$loss` is the number of bits of precision that the operator may lose, relative to the
/// `53 × N` bits of the type.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $loss:expr) => {
    use crate::Cascade;
    use crate::expansion::test::{exact, float_in, is_close};
    use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::dd::ONE;
      let mut b = crate::dd::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      let _ = a $op 2.;
      let _ = &a $op 2.;
      let _ = 2. $op a;
      let _ = 2. $op &a;
      a $op_assign b;
      b $op_assign &a;
      a $op_assign 2.;
    }

    /// Aux function: check that `a $op b` is within the precision of the type.
    fn is_close_to_exact<const N: usize>(a: Cascade<N>, b: Cascade<N>) -> bool {
      let result = a $op b;
      let exact_result = exact(a.limbs()) $op exact(b.limbs());
      result.is_canonical() && is_close(result.limbs(), &exact_result, 53 * N as i64 - $loss)
    }

    /// Aux function: same, with an `f64` on the right and on the left.
    fn is_close_to_exact_f64<const N: usize>(a: Cascade<N>, b: f64) -> bool {
      let right = a $op b;
      let left = b $op a;
      let (a, b) = (exact(a.limbs()), exact(&[b]));
      right.is_canonical() && is_close(right.limbs(), &(a.clone() $op b.clone()), 53 * N as i64 - $loss)
        && left.is_canonical() && is_close(left.limbs(), &(b $op a), 53 * N as i64 - $loss)
    }

    /// Aux function: same as [`is_close_to_exact`], or `None` if the exact result is so close to
    /// overflow or underflow that the type cannot hold it to full precision.
    fn is_close_in_range<const N: usize>(a: Cascade<N>, b: Cascade<N>) -> Option<bool> {
      let exact_result = exact(a.limbs()) $op exact(b.limbs());
      let magnitude = exact_result.clone().abs();
      if magnitude < Rational::power_of_2(-800i64) || magnitude >= Rational::power_of_2(1020i64) {
        return None
      }
      let result = a $op b;
      Some(result.is_canonical() && is_close(result.limbs(), &exact_result, 53 * N as i64 - $loss))
    }

    macro_rules! test_proptest {
      ($name:ident, $name_f64:ident, $cascade:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

          #[test]
          fn $name(
            a in <$cascade>::cases_proptest(),
            b in <$cascade>::cases_proptest(),
          ) {
            prop_assert!(is_close_to_exact(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
          }

          #[test]
          fn $name_f64(
            a in <$cascade>::cases_proptest(),
            b in float_in(-100 ..= 100),
          ) {
            prop_assert!(is_close_to_exact_f64(a, b), "{:?} ⋅ {:e}", a, b)
          }
        }
      };
    }

    macro_rules! test_full_range {
      ($name:ident, $cascade:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

          #[test]
          fn $name(
            a in <$cascade>::cases_full_range(),
            b in <$cascade>::cases_full_range(),
          ) {
            if let Some(close) = is_close_in_range(a, b) {
              prop_assert!(close, "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
            }
          }
        }
      };
    }

    test_proptest!{dd_proptest, dd_f64_proptest, crate::dd}
    test_proptest!{td_proptest, td_f64_proptest, crate::td}
    test_proptest!{qd_proptest, qd_f64_proptest, crate::qd}
    test_proptest!{cascade_6_proptest, cascade_6_f64_proptest, Cascade::<6>}
    test_full_range!{dd_full_range, crate::dd}
    test_full_range!{qd_full_range, crate::qd}
  }
}

pub(crate) use mk_tests;
