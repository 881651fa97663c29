use super::*;

/// 2<sup>32</sup>
const TWO_32: f64 = 4294967296.;

macro_rules! make_impl_exact {
  ($int:ty) => {
    impl<const N: usize, P: Policy>
    From<$int> for Cascade<N, P> {
      #[doc = concat!("Exact: every `", stringify!($int), "` is also an `f64`.")]
      #[inline]
      fn from(value: $int) -> Self {
        Self::from_head(f64::from(value))
      }
    }
  }
}

make_impl_exact!{i8}
make_impl_exact!{u8}
make_impl_exact!{i16}
make_impl_exact!{u16}
make_impl_exact!{i32}
make_impl_exact!{u32}

/// Split an integer into 32-bit chunks, each of which is exactly an `f64`, and whose sum is
/// exactly the integer: the most significant chunk carries the sign, and the rest are unsigned.
macro_rules! make_impl_rounded {
  ($signed:ty, $unsigned:ty, $chunks:expr) => {
    impl<const N: usize, P: Policy>
    RoundFrom<$signed> for Cascade<N, P> {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a `Cascade`. This is exact if `N` is large enough (", stringify!($chunks), " limbs always suffice), and rounded to nearest otherwise.")]
      fn round_from(value: $signed) -> Self {
        let mut chunks = [0.; $chunks];
        let mut scale = 1.;
        for (i, chunk) in chunks.iter_mut().rev().enumerate() {
          let shifted = value >> (32 * i);
          *chunk = if i == $chunks - 1 {
            (shifted as i32 as f64) * scale
          } else {
            (shifted as u32 as f64) * scale
          };
          scale *= TWO_32;
        }
        Self::from_expansion(&chunks)
      }
    }

    impl<const N: usize, P: Policy>
    RoundFrom<$unsigned> for Cascade<N, P> {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a `Cascade`. This is exact if `N` is large enough (", stringify!($chunks), " limbs always suffice), and rounded to nearest otherwise.")]
      fn round_from(value: $unsigned) -> Self {
        let mut chunks = [0.; $chunks];
        let mut scale = 1.;
        for (i, chunk) in chunks.iter_mut().rev().enumerate() {
          *chunk = ((value >> (32 * i)) as u32 as f64) * scale;
          scale *= TWO_32;
        }
        Self::from_expansion(&chunks)
      }
    }
  }
}

make_impl_rounded!{i64, u64, 2}
make_impl_rounded!{i128, u128, 4}

/// 2<sup>100</sup>: any value at least this large saturates every integer type converted to below.
const SATURATE: f64 = 1267650600228229401496703205376.;

macro_rules! make_impl_to_int {
  ($int:ty) => {
    impl<const N: usize, P: Policy>
    RoundFrom<Cascade<N, P>> for $int {
      #[doc = concat!("Round towards zero, saturating at `", stringify!($int), "::MIN` and `", stringify!($int), "::MAX`. NaN converts to 0, same as `f64 as ", stringify!($int), "`.")]
      fn round_from(value: Cascade<N, P>) -> Self {
        let head = value.0[0];
        if head.is_nan() {
          return 0
        } else if head >= SATURATE {
          return <$int>::MAX
        } else if head <= -SATURATE {
          return <$int>::MIN
        }
        // Every limb of the integer part is itself an integer, and fits.
        let sum: i128 = value.trunc().0.iter().map(|&x| x as i128).sum();
        <$int>::try_from(sum).unwrap_or(if sum < 0 {<$int>::MIN} else {<$int>::MAX})
      }
    }
  }
}

make_impl_to_int!{i8}
make_impl_to_int!{i16}
make_impl_to_int!{i32}
make_impl_to_int!{i64}
make_impl_to_int!{isize}
make_impl_to_int!{u8}
make_impl_to_int!{u16}
make_impl_to_int!{u32}
make_impl_to_int!{u64}
make_impl_to_int!{usize}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, td, qd};
  use crate::expansion::test::exact;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn small() {
    assert_eq!(dd::from(-7i32), dd::from(-7.));
    assert_eq!(dd::from(u32::MAX).limbs(), &[4294967295., 0.]);
    assert_eq!(qd::from(i8::MIN), qd::from(-128.));
  }

  #[test]
  fn wide() {
    assert_eq!(dd::round_from(i64::MIN).limbs(), &[-9223372036854775808., 0.]);
    assert_eq!(dd::round_from(i64::MAX).limbs(), &[9223372036854775808., -1.]);
    assert_eq!(dd::round_from(-1i64).limbs(), &[-1., 0.]);
    assert_eq!(exact(qd::round_from(i128::MIN).limbs()), Rational::from(i128::MIN));
    assert_eq!(exact(qd::round_from(u128::MAX).limbs()), Rational::from(u128::MAX));
    assert_eq!(dd::round_from(0u128), dd::ZERO);
  }

  #[test]
  fn narrow_rounds() {
    // 2^64 - 1 has 64 significant bits: it does not fit in one limb.
    assert_eq!(Cascade::<1>::round_from(u64::MAX).limbs(), &[18446744073709551616.]);
    // u128::MAX = 2^128 - 1 fits in 3 limbs (2^128 and -1).
    assert_eq!(td::round_from(u128::MAX).limbs(), &[340282366920938463463374607431768211456., -1., 0.]);
  }

  #[test]
  fn to_int() {
    assert_eq!(i32::round_from(dd::from(2.75)), 2);
    assert_eq!(i32::round_from(dd::from(-2.75)), -2);
    // The tail decides, across the integer boundary.
    assert_eq!(i64::round_from(dd::from_limbs([3., -1e-20])), 2);
    assert_eq!(i64::round_from(dd::from_limbs([-3., 1e-20])), -2);
    assert_eq!(u64::round_from(dd::round_from(u64::MAX)), u64::MAX);
    assert_eq!(i64::round_from(dd::round_from(i64::MIN)), i64::MIN);
    assert_eq!(i64::round_from(dd::round_from(i64::MAX)), i64::MAX);
    assert_eq!(i64::round_from(dd::from_limbs([9223372036854775808., -0.5])), i64::MAX);
  }

  #[test]
  fn to_int_saturates() {
    assert_eq!(u8::round_from(dd::from(300.)), u8::MAX);
    assert_eq!(u32::round_from(dd::from(-1.)), 0);
    assert_eq!(i16::round_from(dd::from(-1e10)), i16::MIN);
    assert_eq!(i64::round_from(dd::from(1e300)), i64::MAX);
    assert_eq!(usize::round_from(dd::INFINITY), usize::MAX);
    assert_eq!(isize::round_from(dd::NEG_INFINITY), isize::MIN);
    assert_eq!(i32::round_from(dd::NAN), 0);
    assert_eq!(u64::round_from(dd::from(-0.5)), 0);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn int_round_trip(x in any::<i64>(), y in any::<u64>()) {
      prop_assert_eq!(i64::round_from(dd::round_from(x)), x);
      prop_assert_eq!(u64::round_from(dd::round_from(y)), y);
    }

    #[test]
    fn i64_exact(x in any::<i64>()) {
      prop_assert_eq!(exact(dd::round_from(x).limbs()), Rational::from(x));
    }

    #[test]
    fn u64_exact(x in any::<u64>()) {
      prop_assert_eq!(exact(dd::round_from(x).limbs()), Rational::from(x));
    }

    #[test]
    fn i128_exact(x in any::<i128>()) {
      prop_assert_eq!(exact(qd::round_from(x).limbs()), Rational::from(x));
    }
  }
}
