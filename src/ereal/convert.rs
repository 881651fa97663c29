use super::*;
use crate::{Cascade, Policy, RoundFrom};

impl<const MAXLIMBS: usize>
From<f64> for Ereal<MAXLIMBS> {
  /// Exact. Non-finite values are preserved.
  #[inline]
  fn from(value: f64) -> Self {
    Self(vec![value])
  }
}

impl<const MAXLIMBS: usize>
From<f32> for Ereal<MAXLIMBS> {
  /// Exact.
  #[inline]
  fn from(value: f32) -> Self {
    Self(vec![f64::from(value)])
  }
}

macro_rules! make_impl_exact {
  ($int:ty) => {
    impl<const MAXLIMBS: usize>
    From<$int> for Ereal<MAXLIMBS> {
      /// Exact, in a single limb.
      #[inline]
      fn from(value: $int) -> Self {
        Self(vec![f64::from(value)])
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

/// 2<sup>32</sup>
const TWO_32: f64 = 4294967296.;

/// The value is split into 32-bit chunks, each exact in an `f64`: the most significant one carries
/// the sign, the rest are unsigned.
macro_rules! make_impl_chunked {
  ($int:ty, $chunks:expr, $top:ty) => {
    impl<const MAXLIMBS: usize>
    From<$int> for Ereal<MAXLIMBS> {
      #[doc = concat!("Exact, with up to ", stringify!($chunks), " limbs; rounded if `MAXLIMBS` is smaller than that.")]
      fn from(value: $int) -> Self {
        let mut chunks = vec![0.; $chunks];
        let mut scale = 1.;
        for (i, chunk) in chunks.iter_mut().rev().enumerate() {
          let shifted = value >> (32 * i);
          *chunk = if i == $chunks - 1 {
            (shifted as $top as f64) * scale
          } else {
            (shifted as u32 as f64) * scale
          };
          scale *= TWO_32;
        }
        Self::from_limbs(chunks)
      }
    }
  }
}

make_impl_chunked!{i64, 2, i32}
make_impl_chunked!{u64, 2, u32}
make_impl_chunked!{i128, 4, i32}
make_impl_chunked!{u128, 4, u32}

impl<const N: usize, P: Policy, const MAXLIMBS: usize>
From<Cascade<N, P>> for Ereal<MAXLIMBS> {
  /// Exact, unless the cascade has more significant limbs than `MAXLIMBS`.
  fn from(value: Cascade<N, P>) -> Self {
    Self::from_expansion(value.expansion().to_vec())
  }
}

impl<const MAXLIMBS: usize>
RoundFrom<&Ereal<MAXLIMBS>> for f64 {
  /// Sum the limbs, from least to most significant (see [`estimate`]).
  #[inline]
  fn round_from(value: &Ereal<MAXLIMBS>) -> Self {
    estimate(&value.0)
  }
}

impl<const N: usize, P: Policy, const MAXLIMBS: usize>
RoundFrom<&Ereal<MAXLIMBS>> for Cascade<N, P> {
  /// Round to `N` limbs, as in [`compress`].
  ///
  /// ```
  /// # use float_expansion::{dd, Ereal, RoundFrom};
  /// let third = Ereal::<16>::from(1.) / 3.;
  /// assert_eq!(third.len(), 3);
  /// assert_eq!(dd::round_from(&third), dd::ONE / 3.);
  /// ```
  #[inline]
  fn round_from(value: &Ereal<MAXLIMBS>) -> Self {
    Self::from_expansion(&value.0)
  }
}
