use super::*;

impl<const N: usize, P: Policy>
From<f64> for Cascade<N, P> {
  /// Exact: the value becomes the head, and the tail is zero. Non-finite values are preserved.
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_head(value)
  }
}

impl<const N: usize, P: Policy>
From<f32> for Cascade<N, P> {
  /// Exact, same as for `f64`.
  #[inline]
  fn from(value: f32) -> Self {
    Self::from_head(f64::from(value))
  }
}

impl<const N: usize, P: Policy>
RoundFrom<Cascade<N, P>> for f64 {
  /// Sum the limbs, from least to most significant (see [`estimate`]).
  ///
  /// For a canonical cascade this is the head itself in all but a few cases near ties, which is
  /// within half an ulp of the exact value.
  #[inline]
  fn round_from(value: Cascade<N, P>) -> Self {
    estimate(&value.0)
  }
}

impl<const N: usize, P: Policy>
RoundFrom<Cascade<N, P>> for f32 {
  /// Sum the limbs as for `f64`, then round to `f32`.
  #[inline]
  fn round_from(value: Cascade<N, P>) -> Self {
    estimate(&value.0) as f32
  }
}
