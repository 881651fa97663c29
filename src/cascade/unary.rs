use super::*;

impl<const N: usize, P: Policy>
core::ops::Neg for Cascade<N, P> {
  type Output = Cascade<N, P>;

  /// Exact: every limb changes sign.
  #[inline]
  fn neg(self) -> Self::Output {
    Cascade(self.0.map(|x| -x), PhantomData)
  }
}

impl<const N: usize, P: Policy>
core::ops::Neg for &Cascade<N, P> {
  type Output = Cascade<N, P>;

  /// Exact: every limb changes sign.
  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl<const N: usize, P: Policy> Cascade<N, P> {
  /// Return the absolute value of `self`, which is exact. The sign is that of the head.
  #[inline]
  pub fn abs(self) -> Self {
    if self.0[0].is_sign_negative() {-self} else {self}
  }
}
