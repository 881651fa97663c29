use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// Returns the largest integer less than or equal to `self`.
  ///
  /// Limbs are floored from the most significant one down. As long as a limb is an integer, the
  /// limbs below it decide the result; the first limb that is not an integer is the last one that
  /// matters, since all the limbs below it are too small to carry it across an integer.
  ///
  /// ```
  /// # use float_expansion::*;
  /// assert_eq!(dd::from_limbs([3., -1e-20]).floor(), dd::from(2.));
  /// assert_eq!(dd::from(-2.5).floor(), dd::from(-3.));
  /// ```
  pub fn floor(self) -> Self {
    let mut limbs = [0.; N];
    for (out, &x) in limbs.iter_mut().zip(&self.0) {
      let floored = libm::floor(x);
      *out = floored;
      if floored != x {
        break
      }
    }
    Self::from_expansion(&limbs)
  }

  /// Returns the smallest integer greater than or equal to `self`.
  #[inline]
  pub fn ceil(self) -> Self {
    -(-self).floor()
  }

  /// Returns the integer part of `self`, rounding towards zero.
  #[inline]
  pub fn trunc(self) -> Self {
    if self.0[0] < 0. {self.ceil()} else {self.floor()}
  }

  /// Returns the fractional part of `self`, `self - self.trunc()`, which is exact.
  #[inline]
  pub fn fract(self) -> Self {
    self.sub(self.trunc())
  }
}
