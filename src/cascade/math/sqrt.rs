use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  #[inline]
  pub(crate) fn sqrt_kernel(self) -> (Self, Option<ArithmeticError>) {
    let root = expansion_sqrt(&self.0, N);
    let result = Self::from_expansion(&root);
    (result, ArithmeticError::screen(&[self.0[0]], result.0[0]))
  }

  /// Returns the square root of `self`, by Newton's iteration on the exact residual. The square
  /// root of a negative number is NaN (and raises [`ArithmeticError::InvalidOperation`]).
  ///
  /// # Example
  ///
  /// ```
  /// # use float_expansion::*;
  /// assert_eq!(qd::from(4.).sqrt(), qd::from(2.));
  /// assert_eq!(dd::from(2.).sqrt().high(), core::f64::consts::SQRT_2);
  /// assert!(dd::MINUS_ONE.sqrt().is_nan());
  /// ```
  pub fn sqrt(self) -> Self {
    let (result, error) = self.sqrt_kernel();
    P::resolve(result, error)
  }

  /// Returns the square root of `self`, reporting the square root of a negative number as
  /// [`ArithmeticError::InvalidOperation`] regardless of the [`Policy`] of the type.
  pub fn try_sqrt(self) -> Result<Self, ArithmeticError> {
    match self.sqrt_kernel() {
      (_, Some(error)) => Err(error),
      (result, None) => Ok(result),
    }
  }
}
