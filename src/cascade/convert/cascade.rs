use super::*;

// Cannot impl `RoundFrom<Cascade<M, P>> for Cascade<N, P>`, because it conflicts with the blanket
// impl when `M == N`. Has to be a function.

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// Convert a cascade into one with a different number of limbs. Widening is exact; narrowing
  /// rounds to nearest, with ties to even.
  ///
  /// This enables easy and seamless mixed-precision arithmetic.
  ///
  /// # Examples
  ///
  /// ```
  /// # use float_expansion::{dd, qd};
  /// let third = qd::ONE / 3.;
  /// let short: dd = third.convert();
  /// assert_eq!(short, dd::ONE / 3.);
  /// assert_eq!(short.convert::<4>().limbs()[.. 2], short.limbs()[..]);
  /// ```
  pub fn convert<const M: usize>(self) -> Cascade<M, P> {
    Cascade::from_expansion(&self.0)
  }

  /// The same value, with a different [`Policy`] for exceptional conditions.
  ///
  /// ```
  /// # use float_expansion::{dd, Cascade, Trap};
  /// let x: Cascade<2, Trap> = dd::PI.with_policy();
  /// assert_eq!(x.limbs(), dd::PI.limbs());
  /// ```
  #[inline]
  pub fn with_policy<Q: Policy>(self) -> Cascade<N, Q> {
    Cascade(self.0, PhantomData)
  }
}
