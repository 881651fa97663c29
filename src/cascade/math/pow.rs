use super::*;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// Returns `self` raised to the integer power `n`, by repeated squaring. Negative powers are
  /// the reciprocal of the positive power; `x.pown(0)` is `1` for every `x`, including NaN.
  ///
  /// Each multiplication rounds, so the result may be off by a few units in the last limb for
  /// large `n`.
  ///
  /// ```
  /// # use float_expansion::*;
  /// assert_eq!(qd::from(3.).pown(5), qd::from(243.));
  /// assert_eq!(dd::from(2.).pown(-2), dd::from(0.25));
  /// ```
  pub fn pown(self, n: i32) -> Self {
    let mut k = n.unsigned_abs();
    let mut base = self;
    let mut result = Self::ONE;
    while k > 0 {
      if k & 1 == 1 {
        result = result.mul(base);
      }
      k >>= 1;
      if k > 0 {
        base = base.mul(base);
      }
    }
    if n < 0 {result.recip()} else {result}
  }

  /// Returns `self × 2^k`. This is exact, unless the result overflows or its limbs fall into the
  /// subnormal range.
  ///
  /// ```
  /// # use float_expansion::*;
  /// let x = dd::ONE + 1e-20;
  /// assert_eq!(x.ldexp(-3).limbs(), &[0.125, 1e-20 / 8.]);
  /// ```
  pub fn ldexp(self, k: i32) -> Self {
    let scaled = self.0.map(|x| libm::ldexp(x, k));
    let result = Self::from_expansion(&scaled);
    let error = ArithmeticError::screen(&[self.0[0]], result.0[0]);
    P::resolve(result, error)
  }

  /// Split `self` into a mantissa `m`, whose head lies in `[0.5, 1)` in absolute value, and an
  /// exponent `k`, such that `self = m × 2^k`. Zeros, infinities, and NaN are returned as they
  /// are, with exponent 0.
  ///
  /// The scaling is exact, unless tail limbs fall into the subnormal range.
  ///
  /// ```
  /// # use float_expansion::*;
  /// let (m, k) = qd::PI.frexp();
  /// assert_eq!(k, 2);
  /// assert_eq!(m, qd::PI.ldexp(-2));
  /// ```
  pub fn frexp(self) -> (Self, i32) {
    let head = self.0[0];
    if head == 0. || !head.is_finite() {
      return (self, 0)
    }
    let (_, k) = libm::frexp(head);
    (Self::from_expansion(&self.0.map(|x| libm::ldexp(x, -k))), k)
  }
}
