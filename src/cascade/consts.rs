use super::*;

/// 2<sup>-53</sup>
const TWO_M53: f64 = 1. / 9007199254740992.;

/// 2<sup>-54</sup>
const TWO_M54: f64 = TWO_M53 / 2.;

/// Limbs of π, e, and ln(2) to 4 limbs (212 bits).
const PI_LIMBS: [f64; 4] = [
  3.141592653589793116e+00,
  1.224646799147353207e-16,
  -2.994769809718339666e-33,
  1.112454220863365282e-49,
];
const E_LIMBS: [f64; 4] = [
  2.718281828459045091e+00,
  1.445646891729250158e-16,
  -2.127717108038176765e-33,
  1.515630159841218954e-49,
];
const LN_2_LIMBS: [f64; 4] = [
  6.931471805599452862e-01,
  2.319046813846299558e-17,
  5.707708438416212066e-34,
  -3.582432210601811423e-50,
];

/// The first `N` limbs of `limbs`, padded with zeros.
const fn truncate<const N: usize>(limbs: [f64; 4]) -> [f64; N] {
  let mut out = [0.; N];
  let mut i = 0;
  while i < N && i < limbs.len() {
    out[i] = limbs[i];
    i += 1;
  }
  out
}

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self::from_head(0.);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self::from_head(1.);

  /// Negative one (`-1`).
  pub const MINUS_ONE: Self = Self::from_head(-1.);

  /// Not-a-number.
  pub const NAN: Self = Self::from_head(f64::NAN);

  /// Positive infinity (`+∞`).
  pub const INFINITY: Self = Self::from_head(f64::INFINITY);

  /// Negative infinity (`-∞`).
  pub const NEG_INFINITY: Self = Self::from_head(f64::NEG_INFINITY);

  /// Largest finite value, equal to `-MIN`.
  //
  // Every limb is `f64::MAX` scaled down by 2^-54, so that the head is exactly `f64::MAX` and no
  // pair of limbs is a rounding tie.
  pub const MAX: Self = {
    let mut limbs = [0.; N];
    let mut x = f64::MAX;
    let mut i = 0;
    while i < N {
      limbs[i] = x;
      x *= TWO_M54;
      i += 1;
    }
    Self(limbs, PhantomData)
  };

  /// Smallest finite value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  pub const MIN: Self = {
    let mut limbs = Self::MAX.0;
    let mut i = 0;
    while i < N {
      limbs[i] = -limbs[i];
      i += 1;
    }
    Self(limbs, PhantomData)
  };

  /// Smallest positive value whose tail limbs are all still normal `f64`s, i.e. the smallest
  /// value with the full `N × 53` bits of precision.
  pub const MIN_POSITIVE: Self = {
    let mut x = f64::MIN_POSITIVE;
    let mut i = 1;
    while i < N {
      x /= TWO_M53;
      i += 1;
    }
    Self::from_head(x)
  };

  /// Machine epsilon: the difference between 1 and the next larger value with `N × 53` bits of
  /// precision, 2<sup>1-53N</sup>.
  pub const EPSILON: Self = {
    let mut x = 2.;
    let mut i = 0;
    while i < N {
      x *= TWO_M53;
      i += 1;
    }
    Self::from_head(x)
  };

  /// Archimedes' constant (π).
  pub const PI: Self = Self(truncate(PI_LIMBS), PhantomData);

  /// Euler's number (e).
  pub const E: Self = Self(truncate(E_LIMBS), PhantomData);

  /// ln(2)
  pub const LN_2: Self = Self(truncate(LN_2_LIMBS), PhantomData);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, td, qd};

  #[test]
  fn max() {
    assert_eq!(dd::MAX.0, [f64::MAX, f64::MAX * f64::powi(2., -54)]);
    assert!(dd::MAX.is_canonical());
    assert_eq!(qd::MAX.0[0], f64::MAX);
    assert!(qd::MAX.is_canonical());
    assert!(td::MAX.is_canonical());
    assert_eq!(dd::MIN.0, [-dd::MAX.0[0], -dd::MAX.0[1]]);
  }

  #[test]
  fn min_positive() {
    assert_eq!(Cascade::<1>::MIN_POSITIVE.0, [f64::MIN_POSITIVE]);
    assert_eq!(dd::MIN_POSITIVE.0, [2.0041683600089728e-292, 0.]);
    assert_eq!(qd::MIN_POSITIVE.0[0], f64::powi(2., -1022 + 3 * 53));
  }

  #[test]
  fn epsilon() {
    assert_eq!(Cascade::<1>::EPSILON.0, [f64::EPSILON]);
    assert_eq!(dd::EPSILON.0, [f64::powi(2., -105), 0.]);
    assert_eq!(qd::EPSILON.0[0], f64::powi(2., -211));
    // 1 + ε is the next value after 1
    let next = dd::ONE + dd::EPSILON;
    assert_eq!(next.0, [1., f64::powi(2., -105)]);
  }

  #[test]
  fn constants_canonical() {
    for x in [qd::PI, qd::E, qd::LN_2] {
      assert!(x.is_canonical(), "{:?}", x);
    }
    assert_eq!(dd::PI.0, [core::f64::consts::PI, 1.224646799147353207e-16]);
    assert_eq!(td::E.0[0], core::f64::consts::E);
    assert_eq!(Cascade::<6>::LN_2.0[4 ..], [0., 0.]);
  }

  #[test]
  fn specials() {
    assert_eq!(dd::ZERO.0, [0., 0.]);
    assert_eq!(qd::ONE.0, [1., 0., 0., 0.]);
    assert!(dd::NAN.0[0].is_nan() && dd::NAN.0[1] == 0.);
    assert_eq!(dd::NEG_INFINITY.0, [f64::NEG_INFINITY, 0.]);
  }
}
