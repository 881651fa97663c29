use super::*;
use crate::expansion::test::expansion;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// A [proptest Strategy](proptest::strategy::Strategy) that yields finite, nonzero cascades of
  /// between 1 and `N` significant limbs, with the head between 2<sup>-100</sup> and
  /// 2<sup>101</sup> in magnitude.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    expansion(1 ..= N, -100 ..= 100).prop_map(|e| {
      let mut limbs = [0.; N];
      limbs[.. e.len()].copy_from_slice(&e);
      Self::from_limbs_unchecked(limbs)
    })
  }

  /// Same as [`Self::cases_proptest`], with the head anywhere between 2<sup>-800</sup> and
  /// `f64::MAX` in magnitude.
  pub(crate) fn cases_full_range() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    expansion(1 ..= N, -800 ..= 1023).prop_map(|e| {
      let mut limbs = [0.; N];
      limbs[.. e.len()].copy_from_slice(&e);
      Self::from_limbs_unchecked(limbs)
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::{dd, qd};
  use proptest::prelude::*;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn dd_canonical(x in dd::cases_proptest()) {
      prop_assert!(x.is_canonical() && x.is_finite() && !x.is_zero())
    }

    #[test]
    fn full_range_canonical(x in qd::cases_full_range()) {
      prop_assert!(x.is_canonical() && x.is_finite() && !x.is_zero())
    }

    #[test]
    fn qd_canonical(x in qd::cases_proptest()) {
      prop_assert!(x.is_canonical() && x.is_finite() && !x.is_zero())
    }
  }
}
