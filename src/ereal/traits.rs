use super::*;
use core::cmp::Ordering;

// By value, as for cascades: NaN is unordered and not equal to itself.

impl<const MAXLIMBS: usize>
PartialEq for Ereal<MAXLIMBS> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.partial_cmp(other) == Some(Ordering::Equal)
  }
}

impl<const MAXLIMBS: usize>
PartialOrd for Ereal<MAXLIMBS> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    compare_adaptive(&self.0, &other.0)
  }
}

impl<const MAXLIMBS: usize>
PartialEq<f64> for Ereal<MAXLIMBS> {
  #[inline]
  fn eq(&self, other: &f64) -> bool {
    self.partial_cmp(other) == Some(Ordering::Equal)
  }
}

impl<const MAXLIMBS: usize>
PartialOrd<f64> for Ereal<MAXLIMBS> {
  #[inline]
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    compare_adaptive(&self.0, &[*other])
  }
}

impl<const MAXLIMBS: usize>
PartialEq<Ereal<MAXLIMBS>> for f64 {
  #[inline]
  fn eq(&self, other: &Ereal<MAXLIMBS>) -> bool {
    other == self
  }
}

impl<const MAXLIMBS: usize>
PartialOrd<Ereal<MAXLIMBS>> for f64 {
  #[inline]
  fn partial_cmp(&self, other: &Ereal<MAXLIMBS>) -> Option<Ordering> {
    compare_adaptive(&[*self], &other.0)
  }
}
