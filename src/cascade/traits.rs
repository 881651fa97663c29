use super::*;
use core::cmp::Ordering;

// The `P` parameter is a marker type, and derives would require `P: Clone`, `P: PartialEq`, etc.
// even though no value of type `P` is ever stored. Because of that we just implement explicitly
// here.

impl<const N: usize, P: Policy>
Clone for Cascade<N, P> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const N: usize, P: Policy>
Copy for Cascade<N, P> {}

impl<const N: usize, P: Policy>
Default for Cascade<N, P> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

// Comparisons are by value, not by limbs: two different (possibly non-canonical) lists of limbs
// with the same sum are equal. As for `f64`, NaN is unordered and not equal to itself.

impl<const N: usize, P: Policy>
PartialEq for Cascade<N, P> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.partial_cmp(other) == Some(Ordering::Equal)
  }
}

impl<const N: usize, P: Policy>
PartialOrd for Cascade<N, P> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    compare_adaptive(&self.0, &other.0)
  }
}

impl<const N: usize, P: Policy>
PartialEq<f64> for Cascade<N, P> {
  #[inline]
  fn eq(&self, other: &f64) -> bool {
    self.partial_cmp(other) == Some(Ordering::Equal)
  }
}

impl<const N: usize, P: Policy>
PartialOrd<f64> for Cascade<N, P> {
  #[inline]
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    compare_adaptive(&self.0, &[*other])
  }
}

impl<const N: usize, P: Policy>
PartialEq<Cascade<N, P>> for f64 {
  #[inline]
  fn eq(&self, other: &Cascade<N, P>) -> bool {
    other == self
  }
}

impl<const N: usize, P: Policy>
PartialOrd<Cascade<N, P>> for f64 {
  #[inline]
  fn partial_cmp(&self, other: &Cascade<N, P>) -> Option<Ordering> {
    compare_adaptive(&[*self], &other.0)
  }
}
