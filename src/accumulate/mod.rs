//! Exact accumulation of sums and dot products, and a few classic summation algorithms to compare
//! it against.
//!
//! The [`Accumulator`] plays the role of a *quire*: it holds the exact sum of everything added to
//! it, with no intermediate rounding, and rounds once, when the result is read out.

use alloc::vec::Vec;
use core::ops::{AddAssign, SubAssign};

use crate::{Cascade, Ereal, Policy};
use crate::eft::two_prod;
use crate::expansion::{any_nonfinite, compress, renormalize};

/// Summation algorithms over slices of `f64`s.
mod sum;
pub use sum::*;

/// Number of raw terms buffered before they are folded into the running expansion.
const BATCH: usize = 64;

/// An exact accumulator for sums and dot products.
///
/// # Examples
///
/// ```
/// # use float_expansion::{Accumulator, dd};
/// let mut acc = Accumulator::new();
/// acc += 1e16;
/// acc += 1.;
/// acc -= 1e16;
/// assert_eq!(acc.value(), &[1.]);
///
/// acc.add_product(0.1, 0.1);
/// assert_eq!(acc.round::<2>(), dd::from(0.1) * 0.1 + 1.);
/// ```
//
// Terms are appended to `pending` as they come, and every `BATCH` terms everything is renormalized
// into `terms`, which is then a canonical expansion. So an addition costs amortized
// O(len(terms) / BATCH) on top of a push.
//
// While the exact sum of finite terms lies beyond the range of `f64`, `overflow` holds its sign as
// ±∞ and `terms` are kept as they are, so that later terms can still bring the sum back.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
  terms: Vec<f64>,
  pending: Vec<f64>,
  overflow: Option<f64>,
}

impl Accumulator {
  /// An empty accumulator, whose value is 0.
  pub const fn new() -> Self {
    Self { terms: Vec::new(), pending: Vec::new(), overflow: None }
  }

  /// Reset the value to 0, keeping the allocated storage.
  pub fn clear(&mut self) {
    self.terms.clear();
    self.pending.clear();
    self.overflow = None;
  }

  #[inline]
  fn push(&mut self, x: f64) {
    if x != 0. {
      self.pending.push(x);
      if self.pending.len() >= BATCH {
        self.flush()
      }
    }
  }

  /// Fold the pending terms into the canonical expansion.
  fn flush(&mut self) {
    if !self.pending.is_empty() {
      self.terms.append(&mut self.pending);
      let sum = renormalize(&self.terms);
      self.overflow = None;
      if sum[0].is_infinite() && !any_nonfinite(&self.terms) {
        self.overflow = Some(sum[0]);
      } else if sum == [0.] {
        self.terms.clear()
      } else {
        self.terms = sum
      }
    }
  }

  /// Add `x`, exactly.
  #[inline]
  pub fn add(&mut self, x: f64) {
    self.push(x)
  }

  /// Subtract `x`, exactly.
  #[inline]
  pub fn sub(&mut self, x: f64) {
    self.push(-x)
  }

  /// Add the product `a × b`, exactly (as long as it does not underflow, i.e. its error term is
  /// representable).
  #[inline]
  pub fn add_product(&mut self, a: f64, b: f64) {
    let (p, e) = two_prod(a, b);
    self.push(p);
    self.push(e);
  }

  /// Add every limb of the expansion `e`, exactly.
  pub fn add_expansion(&mut self, e: &[f64]) {
    for &x in e {
      self.push(x)
    }
  }

  /// The exact value accumulated so far, as a canonical expansion.
  pub fn value(&mut self) -> &[f64] {
    self.flush();
    if let Some(overflow) = &self.overflow {
      core::slice::from_ref(overflow)
    } else if self.terms.is_empty() {
      &[0.]
    } else {
      &self.terms
    }
  }

  /// The value accumulated so far, rounded to `N` limbs.
  pub fn round<const N: usize>(&mut self) -> Cascade<N> {
    Cascade::from_limbs_unchecked(compress::<N>(self.value()))
  }

  /// The value accumulated so far, rounded to `M` limbs if it needs more.
  pub fn to_ereal<const M: usize>(&mut self) -> Ereal<M> {
    Ereal::from_expansion(self.value().to_vec())
  }
}

impl AddAssign<f64> for Accumulator {
  #[inline]
  fn add_assign(&mut self, rhs: f64) {
    self.add(rhs)
  }
}

impl SubAssign<f64> for Accumulator {
  #[inline]
  fn sub_assign(&mut self, rhs: f64) {
    self.sub(rhs)
  }
}

impl<const N: usize, P: Policy>
AddAssign<Cascade<N, P>> for Accumulator {
  #[inline]
  fn add_assign(&mut self, rhs: Cascade<N, P>) {
    self.add_expansion(rhs.limbs())
  }
}

impl<const N: usize, P: Policy>
SubAssign<Cascade<N, P>> for Accumulator {
  #[inline]
  fn sub_assign(&mut self, rhs: Cascade<N, P>) {
    self.add_expansion(&(-rhs).to_limbs())
  }
}

impl<const M: usize>
AddAssign<&Ereal<M>> for Accumulator {
  #[inline]
  fn add_assign(&mut self, rhs: &Ereal<M>) {
    self.add_expansion(rhs.limbs())
  }
}

impl<const M: usize>
SubAssign<&Ereal<M>> for Accumulator {
  #[inline]
  fn sub_assign(&mut self, rhs: &Ereal<M>) {
    self.add_expansion(&(-rhs).into_limbs())
  }
}
