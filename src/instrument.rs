//! Counting of arithmetic operations, for experiments that compare the cost of algorithms.
//!
//! Counters live in an explicit [`OpCounts`] context rather than in global state: values are
//! wrapped in an [`Instrumented`] that borrows the context, and each operator on them bumps the
//! matching counter. A context is deliberately not [`Sync`]; use one per thread or per experiment.
//!
//! ```
//! # use float_expansion::{dd, instrument::OpCounts};
//! let counts = OpCounts::new();
//! let x = counts.wrap(dd::from(2.));
//! let y = counts.wrap(dd::from(3.));
//! let z = (x + y) * y / x;
//! assert!(z > x);
//! let stats = counts.snapshot();
//! assert_eq!((stats.add, stats.mul, stats.div, stats.cmp), (1, 1, 1, 1));
//! assert_eq!(stats.total(), 4);
//! ```

use core::cell::Cell;
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Cascade, Ereal, Policy};

/// A set of operation counters. See the [module documentation](self).
#[derive(Debug, Default)]
pub struct OpCounts {
  add: Cell<u64>,
  sub: Cell<u64>,
  mul: Cell<u64>,
  div: Cell<u64>,
  sqrt: Cell<u64>,
  cmp: Cell<u64>,
}

/// The values of the counters of an [`OpCounts`] at some point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OpStats {
  pub add: u64,
  pub sub: u64,
  pub mul: u64,
  pub div: u64,
  pub sqrt: u64,
  pub cmp: u64,
}

impl OpStats {
  /// The total number of operations.
  pub fn total(&self) -> u64 {
    self.add + self.sub + self.mul + self.div + self.sqrt + self.cmp
  }
}

#[inline]
fn bump(counter: &Cell<u64>) {
  counter.set(counter.get() + 1)
}

impl OpCounts {
  /// A context with all counters at zero.
  pub const fn new() -> Self {
    Self {
      add: Cell::new(0),
      sub: Cell::new(0),
      mul: Cell::new(0),
      div: Cell::new(0),
      sqrt: Cell::new(0),
      cmp: Cell::new(0),
    }
  }

  /// The current values of the counters.
  pub fn snapshot(&self) -> OpStats {
    OpStats {
      add: self.add.get(),
      sub: self.sub.get(),
      mul: self.mul.get(),
      div: self.div.get(),
      sqrt: self.sqrt.get(),
      cmp: self.cmp.get(),
    }
  }

  /// Set all counters back to zero.
  pub fn reset(&self) {
    for counter in [&self.add, &self.sub, &self.mul, &self.div, &self.sqrt, &self.cmp] {
      counter.set(0)
    }
  }

  /// Wrap `value`, so that operations on it are counted in `self`.
  #[inline]
  pub fn wrap<T>(&self, value: T) -> Instrumented<'_, T> {
    Instrumented::new(value, self)
  }
}

/// A value whose arithmetic operations and comparisons are counted in an [`OpCounts`].
///
/// Binary operators count in the context of the left operand.
#[derive(Debug, Clone, Copy)]
pub struct Instrumented<'c, T> {
  value: T,
  counts: &'c OpCounts,
}

impl<'c, T> Instrumented<'c, T> {
  /// Wrap `value`, so that operations on it are counted in `counts`.
  #[inline]
  pub fn new(value: T, counts: &'c OpCounts) -> Self {
    Self { value, counts }
  }

  /// The wrapped value.
  #[inline]
  pub fn value(&self) -> &T {
    &self.value
  }

  /// Unwrap the value.
  #[inline]
  pub fn into_inner(self) -> T {
    self.value
  }

  /// The context the operations are counted in.
  #[inline]
  pub fn counts(&self) -> &'c OpCounts {
    self.counts
  }

  #[inline]
  fn with(&self, value: T) -> Self {
    Self { value, counts: self.counts }
  }
}

macro_rules! mk_ops {
  ($trait:ident, $name:ident) => {
    impl<'c, T: $trait<Output = T>>
    $trait for Instrumented<'c, T> {
      type Output = Instrumented<'c, T>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output {
        bump(&self.counts.$name);
        let counts = self.counts;
        Instrumented::new(self.value.$name(rhs.value), counts)
      }
    }
  }
}

mk_ops!{Add, add}
mk_ops!{Sub, sub}
mk_ops!{Mul, mul}
mk_ops!{Div, div}

impl<'c, T: Neg<Output = T>>
Neg for Instrumented<'c, T> {
  type Output = Instrumented<'c, T>;

  /// Not counted: negation is exact and free.
  #[inline]
  fn neg(self) -> Self::Output {
    let counts = self.counts;
    Instrumented::new(-self.value, counts)
  }
}

impl<'c, T: PartialEq> PartialEq for Instrumented<'c, T> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    bump(&self.counts.cmp);
    self.value == other.value
  }
}

impl<'c, T: PartialOrd> PartialOrd for Instrumented<'c, T> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    bump(&self.counts.cmp);
    self.value.partial_cmp(&other.value)
  }
}

impl<const N: usize, P: Policy> Instrumented<'_, Cascade<N, P>> {
  /// Counted [`Cascade::sqrt`].
  pub fn sqrt(&self) -> Self {
    bump(&self.counts.sqrt);
    self.with(self.value.sqrt())
  }
}

impl<const MAXLIMBS: usize> Instrumented<'_, Ereal<MAXLIMBS>> {
  /// Counted [`Ereal::sqrt`].
  pub fn sqrt(&self) -> Self {
    bump(&self.counts.sqrt);
    self.with(self.value.sqrt())
  }
}
