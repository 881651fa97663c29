//! This module and its submodules implement numbers made of a fixed number of `f64` limbs: the
//! classic double-double (2 limbs, about 106 bits of significand), triple-double (3 limbs, 159
//! bits), and quad-double (4 limbs, 212 bits), and in general any `N`.
//!
//! A number is stored as an `[f64; N]` holding a canonical [expansion](crate::expansion), padded
//! with trailing zero limbs if it needs fewer than `N`. Every operation works on the limbs as an
//! expansion (exactly, through the functions in [`crate::expansion`]), and then rounds the result
//! back to `N` limbs with [`compress`](crate::expansion::compress).
//!
//! Some notation used in the comments:
//!
//!   - **Head**: limb `0`, the most significant one, which alone holds the sign, zero, infinities
//!     and NaN.
//!   - **Tail**: limbs `1 .. N`.

use core::marker::PhantomData;

use crate::{ArithmeticError, Policy, Propagate};
use crate::expansion::*;

/// A floating point number made of `N` `f64` limbs, whose exact sum is the value of the number.
/// `P` is the [`Policy`] for exceptional conditions (by default, [`Propagate`] NaN and ∞ like
/// IEEE floats do).
///
/// Examples:
///
/// ```
/// # use float_expansion::{Cascade, Trap};
/// type Foo = Cascade<2>;  // A double-double
/// type Bar = Cascade<6, Trap>;  // A 6-limb number, which panics on division by zero, overflow,
///                               // and invalid operations
/// ```
///
/// The standard types [`dd`](crate::dd), [`td`](crate::td), and [`qd`](crate::qd) are aliases
/// for `N` = 2, 3, and 4.
pub struct Cascade<
  const N: usize,
  P: Policy = Propagate,
> (pub(crate) [f64; N], PhantomData<P>);

/// Basics
mod basics;

/// Constants (zero, one, max, min_positive, pi, etc)
mod consts;

/// Manual implementations of `Clone`, `Copy`, `Default`, and comparisons.
mod traits;

/// Negation and absolute value.
mod unary;

/// Arithmetic operators.
mod ops;

/// Square root, powers, rounding to integers.
mod math;

/// Conversions to and from ints, floats, and cascades of other sizes.
pub(crate) mod convert;

/// Formatting and parsing of decimal text.
mod fmt;

/// Test utilities.
#[cfg(test)]
pub(crate) mod test;
