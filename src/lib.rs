#![cfg_attr(not(test), no_std)]
//! This crate provides multi-component floating point arithmetic: numbers represented as the
//! unevaluated sum of several `f64`s (*limbs*), which together carry two, three, four, or any
//! number of times the precision of a single `f64`, at a fraction of the cost of a big-float
//! library.
//!
//! # Introduction
//!
//! Everything rests on *error-free transformations*: the rounding error of an `f64` addition or
//! multiplication is itself an `f64`, and can be computed exactly with a handful of further
//! operations (see [`eft`]). Chaining these, sums and products of multi-limb numbers can be
//! computed exactly, as *expansions* (see [`expansion`]), and then rounded to the desired number
//! of limbs.
//!
//! The following references are useful if you are not yet familiar with these techniques:
//!
//!   - J. R. Shewchuk, [Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//!     Predicates](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf) (1997)
//!   - Y. Hida, X. S. Li, D. H. Bailey, [Library for Double-Double and Quad-Double
//!     Arithmetic](https://www.davidhbailey.com/dhbpapers/qd.pdf) (2000)
//!
//! This crate provides:
//!
//!   - [`Cascade<N>`](Cascade), a number of exactly `N` limbs, which is `Copy` and lives on the
//!     stack; [`dd`], [`td`], and [`qd`] are the usual double-, triple-, and quad-double.
//!   - [`Ereal`], a number of as many limbs as it needs (up to a cap), whose sums and products
//!     are exact.
//!   - [`Accumulator`], an exact accumulator for sums and dot products, and a few summation
//!     algorithms to compare it against (see [`accumulate`]).
//!   - [`instrument`], for counting the operations an algorithm performs.
//!
//! Correctness is ensured via extensive testing against an exact rational oracle.
//!
//! # Usage
//!
//! ```
//! // Use the standard types, or define your own.
//! # use float_expansion::Cascade;
//! use float_expansion::{dd, td, qd, Ereal};
//! type MyCascade = Cascade<6>;  // 6 limbs, about 318 bits
//!
//! // Create numbers from floats, ints, strings, constants, or raw limbs.
//! # use float_expansion::{RoundFrom, RoundInto};
//! let a = dd::from(0.1);
//! let b = td::round_from(u64::MAX);
//! let c: qd = "3.14159265358979323846264338327950288".parse().unwrap();
//! let d = dd::from_limbs([1., 1e-20]);
//!
//! // Perform arithmetic and comparisons with the usual operators.
//! assert!(d - 1. == 1e-20);
//! assert!(qd::ONE / 3. * 3. != 1.);
//! assert!((c - qd::PI).abs() < 1e-35);
//!
//! // Convert back to floats or strings.
//! let x: f64 = (a * 10.).round_into();
//! assert_eq!(x, 1.);
//! assert_eq!(format!("{:.3}", MyCascade::E), "2.718e0");
//!
//! // Or never round at all.
//! let e = Ereal::<64>::from(1e300) + 1. - 1e300;
//! assert_eq!(e, 1.);
//! ```
//!
//! # Exceptional values
//!
//! As for IEEE floats, NaN and ±∞ are values that propagate through arithmetic. Alternatively, a
//! [`Policy`] type parameter makes a `Cascade` type [`Trap`] (panic) on division by zero, invalid
//! operations, and overflow instead, and `try_*` methods report them as an [`ArithmeticError`].
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

extern crate alloc;

pub mod eft;
pub mod expansion;
mod error;
mod policy;
mod cascade;
mod ereal;
pub mod accumulate;
pub mod instrument;

pub use error::{ArithmeticError, InvariantViolation, ParseError};
pub use policy::{Policy, Propagate, Trap};
pub use cascade::Cascade;
pub use cascade::convert::{RoundFrom, RoundInto};
pub use ereal::Ereal;
pub use accumulate::Accumulator;
pub use instrument::{OpCounts, OpStats, Instrumented};

/// Double-double: 2 limbs, about 106 bits of significand.
#[allow(non_camel_case_types)]
pub type dd = Cascade<2>;

/// Triple-double: 3 limbs, about 159 bits of significand.
#[allow(non_camel_case_types)]
pub type td = Cascade<3>;

/// Quad-double: 4 limbs, about 212 bits of significand.
#[allow(non_camel_case_types)]
pub type qd = Cascade<4>;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x200} else {0x4000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
