//! Error types. None of these are ever produced by the error-free transformations or by the
//! expansion kernels themselves (those are total functions); they surface at the number-type layer,
//! when validating caller-supplied limbs, and when parsing text.

use thiserror::Error;

/// An exceptional arithmetic condition, in the IEEE 754 sense.
///
/// Whether one of these aborts the computation or is silently replaced by its IEEE sentinel value
/// (NaN or ±∞) is decided by the [`Policy`](crate::Policy) type parameter of the number type. The
/// `try_*` methods (e.g. [`Cascade::try_div`](crate::Cascade::try_div)) always report it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
  /// A finite, non-zero number divided by zero.
  #[error("division by zero")]
  DivisionByZero,

  /// An operation with no meaningful result, such as `0 / 0`, `∞ - ∞`, or the square root of a
  /// negative number.
  #[error("invalid operation")]
  InvalidOperation,

  /// Finite operands whose result is too large to represent.
  #[error("overflow: value too large to represent")]
  Overflow,
}

impl ArithmeticError {
  /// Classify the leading limb of a result, given the leading limbs of its operands.
  ///
  /// NaN operands are quiet: they propagate without raising anything. Infinities coming out of
  /// infinite operands are not exceptional either, only infinities coming out of finite ones.
  pub(crate) fn screen(operands: &[f64], result: f64) -> Option<Self> {
    if result.is_finite() || operands.iter().any(|x| x.is_nan()) {
      None
    } else if result.is_nan() {
      Some(Self::InvalidOperation)
    } else if operands.iter().all(|x| x.is_finite()) {
      Some(Self::Overflow)
    } else {
      None
    }
  }
}

/// The reason a sequence of limbs is not a valid expansion.
///
/// A valid expansion is non-empty, finite, has no zero limbs (except for the single limb `[0.0]`),
/// is sorted by decreasing magnitude, and is non-overlapping: adjacent limbs differ in magnitude by
/// a factor of at least 2<sup>53</sup>.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
  #[error("an expansion must have at least one limb")]
  Empty,

  #[error("limb {index} is not finite")]
  NonFinite { index: usize },

  #[error("limb {index} is zero")]
  SpuriousZero { index: usize },

  #[error("limb {index} is larger in magnitude than the limb before it")]
  Unordered { index: usize },

  #[error("limb {index} overlaps the limb before it")]
  Overlapping { index: usize },
}

/// The error returned when parsing a number from a string fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
  #[error("cannot parse a number from an empty string")]
  Empty,

  #[error("invalid digit at position {position}")]
  InvalidDigit { position: usize },

  #[error("invalid exponent")]
  InvalidExponent,
}
