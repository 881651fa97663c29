//! What to do with exceptional arithmetic conditions (division by zero, invalid operations,
//! overflow) is a property of the number *type*, selected by a type parameter implementing
//! [`Policy`]. Every arithmetic kernel computes the IEEE result together with an optional
//! [`ArithmeticError`]; the policy then decides which of the two the caller gets.

use crate::ArithmeticError;

/// A policy for exceptional arithmetic conditions. See the [module documentation](self).
///
/// This trait is sealed; the two policies are [`Propagate`] and [`Trap`].
pub trait Policy: sealed::Sealed {
  /// Given the IEEE result of an operation and the exceptional condition it raised (if any),
  /// return the value handed back to the caller.
  fn resolve<T>(value: T, error: Option<ArithmeticError>) -> T;
}

/// Exceptional conditions produce their IEEE sentinel value (NaN or ±∞), which then propagates
/// through subsequent arithmetic. This is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Propagate;

/// Exceptional conditions panic immediately, with the [`ArithmeticError`] as the message.
///
/// Use this to catch the first NaN or ∞ at its source rather than at the end of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trap;

impl Policy for Propagate {
  #[inline]
  fn resolve<T>(value: T, _error: Option<ArithmeticError>) -> T {
    value
  }
}

impl Policy for Trap {
  #[inline]
  #[track_caller]
  fn resolve<T>(value: T, error: Option<ArithmeticError>) -> T {
    if let Some(error) = error {
      panic!("{error}")
    }
    value
  }
}

mod sealed {
  pub trait Sealed {}
  impl Sealed for super::Propagate {}
  impl Sealed for super::Trap {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn propagate() {
    assert!(Propagate::resolve(f64::NAN, Some(ArithmeticError::InvalidOperation)).is_nan());
    assert_eq!(Propagate::resolve(1.5, None), 1.5);
  }

  #[test]
  fn trap_quiet() {
    assert_eq!(Trap::resolve(1.5, None), 1.5);
  }

  #[test]
  #[should_panic(expected = "overflow")]
  fn trap_raises() {
    Trap::resolve(f64::INFINITY, Some(ArithmeticError::Overflow));
  }
}
