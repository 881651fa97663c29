use super::*;

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundInto`].
///
/// It has the same shape as [`From`], but these conversions may lose precision, so by the
/// [`From` conventions](core::convert::From#when-to-implement-from) they do not belong there.
/// Conversions that are always exact (such as from an `f64` or an `i32` into a [`Cascade`])
/// implement [`From`] instead.
///
/// Implement [`RoundFrom`] and get [`RoundInto`] for free; bound generic functions on
/// [`RoundInto`]. `RoundFrom<T> for T` is implemented for every `T`.
///
/// # Rounding
///
///   - Into a [`Cascade`] (from wide ints, or from an [`Ereal`](crate::Ereal)): to nearest, with
///     ties to even, in the last limb (see [`compress`](crate::expansion::compress)).
///   - Into an `f64` or `f32`: by summing the limbs in floating point, from the least significant
///     one (see [`estimate`](crate::expansion::estimate)). This is fast, but not always correctly
///     rounded.
///
/// # Examples
///
/// ```
/// # use float_expansion::*;
/// assert_eq!(dd::round_from(u64::MAX).limbs(), &[18446744073709551616., -1.]);
/// assert_eq!(f64::round_from(dd::ONE + 1e-20), 1.);
/// assert!(f64::round_from(qd::NAN).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary.
  ///
  /// This is the _rounding_ conversion (see [Rounding](RoundFrom#rounding)); if you're looking
  /// for the usual Rust-y conversions ([`From`] if exact, [`TryFrom`] if fallible), use those
  /// traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], which see.
///
/// # Examples
///
/// ```
/// # use float_expansion::*;
/// let x: td = i128::MAX.round_into();
/// assert_eq!(x, td::from(2.).pown(127) - 1.);
/// let y: f32 = (qd::PI).round_into();
/// assert_eq!(y, core::f32::consts::PI);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary.
  ///
  /// This is the _rounding_ conversion (see [Rounding](RoundFrom#rounding)); if you're looking
  /// for the usual Rust-y conversions ([`Into`] if exact, [`TryInto`] if fallible), use those
  /// traits instead.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
mod cascade;
