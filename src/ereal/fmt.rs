use super::*;

use core::fmt::{self, Debug, Display, LowerExp};
use core::str::FromStr;
use crate::ParseError;
use crate::expansion::decimal::{fmt_scientific, parse_decimal};

impl<const MAXLIMBS: usize>
Debug for Ereal<MAXLIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Ereal")
      .field(&self.0)
      .finish()
  }
}

/// Scientific notation, with `16` significant digits per limb unless a precision is given.
impl<const MAXLIMBS: usize>
Display for Ereal<MAXLIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_scientific(&self.0, f.precision(), 16 * self.len(), f)
  }
}

impl<const MAXLIMBS: usize>
LowerExp for Ereal<MAXLIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_scientific(&self.0, f.precision(), 16 * self.len(), f)
  }
}

/// Parse decimal text. Most decimal fractions have no finite binary expansion, so the result is
/// rounded to two limbs plus one per 16 significant digits, and at most `MAXLIMBS`.
///
/// ```
/// # use float_expansion::{dd, Ereal};
/// let x: Ereal = "0.1".parse().unwrap();
/// assert_eq!(x.limbs(), "0.1".parse::<dd>().unwrap().limbs());
/// let y: Ereal = "-1024.5".parse().unwrap();
/// assert_eq!(y.limbs(), &[-1024.5]);
/// ```
impl<const MAXLIMBS: usize>
FromStr for Ereal<MAXLIMBS> {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    let mantissa = s.split(['e', 'E']).next().unwrap_or(s);
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();
    let limbs = (digits / 16 + 2).min(MAXLIMBS);
    let e = parse_decimal(s, limbs)?;
    Ok(Self::from_expansion(round_to(&e, limbs)))
  }
}
