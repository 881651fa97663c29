use super::*;

use core::fmt::{self, Debug, Display, LowerExp};
use core::str::FromStr;
use crate::ParseError;
use crate::expansion::decimal::{fmt_scientific, parse_decimal};

impl<
  const N: usize,
  P: Policy,
> Debug for Cascade<N, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Cascade")
      .field(&self.0)
      .finish()
  }
}

/// Scientific notation, with `16 × N` significant digits unless a precision is given (in which
/// case it is the number of digits after the point). Trailing zeros are omitted.
impl<
  const N: usize,
  P: Policy,
> Display for Cascade<N, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_scientific(&self.0, f.precision(), 16 * N, f)
  }
}

impl<
  const N: usize,
  P: Policy,
> LowerExp for Cascade<N, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_scientific(&self.0, f.precision(), 16 * N, f)
  }
}

/// Parse decimal text, correctly rounded to `N` limbs (up to the precision of the last one).
///
/// ```
/// # use float_expansion::dd;
/// let x: dd = "0.1".parse().unwrap();
/// assert_eq!(x.limbs(), &[0.1, -5.551115123125783e-18]);
/// ```
impl<
  const N: usize,
  P: Policy,
> FromStr for Cascade<N, P> {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let e = parse_decimal(s.trim(), N)?;
    Ok(Self::from_expansion(&e))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, qd};
  use crate::expansion::test::{exact, is_close};
  use malachite::rational::Rational;

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", dd::ONE + 1e-20).as_str(), "Cascade([1.0, 1e-20])");
    assert_eq!(format!("{:?}", Cascade::<3>::ZERO).as_str(), "Cascade([0.0, 0.0, 0.0])");
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", dd::ONE).as_str(), "1e0");
    assert_eq!(format!("{}", dd::from(-1234.5)).as_str(), "-1.2345e3");
    assert_eq!(format!("{}", dd::from(0.1)).as_str(), "1.0000000000000000555111512312578e-1");
    assert_eq!(format!("{:+}", dd::from(2.)).as_str(), "+2e0");
  }

  #[test]
  fn precision() {
    assert_eq!(format!("{:.20}", dd::from(0.1)).as_str(), "1.00000000000000005551e-1");
    assert_eq!(format!("{:.3e}", dd::ZERO).as_str(), "0.000e0");
    assert_eq!(format!("{:.2}", dd::from(9.999)).as_str(), "1.00e1");
  }

  #[test]
  fn special() {
    assert_eq!(format!("{}", dd::NAN).as_str(), "NaN");
    assert_eq!(format!("{}", dd::INFINITY).as_str(), "inf");
    assert_eq!(format!("{}", dd::NEG_INFINITY).as_str(), "-inf");
    assert_eq!(format!("{}", -dd::ZERO).as_str(), "-0e0");
  }

  #[test]
  fn pi() {
    assert_eq!(
      format!("{:.60}", qd::PI).as_str(),
      "3.141592653589793238462643383279502884197169399375105820974945e0",
    );
  }

  #[test]
  fn parse() {
    let third: qd = "0.333333333333333333333333333333333333333333333333333333333333333333333".parse().unwrap();
    let expected = Rational::from(1) / Rational::from(3);
    assert!(is_close(third.limbs(), &expected, 205));
    assert_eq!("  -2.5e3 ".parse::<dd>(), Ok(dd::from(-2500.)));
    assert_eq!("1e400".parse::<dd>(), Ok(dd::INFINITY));
    assert_eq!("".parse::<dd>(), Err(ParseError::Empty));
    assert_eq!("1.2.3".parse::<dd>(), Err(ParseError::InvalidDigit { position: 3 }));
  }

  #[test]
  fn round_trip() {
    for x in [qd::PI, qd::E / 7., qd::from(1e-200) / 3., qd::MAX / 5.] {
      let y: qd = format!("{x}").parse().unwrap();
      assert!(is_close(y.limbs(), &exact(x.limbs()), 200), "{x:?} {y:?}");
    }
  }
}
