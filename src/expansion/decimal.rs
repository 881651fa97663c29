//! Conversion between expansions and decimal text.
//!
//! Both directions scale by exact powers of ten: `10^k` is itself an exact expansion (of about
//! `2.3 k` bits), so multiplying by it loses nothing, and dividing by it is accurate to whatever
//! number of limbs is asked for. Decimal digits are then peeled off one at a time, exactly, by
//! taking the integer part and multiplying the remainder by ten.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::ParseError;
use super::{compare_adaptive, expansion_quotient, grow_expansion, multiply_cascades, negate};
use super::{renormalize, scale_expansion, sign};

/// Largest power of ten applied in one step; `10^256` is still a finite `f64`.
const POW10_STEP: u32 = 256;

/// `10^k` as an exact expansion. `k` must be at most [`POW10_STEP`].
fn pow10(k: u32) -> Vec<f64> {
  debug_assert!(k <= POW10_STEP);
  let mut result = vec![1.];
  let mut base = vec![10.];
  let mut k = k;
  while k > 0 {
    if k & 1 == 1 {
      result = multiply_cascades(&result, &base);
    }
    base = multiply_cascades(&base, &base);
    k >>= 1;
  }
  result
}

/// `e × 10^k`: exact if `k ≥ 0`, otherwise accurate to `limbs` limbs.
pub(crate) fn scale_pow10(e: &[f64], k: i32, limbs: usize) -> Vec<f64> {
  let mut e = e.to_vec();
  let mut k = k;
  while k > 0 {
    let step = k.unsigned_abs().min(POW10_STEP);
    e = multiply_cascades(&e, &pow10(step));
    k -= step as i32;
  }
  while k < 0 {
    let step = k.unsigned_abs().min(POW10_STEP);
    e = expansion_quotient(&e, &pow10(step), limbs);
    k += step as i32;
  }
  e
}

/// The first `count` significant decimal digits of a finite, nonzero expansion `e`, correctly
/// rounded (to nearest, ties to even), along with the decimal exponent of the first one. That is,
/// `|e| ≈ d₀.d₁d₂… × 10^exp`.
pub(crate) fn to_digits(e: &[f64], count: usize) -> (Vec<u8>, i32) {
  debug_assert!(count > 0);
  let x = renormalize(e);
  debug_assert!(x[0] != 0. && x[0].is_finite());
  let x = if x[0] < 0. {negate(&x)} else {x};
  // Enough precision for all the requested digits, and then some.
  let limbs = (x.len() + 2).max(count * 4 / 53 + 3);

  let mut exp = libm::floor(libm::log10(x[0])) as i32;
  let mut y = scale_pow10(&x, -exp, limbs);
  // The logarithm may be off by one either way.
  if compare_adaptive(&y, &[10.]) != Some(Ordering::Less) {
    exp += 1;
    y = scale_pow10(&x, -exp, limbs);
  } else if compare_adaptive(&y, &[1.]) == Some(Ordering::Less) {
    exp -= 1;
    y = scale_pow10(&x, -exp, limbs);
  }

  let mut digits = Vec::with_capacity(count);
  for _ in 0 .. count {
    let (digit, rest) = split_digit(&y);
    digits.push(digit);
    y = scale_expansion(&rest, 10.);
  }

  // `y` is now the remainder, scaled to the next digit position.
  let round_up = match compare_adaptive(&y, &[5.]) {
    Some(Ordering::Greater) => true,
    Some(Ordering::Equal) => digits.last().is_some_and(|d| d % 2 == 1),
    _ => false,
  };
  if round_up && carry(&mut digits) {
    digits.insert(0, 1);
    digits.pop();
    exp += 1;
  }
  (digits, exp)
}

/// Split `y` (in `[0, 10)`) into its integer part and the fractional remainder, exactly.
fn split_digit(y: &[f64]) -> (u8, Vec<f64>) {
  let mut digit = libm::floor(y[0]);
  let mut rest = grow_expansion(y, -digit);
  while sign(&rest) < 0 {
    digit -= 1.;
    rest = grow_expansion(&rest, 1.);
  }
  while compare_adaptive(&rest, &[1.]) != Some(Ordering::Less) {
    digit += 1.;
    rest = grow_expansion(&rest, -1.);
  }
  (digit.clamp(0., 9.) as u8, rest)
}

/// Add one unit in the last place of `digits`; returns whether it carried out of the first digit
/// (in which case all digits are now `0`).
fn carry(digits: &mut [u8]) -> bool {
  for d in digits.iter_mut().rev() {
    if *d == 9 {
      *d = 0;
    } else {
      *d += 1;
      return false
    }
  }
  true
}

/// Write `e` in scientific notation: `d.ddd…e±x`.
///
/// If `precision` is given, that many digits are written after the point; otherwise
/// `default_digits` significant digits are computed and trailing zeros are dropped.
pub(crate) fn fmt_scientific(
  e: &[f64],
  precision: Option<usize>,
  default_digits: usize,
  f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
  let x = renormalize(e);
  let head = x[0];
  // Renormalizing drops the sign of zero.
  let negative = if head == 0. {e.first().is_some_and(|z| z.is_sign_negative())} else {head < 0.};
  if negative {
    f.write_str("-")?;
  } else if f.sign_plus() {
    f.write_str("+")?;
  }
  if head.is_nan() {
    return f.write_str("NaN")
  } else if head.is_infinite() {
    return f.write_str("inf")
  }

  let (digits, exp) = if head == 0. {
    (vec![0; precision.map_or(1, |p| p + 1)], 0)
  } else {
    match precision {
      Some(p) => to_digits(&x, p + 1),
      None => {
        let (mut digits, exp) = to_digits(&x, default_digits.max(1));
        while digits.len() > 1 && digits.last() == Some(&0) {
          digits.pop();
        }
        (digits, exp)
      }
    }
  };

  write!(f, "{}", digits[0])?;
  if digits.len() > 1 {
    f.write_str(".")?;
    for d in &digits[1 ..] {
      write!(f, "{d}")?;
    }
  }
  write!(f, "e{exp}")
}

/// Parse decimal text (`[+-]digits[.digits][(e|E)[+-]digits]`, or `inf`, `infinity`, `nan` in
/// any case) into an expansion, accurate to `limbs` limbs.
pub(crate) fn parse_decimal(text: &str, limbs: usize) -> Result<Vec<f64>, ParseError> {
  if text.is_empty() {
    return Err(ParseError::Empty)
  }
  let bytes = text.as_bytes();
  let (negative, start) = match bytes[0] {
    b'-' => (true, 1),
    b'+' => (false, 1),
    _ => (false, 0),
  };
  let body = &text[start ..];
  if body.is_empty() {
    return Err(ParseError::Empty)
  }
  let signed = |x: f64| if negative {-x} else {x};
  if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
    return Ok(vec![signed(f64::INFINITY)])
  } else if body.eq_ignore_ascii_case("nan") {
    return Ok(vec![f64::NAN])
  }

  // Digits beyond this many cannot affect the result at this precision.
  let max_digits = 20 * limbs + 20;
  let mut mantissa = vec![0.];
  let mut significant = 0usize;
  let mut exp10: i64 = 0;
  let mut seen_digit = false;
  let mut seen_point = false;
  let mut i = start;
  while i < bytes.len() {
    match bytes[i] {
      c @ b'0' ..= b'9' => {
        seen_digit = true;
        let d = f64::from(c - b'0');
        if significant < max_digits {
          if significant > 0 || d != 0. {
            significant += 1;
          }
          mantissa = grow_expansion(&scale_expansion(&mantissa, 10.), d);
          if seen_point {
            exp10 -= 1;
          }
        } else if !seen_point {
          exp10 += 1;
        }
      }
      b'.' if !seen_point => seen_point = true,
      b'e' | b'E' if seen_digit => break,
      _ => return Err(ParseError::InvalidDigit { position: i }),
    }
    i += 1;
  }
  if !seen_digit {
    return Err(ParseError::InvalidDigit { position: start })
  }
  if i < bytes.len() {
    exp10 += parse_exponent(&text[i + 1 ..])?;
  }

  if mantissa[0] == 0. {
    return Ok(vec![signed(0.)])
  }
  // Far outside the range of `f64`, whatever the mantissa.
  let magnitude = exp10 + significant as i64;
  if magnitude > 330 {
    return Ok(vec![signed(f64::INFINITY)])
  } else if magnitude < -360 {
    return Ok(vec![signed(0.)])
  }
  let value = scale_pow10(&mantissa, exp10 as i32, limbs + 1);
  Ok(if negative {negate(&value)} else {value})
}

/// Parse the exponent after the `e`, saturating far outside any meaningful range.
fn parse_exponent(text: &str) -> Result<i64, ParseError> {
  let (negative, digits) = match text.as_bytes().first() {
    Some(b'-') => (true, &text[1 ..]),
    Some(b'+') => (false, &text[1 ..]),
    _ => (false, text),
  };
  if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
    return Err(ParseError::InvalidExponent)
  }
  let value = digits.bytes().fold(0i64, |acc, c| (acc * 10 + i64::from(c - b'0')).min(1_000_000));
  Ok(if negative {-value} else {value})
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::test::{exact, is_close};
  use malachite::base::num::arithmetic::traits::Pow;
  use malachite::rational::Rational;

  #[test]
  fn powers() {
    assert_eq!(pow10(0), [1.]);
    assert_eq!(pow10(3), [1000.]);
    assert_eq!(exact(&pow10(40)), Rational::from(10u64).pow(40u64));
  }

  #[test]
  fn digits_exact() {
    assert_eq!(to_digits(&[1.], 5), (vec![1, 0, 0, 0, 0], 0));
    assert_eq!(to_digits(&[-123.456], 3), (vec![1, 2, 3], 2));
    assert_eq!(to_digits(&[0.001], 1), (vec![1], -3));
    // The f64 closest to 0.1 is 0.1000000000000000055511151231257827…
    assert_eq!(to_digits(&[0.1], 20), (vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 5, 5], -1));
  }

  #[test]
  fn digits_rounding() {
    assert_eq!(to_digits(&[9.99], 2), (vec![1, 0], 1));
    assert_eq!(to_digits(&[2.5], 1), (vec![2], 0));
    assert_eq!(to_digits(&[3.5], 1), (vec![4], 0));
    assert_eq!(to_digits(&[2.5, 1e-30], 1), (vec![3], 0));
  }

  #[test]
  fn digits_extremes() {
    assert_eq!(to_digits(&[f64::MAX], 4), (vec![1, 7, 9, 8], 308));
    assert_eq!(to_digits(&[f64::MIN_POSITIVE], 4), (vec![2, 2, 2, 5], -308));
    assert_eq!(to_digits(&[1e300, 1e283], 3), (vec![1, 0, 0], 300));
  }

  #[test]
  fn parse_simple() {
    assert_eq!(parse_decimal("1.5e3", 2), Ok(vec![1500.]));
    assert_eq!(parse_decimal("-0.25", 2), Ok(vec![-0.25]));
    assert_eq!(parse_decimal("+7", 2), Ok(vec![7.]));
    assert_eq!(parse_decimal(".5", 2), Ok(vec![0.5]));
    assert_eq!(parse_decimal("5.", 2), Ok(vec![5.]));
    assert_eq!(parse_decimal("1E-2", 1).map(|e| e[0]), Ok(0.01));
    assert_eq!(parse_decimal("0.000", 2), Ok(vec![0.]));
  }

  #[test]
  fn parse_special() {
    assert_eq!(parse_decimal("inf", 2), Ok(vec![f64::INFINITY]));
    assert_eq!(parse_decimal("-Infinity", 2), Ok(vec![f64::NEG_INFINITY]));
    assert!(parse_decimal("NaN", 2).unwrap()[0].is_nan());
    assert_eq!(parse_decimal("1e400", 2), Ok(vec![f64::INFINITY]));
    assert_eq!(parse_decimal("-1e-400", 2), Ok(vec![-0.]));
  }

  #[test]
  fn parse_errors() {
    assert_eq!(parse_decimal("", 2), Err(ParseError::Empty));
    assert_eq!(parse_decimal("-", 2), Err(ParseError::Empty));
    assert_eq!(parse_decimal("1.2.3", 2), Err(ParseError::InvalidDigit { position: 3 }));
    assert_eq!(parse_decimal("12x", 2), Err(ParseError::InvalidDigit { position: 2 }));
    assert_eq!(parse_decimal("e5", 2), Err(ParseError::InvalidDigit { position: 0 }));
    assert_eq!(parse_decimal(".", 2), Err(ParseError::InvalidDigit { position: 0 }));
    assert_eq!(parse_decimal("1e", 2), Err(ParseError::InvalidExponent));
    assert_eq!(parse_decimal("1e+x", 2), Err(ParseError::InvalidExponent));
  }

  #[test]
  fn parse_precise() {
    let tenth = Rational::from(1) / Rational::from(10);
    let e = parse_decimal("0.1", 4).unwrap();
    assert!(is_close(&e, &tenth, 200), "{e:?}");
    let e = parse_decimal("3.14159265358979323846264338327950288419716939937510", 4).unwrap();
    assert!(is_close(&e, &(Rational::from(314159265358979323846264338327950288u128) / Rational::from(10u128.pow(35))), 110));
  }

  #[test]
  fn parse_many_digits() {
    // Only the leading digits are significant; the rest only contribute to the exponent.
    let text = "1".repeat(300);
    let e = parse_decimal(&text, 2).unwrap();
    let exact_value = (Rational::from(10u64).pow(300u64) - Rational::from(1)) / Rational::from(9);
    assert!(is_close(&e, &exact_value, 100));
  }
}
