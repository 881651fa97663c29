use core::cmp::Ordering;

use super::{any_nonfinite, estimate, expansion_difference};

/// Compare the values of two expansions; `None` if either contains a NaN.
///
/// Most comparisons are decided by the leading limbs alone: if they differ by more than the
/// combined magnitude of all the other limbs, the tails cannot change the outcome. Otherwise, the
/// result is the sign of the exact difference `e - f`.
///
/// Neither operand needs to be a valid expansion, the result is always exact. Comparing limbs
/// lexicographically, on the other hand, is only correct for canonical expansions.
///
/// ```
/// # use float_expansion::expansion::*;
/// # use core::cmp::Ordering;
/// assert_eq!(compare_adaptive(&[1., 1e-20], &[1.]), Some(Ordering::Greater));
/// // Not valid expansions, but still compared correctly.
/// assert_eq!(compare_adaptive(&[1e-20, 1.], &[1., 1e-20]), Some(Ordering::Equal));
/// assert_eq!(compare_adaptive(&[f64::NAN], &[1.]), None);
/// ```
pub fn compare_adaptive(e: &[f64], f: &[f64]) -> Option<Ordering> {
  if e.iter().chain(f).any(|x| x.is_nan()) {
    return None
  }
  if any_nonfinite(e) || any_nonfinite(f) {
    return estimate(e).partial_cmp(&estimate(f))
  }
  let (head_e, tail_e) = split_head(e);
  let (head_f, tail_f) = split_head(f);
  // The tails are bounded by the sum of their magnitudes; doubling absorbs any rounding in that
  // sum and in the difference of the heads.
  let bound = 2. * (tail_e.iter().map(|x| x.abs()).sum::<f64>() + tail_f.iter().map(|x| x.abs()).sum::<f64>());
  let gap = head_e - head_f;
  if gap.abs() > bound {
    return gap.partial_cmp(&0.)
  }
  let difference = expansion_difference(e, f);
  difference[0].partial_cmp(&0.)
}

fn split_head(e: &[f64]) -> (f64, &[f64]) {
  match e.split_first() {
    Some((&head, tail)) => (head, tail),
    None => (0., &[]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::test::{exact, expansion, float_in};
  use proptest::prelude::*;

  #[test]
  fn ties_need_tails() {
    let two = |k| f64::powi(2., k);
    assert_eq!(compare_adaptive(&[1., two(-60)], &[1., two(-61)]), Some(Ordering::Greater));
    assert_eq!(compare_adaptive(&[1., -two(-60)], &[1.]), Some(Ordering::Less));
    assert_eq!(compare_adaptive(&[1., two(-60)], &[1., two(-60)]), Some(Ordering::Equal));
    assert_eq!(compare_adaptive(&[0.], &[-0.]), Some(Ordering::Equal));
    assert_eq!(compare_adaptive(&[], &[0.]), Some(Ordering::Equal));
  }

  #[test]
  fn nonfinite() {
    assert_eq!(compare_adaptive(&[f64::INFINITY], &[1e300, 1e280]), Some(Ordering::Greater));
    assert_eq!(compare_adaptive(&[f64::NEG_INFINITY], &[f64::NEG_INFINITY]), Some(Ordering::Equal));
    assert_eq!(compare_adaptive(&[1., f64::NAN], &[1.]), None);
  }

  #[test]
  fn malformed() {
    // Lexicographic comparison would get all of these wrong.
    assert_eq!(compare_adaptive(&[1., 3.], &[2., 1.]), Some(Ordering::Greater));
    assert_eq!(compare_adaptive(&[0.5, 0.5], &[1.]), Some(Ordering::Equal));
    assert_eq!(compare_adaptive(&[1., 0.], &[1.]), Some(Ordering::Equal));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn compare_exact(e in expansion(1 ..= 4, -10 ..= 10), f in expansion(1 ..= 4, -10 ..= 10)) {
      prop_assert_eq!(compare_adaptive(&e, &f), exact(&e).partial_cmp(&exact(&f)));
    }

    #[test]
    fn compare_close(e in expansion(1 ..= 4, -10 ..= 10), tail in float_in(-120 ..= -70)) {
      // Same head, different tails: the slow path.
      let mut f = e.clone();
      f.push(tail);
      prop_assert_eq!(compare_adaptive(&e, &f), exact(&e).partial_cmp(&exact(&f)));
      prop_assert_eq!(compare_adaptive(&f, &f), Some(Ordering::Equal));
    }

    #[test]
    fn compare_garbage(
      e in prop::collection::vec(float_in(-30 ..= 30), 1 .. 6),
      f in prop::collection::vec(float_in(-30 ..= 30), 1 .. 6),
    ) {
      prop_assert_eq!(compare_adaptive(&e, &f), exact(&e).partial_cmp(&exact(&f)));
    }
  }
}
