use super::*;

/// Plain left-to-right floating point summation.
pub fn sum_naive(xs: &[f64]) -> f64 {
  xs.iter().fold(0., |acc, &x| acc + x)
}

/// Kahan's compensated summation: the rounding error of each addition is estimated and
/// subtracted from the next term.
pub fn sum_kahan(xs: &[f64]) -> f64 {
  let mut sum = 0.;
  let mut compensation = 0.;
  for &x in xs {
    let y = x - compensation;
    let t = sum + y;
    compensation = (t - sum) - y;
    sum = t;
  }
  sum
}

/// Neumaier's variant of Kahan summation, which is also correct when a term is larger than the
/// running sum.
pub fn sum_neumaier(xs: &[f64]) -> f64 {
  let mut sum = 0.;
  let mut compensation = 0.;
  for &x in xs {
    let t = sum + x;
    if libm::fabs(sum) >= libm::fabs(x) {
      compensation += (sum - t) + x;
    } else {
      compensation += (x - t) + sum;
    }
    sum = t;
  }
  sum + compensation
}

/// Pairwise (segmented) summation: blocks of at most `block` terms are summed naively, and the
/// partial sums are then added pairwise, in a balanced tree.
///
/// A `block` of 0 is treated as 1.
pub fn sum_pairwise(xs: &[f64], block: usize) -> f64 {
  let block = block.max(1);
  if xs.len() <= block {
    sum_naive(xs)
  } else {
    let (left, right) = xs.split_at(xs.len() / 2);
    sum_pairwise(left, block) + sum_pairwise(right, block)
  }
}

/// The exact sum of `xs`, rounded once, to nearest.
///
/// ```
/// # use float_expansion::accumulate::*;
/// let xs = [1e16, 1., -1e16];
/// assert_eq!(sum_naive(&xs), 0.);
/// assert_eq!(sum_exact(&xs), 1.);
/// ```
pub fn sum_exact(xs: &[f64]) -> f64 {
  let mut acc = Accumulator::new();
  for &x in xs {
    acc += x;
  }
  acc.round::<1>().high()
}

/// The exact dot product of `xs` and `ys`, rounded once, to nearest. Extra elements of the longer
/// slice are ignored.
///
/// ```
/// # use float_expansion::accumulate::*;
/// assert_eq!(dot_exact(&[1e16, 1., -1e16], &[1., 1., 1.]), 1.);
/// ```
pub fn dot_exact(xs: &[f64], ys: &[f64]) -> f64 {
  let mut acc = Accumulator::new();
  for (&x, &y) in xs.iter().zip(ys) {
    acc.add_product(x, y);
  }
  acc.round::<1>().high()
}

/// The harmonic number H<sub>n</sub> = 1 + 1/2 + … + 1/n, accumulated term by term in a
/// [`Cascade<N>`], in increasing order of `k`.
pub fn harmonic<const N: usize>(n: u32) -> Cascade<N> {
  let mut sum = Cascade::<N>::ZERO;
  for k in 1 ..= n {
    sum += Cascade::<N>::ONE / f64::from(k);
  }
  sum
}
