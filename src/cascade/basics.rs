use super::*;
use crate::InvariantViolation;

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  /// The number of limbs of this type (i.e. parameter `N`).
  pub const LIMBS: usize = {
    assert!(
      N >= 1,
      "A cascade must have at least one limb",
    );
    N
  };

  /// Construct a cascade from its limbs as they are, **without** any checks or normalization.
  ///
  /// The caller is responsible for `limbs` being a canonical expansion, padded with zeros: limbs
  /// sorted by decreasing magnitude, non-overlapping, and stable under rounding (see
  /// [`is_canonical`](crate::expansion::is_canonical)). This is the cheapest constructor, meant
  /// for constants and for limbs that already come out of expansion arithmetic.
  ///
  /// Malformed limbs are not undefined behaviour: arithmetic and comparisons on them still give
  /// the correct result for the *sum* of the limbs, because every operation renormalizes its
  /// inputs. But accessors that look only at the head (such as [`Self::is_zero`] or
  /// [`Self::is_sign_negative`]) may then be wrong.
  ///
  /// ```
  /// # use float_expansion::dd;
  /// let x = dd::from_limbs_unchecked([1., 1e-20]);
  /// assert_eq!(x.limbs(), &[1., 1e-20]);
  /// ```
  #[inline]
  pub const fn from_limbs_unchecked(limbs: [f64; N]) -> Self {
    Self(limbs, PhantomData)
  }

  /// Construct a cascade from arbitrary limbs, whose sum is rounded to `N` limbs as in
  /// [`compress`](crate::expansion::compress). The limbs need not be ordered or non-overlapping.
  ///
  /// ```
  /// # use float_expansion::dd;
  /// let x = dd::from_limbs([1e-20, 1.]);
  /// assert_eq!(x.limbs(), &[1., 1e-20]);
  /// let y = dd::from_limbs([0.5, 0.5]);
  /// assert_eq!(y.limbs(), &[1., 0.]);
  /// ```
  #[inline]
  pub fn from_limbs(limbs: [f64; N]) -> Self {
    Self::from_expansion(&limbs)
  }

  /// Construct a cascade from limbs that must already be a valid expansion (after stripping any
  /// trailing zero limbs): finite, sorted by decreasing magnitude, and non-overlapping. Nothing
  /// is repaired; invalid limbs are reported as an [`InvariantViolation`].
  ///
  /// ```
  /// # use float_expansion::{dd, InvariantViolation};
  /// assert!(dd::try_from_limbs([1., 1e-20]).is_ok());
  /// assert!(dd::try_from_limbs([3., 0.]).is_ok());
  /// assert_eq!(dd::try_from_limbs([1., 0.5]), Err(InvariantViolation::Overlapping { index: 1 }));
  /// ```
  pub fn try_from_limbs(limbs: [f64; N]) -> Result<Self, InvariantViolation> {
    let len = limbs.iter().rposition(|&x| x != 0.).map_or(1, |last| last + 1);
    validate(&limbs[.. len])?;
    Ok(Self::from_limbs_unchecked(limbs))
  }

  /// Round an expansion (or any list of limbs) to `N` limbs.
  #[inline]
  pub(crate) fn from_expansion(e: &[f64]) -> Self {
    let _ = Self::LIMBS;
    Self(compress::<N>(e), PhantomData)
  }

  /// A cascade whose head is `x` and whose tail is all zeros.
  #[inline]
  pub(crate) const fn from_head(x: f64) -> Self {
    let mut limbs = [0.; N];
    limbs[0] = x;
    Self(limbs, PhantomData)
  }

  /// The limbs of `self`, most significant first.
  #[inline]
  pub const fn limbs(&self) -> &[f64; N] {
    &self.0
  }

  /// The limbs of `self`, most significant first.
  #[inline]
  pub const fn to_limbs(self) -> [f64; N] {
    self.0
  }

  /// The limbs of `self` without the trailing zero limbs (but at least one).
  #[inline]
  pub(crate) fn expansion(&self) -> &[f64] {
    let len = self.0.iter().rposition(|&x| x != 0.).map_or(1, |last| last + 1);
    &self.0[.. len]
  }

  /// The most significant limb, which is the value of `self` rounded to an `f64` (for canonical
  /// limbs).
  #[inline]
  pub const fn high(&self) -> f64 {
    self.0[0]
  }

  /// The least significant limb.
  #[inline]
  pub const fn low(&self) -> f64 {
    self.0[N - 1]
  }

  /// Whether the limbs of `self` are a canonical expansion, as guaranteed for every result of
  /// arithmetic (and not necessarily for [`Self::from_limbs_unchecked`]). Non-finite values count
  /// as canonical if the tail is all zeros.
  pub fn is_canonical(&self) -> bool {
    if !self.0[0].is_finite() {
      self.0[1 ..].iter().all(|&x| x == 0.)
    } else {
      is_canonical(self.expansion())
    }
  }

  /// `true` if `self` is ±0.
  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0[0] == 0.
  }

  /// `true` if `self` is exactly 1.
  #[inline]
  pub fn is_one(&self) -> bool {
    self.0[0] == 1. && self.0[1 ..].iter().all(|&x| x == 0.)
  }

  /// `true` if `self` is NaN.
  #[inline]
  pub fn is_nan(&self) -> bool {
    self.0[0].is_nan()
  }

  /// `true` if `self` is ±∞.
  #[inline]
  pub fn is_infinite(&self) -> bool {
    self.0[0].is_infinite()
  }

  /// `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub fn is_finite(&self) -> bool {
    self.0[0].is_finite()
  }

  /// `true` if the sign bit of the head is set, including for `-0` and NaNs with negative sign.
  #[inline]
  pub fn is_sign_negative(&self) -> bool {
    self.0[0].is_sign_negative()
  }

  /// `true` if the sign bit of the head is not set.
  #[inline]
  pub fn is_sign_positive(&self) -> bool {
    self.0[0].is_sign_positive()
  }

  /// `1` if `self` is positive, `-1` if it is negative; zeros and NaN are returned as they are.
  ///
  /// Unlike [`f64::signum`], the sign of zero is `0`.
  #[inline]
  pub fn signum(self) -> Self {
    let head = self.0[0];
    if head == 0. || head.is_nan() {
      Self::from_head(head)
    } else {
      Self::from_head(head.signum())
    }
  }
}
