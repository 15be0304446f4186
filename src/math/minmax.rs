use super::*;
use crate::RoundingMode;
use crate::soft;

/// `x < y`, except that `-0 < +0`. False if either is NaN.
#[inline]
fn less<F: Float>(x: F, y: F) -> bool {
  let (a, b) = (x.to_f64(), y.to_f64());
  a < b || (a == b && x.sign() && !y.sign())
}

impl<H: Hooks> DevMath<H> {
  /// The NaN to return if either operand of a NaN-propagating operation is NaN.
  #[inline]
  fn either_nan<F: Float>(x: F, y: F) -> Option<F> {
    if H::FINITE_ONLY { return None }
    if x.is_nan_bits() {
      Some(x.quiet())
    } else if y.is_nan_bits() {
      Some(y.quiet())
    } else {
      None
    }
  }

  /// If exactly one operand is NaN, the other one; if both are, a NaN.
  #[inline]
  fn ignore_nan<F: Float>(x: F, y: F) -> Option<F> {
    if H::FINITE_ONLY { return None }
    match (x.is_nan_bits(), y.is_nan_bits()) {
      (true, true) => Some(x.quiet()),
      (true, false) => Some(y),
      (false, true) => Some(x),
      (false, false) => None,
    }
  }

  /// The smaller operand, ignoring a single NaN (IEEE `minNum`), with `-0 < +0`.
  pub fn fmin<F: Float>(x: F, y: F) -> F {
    if let Some(r) = Self::ignore_nan(x, y) { return r }
    if less(y, x) { y } else { x }
  }

  /// The larger operand, ignoring a single NaN (IEEE `maxNum`), with `-0 < +0`.
  pub fn fmax<F: Float>(x: F, y: F) -> F {
    if let Some(r) = Self::ignore_nan(x, y) { return r }
    if less(x, y) { y } else { x }
  }

  /// The smaller operand; NaN if either is (IEEE `minimum`), with `-0 < +0`.
  pub fn min<F: Float>(x: F, y: F) -> F {
    if let Some(r) = Self::either_nan(x, y) { return r }
    if less(y, x) { y } else { x }
  }

  /// The larger operand; NaN if either is (IEEE `maximum`), with `-0 < +0`.
  pub fn max<F: Float>(x: F, y: F) -> F {
    if let Some(r) = Self::either_nan(x, y) { return r }
    if less(x, y) { y } else { x }
  }

  /// The operand of smaller magnitude; `fmin` if the magnitudes are equal.
  pub fn minmag<F: Float>(x: F, y: F) -> F {
    let (a, b) = (Self::fabs(x).to_f64(), Self::fabs(y).to_f64());
    if a < b {
      x
    } else if b < a {
      y
    } else {
      Self::fmin(x, y)
    }
  }

  /// The operand of larger magnitude; `fmax` if the magnitudes are equal.
  pub fn maxmag<F: Float>(x: F, y: F) -> F {
    let (a, b) = (Self::fabs(x).to_f64(), Self::fabs(y).to_f64());
    if a > b {
      x
    } else if b > a {
      y
    } else {
      Self::fmax(x, y)
    }
  }

  /// `x - y` if `x > y`, otherwise `+0`.
  pub fn fdim<F: Float>(x: F, y: F) -> F {
    if let Some(r) = Self::either_nan(x, y) { return r }
    if x.to_f64() > y.to_f64() {
      soft::sub(x, y, RoundingMode::NearestEven)
    } else {
      F::zero(false)
    }
  }
}
