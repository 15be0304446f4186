use super::*;
use super::elementary::backend_unary;

impl<H: Hooks> DevMath<H> {
  backend_unary! {
    /// The gamma function, `Γ(x)`.
    tgamma,
    /// `ln |Γ(x)|`.
    lgamma,
    j0, j1, y0, y1,
  }

  /// `ln |Γ(x)|`, writing the sign of `Γ(x)` (±1) to `sign`. For NaN and ±∞ the sign is 1; for ±0
  /// it follows the sign of the zero.
  pub fn lgamma_r<F: Backend>(x: F, sign: &mut i32) -> F {
    let x = Self::flush(x);
    if !H::FINITE_ONLY && !x.is_finite_bits() {
      *sign = 1;
      return if x.is_nan_bits() { x.quiet() } else { F::infinity(false) }
    }
    if x.is_zero_bits() {
      *sign = if x.sign() { -1 } else { 1 };
      return F::infinity(false)
    }
    let (y, s) = x.lgamma_r(Self::STRATEGY);
    *sign = s;
    Self::flush(y)
  }
}
