use super::*;
use crate::RoundingMode;
use crate::soft::{self, Class, Unrounded, classify};
use crate::underlying::wide::bit_len;

impl<H: Hooks> DevMath<H> {
  /// Split `x` into a mantissa `m` with `0.5 ≤ |m| < 1` and an exponent `e`, written to `exp`,
  /// such that `x = m × 2^e`. For `±0`, `±∞` and NaN, returns `x` and writes 0.
  ///
  /// ```
  /// # use devmath::Reference;
  /// let mut e = 0;
  /// assert_eq!(Reference::frexp(12.0f32, &mut e), 0.75);
  /// assert_eq!(e, 4);
  /// ```
  pub fn frexp<F: Float>(x: F, exp: &mut i32) -> F {
    match classify(x) {
      Class::Nan => {
        *exp = 0;
        x.quiet()
      },
      Class::Infinite { .. } | Class::Zero { .. } => {
        *exp = 0;
        x
      },
      Class::Regular(d) => {
        let e = d.exp + bit_len(d.sig as u128) as i32;
        *exp = e;
        // Exact: the mantissa is a normal number in every format.
        Unrounded { exp: d.exp - e, ..Unrounded::from(d) }.round(RoundingMode::NearestEven)
      },
    }
  }

  /// Split `x` into its integral part, written to `integral`, and its fractional part, returned;
  /// both have the sign of `x`.
  pub fn modf<F: Float>(x: F, integral: &mut F) -> F {
    if x.is_nan_bits() {
      *integral = x.quiet();
      return x.quiet()
    }
    if !x.is_finite_bits() {
      *integral = x;
      return F::zero(x.sign())
    }
    let int = Self::trunc(x);
    *integral = int;
    // `x - trunc(x)` is exact.
    soft::sub(x, int, RoundingMode::NearestEven).with_sign(x.sign())
  }

  /// `x - floor(x)`, clamped below 1; `floor(x)` is written to `floor`. Zeros keep their sign.
  pub fn fract<F: Float>(x: F, floor: &mut F) -> F {
    if x.is_nan_bits() {
      *floor = x.quiet();
      return x.quiet()
    }
    if !x.is_finite_bits() {
      *floor = x;
      return F::zero(x.sign())
    }
    let fl = Self::floor(x);
    *floor = fl;
    if x.is_zero_bits() {
      return x
    }
    // Inexact only for tiny negative `x`, where it may round up to 1.
    let fraction = soft::sub(x, fl, RoundingMode::NearestEven);
    let below_one = F::from_raw(F::one().to_raw() - 1);
    if fraction.to_raw() > below_one.to_raw() { below_one } else { fraction }
  }
}
