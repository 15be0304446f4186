use super::*;
use crate::RoundingMode;
use crate::soft::{Class, Unrounded, classify};
use crate::underlying::wide::bit_len;

/// Scale factors beyond this are clamped: even `min_subnormal × 2^LIMIT` overflows every format.
const SCALE_LIMIT: i32 = 1 << 12;

impl<H: Hooks> DevMath<H> {
  pub fn fabs<F: Float>(x: F) -> F {
    F::from_raw(x.magnitude())
  }

  /// `x` with the sign of `y`.
  pub fn copysign<F: Float>(x: F, y: F) -> F {
    x.with_sign(y.sign())
  }

  /// A quiet NaN with payload `code`, truncated to the payload bits below the quiet bit.
  ///
  /// ```
  /// # use devmath::Reference;
  /// let x = Reference::nan::<f32>(0x1234);
  /// assert!(x.is_nan());
  /// assert_eq!(x.to_bits(), 0x7fc0_1234);
  /// ```
  pub fn nan<F: Float>(code: F::Bits) -> F {
    let payload = code.into() & (F::QUIET_BIT - 1);
    F::from_raw(F::EXP_MASK | F::QUIET_BIT | payload)
  }

  /// The next representable value after `x` in the direction of `y`.
  pub fn nextafter<F: Float>(x: F, y: F) -> F {
    if x.is_nan_bits() { return x.quiet() }
    if y.is_nan_bits() { return y.quiet() }
    let (a, b) = (x.to_f64(), y.to_f64());
    if a == b {
      return y
    }
    if x.is_zero_bits() {
      return F::min_subnormal(b < a)
    }
    // Away from zero is one up in the magnitude bits (up to ∞), towards zero one down.
    let away = (a < b) != x.sign();
    let raw = if away { x.to_raw() + 1 } else { x.to_raw() - 1 };
    F::from_raw(raw)
  }

  /// `x × 2^n`, rounded to nearest-even if it underflows.
  pub fn ldexp<F: Float>(x: F, n: i32) -> F {
    match classify(x) {
      Class::Nan => x.quiet(),
      Class::Infinite { .. } | Class::Zero { .. } => x,
      Class::Regular(d) => {
        let n = n.clamp(-SCALE_LIMIT, SCALE_LIMIT);
        Unrounded { exp: d.exp + n, ..Unrounded::from(d) }.round(RoundingMode::NearestEven)
      },
    }
  }

  /// Same as [`DevMath::ldexp`].
  pub fn scalbn<F: Float>(x: F, n: i32) -> F {
    Self::ldexp(x, n)
  }

  /// `x × 2^y`, where `y` must be integral (or infinite); otherwise the result is NaN.
  pub fn scalb<F: Float>(x: F, y: F) -> F {
    if x.is_nan_bits() { return x.quiet() }
    if y.is_nan_bits() { return y.quiet() }
    let n = y.to_f64();
    if !y.is_finite_bits() {
      // 0 × 2^+∞ and ∞ × 2^-∞ are invalid; otherwise ∞ exponents push to ∞ or to 0.
      return match (classify(x), y.sign()) {
        (Class::Zero { .. }, false) | (Class::Infinite { .. }, true) => F::default_nan(),
        (_, false) => F::infinity(x.sign()),
        (_, true) => F::zero(x.sign()),
      }
    }
    if libm::trunc(n) != n {
      return F::default_nan()
    }
    Self::ldexp(x, n.clamp(-SCALE_LIMIT as f64, SCALE_LIMIT as f64) as i32)
  }

  /// The unbiased exponent of `x`, as if it were normalised. `0` and NaN give `i32::MIN`, ±∞ gives
  /// `i32::MAX`.
  pub fn ilogb<F: Float>(x: F) -> i32 {
    match classify(x) {
      Class::Nan | Class::Zero { .. } => i32::MIN,
      Class::Infinite { .. } => i32::MAX,
      Class::Regular(d) => d.exp + bit_len(d.sig as u128) as i32 - 1,
    }
  }

  /// The unbiased exponent of `x`, as a float. `±0` give -∞, `±∞` give +∞.
  pub fn logb<F: Float>(x: F) -> F {
    match classify(x) {
      Class::Nan => x.quiet(),
      Class::Zero { .. } => F::infinity(true),
      Class::Infinite { .. } => F::infinity(false),
      Class::Regular(_) => F::from_f64(Self::ilogb(x) as f64),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::soft::test;
  use proptest::prelude::*;

  #[test]
  fn nan_payloads() {
    for code in [0u32, 1, 0x1234, 0x3f_ffff, 0xffff_ffff] {
      let x = Reference::nan::<f32>(code);
      assert!(Reference::isnan(x));
      assert_eq!(x.to_bits() & 0x3f_ffff, code & 0x3f_ffff);
      assert_eq!(x.to_bits() & 0x0040_0000, 0x0040_0000);
    }
    for code in [0u64, 7, 0xdead_beef, 1 << 51, u64::MAX] {
      let x = Reference::nan::<f64>(code);
      assert!(x.is_nan());
      assert_eq!(x.to_bits() & ((1 << 51) - 1), code & ((1 << 51) - 1));
      assert!(!x.is_sign_negative());
    }
  }

  #[test]
  fn neighbours() {
    assert_eq!(Reference::nextafter(1.0f32, 2.0), 1.0 + f32::EPSILON);
    assert_eq!(Reference::nextafter(1.0f32, 0.0), 1.0 - f32::EPSILON / 2.0);
    assert_eq!(Reference::nextafter(0.0f64, -1.0).to_bits(), 0x8000_0000_0000_0001);
    assert_eq!(Reference::nextafter(-0.0f64, 1.0).to_bits(), 1);
    assert_eq!(Reference::nextafter(f32::MAX, f32::INFINITY), f32::INFINITY);
    assert_eq!(Reference::nextafter(f32::INFINITY, 0.0), f32::MAX);
    assert_eq!(Reference::nextafter(f64::from_bits(1), -1.0).to_bits(), 0);
    assert_eq!(Reference::nextafter(0.0f32, -0.0).to_bits(), 0x8000_0000);
    assert!(Reference::nextafter(f32::NAN, 1.0).is_nan());
    assert!(Reference::nextafter(1.0, f64::NAN).is_nan());
  }

  #[test]
  fn scaling() {
    assert_eq!(Reference::ldexp(1.5f32, 4), 24.0);
    assert_eq!(Reference::ldexp(1.0f32, 128), f32::INFINITY);
    assert_eq!(Reference::ldexp(-1.0f64, -1074).to_bits(), 0x8000_0000_0000_0001);
    // 0.75 × 2^-1074 is 0.75 of the smallest subnormal; rounds up to it.
    assert_eq!(Reference::ldexp(0.75f64, -1074).to_bits(), 1);
    // 0.5 × 2^-1074 is a tie; rounds to the even zero.
    assert_eq!(Reference::ldexp(0.5f64, -1074).to_bits(), 0);
    assert_eq!(Reference::ldexp(f32::from_bits(1), 149), 1.0);
    assert_eq!(Reference::ldexp(f64::MIN_POSITIVE, i32::MAX), f64::INFINITY);
    assert_eq!(Reference::scalbn(f64::MAX, i32::MIN), 0.0);
    assert_eq!(Reference::scalb(3.0f32, 2.0), 12.0);
    assert!(Reference::scalb(3.0f32, 0.5).is_nan());
    assert_eq!(Reference::scalb(-3.0f64, f64::INFINITY), f64::NEG_INFINITY);
    assert_eq!(Reference::scalb(3.0f64, f64::NEG_INFINITY), 0.0);
    assert!(Reference::scalb(0.0f64, f64::INFINITY).is_nan());
    assert!(Reference::scalb(f64::INFINITY, f64::NEG_INFINITY).is_nan());
  }

  #[test]
  fn exponents() {
    assert_eq!(Reference::ilogb(1.0f32), 0);
    assert_eq!(Reference::ilogb(0.75f64), -1);
    assert_eq!(Reference::ilogb(f32::from_bits(1)), -149);
    assert_eq!(Reference::ilogb(f64::MAX), 1023);
    assert_eq!(Reference::ilogb(0.0f32), i32::MIN);
    assert_eq!(Reference::ilogb(f32::NAN), i32::MIN);
    assert_eq!(Reference::ilogb(f32::NEG_INFINITY), i32::MAX);
    assert_eq!(Reference::logb(-8.5f64), 3.0);
    assert_eq!(Reference::logb(-0.0f64), f64::NEG_INFINITY);
    assert_eq!(Reference::logb(f32::NEG_INFINITY), f32::INFINITY);
  }

  macro_rules! mk_tests {
    ($name:ident, $t:ty) => {
      mod $name {
        use super::*;

        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

          #[test]
          fn ldexp_proptest(x in test::finite::<$t>(), n in -300..300i32) {
            // For `f32` the scaled value is exact in `f64`, so one conversion rounds it correctly.
            let expected = <$t as Sealed>::from_f64(libm::ldexp(x.to_f64(), n));
            prop_assert_eq!(Reference::ldexp(x, n).to_bits(), expected.to_bits());
          }

          #[test]
          fn ilogb_proptest(x in test::finite::<$t>()) {
            prop_assume!(x != 0.0);
            let e = Reference::ilogb(x);
            let m = libm::ldexp(x.abs().to_f64(), -e);
            prop_assert!((1.0..2.0).contains(&m));
            prop_assert_eq!(Reference::logb(x).to_f64(), e as f64);
          }

          #[test]
          fn nextafter_proptest(x in test::finite::<$t>(), y in test::finite::<$t>()) {
            let next = Reference::nextafter(x, y);
            if x == y {
              prop_assert_eq!(next.to_bits(), y.to_bits());
            } else {
              let between = if x < y { x < next && next <= y } else { y <= next && next < x };
              prop_assert!(between, "{:?} -> {:?} gave {:?}", x, y, next);
              prop_assert_eq!(Reference::nextafter(next, x), x);
            }
          }
        }
      }
    };
  }

  mk_tests!{single, f32}
  mk_tests!{double, f64}
}
