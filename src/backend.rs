//! The numerical backend: the elementary and special functions whose algorithms this crate does
//! not implement itself, reached through the [`Backend`] trait and provided here by [`libm`].
//!
//! Narrower formats are computed in `f64` and rounded once at the end; with
//! [`Strategy::Relaxed`], `f32` (and `f16`) use the single-precision `libm` routines instead,
//! which are faster and less accurate.

use crate::Float;
use crate::Precision;

/// Which algorithm family a backend call may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
  /// Evaluate in `f64`, round once to the target format.
  Precise,
  /// Evaluate binary16 and binary32 with the single-precision routines.
  Relaxed,
}

impl Strategy {
  #[inline]
  const fn single<F: Float>(self) -> bool {
    matches!(self, Strategy::Relaxed) && !matches!(F::PRECISION, Precision::Double)
  }
}

macro_rules! unary {
  ($($name:ident, $name_f:ident;)*) => {
    $(
      #[inline]
      fn $name(self, strategy: Strategy) -> Self {
        if strategy.single::<Self>() {
          Self::from_f64(libm::$name_f(self.to_f64() as f32) as f64)
        } else {
          Self::from_f64(libm::$name(self.to_f64()))
        }
      }
    )*
  };
}

macro_rules! binary {
  ($($name:ident, $name_f:ident;)*) => {
    $(
      #[inline]
      fn $name(self, other: Self, strategy: Strategy) -> Self {
        if strategy.single::<Self>() {
          Self::from_f64(libm::$name_f(self.to_f64() as f32, other.to_f64() as f32) as f64)
        } else {
          Self::from_f64(libm::$name(self.to_f64(), other.to_f64()))
        }
      }
    )*
  };
}

/// The functions of the catalog that are computed by an external numerical library. Implemented
/// for every [`Float`]; the provided methods are the whole implementation.
pub trait Backend: Float {
  unary! {
    acos, acosf;
    asin, asinf;
    atan, atanf;
    cos, cosf;
    sin, sinf;
    tan, tanf;
    acosh, acoshf;
    asinh, asinhf;
    atanh, atanhf;
    cosh, coshf;
    sinh, sinhf;
    tanh, tanhf;
    exp, expf;
    exp2, exp2f;
    exp10, exp10f;
    expm1, expm1f;
    log, logf;
    log2, log2f;
    log10, log10f;
    log1p, log1pf;
    cbrt, cbrtf;
    erf, erff;
    erfc, erfcf;
    tgamma, tgammaf;
    lgamma, lgammaf;
    j0, j0f;
    j1, j1f;
    y0, y0f;
    y1, y1f;
  }

  binary! {
    atan2, atan2f;
    pow, powf;
    hypot, hypotf;
    fmod, fmodf;
    remainder, remainderf;
  }

  /// `(sin x, cos x)`.
  #[inline]
  fn sincos(self, strategy: Strategy) -> (Self, Self) {
    if strategy.single::<Self>() {
      let (s, c) = libm::sincosf(self.to_f64() as f32);
      (Self::from_f64(s as f64), Self::from_f64(c as f64))
    } else {
      let (s, c) = libm::sincos(self.to_f64());
      (Self::from_f64(s), Self::from_f64(c))
    }
  }

  /// `(ln |Γ(x)|, sign of Γ(x))`.
  #[inline]
  fn lgamma_r(self, strategy: Strategy) -> (Self, i32) {
    if strategy.single::<Self>() {
      let (y, sign) = libm::lgammaf_r(self.to_f64() as f32);
      (Self::from_f64(y as f64), sign)
    } else {
      let (y, sign) = libm::lgamma_r(self.to_f64());
      (Self::from_f64(y), sign)
    }
  }

  /// `(remainder(x, y), low bits of the quotient with its sign)`. Exact, so there is no
  /// single-precision path.
  #[inline]
  fn remquo(self, other: Self) -> (Self, i32) {
    let (r, quo) = libm::remquo(self.to_f64(), other.to_f64());
    (Self::from_f64(r), quo)
  }
}

impl Backend for f32 {}
impl Backend for f64 {}
#[cfg(feature = "narrow")]
impl Backend for half::f16 {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn precise_is_rounded_f64() {
    for x in [0.1f32, 1.0, 2.5, -3.75, 100.0] {
      assert_eq!(Backend::exp(x, Strategy::Precise), libm::exp(x as f64) as f32);
      assert_eq!(Backend::sin(x, Strategy::Precise), libm::sin(x as f64) as f32);
      assert_eq!(Backend::atan2(x, 0.5, Strategy::Precise), libm::atan2(x as f64, 0.5) as f32);
    }
  }

  #[test]
  fn relaxed_uses_single() {
    for x in [0.1f32, 1.0, 2.5, -3.75, 100.0] {
      assert_eq!(Backend::exp(x, Strategy::Relaxed), libm::expf(x));
      // Bitwise, so that the NaN of a negative base compares equal.
      assert_eq!(Backend::pow(x, 1.5, Strategy::Relaxed).to_bits(), libm::powf(x, 1.5).to_bits());
    }
    // Doubles have no relaxed routines.
    assert_eq!(Backend::log(2.0f64, Strategy::Relaxed), libm::log(2.0));
  }

  #[test]
  fn multi_results() {
    let (s, c) = Backend::sincos(0.0f64, Strategy::Precise);
    assert_eq!((s, c), (0.0, 1.0));
    let (y, sign) = Backend::lgamma_r(-0.5f64, Strategy::Precise);
    assert_eq!(sign, -1);
    assert!((y - libm::lgamma(-0.5)).abs() < 1e-15);
    let (r, quo) = Backend::remquo(7.0f32, 2.0);
    assert_eq!(r, -1.0);
    assert_eq!(quo & 7, 4);
  }

  #[cfg(feature = "narrow")]
  #[test]
  fn narrow() {
    use half::f16;
    let x = f16::from_f32(0.5);
    assert_eq!(Backend::cos(x, Strategy::Precise), f16::from_f64(libm::cos(0.5)));
    assert_eq!(Backend::cos(x, Strategy::Relaxed), f16::from_f32(libm::cosf(0.5)));
  }
}
