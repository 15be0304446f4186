use super::*;
use crate::RoundingMode;
use crate::soft;

/// Declare the rounding-mode variants of one basic operation.
macro_rules! rounded {
  ($op:ident $args:tt => $($name:ident: $mode:ident),+) => {
    $(rounded!(@one $op $args $name $mode);)+
  };
  (@one $op:ident ($($arg:ident),+) $name:ident $mode:ident) => {
    #[doc = concat!("`", stringify!($op), "`, rounded ", stringify!($mode), ".")]
    #[inline]
    pub fn $name<F: Float>($($arg: F),+) -> F {
      soft::$op($($arg,)+ RoundingMode::$mode)
    }
  };
}

/// `1 / √x` for finite positive `x` in `f64`, by the bit-trick initial guess and three Newton
/// steps. Good to about 2^-35 relative.
#[inline]
fn rsqrt_approx(x: f64) -> f64 {
  let mut y = f64::from_bits(0x5fe6_eb50_c7b5_37a9 - (x.to_bits() >> 1));
  for _ in 0..3 {
    y *= 1.5 - 0.5 * x * y * y;
  }
  y
}

impl<H: Hooks> DevMath<H> {
  rounded!(add(x, y) => add_rte: NearestEven, add_rtp: TowardPositive, add_rtn: TowardNegative, add_rtz: TowardZero);
  rounded!(sub(x, y) => sub_rte: NearestEven, sub_rtp: TowardPositive, sub_rtn: TowardNegative, sub_rtz: TowardZero);
  rounded!(mul(x, y) => mul_rte: NearestEven, mul_rtp: TowardPositive, mul_rtn: TowardNegative, mul_rtz: TowardZero);
  rounded!(div(x, y) => div_rte: NearestEven, div_rtp: TowardPositive, div_rtn: TowardNegative, div_rtz: TowardZero);
  rounded!(fma(x, y, z) => fma_rte: NearestEven, fma_rtp: TowardPositive, fma_rtn: TowardNegative, fma_rtz: TowardZero);
  rounded!(sqrt(x) => sqrt_rte: NearestEven, sqrt_rtp: TowardPositive, sqrt_rtn: TowardNegative, sqrt_rtz: TowardZero);

  /// `x × y + z` with a single rounding, to nearest-even.
  pub fn fma<F: Float>(x: F, y: F, z: F) -> F {
    soft::fma(x, y, z, RoundingMode::NearestEven)
  }

  /// `x × y + z`, fused if fused multiply-add is cheap at this precision, otherwise with two
  /// roundings.
  pub fn mad<F: Float>(x: F, y: F, z: F) -> F {
    let (x, y, z) = (Self::flush(x), Self::flush(y), Self::flush(z));
    let result = if Self::fast_fma::<F>() {
      soft::fma(x, y, z, RoundingMode::NearestEven)
    } else {
      soft::add(Self::flush(soft::mul(x, y, RoundingMode::NearestEven)), z, RoundingMode::NearestEven)
    };
    Self::flush(result)
  }

  /// Whether `sqrt` and `rsqrt` at precision `F` take the approximate path.
  #[inline]
  fn approximate_sqrt<F: Float>() -> bool {
    matches!(F::PRECISION, Precision::Single)
      && !H::CORRECTLY_ROUNDED_SQRT32
      && (H::FAST_RELAXED || H::VENDOR)
  }

  /// Square root, correctly rounded to nearest-even; binary32 may take an approximate path when
  /// fast-relaxed or vendor paths are allowed, unless correctly rounded sqrt is required.
  pub fn sqrt<F: Float>(x: F) -> F {
    let x = Self::flush(x);
    if Self::approximate_sqrt::<F>() && x.is_finite_bits() && !x.is_zero_bits() && !x.sign() {
      let a = x.to_f64();
      return Self::flush(F::from_f64(a * rsqrt_approx(a)))
    }
    Self::flush(soft::sqrt(x, RoundingMode::NearestEven))
  }

  /// `1 / √x`.
  pub fn rsqrt<F: Float>(x: F) -> F {
    let x = Self::flush(x);
    if Self::approximate_sqrt::<F>() && x.is_finite_bits() && !x.is_zero_bits() && !x.sign() {
      return Self::flush(F::from_f64(rsqrt_approx(x.to_f64())))
    }
    Self::flush(F::from_f64(1.0 / libm::sqrt(x.to_f64())))
  }

  /// `x - n × y` where `n` is `x / y` truncated.
  pub fn fmod<F: Backend>(x: F, y: F) -> F {
    x.fmod(y, Strategy::Precise)
  }

  /// `x - n × y` where `n` is `x / y` rounded to nearest-even.
  pub fn remainder<F: Backend>(x: F, y: F) -> F {
    x.remainder(y, Strategy::Precise)
  }

  /// `remainder(x, y)`, writing the sign and at least the three lowest bits of the rounded
  /// quotient `x / y` to `quo`. Writes 0 if the remainder is NaN.
  pub fn remquo<F: Backend>(x: F, y: F, quo: &mut i32) -> F {
    if !x.is_finite_bits() || y.is_nan_bits() || y.is_zero_bits() {
      *quo = 0;
      return if x.is_nan_bits() { x.quiet() } else if y.is_nan_bits() { y.quiet() } else { F::default_nan() }
    }
    let (r, q) = Backend::remquo(x, y);
    *quo = q;
    r
  }

  /// `√(x² + y²)` without undue overflow. An infinite operand gives +∞, even if the other is NaN.
  pub fn hypot<F: Backend>(x: F, y: F) -> F {
    if !H::FINITE_ONLY {
      if Self::isinf(x) || Self::isinf(y) { return F::infinity(false) }
      if x.is_nan_bits() { return x.quiet() }
      if y.is_nan_bits() { return y.quiet() }
    }
    Self::hooked2(x, y, Backend::hypot)
  }
}
