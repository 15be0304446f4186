use super::*;
use super::elementary::backend_unary;
use core::f64::consts::PI;

/// Reduce `|x|` modulo `period` exactly, and split the result as `n/2 + t/π` with `n` an integer
/// and `|t| ≤ π/4`.
#[inline]
fn reduce(x: f64, period: f64) -> (u32, f64) {
  let r = libm::fmod(libm::fabs(x), period);
  let n = libm::rint(2.0 * r);
  // Exact: `r` and `n/2` are within a factor of 2 of each other (or `n` is 0).
  (n as u32, (r - 0.5 * n) * PI)
}

/// `sin(πx)` in `f64`.
fn sinpi(x: f64) -> f64 {
  if !x.is_finite() {
    return f64::NAN
  }
  let (n, t) = reduce(x, 2.0);
  let s = match n {
    0 | 4 => libm::sin(t),
    1 => libm::cos(t),
    2 => -libm::sin(t),
    _ => -libm::cos(t),
  };
  // An odd function; at integers, a zero with the sign of `x`.
  let s = if s == 0.0 { 0.0 } else { s };
  if x.is_sign_negative() { -s } else { s }
}

/// `cos(πx)` in `f64`.
fn cospi(x: f64) -> f64 {
  if !x.is_finite() {
    return f64::NAN
  }
  let (n, t) = reduce(x, 2.0);
  let c = match n {
    0 | 4 => libm::cos(t),
    1 => -libm::sin(t),
    2 => -libm::cos(t),
    _ => libm::sin(t),
  };
  // At odd multiples of 1/2, +0.
  if c == 0.0 { 0.0 } else { c }
}

/// `tan(πx)` in `f64`.
fn tanpi(x: f64) -> f64 {
  if !x.is_finite() {
    return f64::NAN
  }
  let a = libm::fabs(x);
  let r = libm::fmod(a, 1.0);
  if r == 0.0 {
    // +0 approaching even integers from above, -0 approaching odd ones.
    let even = libm::fmod(a, 2.0) == 0.0;
    return libm::copysign(0.0, if even { x } else { -x })
  }
  if r == 0.5 {
    // +∞ at `n + 1/2` for even `n`, -∞ for odd.
    let odd = libm::fmod(libm::floor(x), 2.0) != 0.0;
    return if odd { f64::NEG_INFINITY } else { f64::INFINITY }
  }
  let (n, t) = reduce(x, 1.0);
  let v = if n == 1 { -1.0 / libm::tan(t) } else { libm::tan(t) };
  if x.is_sign_negative() { -v } else { v }
}

impl<H: Hooks> DevMath<H> {
  backend_unary! {
    acos, asin, atan,
    cos, sin, tan,
  }

  /// `atan(y / x)`, in the quadrant of `(x, y)`.
  pub fn atan2<F: Backend>(y: F, x: F) -> F {
    Self::hooked2(y, x, <F as Backend>::atan2)
  }

  /// `acos(x) / π`.
  pub fn acospi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(libm::acos(x.to_f64()) / PI))
  }

  /// `asin(x) / π`.
  pub fn asinpi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(libm::asin(x.to_f64()) / PI))
  }

  /// `atan(x) / π`.
  pub fn atanpi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(libm::atan(x.to_f64()) / PI))
  }

  /// `atan2(y, x) / π`.
  pub fn atan2pi<F: Backend>(y: F, x: F) -> F {
    Self::hooked2(y, x, |y, x, _| F::from_f64(libm::atan2(y.to_f64(), x.to_f64()) / PI))
  }

  /// `sin(πx)`, with exact argument reduction.
  pub fn sinpi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(sinpi(x.to_f64())))
  }

  /// `cos(πx)`, with exact argument reduction.
  pub fn cospi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(cospi(x.to_f64())))
  }

  /// `tan(πx)`, with exact argument reduction.
  pub fn tanpi<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(tanpi(x.to_f64())))
  }

  /// `sin(x)`, writing `cos(x)` to `cos`.
  pub fn sincos<F: Backend>(x: F, cos: &mut F) -> F {
    let (s, c) = Self::flush(x).sincos(Self::STRATEGY);
    *cos = Self::flush(c);
    Self::flush(s)
  }
}
