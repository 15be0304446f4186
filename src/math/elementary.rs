use super::*;

/// Declare hook-aware unary functions that go straight to the backend.
macro_rules! backend_unary {
  ($($(#[$attr:meta])* $name:ident),* $(,)?) => {
    $(
      $(#[$attr])*
      #[inline]
      pub fn $name<F: Backend>(x: F) -> F {
        Self::hooked(x, <F as Backend>::$name)
      }
    )*
  };
}

pub(super) use backend_unary;

/// `2 / √π`.
const FRAC_2_SQRT_PI: f64 = core::f64::consts::FRAC_2_SQRT_PI;

/// A first guess for `erfinv(y)`, good to about 7 digits over `(-1, 1)`, by the polynomial
/// approximation of M. Giles, "Approximating the erfinv function" (2010).
fn erfinv_guess(y: f64) -> f64 {
  let mut w = -libm::log((1.0 - y) * (1.0 + y));
  let p = if w < 5.0 {
    w -= 2.5;
    let mut p = 2.810_226_36e-8;
    p = 3.432_739_39e-7 + p * w;
    p = -3.523_387_7e-6 + p * w;
    p = -4.391_506_54e-6 + p * w;
    p = 2.185_808_7e-4 + p * w;
    p = -1.253_725_03e-3 + p * w;
    p = -4.177_681_64e-3 + p * w;
    p = 2.466_407_27e-1 + p * w;
    1.501_409_41 + p * w
  } else {
    w = libm::sqrt(w) - 3.0;
    let mut p = -2.002_142_57e-4;
    p = 1.009_505_58e-4 + p * w;
    p = 1.349_343_22e-3 + p * w;
    p = -3.673_428_44e-3 + p * w;
    p = 5.739_507_73e-3 + p * w;
    p = -7.622_461_3e-3 + p * w;
    p = 9.438_870_47e-3 + p * w;
    p = 1.001_674_06 + p * w;
    2.832_976_82 + p * w
  };
  p * y
}

/// Newton on `erf(x) = a`, for `a` in `(0, 0.5]`, where `erf` is well conditioned.
fn erfinv_central(a: f64) -> f64 {
  let mut x = erfinv_guess(a);
  for _ in 0..8 {
    let step = (libm::erf(x) - a) / (FRAC_2_SQRT_PI * libm::exp(-x * x));
    x -= step;
    if libm::fabs(step) <= f64::EPSILON * x {
      break
    }
  }
  x
}

/// Solve `erfc(x) = c` for `c` in `(0, 0.5]`, by Newton on `ln erfc(x) = ln c`. `ln erfc` is
/// concave, so after at most one overshoot the iterates approach the root from above.
fn erfc_tail(c: f64) -> f64 {
  let ln_c = libm::log(c);
  let mut x = if c >= 0.0625 {
    erfinv_guess(1.0 - c)
  } else {
    // The asymptotic `erfc(x) ≈ exp(-x²) / (x √π)`.
    let t = -ln_c;
    libm::sqrt(t - 0.5 * libm::log(t) - 0.572_364_942_924_700_1)
  };
  let mut prev = x;
  for _ in 0..64 {
    let e = libm::erfc(x);
    if e == 0.0 {
      // Overshot into underflow; back off towards the last good iterate.
      x = 0.5 * (x + prev);
      continue
    }
    let ln_e = libm::log(e);
    // `erfc(x) / erfc'(x)` up to sign, as one exponential so that it does not overflow.
    let step = (ln_e - ln_c) * libm::exp(x * x + ln_e) / FRAC_2_SQRT_PI;
    prev = x;
    x += step;
    if libm::fabs(step) <= f64::EPSILON * x {
      break
    }
  }
  x
}

/// The inverse error function, in `f64`.
fn erfinv(y: f64) -> f64 {
  if y.is_nan() || !(-1.0..=1.0).contains(&y) {
    return f64::NAN
  }
  if y == 0.0 {
    return y
  }
  let a = libm::fabs(y);
  if a == 1.0 {
    return libm::copysign(f64::INFINITY, y)
  }
  // Near 1, `erf` is flat; solve on the complement instead, which is exact for `a ≥ 0.5`.
  let x = if a <= 0.5 { erfinv_central(a) } else { erfc_tail(1.0 - a) };
  libm::copysign(x, y)
}

/// The inverse complementary error function, in `f64`.
fn erfcinv(y: f64) -> f64 {
  if y.is_nan() || !(0.0..=2.0).contains(&y) {
    return f64::NAN
  }
  if y == 0.0 {
    return f64::INFINITY
  }
  if y == 2.0 {
    return f64::NEG_INFINITY
  }
  if y > 1.0 {
    // Exact for `y` in `[1, 2]`.
    return -erfcinv(2.0 - y)
  }
  if y == 1.0 {
    return 0.0
  }
  // `1 - y` is exact for `y` in `[0.5, 1]`.
  if y > 0.5 { erfinv_central(1.0 - y) } else { erfc_tail(y) }
}

impl<H: Hooks> DevMath<H> {
  backend_unary! {
    acosh, asinh, atanh, cosh, sinh, tanh,
    exp, exp2, exp10, expm1,
    /// Natural logarithm.
    log,
    log2, log10, log1p,
    cbrt,
    erf, erfc,
  }

  /// `x^y`, with the C99 special cases.
  pub fn pow<F: Backend>(x: F, y: F) -> F {
    Self::hooked2(x, y, <F as Backend>::pow)
  }

  /// `x^y` for `x ≥ 0`, defined as `exp(y × ln x)`: negative `x` is invalid, and so are the
  /// indeterminate forms `0^0`, `∞^0` and `1^∞`.
  pub fn powr<F: Backend>(x: F, y: F) -> F {
    if !H::FINITE_ONLY {
      if x.is_nan_bits() { return x.quiet() }
      if y.is_nan_bits() { return y.quiet() }
      let (a, b) = (x.to_f64(), y.to_f64());
      let indeterminate = (a == 0.0 || a == f64::INFINITY) && b == 0.0
        || a == 1.0 && b.is_infinite();
      if indeterminate {
        return F::default_nan()
      }
    }
    if x.sign() && !x.is_zero_bits() {
      return F::default_nan()
    }
    // `-0` behaves as `+0`.
    Self::pow(Self::fabs(x), y)
  }

  /// `x^n` for integer `n`. `pown(x, 0)` is 1 for every `x`.
  pub fn pown<F: Backend>(x: F, n: i32) -> F {
    let x = Self::flush(x);
    Self::flush(F::from_f64(libm::pow(x.to_f64(), n as f64)))
  }

  /// `x^(1/n)`. For negative `x`, defined only for odd `n`; `n = 0` is invalid.
  pub fn rootn<F: Backend>(x: F, n: i32) -> F {
    let x = Self::flush(x);
    if x.is_nan_bits() { return x.quiet() }
    let odd = n & 1 == 1;
    if n == 0 || (x.sign() && !x.is_zero_bits() && !odd) {
      return F::default_nan()
    }
    let a = libm::fabs(x.to_f64());
    // `1/2` and `1/3` are inexact, so square and cube roots go to their own routines.
    let r = match n.unsigned_abs() {
      2 => libm::sqrt(a),
      3 => libm::cbrt(a),
      _ => libm::pow(a, 1.0 / n as f64),
    };
    let r = if n < -1 && n.unsigned_abs() <= 3 { 1.0 / r } else { r };
    // The result has the sign of `x` for odd `n`, and is positive for even `n` (including on
    // signed zeros).
    Self::flush(F::from_f64(if odd && x.sign() { -r } else { r }))
  }

  /// `1 / ∛x`.
  pub fn rcbrt<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(1.0 / libm::cbrt(x.to_f64())))
  }

  /// The inverse of [`DevMath::erf`].
  pub fn erfinv<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(erfinv(x.to_f64())))
  }

  /// The inverse of [`DevMath::erfc`].
  pub fn erfcinv<F: Backend>(x: F) -> F {
    Self::hooked(x, |x, _| F::from_f64(erfcinv(x.to_f64())))
  }
}
