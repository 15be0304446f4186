//! The implementations behind every catalog entry, as associated functions of [`DevMath`].
//!
//! Each function is generic over one [`Float`] (for the functions that reach the numerical
//! backend, one [`Backend`]), which is how the same base function is replicated over the three
//! precisions. The hook configuration is the type parameter of `DevMath` itself, so that e.g.
//! `DevMath::<FastTarget>::mad::<f32>` and `DevMath::<Conservative>::mad::<f32>` are different,
//! fully monomorphised functions, each with its hooks folded in.

use core::marker::PhantomData;

use crate::{Backend, BuildHooks, Conservative, Float, Hooks, Precision, Strategy};
use crate::underlying::Sealed;

/// The device math library, configured by the feature hooks `H`.
///
/// ```
/// # use devmath::{Reference, FpClass};
/// assert_eq!(Reference::floor(-2.5f32), -3.0);
/// assert_eq!(Reference::fpclassify(f64::MIN_POSITIVE / 2.0), FpClass::Subnormal);
/// assert_eq!(Reference::add_rtp(1.0f32, 1e-30), 1.0 + f32::EPSILON);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DevMath<H: Hooks = Conservative>(PhantomData<fn() -> H>);

/// The library with every hook at "no": the IEEE-compliant reference behaviour.
pub type Reference = DevMath<Conservative>;

/// The library with the hooks chosen by the Cargo features of this build; this is the
/// configuration behind the exported symbols.
pub type Build = DevMath<BuildHooks>;

impl<H: Hooks> DevMath<H> {
  /// The backend strategy selected by the hooks.
  const STRATEGY: Strategy = if H::FAST_RELAXED { Strategy::Relaxed } else { Strategy::Precise };

  /// Flush a subnormal to a zero of the same sign, if the DAZ hook is set.
  #[inline]
  fn flush<F: Float>(x: F) -> F {
    if H::DAZ && x.is_subnormal_bits() { F::zero(x.sign()) } else { x }
  }

  /// Whether fused multiply-add is cheap at precision `F`.
  #[inline]
  const fn fast_fma<F: Float>() -> bool {
    match F::PRECISION {
      Precision::Narrow | Precision::Single => H::HAVE_FAST_FMA32,
      Precision::Double => H::HAVE_FAST_FMA64,
    }
  }

  /// A unary backend call, with the hooks applied around it.
  #[inline]
  fn hooked<F: Backend>(x: F, f: impl FnOnce(F, Strategy) -> F) -> F {
    Self::flush(f(Self::flush(x), Self::STRATEGY))
  }

  /// A binary backend call, with the hooks applied around it.
  #[inline]
  fn hooked2<F: Backend>(x: F, y: F, f: impl FnOnce(F, F, Strategy) -> F) -> F {
    Self::flush(f(Self::flush(x), Self::flush(y), Self::STRATEGY))
  }
}

/// Classification.
mod classify;
pub use classify::FpClass;

/// Bit manipulation: sign, exponent, payload, neighbours.
mod manip;

/// The split functions with an integral/fractional or mantissa/exponent out-parameter.
mod split;

/// Rounding to an integral value.
mod round_int;

/// Min, max, and friends.
mod minmax;

/// Basic arithmetic, including the rounding-mode variants.
mod arith;

/// Exponentials, logarithms, powers, hyperbolic functions, roots, error functions.
mod elementary;

/// Trigonometric functions.
mod trig;

/// Gamma and Bessel functions.
mod special;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Function, Purity, catalog};

  struct Daz;
  impl Hooks for Daz {
    const DAZ: bool = true;
  }

  #[test]
  fn flush() {
    let tiny = f32::from_bits(0x8000_0001);
    assert_eq!(Reference::flush(tiny).to_bits(), tiny.to_bits());
    assert_eq!(DevMath::<Daz>::flush(tiny).to_bits(), 0x8000_0000);
    assert_eq!(DevMath::<Daz>::flush(f32::MIN_POSITIVE), f32::MIN_POSITIVE);
    assert_eq!(DevMath::<Daz>::exp(f64::from_bits(1)), 1.0);
  }

  #[test]
  fn fast_fma_by_precision() {
    struct Fma32;
    impl Hooks for Fma32 {
      const HAVE_FAST_FMA32: bool = true;
    }
    assert!(DevMath::<Fma32>::fast_fma::<f32>());
    assert!(!DevMath::<Fma32>::fast_fma::<f64>());
    assert!(!Reference::fast_fma::<f32>());
  }

  /// Every entry with an out-parameter, hammered from many threads with distinct slots; the
  /// results must be the same as single-threaded.
  #[test]
  fn out_params_concurrent() {
    let inputs: Vec<f64> = (-64..64).map(|i| i as f64 * 0.37 + 0.01).collect();
    let run = |name: &str| -> Vec<(u64, u64)> {
      match Reference::implementation::<f64>(name) {
        Some(Function::OutFloat(f)) => inputs.iter().map(|&x| {
          let mut out = f64::NAN;
          let y = f(x, &mut out);
          (y.to_bits(), out.to_bits())
        }).collect(),
        Some(Function::OutInt(f)) => inputs.iter().map(|&x| {
          let mut out = i32::MIN;
          let y = f(x, &mut out);
          (y.to_bits(), out as u64)
        }).collect(),
        Some(Function::Remquo(f)) => inputs.iter().map(|&x| {
          let mut out = i32::MIN;
          let y = f(x, 1.5, &mut out);
          (y.to_bits(), out as u64)
        }).collect(),
        other => panic!("{name} has no out-parameter: {other:?}"),
      }
    };
    let names: Vec<&str> = catalog::FUNCTIONS.iter()
      .filter(|s| s.out_param().is_some())
      .map(|s| s.name)
      .collect();
    assert_eq!(names.len(), 6);
    assert!(catalog::FUNCTIONS.iter().filter(|s| s.out_param().is_some()).all(|s| s.purity == Purity::Impure));
    let expected: Vec<_> = names.iter().map(|name| run(name)).collect();
    std::thread::scope(|scope| {
      let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| {
        names.iter().map(|name| run(name)).collect::<Vec<_>>()
      })).collect();
      for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
      }
    });
  }
}
