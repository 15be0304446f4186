//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::Float;
use crate::soft::{Decoded, RoundingMode, Unrounded, decode_regular};

impl Decoded {
  /// Unpack a finite nonzero `x`.
  pub fn bench_decode<F: Float>(x: F) -> Decoded {
    decode_regular(x)
  }

  /// Round back to a float of type `F`.
  pub fn bench_round<F: Float>(self, mode: RoundingMode) -> F {
    Unrounded::from(self).round(mode)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn decode_f32(arg: f32) -> Decoded {
  decode_regular(arg)
}

#[unsafe(no_mangle)]
pub fn decode_f64(arg: f64) -> Decoded {
  decode_regular(arg)
}

#[unsafe(no_mangle)]
pub fn round_f32(arg: Decoded, mode: RoundingMode) -> f32 {
  Unrounded::from(arg).round(mode)
}

#[unsafe(no_mangle)]
pub fn round_f64(arg: Decoded, mode: RoundingMode) -> f64 {
  Unrounded::from(arg).round(mode)
}
