use super::*;
use crate::underlying::wide::{bit_len, sqrt_sticky};

/// The square root of a positive regular value, truncated to at least 62 significant bits plus a
/// sticky bit.
fn sqrt_kernel(x: Decoded) -> Unrounded {
  debug_assert!(!x.sign);
  // We want `sqrt(sig × 2^exp) = sqrt(sig) × 2^(exp/2)`, so first make `exp` even. Then scale the
  // significand up (by an even number of places, again) to fill most of a `u128`, so that its
  // integer square root has about 63 bits. The remainder tells us whether the root was exact.
  let (mut sig, mut exp) = (x.sig as u128, x.exp);
  if exp & 1 != 0 {
    sig <<= 1;
    exp -= 1;
  }
  let lift = (126 - bit_len(sig)) & !1;
  sig <<= lift;
  exp -= lift as i32;
  let (root, sticky) = sqrt_sticky(sig);
  Unrounded { sign: false, exp: exp / 2, sig: root, sticky }
}

/// `√x`, correctly rounded according to `mode`. `sqrt(-0)` is `-0`.
pub fn sqrt<F: Float>(x: F, mode: RoundingMode) -> F {
  match classify(x) {
    Class::Nan => x.quiet(),
    Class::Zero { .. } => x,
    Class::Infinite { sign: false } => x,
    Class::Infinite { sign: true } => F::default_nan(),
    Class::Regular(a) if a.sign => F::default_nan(),
    Class::Regular(a) => sqrt_kernel(a).round(mode),
  }
}
