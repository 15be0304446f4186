use super::*;

/// The exact product of two regular values. At most 106 significant bits.
#[inline]
pub(crate) fn mul_kernel(x: Decoded, y: Decoded) -> Unrounded {
  Unrounded {
    sign: x.sign ^ y.sign,
    exp: x.exp + y.exp,
    sig: x.sig as u128 * y.sig as u128,
    sticky: false,
  }
}

/// `x × y`, correctly rounded according to `mode`.
pub fn mul<F: Float>(x: F, y: F, mode: RoundingMode) -> F {
  let sign = x.sign() ^ y.sign();
  match (classify(x), classify(y)) {
    (Class::Nan, _) => x.quiet(),
    (_, Class::Nan) => y.quiet(),
    (Class::Infinite { .. }, Class::Zero { .. }) | (Class::Zero { .. }, Class::Infinite { .. }) =>
      F::default_nan(),
    (Class::Infinite { .. }, _) | (_, Class::Infinite { .. }) => F::infinity(sign),
    (Class::Zero { .. }, _) | (_, Class::Zero { .. }) => F::zero(sign),
    (Class::Regular(a), Class::Regular(b)) => mul_kernel(a, b).round(mode),
  }
}
