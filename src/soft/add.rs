use super::*;
use crate::underlying::wide::{bit_len, shr_sticky};

/// Add two exact values, returning `None` if they cancel out exactly.
///
/// Both operands must be exact (no sticky bit), nonzero, and have at most 107 significant bits
/// (which is enough for the exact product of two binary64 significands, as needed by fma).
pub(crate) fn add_kernel(x: Unrounded, y: Unrounded) -> Option<Unrounded> {
  debug_assert!(
    !x.sticky && !y.sticky && x.sig != 0 && y.sig != 0,
    "Precondition violated: {x:?} and {y:?} must be exact and nonzero",
  );
  debug_assert!(bit_len(x.sig) <= 107 && bit_len(y.sig) <= 107);

  // Let `big` be the operand with the larger exponent (not necessarily larger magnitude!).
  let (big, small) = if x.exp >= y.exp { (x, y) } else { (y, x) };
  let gap = (big.exp - small.exp) as u32;

  // To align the two significands we need to shift one relative to the other by `gap` places.
  // Shifting `big` left loses nothing, so do as much of that as we can while leaving one bit of
  // headroom for the carry of the sum; shift `small` right for the rest, accumulating lost bits
  // in the sticky bit.
  //
  // If any bits are lost, it's because `gap` was more than the headroom, which means `big` now
  // occupies bit 125 or 126 while `small` is below bit 107. So the result is dominated by `big`,
  // has far more than `p + 2` bits, and the unknown lost part can only affect the sticky bit.
  let lift = gap.min(126 - bit_len(big.sig));
  let big_sig = big.sig << lift;
  let exp = big.exp - lift as i32;
  let (small_sig, sticky) = shr_sticky(small.sig, gap - lift);

  if big.sign == small.sign {
    return Some(Unrounded { sign: big.sign, exp, sig: big_sig + small_sig, sticky })
  }

  if sticky {
    // The true value of `small` is `small_sig + ε`, so `big - small` is `(big_sig - small_sig - 1)
    // + (1 - ε)`, where the second part is again in `(0, 1)`.
    return Some(Unrounded { sign: big.sign, exp, sig: big_sig - small_sig - 1, sticky: true })
  }

  use core::cmp::Ordering;
  match big_sig.cmp(&small_sig) {
    Ordering::Equal => None,
    Ordering::Greater => Some(Unrounded { sign: big.sign, exp, sig: big_sig - small_sig, sticky }),
    Ordering::Less => Some(Unrounded { sign: small.sign, exp, sig: small_sig - big_sig, sticky }),
  }
}

/// The sign of an exact zero sum of operands with opposite signs: `+0`, except when rounding
/// toward −∞.
#[inline]
pub(crate) fn cancellation_sign(mode: RoundingMode) -> bool {
  mode == RoundingMode::TowardNegative
}

/// `x + y`, correctly rounded according to `mode`.
pub fn add<F: Float>(x: F, y: F, mode: RoundingMode) -> F {
  match (classify(x), classify(y)) {
    (Class::Nan, _) => x.quiet(),
    (_, Class::Nan) => y.quiet(),
    (Class::Infinite { sign: a }, Class::Infinite { sign: b }) =>
      if a == b { x } else { F::default_nan() },
    (Class::Infinite { .. }, _) => x,
    (_, Class::Infinite { .. }) => y,
    (Class::Zero { sign: a }, Class::Zero { sign: b }) =>
      F::zero(if a == b { a } else { cancellation_sign(mode) }),
    (Class::Zero { .. }, _) => y,
    (_, Class::Zero { .. }) => x,
    (Class::Regular(a), Class::Regular(b)) => match add_kernel(a.into(), b.into()) {
      Some(sum) => sum.round(mode),
      None => F::zero(cancellation_sign(mode)),
    },
  }
}

/// `x - y`, correctly rounded according to `mode`.
#[inline]
pub fn sub<F: Float>(x: F, y: F, mode: RoundingMode) -> F {
  if let Some(nan) = propagate_nan(&[x, y]) {
    return nan
  }
  add(x, y.negate(), mode)
}
