//! Helpers on the 128-bit intermediates of the rounding engine.

/// Number of significant bits in `x` (0 for 0).
#[inline]
pub const fn bit_len(x: u128) -> u32 {
  u128::BITS - x.leading_zeros()
}

/// Shift `x` right by `n` bits, and report whether any 1 bit was shifted out.
#[inline]
pub const fn shr_sticky(x: u128, n: u32) -> (u128, bool) {
  if n == 0 {
    (x, false)
  } else if n >= u128::BITS {
    (0, x != 0)
  } else {
    (x >> n, x & ((1 << n) - 1) != 0)
  }
}

/// Shift `x` right by `n` bits, and return the kept bits, the first bit shifted out (the "round"
/// bit), and whether any of the remaining shifted-out bits was 1 (the "sticky" bit).
#[inline]
pub const fn shr_round_sticky(x: u128, n: u32) -> (u128, bool, bool) {
  if n == 0 {
    (x, false, false)
  } else if n > u128::BITS {
    (0, false, x != 0)
  } else {
    let kept = if n == u128::BITS { 0 } else { x >> n };
    let round = (x >> (n - 1)) & 1 == 1;
    let rest = x & ((1 << (n - 1)) - 1);
    (kept, round, rest != 0)
  }
}

/// Integer square root, and whether it was inexact.
#[inline]
pub const fn sqrt_sticky(x: u128) -> (u128, bool) {
  let root = x.isqrt();
  (root, root * root != x)
}
