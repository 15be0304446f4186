use super::*;
use crate::underlying::wide::{bit_len, shr_round_sticky};

impl Unrounded {
  /// Round to a float of type `F` according to `mode`, and pack.
  ///
  /// The result is always the correctly rounded value of `(-1)^sign × (sig + ε) × 2^exp`, including
  /// on overflow and underflow; see the docs for [`Unrounded`] for the precondition on `sticky`.
  pub(crate) fn round<F: Float>(self, mode: RoundingMode) -> F {
    debug_assert!(self.sig != 0, "Precondition violated: {self:?} has a zero significand");

    // The exponent of the leading 1 bit of the exact value.
    let top = self.exp + bit_len(self.sig) as i32 - 1;

    // The exponent `q` of the last bit we keep. Normally that's `p - 1` bits below the leading 1;
    // but if the value lies in the subnormal range, the last bit is pinned to the ulp of the
    // subnormals, and we keep fewer bits.
    let q = top.max(F::MIN_EXP) - F::MANT_BITS as i32;
    let shift = q - self.exp;
    let (mut kept, round, sticky) = if shift > 0 {
      let (kept, round, sticky) = shr_round_sticky(self.sig, shift as u32);
      (kept, round, sticky || self.sticky)
    } else {
      // No bits lost: the value is already short enough. It can only be inexact if it was
      // under-specified, which the precondition rules out.
      debug_assert!(!self.sticky, "Precondition violated: {self:?} is too short to be inexact");
      (self.sig << -shift, false, false)
    };

    // Decide whether to round away from zero (i.e. increment the magnitude).
    let away = match mode {
      RoundingMode::NearestEven => round && (sticky || kept & 1 == 1),
      RoundingMode::TowardPositive => !self.sign && (round || sticky),
      RoundingMode::TowardNegative => self.sign && (round || sticky),
      RoundingMode::TowardZero => false,
    };
    kept += away as u128;

    // Now `kept` holds the magnitude in units of `2^q`, with at most `p + 1` bits (if the
    // increment carried all the way). Pack it: a `kept` with the hidden bit set is a normal with
    // exponent `q + MANT_BITS`, one without is a subnormal (or zero, if everything was rounded
    // away). The nice thing about the IEEE layout is that in the case where the increment carried
    // out of the mantissa, *adding* the mantissa to the exponent field does exactly the right
    // thing: the carry bumps the exponent. Same for a subnormal that rounded up to `MIN_POSITIVE`.
    let biased = (q - (F::MIN_EXP - F::MANT_BITS as i32)) as u128;
    let raw = (biased << F::MANT_BITS) + kept;
    if unlikely(raw >= F::EXP_MASK as u128) {
      return overflow(self.sign, mode)
    }
    F::from_raw(raw as u64).with_sign(self.sign)
  }
}

/// The result of an operation whose exact value is beyond `±MAX` in magnitude (after rounding
/// with unbounded exponent): either ±∞ or ±MAX depending on the direction.
#[inline]
pub(crate) fn overflow<F: Float>(sign: bool, mode: RoundingMode) -> F {
  let to_infinity = match mode {
    RoundingMode::NearestEven => true,
    RoundingMode::TowardPositive => !sign,
    RoundingMode::TowardNegative => sign,
    RoundingMode::TowardZero => false,
  };
  if to_infinity { F::infinity(sign) } else { F::max_finite(sign) }
}
