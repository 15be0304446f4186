use super::*;

/// A float, split by the way operations have to treat it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Class {
  Nan,
  Infinite { sign: bool },
  Zero { sign: bool },
  Regular(Decoded),
}

/// Classify `x`, unpacking it if it is finite and nonzero.
#[inline]
pub(crate) fn classify<F: Float>(x: F) -> Class {
  let mag = x.magnitude();
  let sign = x.sign();
  if unlikely(mag == 0) {
    Class::Zero { sign }
  } else if unlikely(mag >= F::EXP_MASK) {
    if mag == F::EXP_MASK { Class::Infinite { sign } } else { Class::Nan }
  } else {
    Class::Regular(decode_regular(x))
  }
}

/// Unpack a finite nonzero `x` into a [`Decoded`].
///
/// The biased exponent field `e` and mantissa field `m` of an IEEE float mean
///
///   - `1.m × 2^(e - BIAS)` if `e != 0` (normal), or
///   - `0.m × 2^(1 - BIAS)` if `e == 0` (subnormal),
///
/// so in both cases we can make the significand an integer by moving the binary point `MANT_BITS`
/// places to the right and compensating in the exponent. The only difference is whether the hidden
/// bit is there, and whether the exponent field is used as-is or clamped to 1.
#[inline]
pub(crate) fn decode_regular<F: Float>(x: F) -> Decoded {
  debug_assert!(
    x.is_finite_bits() && !x.is_zero_bits(),
    "Precondition violated: {x:?} is not finite and nonzero",
  );
  let raw = x.to_raw();
  let field = ((raw & F::EXP_MASK) >> F::MANT_BITS) as i32;
  let mant = raw & F::MANT_MASK;
  let (exp, sig) = if field == 0 {
    (F::MIN_EXP, mant)
  } else {
    (field - F::BIAS, mant | (1 << F::MANT_BITS))
  };
  Decoded { sign: x.sign(), exp: exp - F::MANT_BITS as i32, sig }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn specials() {
    assert_eq!(classify(f32::NAN), Class::Nan);
    assert_eq!(classify(-f64::NAN), Class::Nan);
    assert_eq!(classify(f32::INFINITY), Class::Infinite { sign: false });
    assert_eq!(classify(f64::NEG_INFINITY), Class::Infinite { sign: true });
    assert_eq!(classify(0.0f32), Class::Zero { sign: false });
    assert_eq!(classify(-0.0f64), Class::Zero { sign: true });
  }

  #[test]
  fn normals() {
    assert_eq!(decode_regular(1.0f32), Decoded { sign: false, exp: -23, sig: 1 << 23 });
    assert_eq!(decode_regular(-1.5f64), Decoded { sign: true, exp: -52, sig: 3 << 51 });
    assert_eq!(
      decode_regular(f32::MAX),
      Decoded { sign: false, exp: 127 - 23, sig: (1 << 24) - 1 },
    );
    assert_eq!(
      decode_regular(f64::MIN_POSITIVE),
      Decoded { sign: false, exp: -1022 - 52, sig: 1 << 52 },
    );
  }

  #[test]
  fn subnormals() {
    assert_eq!(
      decode_regular(f32::from_bits(1)),
      Decoded { sign: false, exp: -126 - 23, sig: 1 },
    );
    assert_eq!(
      decode_regular(-f64::from_bits(0x000f_ffff_ffff_ffff)),
      Decoded { sign: true, exp: -1022 - 52, sig: 0x000f_ffff_ffff_ffff },
    );
  }

  #[test]
  fn value_matches() {
    for x in [1.0f64, 0.1, -3.75e-300, 1.7e308, 5e-324, -2.5e-310] {
      let d = decode_regular(x);
      let value = d.sig as f64 * libm::exp2(d.exp as f64);
      assert_eq!(if d.sign { -value } else { value }, x);
    }
  }
}
