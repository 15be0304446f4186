use super::*;

/// Which integer to pick when rounding to an integral value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
  Ceil,
  Floor,
  Trunc,
  /// Nearest, ties away from zero.
  HalfAway,
  /// Nearest, ties to even.
  HalfEven,
}

/// Round `x` to an integral value, working directly on the bit pattern. The sign is always kept,
/// so e.g. `ceil(-0.5)` is `-0`.
fn round_to_integral<F: Float>(x: F, direction: Direction) -> F {
  if !x.is_finite_bits() {
    return if x.is_nan_bits() { x.quiet() } else { x }
  }
  let sign = x.sign();
  let mag = x.magnitude();
  if mag == 0 {
    return x
  }

  // Unbiased exponent of the leading bit; subnormals come out below -BIAS, which is all we need
  // to know about them.
  let exp = (mag >> F::MANT_BITS) as i32 - F::BIAS;

  // |x| < 1: the result is 0 or 1.
  if exp < 0 {
    let half = F::one().to_raw() - (1 << F::MANT_BITS);
    let up = match direction {
      Direction::Ceil => !sign,
      Direction::Floor => sign,
      Direction::Trunc => false,
      Direction::HalfAway => mag >= half,
      Direction::HalfEven => mag > half,
    };
    return if up { F::one().with_sign(sign) } else { F::zero(sign) }
  }

  // All mantissa bits are integral: nothing to do.
  if exp >= F::MANT_BITS as i32 {
    return x
  }

  // Otherwise the lowest `MANT_BITS - exp` bits of the mantissa are the fractional part.
  let frac_mask = F::MANT_MASK >> exp;
  let one = frac_mask + 1;
  let frac = mag & frac_mask;
  if frac == 0 {
    return x
  }
  let truncated = mag & !frac_mask;
  let half = one >> 1;
  let up = match direction {
    Direction::Ceil => !sign,
    Direction::Floor => sign,
    Direction::Trunc => false,
    Direction::HalfAway => frac >= half,
    Direction::HalfEven => frac > half || (frac == half && truncated & one != 0),
  };
  // If adding one carries out of the mantissa, it bumps the exponent, which is exactly right.
  let mag = if up { truncated + one } else { truncated };
  F::from_raw(mag).with_sign(sign)
}

impl<H: Hooks> DevMath<H> {
  pub fn ceil<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::Ceil)
  }

  pub fn floor<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::Floor)
  }

  pub fn trunc<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::Trunc)
  }

  /// Nearest integral value, ties away from zero.
  pub fn round<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::HalfAway)
  }

  /// Nearest integral value, ties to even. There is no dynamic rounding mode to honour.
  pub fn rint<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::HalfEven)
  }

  /// Same as [`DevMath::rint`].
  pub fn nearbyint<F: Float>(x: F) -> F {
    round_to_integral(x, Direction::HalfEven)
  }
}
