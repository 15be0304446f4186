use super::*;

use core::cmp::Ordering;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

/// The error returned when a float cannot be converted to a [Rational] because it is ±∞ or NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

/// Convert a finite float into the [Rational] it represents exactly.
///
/// This is a **super-explicit** rendition of the IEEE encoding, straight from the definition, since
/// this is what we check everything else against.
pub fn to_rational<F: Float>(x: F) -> Result<Rational, NotFinite> {
  let raw = x.to_raw();
  let field = (raw & F::EXP_MASK) >> F::MANT_BITS;
  let mant = raw & F::MANT_MASK;
  let max_field = F::EXP_MASK >> F::MANT_BITS;
  if field == max_field {
    return Err(NotFinite)
  }
  // Normal: (1 + mant / 2^MANT_BITS) × 2^(field - BIAS)
  // Subnormal: (mant / 2^MANT_BITS) × 2^(1 - BIAS)
  let frac = Rational::from(mant) / Rational::power_of_2(F::MANT_BITS as i64);
  let magnitude = if field == 0 {
    frac * Rational::power_of_2((1 - F::BIAS) as i64)
  } else {
    (Rational::from(1) + frac) * Rational::power_of_2(field as i64 - F::BIAS as i64)
  };
  Ok(if x.sign() { -magnitude } else { magnitude })
}

/// Shorthand for [`to_rational`] on a value known to be finite. Panics otherwise.
pub fn exact<F: Float>(x: F) -> Rational {
  to_rational(x).unwrap_or_else(|_| panic!("{x:?} is not finite"))
}

/// Check whether `result` is the correctly rounded value, under `mode`, of some exact number. The
/// exact number is given only through `cmp`, which must return `q.cmp(exact)` for any `q`; this
/// way we can also check results whose exact value is irrational (like square roots).
///
/// The sign of a zero `result` is checked whenever the exact value is nonzero; for an exact zero,
/// either zero is accepted (the sign rules for exact zeros are specific to each operation).
pub fn is_correctly_rounded<F: Float>(
  result: F,
  mode: RoundingMode,
  cmp: impl Fn(&Rational) -> Ordering,
) -> bool {
  if result.is_nan_bits() { return false }
  // Negative results are checked as the positive result of the mirrored problem.
  if result.sign() {
    let mirrored = |q: &Rational| cmp(&-q).reverse();
    is_correctly_rounded_positive(result.negate(), mode.mirror(), &mirrored)
  } else {
    is_correctly_rounded_positive(result, mode, &cmp)
  }
}

fn is_correctly_rounded_positive<F: Float>(
  result: F,
  mode: RoundingMode,
  cmp: &dyn Fn(&Rational) -> Ordering,
) -> bool {
  debug_assert!(!result.sign());
  let zero = Rational::from(0);
  let two = Rational::from(2);
  let max = exact(F::max_finite(false));
  // The value MAX.next() would have if the exponent range were unbounded.
  let beyond_max = Rational::power_of_2(F::MAX_EXP as i64 + 1);

  // `Greater` if the exact value is > 0, etc.
  let exact_sign = cmp(&zero).reverse();
  if exact_sign == Ordering::Equal { return result.is_zero_bits() }
  if exact_sign == Ordering::Less && result.is_zero_bits() { return false }

  // Infinity is only correct if the exact value overflows.
  if !result.is_finite_bits() {
    return match mode {
      RoundingMode::NearestEven => cmp(&((&max + &beyond_max) / &two)) != Ordering::Greater,
      RoundingMode::TowardPositive => cmp(&max) == Ordering::Less,
      RoundingMode::TowardNegative | RoundingMode::TowardZero => false,
    }
  }

  // `result` represents exactly the number `curr`, while the immediately previous and next floats
  // represent exactly the numbers `prev` and `next`, respectively. The `next` of MAX is ∞, which
  // only matters for round to nearest, where it acts as `beyond_max`.
  let curr = exact(result);
  let prev = if result.is_zero_bits() {
    exact(F::min_subnormal(true))
  } else {
    exact(F::from_raw(result.to_raw() - 1))
  };
  let next = if result == F::max_finite(false) {
    None
  } else {
    Some(exact(F::from_raw(result.to_raw() + 1)))
  };
  let is_even = result.to_raw() & 1 == 0;

  let at_or_above = cmp(&curr) != Ordering::Greater;
  let at_or_below = cmp(&curr) != Ordering::Less;
  match mode {
    // `prev < exact ≤ curr`
    RoundingMode::TowardPositive => at_or_below && cmp(&prev) == Ordering::Less,
    // `curr ≤ exact < next`
    RoundingMode::TowardNegative => at_or_above && next.is_none_or(|next| cmp(&next) == Ordering::Greater),
    RoundingMode::TowardZero =>
      exact_sign == Ordering::Greater
        && at_or_above
        && next.is_none_or(|next| cmp(&next) == Ordering::Greater),
    // `exact` lies in `[(prev + curr) / 2, (curr + next) / 2]`, and if it is on either end, `curr`
    // needs to be even.
    RoundingMode::NearestEven => {
      let next = next.unwrap_or(beyond_max);
      let lo = cmp(&((&prev + &curr) / &two));
      let hi = cmp(&((&curr + &next) / &two));
      (lo == Ordering::Less || (lo == Ordering::Equal && is_even))
        && (hi == Ordering::Greater || (hi == Ordering::Equal && is_even))
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conversions() {
    assert_eq!(to_rational(1.0f32), Ok(Rational::from(1)));
    assert_eq!(to_rational(-0.5f64), Ok(Rational::from_signeds(-1, 2)));
    assert_eq!(to_rational(0.0f32), Ok(Rational::from(0)));
    assert_eq!(to_rational(f64::from_bits(1)), Ok(Rational::power_of_2(-1074i64)));
    assert_eq!(to_rational(f32::MAX), Ok(Rational::from((1u64 << 24) - 1) * Rational::power_of_2(104i64)));
    assert_eq!(to_rational(f32::INFINITY), Err(NotFinite));
    assert_eq!(to_rational(f64::NAN), Err(NotFinite));
  }

  #[test]
  fn oracle_exact() {
    let one = Rational::from(1);
    for mode in RoundingMode::ALL {
      assert!(is_correctly_rounded(1.0f32, mode, |q| q.cmp(&one)));
      assert!(!is_correctly_rounded(1.0f32 + f32::EPSILON, mode, |q| q.cmp(&one)));
      assert!(is_correctly_rounded(-0.0f64, mode, |q| q.cmp(&Rational::from(0))));
    }
  }

  #[test]
  fn oracle_ties() {
    // 1 + 2^-24 lies halfway between 1 and 1 + 2^-23.
    let tie = Rational::from(1) + Rational::power_of_2(-24i64);
    let up = 1.0f32 + f32::EPSILON;
    assert!(is_correctly_rounded(1.0f32, RoundingMode::NearestEven, |q| q.cmp(&tie)));
    assert!(!is_correctly_rounded(up, RoundingMode::NearestEven, |q| q.cmp(&tie)));
    assert!(is_correctly_rounded(up, RoundingMode::TowardPositive, |q| q.cmp(&tie)));
    assert!(!is_correctly_rounded(1.0f32, RoundingMode::TowardPositive, |q| q.cmp(&tie)));
    assert!(is_correctly_rounded(1.0f32, RoundingMode::TowardZero, |q| q.cmp(&tie)));
    let neg = -tie;
    assert!(is_correctly_rounded(-up, RoundingMode::TowardNegative, |q| q.cmp(&neg)));
    assert!(is_correctly_rounded(-1.0f32, RoundingMode::TowardPositive, |q| q.cmp(&neg)));
    assert!(is_correctly_rounded(-1.0f32, RoundingMode::TowardZero, |q| q.cmp(&neg)));
  }

  #[test]
  fn oracle_overflow() {
    let huge = Rational::power_of_2(200i64);
    assert!(is_correctly_rounded(f32::INFINITY, RoundingMode::NearestEven, |q| q.cmp(&huge)));
    assert!(is_correctly_rounded(f32::MAX, RoundingMode::TowardZero, |q| q.cmp(&huge)));
    assert!(!is_correctly_rounded(f32::MAX, RoundingMode::NearestEven, |q| q.cmp(&huge)));
    let neg = -huge;
    assert!(is_correctly_rounded(f32::MIN, RoundingMode::TowardPositive, |q| q.cmp(&neg)));
    assert!(is_correctly_rounded(f32::NEG_INFINITY, RoundingMode::TowardNegative, |q| q.cmp(&neg)));
  }

  #[test]
  fn oracle_underflow() {
    let tiny = Rational::power_of_2(-200i64);
    assert!(is_correctly_rounded(0.0f32, RoundingMode::NearestEven, |q| q.cmp(&tiny)));
    assert!(!is_correctly_rounded(-0.0f32, RoundingMode::NearestEven, |q| q.cmp(&tiny)));
    assert!(is_correctly_rounded(f32::from_bits(1), RoundingMode::TowardPositive, |q| q.cmp(&tiny)));
    let neg = -tiny;
    assert!(is_correctly_rounded(-0.0f32, RoundingMode::TowardZero, |q| q.cmp(&neg)));
    assert!(!is_correctly_rounded(0.0f32, RoundingMode::TowardZero, |q| q.cmp(&neg)));
  }
}
