use super::*;

/// The quotient of two regular values, truncated to at least 64 significant bits plus a sticky
/// bit.
fn div_kernel(x: Decoded, y: Decoded) -> Unrounded {
  // Normalise both significands so that their leading 1 is at bit 63 (this takes care of
  // subnormals). Then the quotient `(a << 64) / b` lies in `(2^63, 2^65)`, which is plenty of bits
  // for any of our formats, and the remainder tells us whether it's exact.
  let (lx, ly) = (x.sig.leading_zeros(), y.sig.leading_zeros());
  let a = ((x.sig << lx) as u128) << 64;
  let b = (y.sig << ly) as u128;
  let (quot, rem) = (a / b, a % b);
  Unrounded {
    sign: x.sign ^ y.sign,
    exp: (x.exp - lx as i32) - (y.exp - ly as i32) - 64,
    sig: quot,
    sticky: rem != 0,
  }
}

/// `x ÷ y`, correctly rounded according to `mode`.
pub fn div<F: Float>(x: F, y: F, mode: RoundingMode) -> F {
  let sign = x.sign() ^ y.sign();
  match (classify(x), classify(y)) {
    (Class::Nan, _) => x.quiet(),
    (_, Class::Nan) => y.quiet(),
    (Class::Infinite { .. }, Class::Infinite { .. }) | (Class::Zero { .. }, Class::Zero { .. }) =>
      F::default_nan(),
    (Class::Infinite { .. }, _) | (_, Class::Zero { .. }) => F::infinity(sign),
    (Class::Zero { .. }, _) | (_, Class::Infinite { .. }) => F::zero(sign),
    (Class::Regular(a), Class::Regular(b)) => div_kernel(a, b).round(mode),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::soft::{rational, test};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  fn is_correct<F: Float>(x: F, y: F, mode: RoundingMode) -> bool {
    let result = div(x, y, mode);
    if y.is_zero_bits() {
      return result.is_nan_bits() == x.is_zero_bits()
    }
    let exact: Rational = rational::exact(x) / rational::exact(y);
    rational::is_correctly_rounded(result, mode, |q| q.cmp(&exact))
      && result.sign() == (x.sign() ^ y.sign())
  }

  #[test]
  fn specials() {
    for mode in RoundingMode::ALL {
      assert!(div(0.0f32, -0.0, mode).is_nan());
      assert!(div(f64::INFINITY, f64::NEG_INFINITY, mode).is_nan());
      assert!(div(f64::NAN, 1.0, mode).is_nan());
      assert_eq!(div(1.0f32, -0.0, mode), f32::NEG_INFINITY);
      assert_eq!(div(-1.0f64, f64::INFINITY, mode).to_bits(), 1 << 63);
      assert_eq!(div(f32::NEG_INFINITY, -3.0, mode), f32::INFINITY);
    }
  }

  #[test]
  fn directed() {
    assert_eq!(div(1.0f32, 3.0, RoundingMode::NearestEven), 1.0 / 3.0);
    assert_eq!(div(1.0f32, 3.0, RoundingMode::TowardPositive), 1.0 / 3.0);
    assert_eq!(div(1.0f32, 3.0, RoundingMode::TowardZero).to_bits(), (1.0f32 / 3.0).to_bits() - 1);
    assert_eq!(div(2.0f32, 3.0, RoundingMode::TowardPositive), 2.0 / 3.0);
    assert_eq!(div(-1.0f64, 3.0, RoundingMode::TowardZero), -1.0 / 3.0);
    assert_eq!(div(-1.0f64, 3.0, RoundingMode::TowardNegative).to_bits(), (-1.0f64 / 3.0).to_bits() + 1);
    assert_eq!(div(f64::MAX, 0.5, RoundingMode::TowardZero), f64::MAX);
    assert_eq!(div(f64::from_bits(1), 2.0, RoundingMode::TowardPositive).to_bits(), 1);
    assert_eq!(div(f64::from_bits(1), 2.0, RoundingMode::NearestEven).to_bits(), 0);
  }

  macro_rules! mk_tests {
    ($name:ident, $t:ty) => {
      mod $name {
        use super::*;

        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

          #[test]
          fn proptest(x in test::finite::<$t>(), y in test::finite::<$t>(), mode in test::mode()) {
            prop_assert!(is_correct(x, y, mode), "{x:?} / {y:?} = {:?}", div(x, y, mode))
          }

          #[test]
          fn moderate_proptest(x in test::moderate::<$t>(), y in test::moderate::<$t>(), mode in test::mode()) {
            prop_assert!(is_correct(x, y, mode), "{x:?} / {y:?} = {:?}", div(x, y, mode))
          }
        }
      }
    };
  }

  #[cfg(feature = "narrow")]
  mk_tests!{narrow, half::f16}
  mk_tests!{single, f32}
  mk_tests!{double, f64}
}
