use super::*;

/// The class of a floating point value, as returned by `fpclassify`. The discriminants are the
/// values returned at the exported ABI, and are the same at every precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum FpClass {
  Nan = 0,
  Infinite = 1,
  Zero = 2,
  Subnormal = 3,
  Normal = 4,
}

impl FpClass {
  pub const ALL: [FpClass; 5] =
    [FpClass::Nan, FpClass::Infinite, FpClass::Zero, FpClass::Subnormal, FpClass::Normal];

  /// The integer returned by `fpclassify` at the exported ABI.
  pub const fn code(self) -> i32 {
    self as i32
  }

  pub fn from_code(code: i32) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.code() == code)
  }
}

impl<H: Hooks> DevMath<H> {
  pub fn fpclassify<F: Float>(x: F) -> FpClass {
    let mag = x.magnitude();
    if mag > F::EXP_MASK {
      FpClass::Nan
    } else if mag == F::EXP_MASK {
      FpClass::Infinite
    } else if mag == 0 {
      FpClass::Zero
    } else if mag <= F::MANT_MASK {
      FpClass::Subnormal
    } else {
      FpClass::Normal
    }
  }

  pub fn isnan<F: Float>(x: F) -> bool {
    x.is_nan_bits()
  }

  pub fn isinf<F: Float>(x: F) -> bool {
    x.magnitude() == F::EXP_MASK
  }

  pub fn isfinite<F: Float>(x: F) -> bool {
    x.is_finite_bits()
  }

  pub fn isnormal<F: Float>(x: F) -> bool {
    Self::fpclassify(x) == FpClass::Normal
  }

  /// Whether the sign bit is set, also on zeros and NaNs.
  pub fn signbit<F: Float>(x: F) -> bool {
    x.sign()
  }
}
