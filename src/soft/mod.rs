//! This module and its submodules contain a software implementation of the IEEE-754 basic
//! operations (add, sub, mul, div, sqrt, fma) with an *explicit* rounding mode, over any of the
//! supported binary formats. These back the rounding-mode variants of the catalog (`add_rtp` and
//! friends), which on a device map to instructions with a static rounding mode and must not depend
//! on any dynamic rounding state.
//!
//! The structure is always the same:
//!
//!   1. Special values (NaN, ±∞, ±0) are handled up front, since they never need rounding.
//!   2. Regular values are unpacked ([`decode`]) into a sign, an integer significand, and an
//!      exponent, so that `x = (-1)^sign × sig × 2^exp` *exactly*.
//!   3. A kernel computes the result into a wide [`Unrounded`] value: either exact, or truncated
//!      with a "sticky" bit recording that some nonzero bits were lost.
//!   4. The unrounded value is rounded and packed ([`encode`]) according to the mode, handling
//!      overflow to ±∞ or ±MAX and gradual underflow into the subnormals.
//!
//! Some notation used in the comments:
//!
//!   - **p**: the precision of the target format, i.e. `MANT_BITS + 1`.
//!   - **Round bit**: the first bit below the last kept bit.
//!   - **Sticky bit**: the OR of all bits below the round bit.

use crate::Float;
use crate::underlying::Sealed;
use crate::utl::unlikely;

/// One of the four static rounding directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
  /// Round to nearest, ties to even; suffix `rte`.
  NearestEven,
  /// Round toward +∞; suffix `rtp`.
  TowardPositive,
  /// Round toward −∞; suffix `rtn`.
  TowardNegative,
  /// Round toward zero; suffix `rtz`.
  TowardZero,
}

impl RoundingMode {
  pub const ALL: [RoundingMode; 4] = [
    RoundingMode::NearestEven,
    RoundingMode::TowardPositive,
    RoundingMode::TowardNegative,
    RoundingMode::TowardZero,
  ];

  /// The suffix used in the names of the rounding-mode variants.
  pub const fn suffix(self) -> &'static str {
    match self {
      RoundingMode::NearestEven => "rte",
      RoundingMode::TowardPositive => "rtp",
      RoundingMode::TowardNegative => "rtn",
      RoundingMode::TowardZero => "rtz",
    }
  }

  pub fn from_suffix(suffix: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|m| m.suffix() == suffix)
  }

  /// The mode that rounds `-x` the way `self` rounds `x`.
  pub const fn mirror(self) -> Self {
    match self {
      RoundingMode::TowardPositive => RoundingMode::TowardNegative,
      RoundingMode::TowardNegative => RoundingMode::TowardPositive,
      other => other,
    }
  }
}

/// A finite, nonzero value, unpacked as `(-1)^sign × sig × 2^exp`.
///
/// Subnormals are not normalised: their `exp` is the same as that of the smallest normal's ulp,
/// and `sig` simply has fewer significant bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
  pub(crate) sign: bool,
  pub(crate) exp: i32,
  pub(crate) sig: u64,
}

/// The result of a kernel, before rounding: `(-1)^sign × (sig + ε) × 2^exp`, where `ε` is 0 if
/// `sticky` is false, or some unknown value in `(0, 1)` if it is true.
///
/// Whenever `sticky` is set, `sig` must have at least `p + 2` significant bits, so that the
/// unknown part only ever lands on the sticky bit when rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Unrounded {
  pub(crate) sign: bool,
  pub(crate) exp: i32,
  pub(crate) sig: u128,
  pub(crate) sticky: bool,
}

impl From<Decoded> for Unrounded {
  #[inline]
  fn from(x: Decoded) -> Self {
    Unrounded { sign: x.sign, exp: x.exp, sig: x.sig as u128, sticky: false }
  }
}

/// Decoding: classify and unpack.
mod decode;
pub(crate) use decode::{Class, classify};
#[cfg(feature = "bench")]
pub(crate) use decode::decode_regular;

/// Encoding: round and pack.
mod encode;

/// Addition and subtraction.
mod add;
pub use add::{add, sub};

/// Multiplication.
mod mul;
pub use mul::mul;

/// Division.
mod div;
pub use div::div;

/// Square root.
mod sqrt;
pub use sqrt::sqrt;

/// Fused multiply-add.
mod fma;
pub use fma::fma;

/// The NaN an operation returns when some operand is NaN: the first NaN operand, quieted.
#[inline]
fn propagate_nan<F: Float>(operands: &[F]) -> Option<F> {
  if unlikely(operands.iter().any(|x| x.is_nan_bits())) {
    operands.iter().find(|x| x.is_nan_bits()).map(|x| x.quiet())
  } else {
    None
  }
}

/// Rational oracle for tests.
#[cfg(test)]
pub(crate) mod rational;
