//! This module describes the IEEE-754 binary formats the library is replicated over. The end-user
//! only sees the sealed [`Float`] trait, implemented for `f16` (with the `narrow` feature), `f32`
//! and `f64`; everything below works on raw bit patterns held in a `u64`, whatever the width.

use crate::Precision;

/// The trait for the floating point types a catalog entry can be instantiated at (only satisfied
/// by `f16`, `f32`, and `f64`).
///
/// This is a *sealed* type.
pub trait Float: Sealed {
  /// Which precision family `Self` belongs to.
  const PRECISION: Precision;
}

/// Layout and raw bit access; actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug +
  Copy + Clone +
  PartialEq + PartialOrd +
  Default + Send + Sync + 'static
{
  /// The unsigned integer with the same width as `Self`; the payload type of `nan`.
  type Bits: Copy + Eq + core::fmt::Debug + Into<u64>;

  /// Total width in bits.
  const BITS: u32;
  /// Width of the biased exponent field.
  const EXP_BITS: u32;
  /// Width of the explicit mantissa field (the hidden bit is not counted).
  const MANT_BITS: u32;

  const BIAS: i32 = (1 << (Self::EXP_BITS - 1)) - 1;
  /// Exponent of the smallest positive normal number.
  const MIN_EXP: i32 = 1 - Self::BIAS;
  /// Exponent of the largest finite number.
  const MAX_EXP: i32 = Self::BIAS;

  const SIGN_MASK: u64 = 1 << (Self::BITS - 1);
  const EXP_MASK: u64 = ((1 << Self::EXP_BITS) - 1) << Self::MANT_BITS;
  const MANT_MASK: u64 = (1 << Self::MANT_BITS) - 1;
  /// The most significant mantissa bit; set in every quiet NaN.
  const QUIET_BIT: u64 = 1 << (Self::MANT_BITS - 1);

  /// The raw bit pattern, zero-extended to 64 bits.
  fn to_raw(self) -> u64;

  /// Construct from a raw bit pattern. Bits above [`Sealed::BITS`] are ignored.
  fn from_raw(raw: u64) -> Self;

  /// The raw bit pattern, at its own width.
  fn raw_bits(self) -> Self::Bits;

  /// Exact widening conversion.
  fn to_f64(self) -> f64;

  /// Narrowing conversion, rounded to nearest, ties to even.
  fn from_f64(x: f64) -> Self;

  /// Whether the sign bit is set (also for zeros and NaNs).
  #[inline]
  fn sign(self) -> bool {
    self.to_raw() & Self::SIGN_MASK != 0
  }

  /// The raw bit pattern with the sign bit cleared.
  #[inline]
  fn magnitude(self) -> u64 {
    self.to_raw() & !Self::SIGN_MASK
  }

  #[inline]
  fn negate(self) -> Self {
    Self::from_raw(self.to_raw() ^ Self::SIGN_MASK)
  }

  #[inline]
  fn with_sign(self, negative: bool) -> Self {
    Self::from_raw(self.magnitude() | if negative { Self::SIGN_MASK } else { 0 })
  }

  #[inline]
  fn zero(negative: bool) -> Self {
    Self::from_raw(if negative { Self::SIGN_MASK } else { 0 })
  }

  #[inline]
  fn one() -> Self {
    Self::from_raw((Self::BIAS as u64) << Self::MANT_BITS)
  }

  #[inline]
  fn infinity(negative: bool) -> Self {
    Self::zero(negative).with_exp_mask()
  }

  /// The largest finite value, with the given sign.
  #[inline]
  fn max_finite(negative: bool) -> Self {
    Self::from_raw(Self::zero(negative).to_raw() | (Self::EXP_MASK - 1))
  }

  /// The smallest positive subnormal, with the given sign.
  #[inline]
  fn min_subnormal(negative: bool) -> Self {
    Self::from_raw(Self::zero(negative).to_raw() | 1)
  }

  /// The NaN produced by invalid operations when no NaN operand is available.
  #[inline]
  fn default_nan() -> Self {
    Self::from_raw(Self::EXP_MASK | Self::QUIET_BIT)
  }

  /// Set the quiet bit. Only meaningful on NaNs.
  #[inline]
  fn quiet(self) -> Self {
    Self::from_raw(self.to_raw() | Self::QUIET_BIT)
  }

  #[inline]
  fn with_exp_mask(self) -> Self {
    Self::from_raw(self.to_raw() | Self::EXP_MASK)
  }

  #[inline]
  fn is_nan_bits(self) -> bool {
    self.magnitude() > Self::EXP_MASK
  }

  #[inline]
  fn is_finite_bits(self) -> bool {
    self.magnitude() < Self::EXP_MASK
  }

  #[inline]
  fn is_zero_bits(self) -> bool {
    self.magnitude() == 0
  }

  #[inline]
  fn is_subnormal_bits(self) -> bool {
    let mag = self.magnitude();
    mag != 0 && mag <= Self::MANT_MASK
  }
}

mod float;
pub(crate) mod wide;
