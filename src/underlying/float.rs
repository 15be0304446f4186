use super::*;

/// Implementation of the bit access common to all formats; the conversions differ per type.
macro_rules! impl_common {
  ($bits:ty) => {
    type Bits = $bits;

    const BITS: u32 = <$bits>::BITS;

    #[inline]
    fn to_raw(self) -> u64 { self.to_bits() as u64 }

    #[inline]
    fn from_raw(raw: u64) -> Self { Self::from_bits(raw as $bits) }

    #[inline]
    fn raw_bits(self) -> $bits { self.to_bits() }
  };
}

impl Sealed for f32 {
  impl_common!(u32);

  const EXP_BITS: u32 = 8;
  const MANT_BITS: u32 = 23;

  #[inline]
  fn to_f64(self) -> f64 { self as f64 }

  #[inline]
  fn from_f64(x: f64) -> Self { x as f32 }
}

impl Float for f32 {
  const PRECISION: Precision = Precision::Single;
}

impl Sealed for f64 {
  impl_common!(u64);

  const EXP_BITS: u32 = 11;
  const MANT_BITS: u32 = 52;

  #[inline]
  fn to_f64(self) -> f64 { self }

  #[inline]
  fn from_f64(x: f64) -> Self { x }
}

impl Float for f64 {
  const PRECISION: Precision = Precision::Double;
}

#[cfg(feature = "narrow")]
impl Sealed for half::f16 {
  impl_common!(u16);

  const EXP_BITS: u32 = 5;
  const MANT_BITS: u32 = 10;

  #[inline]
  fn to_f64(self) -> f64 { half::f16::to_f64(self) }

  #[inline]
  fn from_f64(x: f64) -> Self { half::f16::from_f64(x) }
}

#[cfg(feature = "narrow")]
impl Float for half::f16 {
  const PRECISION: Precision = Precision::Narrow;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn layout() {
    assert_eq!(<f32 as Sealed>::BIAS, 127);
    assert_eq!(<f64 as Sealed>::BIAS, 1023);
    assert_eq!(<f32 as Sealed>::MIN_EXP, -126);
    assert_eq!(<f64 as Sealed>::MAX_EXP, 1023);
    assert_eq!(<f32 as Sealed>::EXP_MASK, 0x7f80_0000);
    assert_eq!(<f64 as Sealed>::MANT_MASK, 0x000f_ffff_ffff_ffff);
    assert_eq!(<f32 as Sealed>::QUIET_BIT, 0x0040_0000);
  }

  #[test]
  fn constants() {
    assert_eq!(<f32 as Sealed>::one(), 1.0);
    assert_eq!(<f64 as Sealed>::one(), 1.0);
    assert_eq!(<f32 as Sealed>::max_finite(false), f32::MAX);
    assert_eq!(<f64 as Sealed>::max_finite(true), f64::MIN);
    assert_eq!(<f32 as Sealed>::infinity(true), f32::NEG_INFINITY);
    assert_eq!(<f64 as Sealed>::min_subnormal(false).to_bits(), 1);
    assert!(<f32 as Sealed>::default_nan().is_nan());
    assert_eq!(<f64 as Sealed>::zero(true).to_bits(), 0x8000_0000_0000_0000);
  }

  #[test]
  fn classes() {
    assert!(f32::NAN.is_nan_bits());
    assert!(!f32::INFINITY.is_nan_bits());
    assert!(!f32::INFINITY.is_finite_bits());
    assert!(f32::MAX.is_finite_bits());
    assert!((-0.0f64).is_zero_bits());
    assert!(f64::from_bits(1).is_subnormal_bits());
    assert!(!f64::MIN_POSITIVE.is_subnormal_bits());
  }

  #[cfg(feature = "narrow")]
  #[test]
  fn narrow_layout() {
    use half::f16;
    assert_eq!(<f16 as Sealed>::BIAS, 15);
    assert_eq!(<f16 as Sealed>::one(), f16::ONE);
    assert_eq!(<f16 as Sealed>::max_finite(false), f16::MAX);
    assert_eq!(<f16 as Sealed>::infinity(false), f16::INFINITY);
    assert_eq!(<f16 as Sealed>::from_f64(65504.0), f16::MAX);
  }
}
