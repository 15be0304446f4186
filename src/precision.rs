/// One of the three IEEE-754 binary formats the catalog is replicated over.
///
/// The narrow group (binary16) only exists in builds with the `narrow` feature; the variant is
/// always present so metadata can still talk about it, but [`Precision::is_enabled`] tells whether
/// any entry of that group is actually emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
  /// IEEE binary16, symbol tag `f16`.
  Narrow,
  /// IEEE binary32, symbol tag `f32`.
  Single,
  /// IEEE binary64, symbol tag `f64`.
  Double,
}

impl Precision {
  /// All precisions, narrowest first, whether enabled or not.
  pub const ALL: [Precision; 3] = [Precision::Narrow, Precision::Single, Precision::Double];

  /// The suffix appended to base names in symbols.
  pub const fn tag(self) -> &'static str {
    match self {
      Precision::Narrow => "f16",
      Precision::Single => "f32",
      Precision::Double => "f64",
    }
  }

  /// Inverse of [`Precision::tag`].
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|p| p.tag() == tag)
  }

  /// Width of the format in bits.
  pub const fn bits(self) -> u32 {
    match self {
      Precision::Narrow => 16,
      Precision::Single => 32,
      Precision::Double => 64,
    }
  }

  /// Width of the biased exponent field.
  pub const fn exponent_bits(self) -> u32 {
    match self {
      Precision::Narrow => 5,
      Precision::Single => 8,
      Precision::Double => 11,
    }
  }

  /// Number of significand bits, including the hidden one.
  pub const fn significand_bits(self) -> u32 {
    self.bits() - self.exponent_bits()
  }

  /// Whether entries of this precision exist in this build.
  pub const fn is_enabled(self) -> bool {
    match self {
      Precision::Narrow => cfg!(feature = "narrow"),
      Precision::Single | Precision::Double => true,
    }
  }

  /// Precisions with entries in this build, narrowest first.
  pub fn enabled() -> impl Iterator<Item = Precision> + Clone {
    Self::ALL.into_iter().filter(|p| p.is_enabled())
  }
}

impl core::fmt::Display for Precision {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.tag())
  }
}
