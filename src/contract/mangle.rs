use super::Signature;
use super::catalog;
use crate::Precision;
use crate::utl::debug;

/// The prefix shared by every exported symbol.
pub const PREFIX: &str = "__devmath";

/// The exported name of a catalog entry: a base function at one precision.
///
/// Formats (via [`Display`](core::fmt::Display)) as `__devmath_<name>_<tag>`, e.g.
/// `__devmath_sin_f32` or `__devmath_add_rtp_f64`; [`Symbol::parse`] is the inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
  signature: &'static Signature,
  precision: Precision,
}

/// The error returned when a string is not the symbol of any catalog entry in this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseSymbolError {
  /// Does not start with `__devmath_`.
  MissingPrefix,
  /// The part after the last `_` is not `f16`, `f32`, or `f64`.
  UnknownPrecision,
  /// No base function of that name.
  UnknownFunction,
  /// The precision exists, but its entries were compiled out of this build.
  PrecisionDisabled(Precision),
}

impl core::fmt::Display for ParseSymbolError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      ParseSymbolError::MissingPrefix => write!(f, "symbol does not start with `{PREFIX}_`"),
      ParseSymbolError::UnknownPrecision => f.write_str("unknown precision tag"),
      ParseSymbolError::UnknownFunction => f.write_str("no such function in the catalog"),
      ParseSymbolError::PrecisionDisabled(p) => write!(f, "{p} entries are disabled in this build"),
    }
  }
}

impl core::error::Error for ParseSymbolError {}

impl Symbol {
  /// The symbol of base function `name` at `precision`.
  pub fn new(name: &str, precision: Precision) -> Result<Self, ParseSymbolError> {
    let signature = catalog::signature(name).ok_or(ParseSymbolError::UnknownFunction)?;
    if !precision.is_enabled() {
      return Err(ParseSymbolError::PrecisionDisabled(precision))
    }
    Ok(Symbol { signature, precision })
  }

  /// From a signature out of the catalog and an enabled precision.
  pub(crate) const fn from_parts(signature: &'static Signature, precision: Precision) -> Self {
    Symbol { signature, precision }
  }

  /// Recover the base function and precision from a symbol.
  pub fn parse(symbol: &str) -> Result<Self, ParseSymbolError> {
    let result = Self::parse_inner(symbol);
    if let Err(_e) = &result {
      debug!("cannot resolve `{symbol}`: {_e}");
    }
    result
  }

  fn parse_inner(symbol: &str) -> Result<Self, ParseSymbolError> {
    let rest = symbol
      .strip_prefix(PREFIX)
      .and_then(|rest| rest.strip_prefix('_'))
      .ok_or(ParseSymbolError::MissingPrefix)?;
    // Base names may contain `_` (`lgamma_r`, `add_rte`), but precision tags don't, so the tag is
    // after the last one.
    let (name, tag) = rest.rsplit_once('_').ok_or(ParseSymbolError::UnknownPrecision)?;
    let precision = Precision::from_tag(tag).ok_or(ParseSymbolError::UnknownPrecision)?;
    Self::new(name, precision)
  }

  pub const fn name(&self) -> &'static str {
    self.signature.name
  }

  pub const fn precision(&self) -> Precision {
    self.precision
  }

  /// The declaration of the base function.
  pub const fn signature(&self) -> &'static Signature {
    self.signature
  }
}

impl core::fmt::Display for Symbol {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{PREFIX}_{}_{}", self.name(), self.precision.tag())
  }
}

impl core::str::FromStr for Symbol {
  type Err = ParseSymbolError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}
