//! The declaration table of the library, and everything generated from it.
//!
//! Each line of [`for_each_function!`] declares one base function: its name, [`Shape`],
//! [`Purity`], and, for the rounding-mode variants, the static [`RoundingMode`]. From that one
//! table we generate the [`FUNCTIONS`] metadata, the name-to-implementation dispatch
//! ([`DevMath::implementation`]), and (with the `export-symbols` feature) the exported `extern "C"`
//! symbols, so the three can never disagree.

use super::{Purity, Shape, Signature};
use super::mangle::{ParseSymbolError, Symbol};
use crate::{Backend, DevMath, Float, FpClass, Hooks, Precision, RoundingMode};
#[cfg(feature = "log")]
use crate::HookSet;
use crate::utl::trace;

/// Invoke the macro `$callback` with the whole declaration table, preceded by `[$($arg)*]`.
macro_rules! for_each_function {
  ($callback:ident $(, $arg:tt)*) => {
    $callback! {
      [$($arg)*]

      // Trigonometric
      acos: Unary, Impure;
      acospi: Unary, Impure;
      asin: Unary, Impure;
      asinpi: Unary, Impure;
      atan: Unary, Impure;
      atan2: Binary, Impure;
      atan2pi: Binary, Impure;
      atanpi: Unary, Impure;
      cos: Unary, Impure;
      cospi: Unary, Impure;
      sin: Unary, Impure;
      sinpi: Unary, Impure;
      tan: Unary, Impure;
      tanpi: Unary, Impure;
      sincos: OutFloat, Impure;

      // Hyperbolic
      acosh: Unary, Pure;
      asinh: Unary, Pure;
      atanh: Unary, Pure;
      cosh: Unary, Pure;
      sinh: Unary, Pure;
      tanh: Unary, Pure;

      // Exponential, logarithmic, power
      exp: Unary, Pure;
      exp2: Unary, Pure;
      exp10: Unary, Pure;
      expm1: Unary, Pure;
      log: Unary, Pure;
      log2: Unary, Pure;
      log10: Unary, Pure;
      log1p: Unary, Pure;
      pow: Binary, Pure;
      powr: Binary, Pure;
      pown: Scale, Pure;
      rootn: Scale, Pure;

      // Roots
      cbrt: Unary, Pure;
      rcbrt: Unary, Pure;
      sqrt: Unary, Const;
      rsqrt: Unary, Pure;

      // Error, gamma, Bessel
      erf: Unary, Pure;
      erfc: Unary, Pure;
      erfinv: Unary, Pure;
      erfcinv: Unary, Pure;
      tgamma: Unary, Impure;
      lgamma: Unary, Impure;
      lgamma_r: OutInt, Impure;
      j0: Unary, Impure;
      j1: Unary, Impure;
      y0: Unary, Impure;
      y1: Unary, Impure;

      // Rounding to integer
      ceil: Unary, Const;
      floor: Unary, Const;
      trunc: Unary, Const;
      round: Unary, Const;
      rint: Unary, Const;
      nearbyint: Unary, Const;

      // Min, max, and friends
      fmin: Binary, Const;
      fmax: Binary, Const;
      min: Binary, Const;
      max: Binary, Const;
      minmag: Binary, Const;
      maxmag: Binary, Const;
      fdim: Binary, Const;

      // Bit manipulation
      fabs: Unary, Const;
      copysign: Binary, Const;
      nan: Nan, Const;
      nextafter: Binary, Const;
      ldexp: Scale, Const;
      scalb: Binary, Const;
      scalbn: Scale, Const;
      ilogb: Ilogb, Const;
      logb: Unary, Const;
      frexp: OutInt, Impure;
      modf: OutFloat, Impure;
      fract: OutFloat, Impure;

      // Classification
      fpclassify: Classify, Const;
      isfinite: Predicate, Const;
      isinf: Predicate, Const;
      isnan: Predicate, Const;
      isnormal: Predicate, Const;
      signbit: Predicate, Const;

      // Arithmetic
      fma: Ternary, Const;
      mad: Ternary, Const;
      fmod: Binary, Const;
      remainder: Binary, Const;
      remquo: Remquo, Impure;
      hypot: Binary, Const;

      // Rounding-mode variants
      add_rte: Binary, Const, NearestEven;
      add_rtp: Binary, Const, TowardPositive;
      add_rtn: Binary, Const, TowardNegative;
      add_rtz: Binary, Const, TowardZero;
      sub_rte: Binary, Const, NearestEven;
      sub_rtp: Binary, Const, TowardPositive;
      sub_rtn: Binary, Const, TowardNegative;
      sub_rtz: Binary, Const, TowardZero;
      mul_rte: Binary, Const, NearestEven;
      mul_rtp: Binary, Const, TowardPositive;
      mul_rtn: Binary, Const, TowardNegative;
      mul_rtz: Binary, Const, TowardZero;
      div_rte: Binary, Const, NearestEven;
      div_rtp: Binary, Const, TowardPositive;
      div_rtn: Binary, Const, TowardNegative;
      div_rtz: Binary, Const, TowardZero;
      fma_rte: Ternary, Const, NearestEven;
      fma_rtp: Ternary, Const, TowardPositive;
      fma_rtn: Ternary, Const, TowardNegative;
      fma_rtz: Ternary, Const, TowardZero;
      sqrt_rte: Unary, Const, NearestEven;
      sqrt_rtp: Unary, Const, TowardPositive;
      sqrt_rtn: Unary, Const, TowardNegative;
      sqrt_rtz: Unary, Const, TowardZero;
    }
  };
}

pub(crate) use for_each_function;

macro_rules! declare_catalog {
  (@mode) => { None };
  (@mode $mode:ident) => { Some(RoundingMode::$mode) };
  ([] $($name:ident: $shape:ident, $purity:ident $(, $mode:ident)?;)*) => {
    /// Every base function, in declaration order. The same set exists at every enabled
    /// precision.
    pub static FUNCTIONS: &[Signature] = &[
      $(Signature {
        name: stringify!($name),
        shape: Shape::$shape,
        purity: Purity::$purity,
        rounding: declare_catalog!(@mode $($mode)?),
      },)*
    ];

    impl<H: Hooks> DevMath<H> {
      /// The implementation of base function `name` at precision `F`, or `None` if there is no
      /// such function.
      pub fn implementation<F: Backend>(name: &str) -> Option<Function<F>> {
        match name {
          $(stringify!($name) => Some(Function::$shape(Self::$name::<F>)),)*
          _ => None,
        }
      }
    }
  };
}

for_each_function!(declare_catalog);

/// A catalog implementation as a function pointer, one variant per [`Shape`].
#[derive(Clone, Copy, Debug)]
pub enum Function<F: Float> {
  Unary(fn(F) -> F),
  Binary(fn(F, F) -> F),
  Ternary(fn(F, F, F) -> F),
  Predicate(fn(F) -> bool),
  Classify(fn(F) -> FpClass),
  Ilogb(fn(F) -> i32),
  Scale(fn(F, i32) -> F),
  Nan(fn(F::Bits) -> F),
  OutFloat(fn(F, &mut F) -> F),
  OutInt(fn(F, &mut i32) -> F),
  Remquo(fn(F, F, &mut i32) -> F),
}

impl<F: Float> Function<F> {
  pub const fn shape(&self) -> Shape {
    match self {
      Function::Unary(_) => Shape::Unary,
      Function::Binary(_) => Shape::Binary,
      Function::Ternary(_) => Shape::Ternary,
      Function::Predicate(_) => Shape::Predicate,
      Function::Classify(_) => Shape::Classify,
      Function::Ilogb(_) => Shape::Ilogb,
      Function::Scale(_) => Shape::Scale,
      Function::Nan(_) => Shape::Nan,
      Function::OutFloat(_) => Shape::OutFloat,
      Function::OutInt(_) => Shape::OutInt,
      Function::Remquo(_) => Shape::Remquo,
    }
  }
}

/// One catalog entry: a base function at one precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
  pub signature: &'static Signature,
  pub precision: Precision,
}

impl Entry {
  pub const fn symbol(&self) -> Symbol {
    Symbol::from_parts(self.signature, self.precision)
  }
}

/// The declaration of base function `name`.
pub fn signature(name: &str) -> Option<&'static Signature> {
  FUNCTIONS.iter().find(|s| s.name == name)
}

/// Every entry of this build: each base function at each enabled precision, narrowest first.
pub fn entries() -> impl Iterator<Item = Entry> {
  Precision::enabled()
    .flat_map(|precision| FUNCTIONS.iter().map(move |signature| Entry { signature, precision }))
}

/// The entry behind an exported symbol name.
pub fn lookup(symbol: &str) -> Result<Entry, ParseSymbolError> {
  let symbol = Symbol::parse(symbol)?;
  Ok(Entry { signature: symbol.signature(), precision: symbol.precision() })
}

/// The error returned by [`DevMath::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveError {
  /// The string is not a symbol of this build.
  Symbol(ParseSymbolError),
  /// The symbol is of a different precision than the one asked for.
  PrecisionMismatch { expected: Precision, found: Precision },
}

impl From<ParseSymbolError> for ResolveError {
  fn from(value: ParseSymbolError) -> Self {
    ResolveError::Symbol(value)
  }
}

impl core::fmt::Display for ResolveError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      ResolveError::Symbol(e) => e.fmt(f),
      ResolveError::PrecisionMismatch { expected, found } =>
        write!(f, "symbol is {found}, expected {expected}"),
    }
  }
}

impl core::error::Error for ResolveError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      ResolveError::Symbol(e) => Some(e),
      ResolveError::PrecisionMismatch { .. } => None,
    }
  }
}

impl<H: Hooks> DevMath<H> {
  /// The implementation behind an exported symbol name, which must be of precision `F`.
  ///
  /// ```
  /// # use devmath::{Function, Reference};
  /// let Some(Function::Binary(add)) = Reference::resolve::<f32>("__devmath_add_rtz_f32").ok() else {
  ///   unreachable!()
  /// };
  /// assert_eq!(add(1.0, 1e-30), 1.0);
  /// ```
  pub fn resolve<F: Backend>(symbol: &str) -> Result<Function<F>, ResolveError> {
    let entry = lookup(symbol)?;
    if entry.precision != F::PRECISION {
      return Err(ResolveError::PrecisionMismatch { expected: F::PRECISION, found: entry.precision })
    }
    trace!("resolved `{symbol}` with hooks {:?}", HookSet::of::<H>());
    Self::implementation::<F>(entry.signature.name).ok_or(ResolveError::Symbol(ParseSymbolError::UnknownFunction))
  }
}
