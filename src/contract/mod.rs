//! The contract surface: what each catalog entry is called, what it takes and returns, and what a
//! consumer may assume about it when optimising calls.

use crate::RoundingMode;

/// Symbol mangling.
pub mod mangle;

/// The catalog of functions.
pub mod catalog;

/// How freely a consumer may move, cache, or drop calls to an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Purity {
  /// Has an out-parameter, may raise floating-point exception flags, or otherwise must not be
  /// reordered, cached, or eliminated.
  Impure,
  /// No externally observable writes; may depend on quasi-static ambient state (the feature
  /// hooks). May be reordered and, for identical inputs under an unchanged configuration,
  /// cached.
  Pure,
  /// Reads no mutable ambient state at all (not even a rounding-mode register): identical input
  /// bits give identical output bits. Duplicate calls may be eliminated.
  Const,
}

impl Purity {
  /// Whether two calls with bit-identical inputs may be merged into one.
  pub const fn may_eliminate_duplicates(self) -> bool {
    matches!(self, Purity::Const)
  }

  /// Whether calls may be reordered relative to each other and to other code.
  pub const fn may_reorder(self) -> bool {
    !matches!(self, Purity::Impure)
  }
}

/// Where an out-of-band secondary result is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutParam {
  /// A float of the entry's precision.
  Float,
  /// A 32-bit signed integer.
  Int,
}

/// The parameter and result types of an entry, relative to its precision `F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
  /// `F -> F`
  Unary,
  /// `F, F -> F`
  Binary,
  /// `F, F, F -> F`
  Ternary,
  /// `F -> bool` (`i32` 0/1 at the exported ABI)
  Predicate,
  /// `F -> FpClass` (`i32` at the exported ABI)
  Classify,
  /// `F -> i32`
  Ilogb,
  /// `F, i32 -> F`
  Scale,
  /// unsigned integer of the width of `F` `-> F`
  Nan,
  /// `F, out F -> F`
  OutFloat,
  /// `F, out i32 -> F`
  OutInt,
  /// `F, F, out i32 -> F`
  Remquo,
}

impl Shape {
  /// Number of input parameters (not counting an out-parameter).
  pub const fn arity(self) -> u32 {
    match self {
      Shape::Unary | Shape::Predicate | Shape::Classify | Shape::Ilogb | Shape::Nan => 1,
      Shape::OutFloat | Shape::OutInt => 1,
      Shape::Binary | Shape::Scale | Shape::Remquo => 2,
      Shape::Ternary => 3,
    }
  }

  pub const fn out_param(self) -> Option<OutParam> {
    match self {
      Shape::OutFloat => Some(OutParam::Float),
      Shape::OutInt | Shape::Remquo => Some(OutParam::Int),
      _ => None,
    }
  }
}

/// The declaration of one base function. The same declaration holds at every precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
  /// Base name, without prefix or precision tag.
  pub name: &'static str,
  pub shape: Shape,
  pub purity: Purity,
  /// For the rounding-mode variants of the basic operations, the static rounding mode.
  pub rounding: Option<RoundingMode>,
}

impl Signature {
  pub const fn arity(&self) -> u32 {
    self.shape.arity()
  }

  pub const fn out_param(&self) -> Option<OutParam> {
    self.shape.out_param()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shapes() {
    assert_eq!(Shape::Unary.arity(), 1);
    assert_eq!(Shape::Scale.arity(), 2);
    assert_eq!(Shape::Remquo.arity(), 2);
    assert_eq!(Shape::Ternary.arity(), 3);
    assert_eq!(Shape::OutFloat.out_param(), Some(OutParam::Float));
    assert_eq!(Shape::Remquo.out_param(), Some(OutParam::Int));
    assert_eq!(Shape::Binary.out_param(), None);
  }

  #[test]
  fn purity_lattice() {
    assert!(Purity::Impure < Purity::Pure && Purity::Pure < Purity::Const);
    assert!(Purity::Const.may_eliminate_duplicates() && Purity::Const.may_reorder());
    assert!(!Purity::Pure.may_eliminate_duplicates() && Purity::Pure.may_reorder());
    assert!(!Purity::Impure.may_eliminate_duplicates() && !Purity::Impure.may_reorder());
  }
}
