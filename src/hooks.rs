//! Build-time feature hooks.
//!
//! A device math library is compiled once and then specialised per target: a handful of boolean
//! questions ("does this target have fast fma?", "may we assume no NaNs?") are left unanswered in
//! the library itself and resolved at link time. Here each question is an associated constant of
//! the [`Hooks`] trait, and every hook-sensitive function is generic over an implementation of it;
//! monomorphisation plays the role of the link-time answer, and the unused branch is folded away.
//!
//! Every hook answers "no" unless told otherwise, and with every hook at "no" the behaviour is the
//! conservative, fully IEEE-compliant one ([`Conservative`]). [`BuildHooks`] answers from the
//! Cargo features of this build.

/// A set of answers to the feature hooks. All default to `false`.
///
/// Implement this on a marker type to choose a configuration:
///
/// ```
/// # use devmath::{DevMath, Hooks};
/// struct FastTarget;
/// impl Hooks for FastTarget {
///   const HAVE_FAST_FMA32: bool = true;
///   const HAVE_FAST_FMA64: bool = true;
/// }
/// type Math = DevMath<FastTarget>;
/// assert_eq!(Math::mad(2.0f32, 3.0, 1.0), 7.0);
/// ```
pub trait Hooks: 'static {
  /// Fused multiply-add is cheap for binary16 and binary32; `mad` at those precisions becomes fused.
  const HAVE_FAST_FMA32: bool = false;
  /// Fused multiply-add is cheap for binary64; `mad` at that precision becomes fused.
  const HAVE_FAST_FMA64: bool = false;
  /// Inputs and results are assumed to be neither NaN nor ±∞; special-case branches are skipped.
  const FINITE_ONLY: bool = false;
  /// Faster, less accurate algorithms are allowed.
  const FAST_RELAXED: bool = false;
  /// Subnormal inputs and results are flushed to a zero of the same sign ("denormals are zero").
  const DAZ: bool = false;
  /// Vendor-specific fast paths are allowed.
  const VENDOR: bool = false;
  /// binary32 `sqrt` must be correctly rounded, even when fast paths are allowed.
  const CORRECTLY_ROUNDED_SQRT32: bool = false;
}

/// Every hook answers "no": fully IEEE-compliant behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Conservative;

impl Hooks for Conservative {}

/// Answers from the Cargo features of this build (`have-fast-fma32`, `have-fast-fma64`,
/// `finite-only`, `fast-relaxed`, `daz`, `vendor-path`, `correctly-rounded-sqrt32`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BuildHooks;

impl Hooks for BuildHooks {
  const HAVE_FAST_FMA32: bool = cfg!(feature = "have-fast-fma32");
  const HAVE_FAST_FMA64: bool = cfg!(feature = "have-fast-fma64");
  const FINITE_ONLY: bool = cfg!(feature = "finite-only");
  const FAST_RELAXED: bool = cfg!(feature = "fast-relaxed");
  const DAZ: bool = cfg!(feature = "daz");
  const VENDOR: bool = cfg!(feature = "vendor-path");
  const CORRECTLY_ROUNDED_SQRT32: bool = cfg!(feature = "correctly-rounded-sqrt32");
}

/// The names of the hooks, for metadata and for the exported query symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
  HaveFastFma32,
  HaveFastFma64,
  FiniteOnly,
  FastRelaxed,
  Daz,
  Vendor,
  CorrectlyRoundedSqrt32,
}

impl Hook {
  pub const ALL: [Hook; 7] = [
    Hook::HaveFastFma32,
    Hook::HaveFastFma64,
    Hook::FiniteOnly,
    Hook::FastRelaxed,
    Hook::Daz,
    Hook::Vendor,
    Hook::CorrectlyRoundedSqrt32,
  ];

  /// The hook's name, as used in its query symbol `__devmath_<name>`.
  pub const fn name(self) -> &'static str {
    match self {
      Hook::HaveFastFma32 => "have_fast_fma32",
      Hook::HaveFastFma64 => "have_fast_fma64",
      Hook::FiniteOnly => "finite_only_opt",
      Hook::FastRelaxed => "fast_relaxed_opt",
      Hook::Daz => "daz_opt",
      Hook::Vendor => "vendor_opt",
      Hook::CorrectlyRoundedSqrt32 => "correctly_rounded_sqrt32",
    }
  }

  /// The answer `H` gives to this hook.
  pub const fn resolve<H: Hooks>(self) -> bool {
    match self {
      Hook::HaveFastFma32 => H::HAVE_FAST_FMA32,
      Hook::HaveFastFma64 => H::HAVE_FAST_FMA64,
      Hook::FiniteOnly => H::FINITE_ONLY,
      Hook::FastRelaxed => H::FAST_RELAXED,
      Hook::Daz => H::DAZ,
      Hook::Vendor => H::VENDOR,
      Hook::CorrectlyRoundedSqrt32 => H::CORRECTLY_ROUNDED_SQRT32,
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|h| h.name() == name)
  }

  /// The exported query symbol for this hook, `__devmath_<name>`.
  pub const fn abi_name(self) -> HookSymbol {
    HookSymbol(self)
  }
}

/// The exported query symbol of a [`Hook`]; see [`Hook::abi_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookSymbol(Hook);

impl core::fmt::Display for HookSymbol {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}_{}", crate::contract::mangle::PREFIX, self.0.name())
  }
}

impl core::fmt::Display for Hook {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

/// A snapshot of the answers of some [`Hooks`] implementation, as plain data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HookSet {
  pub have_fast_fma32: bool,
  pub have_fast_fma64: bool,
  pub finite_only: bool,
  pub fast_relaxed: bool,
  pub daz: bool,
  pub vendor: bool,
  pub correctly_rounded_sqrt32: bool,
}

impl HookSet {
  pub const fn of<H: Hooks>() -> Self {
    HookSet {
      have_fast_fma32: H::HAVE_FAST_FMA32,
      have_fast_fma64: H::HAVE_FAST_FMA64,
      finite_only: H::FINITE_ONLY,
      fast_relaxed: H::FAST_RELAXED,
      daz: H::DAZ,
      vendor: H::VENDOR,
      correctly_rounded_sqrt32: H::CORRECTLY_ROUNDED_SQRT32,
    }
  }

  pub const fn get(&self, hook: Hook) -> bool {
    match hook {
      Hook::HaveFastFma32 => self.have_fast_fma32,
      Hook::HaveFastFma64 => self.have_fast_fma64,
      Hook::FiniteOnly => self.finite_only,
      Hook::FastRelaxed => self.fast_relaxed,
      Hook::Daz => self.daz,
      Hook::Vendor => self.vendor,
      Hook::CorrectlyRoundedSqrt32 => self.correctly_rounded_sqrt32,
    }
  }

  /// Whether this is the all-"no", fully conservative configuration.
  pub fn is_conservative(&self) -> bool {
    Hook::ALL.into_iter().all(|h| !self.get(h))
  }
}
