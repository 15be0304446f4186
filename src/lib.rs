#![cfg_attr(not(test), no_std)]
//! This crate describes, and provides a software reference for, the contract surface of a
//! device-side scalar math library: a catalog of elementary and special functions (trigonometric,
//! exponential, logarithmic, gamma, Bessel, rounding, classification, IEEE-754 bit manipulation)
//! replicated over the three binary formats binary16, binary32 and binary64.
//!
//! # Introduction
//!
//! A device math library is consumed by compilers as much as by programmers. Besides *what* each
//! function computes, a consumer needs to know:
//!
//!   - what each entry is called at link level, and how to get back from a symbol to a function
//!     and a precision (see [`Symbol`]);
//!   - how freely calls may be reordered, cached, or merged (see [`Purity`]);
//!   - which results are bit-exact under a static rounding mode, independent of any dynamic
//!     rounding state (the `add_rtp`-style variants, see [`RoundingMode`]);
//!   - which build-time answers ("does this target have fast fma?") change the numeric strategy,
//!     and how (see [`Hooks`]).
//!
//! All of this is generated from one declaration table, [`FUNCTIONS`], so the metadata, the
//! name-based dispatch ([`DevMath::resolve`]) and the exported `extern "C"` symbols (with the
//! `export-symbols` feature) can never disagree.
//!
//! # Usage
//!
//! ```
//! # use devmath::{DevMath, Hooks, Reference, Function, Purity, catalog};
//! // Call functions directly, on the reference configuration or on one of your own.
//! assert_eq!(Reference::fmax(f32::NAN, 1.0), 1.0);
//! assert_eq!(Reference::add_rtz(1.0f64, 1e-300), 1.0);
//!
//! struct FastTarget;
//! impl Hooks for FastTarget {
//!   const HAVE_FAST_FMA64: bool = true;
//! }
//! assert_eq!(DevMath::<FastTarget>::mad(0.1f64, 10.0, -1.0), 0.1f64.mul_add(10.0, -1.0));
//!
//! // Inspect the catalog, or resolve a symbol to an implementation.
//! assert_eq!(catalog::signature("sin").map(|s| s.purity), Some(Purity::Impure));
//! let Ok(Function::Unary(floor)) = Reference::resolve::<f64>("__devmath_floor_f64") else {
//!   unreachable!()
//! };
//! assert_eq!(floor(-0.5), -1.0);
//! ```
//!
//! # Features
//!
//!   - `narrow` (default): the binary16 entries, on [`half::f16`](https://docs.rs/half).
//!   - `export-symbols`: one `#[no_mangle]`-style `extern "C"` symbol `__devmath_<name>_<tag>` per
//!     entry, and one `__devmath_<hook>` query per hook, all on the [`Build`] configuration.
//!   - `have-fast-fma32`, `have-fast-fma64`, `finite-only`, `fast-relaxed`, `daz`, `vendor-path`,
//!     `correctly-rounded-sqrt32`: the answers of [`BuildHooks`].
//!   - `log`: trace symbol resolution through the [`log`](https://docs.rs/log) facade.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod utl;
mod underlying;
mod precision;
mod hooks;
pub mod soft;
mod contract;
mod backend;
mod math;

/// The exported `extern "C"` symbols, only on `feature = "export-symbols"`.
#[cfg(feature = "export-symbols")]
pub mod abi;

pub use underlying::Float;
pub use precision::Precision;
pub use hooks::{BuildHooks, Conservative, Hook, HookSet, HookSymbol, Hooks};
pub use soft::RoundingMode;
pub use contract::{OutParam, Purity, Shape, Signature};
pub use contract::mangle::{PREFIX, ParseSymbolError, Symbol};
pub use contract::catalog::{self, Entry, FUNCTIONS, Function, ResolveError};
pub use backend::{Backend, Strategy};
pub use math::{Build, DevMath, FpClass, Reference};

#[cfg(feature = "narrow")]
pub use half::f16;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = 2048;
