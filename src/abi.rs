//! The exported `extern "C"` surface: one symbol `__devmath_<name>_<tag>` per catalog entry, each
//! calling the [`Build`] configuration, plus one `__devmath_<hook>` query per feature hook.
//!
//! Booleans cross the boundary as `i32` 0/1, [`FpClass`](crate::FpClass) as its code, and
//! out-parameters as raw pointers. binary16 values cross as `half::f16`, which has the layout of
//! a `u16`.

use crate::{Build, BuildHooks, Hooks};
use crate::contract::catalog::for_each_function;

/// One exported function, by shape.
macro_rules! export_entry {
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Unary) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t) -> $t {
      Build::$name::<$t>(x)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Binary) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t, y: $t) -> $t {
      Build::$name::<$t>(x, y)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Ternary) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t, y: $t, z: $t) -> $t {
      Build::$name::<$t>(x, y, z)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Predicate) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t) -> i32 {
      Build::$name::<$t>(x) as i32
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Classify) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t) -> i32 {
      Build::$name::<$t>(x).code()
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Ilogb) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t) -> i32 {
      Build::$name::<$t>(x)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Scale) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(x: $t, n: i32) -> $t {
      Build::$name::<$t>(x, n)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Nan) => {
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub extern "C" fn $name(code: $bits) -> $t {
      Build::$name::<$t>(code)
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, OutFloat) => {
    /// # Safety
    ///
    /// `out` must be valid for writes and properly aligned.
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub unsafe extern "C" fn $name(x: $t, out: *mut $t) -> $t {
      let mut slot = x;
      let y = Build::$name::<$t>(x, &mut slot);
      // SAFETY: guaranteed by the caller.
      unsafe { out.write(slot) };
      y
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, OutInt) => {
    /// # Safety
    ///
    /// `out` must be valid for writes and properly aligned.
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub unsafe extern "C" fn $name(x: $t, out: *mut i32) -> $t {
      let mut slot = 0;
      let y = Build::$name::<$t>(x, &mut slot);
      // SAFETY: guaranteed by the caller.
      unsafe { out.write(slot) };
      y
    }
  };
  ($t:ty, $bits:ty, $tag:literal, $name:ident, Remquo) => {
    /// # Safety
    ///
    /// `quo` must be valid for writes and properly aligned.
    #[unsafe(export_name = concat!("__devmath_", stringify!($name), "_", $tag))]
    pub unsafe extern "C" fn $name(x: $t, y: $t, quo: *mut i32) -> $t {
      let mut slot = 0;
      let r = Build::$name::<$t>(x, y, &mut slot);
      // SAFETY: guaranteed by the caller.
      unsafe { quo.write(slot) };
      r
    }
  };
}

/// One module of exports per precision.
macro_rules! export_precision {
  (
    [[$(#[$attr:meta])* $module:ident, $t:ty, $bits:ty, $tag:literal]]
    $($name:ident: $shape:ident, $purity:ident $(, $mode:ident)?;)*
  ) => {
    $(#[$attr])*
    pub mod $module {
      use super::*;

      /// The exported symbol names of this module, in catalog order.
      pub const SYMBOLS: &[&str] = &[
        $(concat!("__devmath_", stringify!($name), "_", $tag),)*
      ];

      $(export_entry!{$t, $bits, $tag, $name, $shape})*
    }
  };
}

for_each_function!(export_precision, [#[cfg(feature = "narrow")] narrow, half::f16, u16, "f16"]);
for_each_function!(export_precision, [single, f32, u32, "f32"]);
for_each_function!(export_precision, [double, f64, u64, "f64"]);

/// The hook queries, each answering 0 or 1.
macro_rules! export_hooks {
  ($($name:ident = $hook:ident,)*) => {
    $(
      #[unsafe(export_name = concat!("__devmath_", stringify!($name)))]
      pub extern "C" fn $name() -> i32 {
        <BuildHooks as Hooks>::$hook as i32
      }
    )*
  };
}

export_hooks! {
  have_fast_fma32 = HAVE_FAST_FMA32,
  have_fast_fma64 = HAVE_FAST_FMA64,
  finite_only_opt = FINITE_ONLY,
  fast_relaxed_opt = FAST_RELAXED,
  daz_opt = DAZ,
  vendor_opt = VENDOR,
  correctly_rounded_sqrt32 = CORRECTLY_ROUNDED_SQRT32,
}
