//! Numeric-kind traits shared by every routine in the crate.
//!
//! Routines are generic over the primitive scalar kinds a calibration table
//! may be stored in. The trait family mirrors the kinds each routine accepts:
//!
//! - [`Scalar`]: any supported kind (`i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`)
//! - [`AnyInt`]: integer kinds only
//! - [`AnySInt`]: signed integer kinds
//! - [`AnyUInt`]: unsigned integer kinds
//! - [`AnyFloat`]: floating-point kinds (`f32`, `f64`)
//!
//! ## Widen, compute, narrow
//!
//! Operations that divide are evaluated in `f64`. Inputs are converted with
//! [`Scalar::widen`] and the result is converted back with [`Scalar::narrow`].
//! Precision loss is confined to these two calls:
//!
//! - `i64`/`u64`/`isize`/`usize` magnitudes above 2^53 are rounded by `widen`.
//! - `narrow` to an integer kind truncates toward zero and saturates at the
//!   kind's bounds; `NaN` becomes `0`.
//! - `narrow` to `f32` rounds to the nearest representable value.
//!
//! ```
//! use interp_core::types::Scalar;
//!
//! assert_eq!(i32::narrow(2.9), 2);
//! assert_eq!(i32::narrow(-2.9), -2);
//! assert_eq!(u8::narrow(300.0), 255);
//! assert_eq!(u8::narrow(f64::NAN), 0);
//! assert_eq!(7_u16.widen(), 7.0);
//! ```

use num_traits::{Float, Num, PrimInt, Signed, Unsigned};
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Any supported scalar kind.
///
/// Sealed: implemented for the primitive integer and floating-point types only.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Send + Sync + sealed::Sealed {
    /// Convert to the `f64` computation domain.
    fn widen(self) -> f64;

    /// Convert a value from the `f64` computation domain back to this kind.
    fn narrow(value: f64) -> Self;
}

/// Floating-point scalar kinds.
pub trait AnyFloat: Scalar + Float {}

/// Integer scalar kinds, signed or unsigned.
pub trait AnyInt: Scalar + PrimInt {}

/// Signed integer scalar kinds.
pub trait AnySInt: AnyInt + Signed {}

/// Unsigned integer scalar kinds.
pub trait AnyUInt: AnyInt + Unsigned {}

// `as` casts from f64 to integers truncate toward zero, saturate and map NaN to 0.
macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn narrow(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! impl_marker {
    ($marker:ident: $($t:ty),* $(,)?) => {
        $( impl $marker for $t {} )*
    };
}

impl_marker!(AnyFloat: f32, f64);
impl_marker!(AnyInt: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_marker!(AnySInt: i8, i16, i32, i64, isize);
impl_marker!(AnyUInt: u8, u16, u32, u64, usize);
