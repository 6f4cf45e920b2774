//! Decimal rounding of floating-point values.
//!
//! Values are scaled by `10^decimal_places`, rounded half away from zero and
//! scaled back. Negative `decimal_places` round to tens, hundreds and so on.
//!
//! If the scale factor or the scaled value is not finite (including a scale
//! that underflows to zero), the value is returned unchanged. NaN and
//! infinities therefore pass through untouched.

use crate::types::AnyFloat;

/// Round every referenced value in place.
///
/// Each value is rounded independently; see [`rounded`] for the rule.
///
/// # Example
///
/// ```
/// use interp_core::math::rounding::round;
///
/// let mut a = 3.14159_f64;
/// let mut b = -2.71828_f64;
/// round(2, &mut [&mut a, &mut b]);
/// assert_eq!(a, 3.14);
/// assert_eq!(b, -2.72);
/// ```
pub fn round<T: AnyFloat>(decimal_places: i32, values: &mut [&mut T]) {
    for value in values.iter_mut() {
        **value = rounded(decimal_places, **value);
    }
}

/// Round every element of a contiguous buffer in place.
///
/// # Example
///
/// ```
/// use interp_core::math::rounding::round_slice;
///
/// let mut buf = [0.125_f32, 1.875, -0.5];
/// round_slice(1, &mut buf);
/// assert_eq!(buf, [0.1, 1.9, -0.5]);
/// ```
pub fn round_slice<T: AnyFloat>(decimal_places: i32, values: &mut [T]) {
    for value in values.iter_mut() {
        *value = rounded(decimal_places, *value);
    }
}

/// Return `value` rounded to `decimal_places`.
///
/// ```text
/// s = 10^decimal_places
/// y = round(value * s) / s      (halves away from zero)
/// ```
///
/// The scaling is done in `f64` and narrowed once, so `f32` inputs round to
/// the `f32` nearest the decimal result.
#[inline]
pub fn rounded<T: AnyFloat>(decimal_places: i32, value: T) -> T {
    let scale = 10f64.powi(decimal_places);
    if !scale.is_finite() || scale == 0.0 {
        return value;
    }
    let scaled = value.widen() * scale;
    if !scaled.is_finite() {
        return value;
    }
    T::narrow(scaled.round() / scale)
}
