//! Zero-intercept parabolic approximation.

use crate::types::{InterpolationError, Scalar};

/// Evaluate the parabola `a·x² + b·x` through `(x1, val1)` and `(x2, val2)`.
///
/// The curve is constrained through the origin, so two points determine it.
/// Coefficients are solved in closed form in `f64`:
///
/// ```text
/// d = x1 (x1 - x2) x2
/// a = -(x1 val2 - x2 val1) / d
/// b = -(x2² val1 - x1² val2) / d
/// ```
///
/// # Returns
///
/// * `Ok(y)` - `a·target_x² + b·target_x`, narrowed to `T`
/// * `Err(InterpolationError::SingularFit)` - `x1` or `x2` is zero, or `x1 == x2`
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::zero_parabolic_approximation;
///
/// // y = x² + 2x through (1, 3) and (2, 8)
/// let y: f64 = zero_parabolic_approximation(1.0, 2.0, 3.0, 8.0, 3.0).unwrap();
/// assert!((y - 15.0).abs() < 1e-12);
///
/// assert!(zero_parabolic_approximation(0.0, 2.0, 3.0, 8.0, 3.0).is_err());
/// ```
pub fn zero_parabolic_approximation<T: Scalar>(
    x1: T,
    x2: T,
    val1: T,
    val2: T,
    target_x: T,
) -> Result<T, InterpolationError> {
    if x1 == T::zero() || x2 == T::zero() || x1 == x2 {
        return Err(InterpolationError::SingularFit {
            x1: x1.widen(),
            x2: x2.widen(),
        });
    }

    let (x1, x2, v1, v2, x) = (
        x1.widen(),
        x2.widen(),
        val1.widen(),
        val2.widen(),
        target_x.widen(),
    );
    let d = x1 * (x1 - x2) * x2;
    let a = -((x1 * v2 - x2 * v1) / d);
    let b = -((x2 * x2 * v1 - x1 * x1 * v2) / d);

    Ok(T::narrow(a * x * x + b * x))
}
