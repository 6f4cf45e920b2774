//! Linear interpolation: closed-form two-point and table lookup.

use super::Interpolator;
use crate::math::search::search_nearest_id;
use crate::types::{InterpolationError, Scalar};

/// Evaluate the line through `(x1, v1)` and `(x2, v2)` at `x` in the widened domain.
///
/// Weighted form so that `x == x1` yields `v1` and `x == x2` yields `v2` exactly.
#[inline]
pub(crate) fn lerp(x: f64, x1: f64, x2: f64, v1: f64, v2: f64) -> f64 {
    let t = (x - x1) / (x2 - x1);
    v1 * (1.0 - t) + v2 * t
}

/// Linear interpolation through two anchors.
///
/// Evaluates the line through `(x1, val1)` and `(x2, val2)` at `target_x`.
/// Inputs are widened to `f64`, and the result is narrowed back to `T`
/// (truncating toward zero for integer kinds).
///
/// If `x1 == x2` the anchors do not define a line and `val1` is returned
/// unchanged.
///
/// # Formula
///
/// ```text
/// t = (x - x1) / (x2 - x1)
/// y = val1 * (1 - t) + val2 * t
/// ```
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear;
///
/// assert_eq!(linear(1.5, 1.0, 2.0, 10.0, 20.0), 15.0);
/// assert_eq!(linear(2, 1, 3, 10, 20), 15);
/// // Degenerate anchors fall back to `val1`
/// assert_eq!(linear(9.0, 1.0, 1.0, 10.0, 20.0), 10.0);
/// ```
pub fn linear<T: Scalar>(target_x: T, x1: T, x2: T, val1: T, val2: T) -> T {
    if x1 == x2 {
        return val1;
    }
    T::narrow(lerp(
        target_x.widen(),
        x1.widen(),
        x2.widen(),
        val1.widen(),
        val2.widen(),
    ))
}

/// Table-driven linear interpolation.
///
/// Brackets `target_x` in `samples` with [`search_nearest_id`] and
/// interpolates between the bracketing entries of `values`. A query that
/// hits a sample exactly returns the stored value.
///
/// # Arguments
///
/// * `target_x` - Query point
/// * `samples` - Ascending sample sequence
/// * `values` - Values parallel to `samples`
///
/// # Returns
///
/// * `Ok(y)` - The interpolated value
/// * `Err(InterpolationError::SizeMismatch)` - `samples` and `values` differ in length
/// * `Err(InterpolationError::OutOfRange)` - `target_x` is outside the sample domain
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear_table;
///
/// let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let values = [10.0, 20.0, 30.0, 40.0, 50.0];
/// assert_eq!(linear_table(2.5, &samples, &values).unwrap(), 25.0);
/// ```
pub fn linear_table<T: Scalar>(
    target_x: T,
    samples: &[T],
    values: &[T],
) -> Result<T, InterpolationError> {
    if samples.len() != values.len() {
        return Err(InterpolationError::SizeMismatch {
            expected: samples.len(),
            got: values.len(),
        });
    }
    lookup(target_x, samples, values)
}

#[inline]
fn lookup<T: Scalar>(target_x: T, samples: &[T], values: &[T]) -> Result<T, InterpolationError> {
    let (lower, higher) = search_nearest_id(target_x, samples)?;
    Ok(linear(
        target_x,
        samples[lower],
        samples[higher],
        values[lower],
        values[higher],
    ))
}

/// Borrowed 1-D lookup table.
///
/// Holds references to a sample sequence and its parallel value sequence,
/// validated once on construction. Lookups behave exactly like
/// [`linear_table`].
///
/// # Type Parameters
///
/// * `T` - Scalar kind of samples and values
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LinearTable};
///
/// let samples = [0_u32, 10, 20];
/// let values = [0_u32, 100, 400];
///
/// let table = LinearTable::new(&samples, &values).unwrap();
/// assert_eq!(table.domain(), (0, 20));
/// assert_eq!(table.interpolate(15).unwrap(), 250);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearTable<'a, T> {
    /// Ascending samples
    samples: &'a [T],
    /// Values parallel to `samples`
    values: &'a [T],
}

impl<'a, T: Scalar> LinearTable<'a, T> {
    /// Construct a table over `samples` and `values`.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearTable)` - Successfully constructed table
    /// * `Err(InterpolationError::SizeMismatch)` - Mismatched lengths
    /// * `Err(InterpolationError::InsufficientData)` - Empty sequences
    pub fn new(samples: &'a [T], values: &'a [T]) -> Result<Self, InterpolationError> {
        if samples.len() != values.len() {
            return Err(InterpolationError::SizeMismatch {
                expected: samples.len(),
                got: values.len(),
            });
        }
        if samples.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        Ok(Self { samples, values })
    }

    /// Returns the sample sequence.
    #[inline]
    pub fn samples(&self) -> &'a [T] {
        self.samples
    }

    /// Returns the value sequence.
    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Returns the number of table entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the table has no entries.
    /// Note: This is never true for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T: Scalar> Interpolator<T> for LinearTable<'_, T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        lookup(x, self.samples, self.values)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.samples[0], self.samples[self.samples.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Closed-Form Tests
    // ========================================

    #[test]
    fn test_linear_endpoints_exact() {
        assert_eq!(linear(0.1, 0.1, 0.7, 0.3, 0.9), 0.3);
        assert_eq!(linear(0.7, 0.1, 0.7, 0.3, 0.9), 0.9);
    }

    #[test]
    fn test_linear_midpoint() {
        assert_relative_eq!(linear(0.5, 0.0, 1.0, 2.0, 4.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_extrapolates_outside_anchors() {
        // The closed form is a line, not a clamp.
        assert_relative_eq!(linear(3.0, 0.0, 1.0, 0.0, 2.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_descending_anchors() {
        assert_relative_eq!(linear(1.5, 2.0, 1.0, 20.0, 10.0), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_degenerate_anchors_return_val1() {
        assert_eq!(linear(123.0, 4.0, 4.0, -1.0, 99.0), -1.0);
        assert_eq!(linear(0_i32, 4, 4, 7, 99), 7);
    }

    #[test]
    fn test_linear_integer_truncates() {
        // 10 + (20 - 10) * 1/3 = 13.33..
        assert_eq!(linear(1_i32, 0, 3, 10, 20), 13);
        // -13.33.. truncates toward zero
        assert_eq!(linear(1_i32, 0, 3, -10, -20), -13);
    }

    #[test]
    fn test_linear_unsigned_decreasing_values() {
        // Widened arithmetic avoids unsigned underflow on val2 - val1.
        assert_eq!(linear(5_u32, 0, 10, 100, 0), 50);
    }

    #[test]
    fn test_linear_f32() {
        let y = linear(0.25_f32, 0.0, 1.0, 0.0, 4.0);
        assert!((y - 1.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Table Tests
    // ========================================

    #[test]
    fn test_linear_table_between_samples() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(linear_table(2.5, &samples, &values).unwrap(), 25.0);
        assert_relative_eq!(
            linear_table(4.9, &samples, &values).unwrap(),
            49.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_linear_table_exact_samples_return_stored_values() {
        let samples = [0.0, 0.1, 1.0, 10.0];
        let values = [0.3, 0.7, 1.1, 1.9];
        for (x, y) in samples.iter().zip(values.iter()) {
            assert_eq!(linear_table(*x, &samples, &values).unwrap(), *y);
        }
    }

    #[test]
    fn test_linear_table_size_mismatch() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(
            linear_table(2.5, &samples, &values).unwrap_err(),
            InterpolationError::SizeMismatch {
                expected: 5,
                got: 4
            }
        );
    }

    #[test]
    fn test_linear_table_out_of_range() {
        let samples = [1, 2, 3];
        let values = [1, 4, 9];
        assert!(matches!(
            linear_table(4, &samples, &values),
            Err(InterpolationError::OutOfRange { .. })
        ));
        assert!(matches!(
            linear_table(0, &samples, &values),
            Err(InterpolationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_linear_table_size_checked_before_range() {
        let samples = [1.0, 2.0];
        let values = [1.0];
        assert!(matches!(
            linear_table(100.0, &samples, &values),
            Err(InterpolationError::SizeMismatch { .. })
        ));
    }

    // ========================================
    // LinearTable Tests
    // ========================================

    #[test]
    fn test_table_new_mismatched_lengths() {
        let result = LinearTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::SizeMismatch { expected, got } => {
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            _ => panic!("Expected SizeMismatch error"),
        }
    }

    #[test]
    fn test_table_new_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(
            LinearTable::new(&empty, &empty).unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_table_matches_free_function() {
        let samples = [0.0, 0.5, 2.0, 3.0];
        let values = [1.0, -1.0, 4.0, 4.5];
        let table = LinearTable::new(&samples, &values).unwrap();

        for x in [0.0, 0.2, 0.5, 1.3, 2.0, 2.99, 3.0] {
            assert_eq!(
                table.interpolate(x).unwrap(),
                linear_table(x, &samples, &values).unwrap()
            );
        }
    }

    #[test]
    fn test_table_accessors() {
        let samples = [1, 2, 3];
        let values = [2, 4, 6];
        let table = LinearTable::new(&samples, &values).unwrap();

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.samples(), &[1, 2, 3]);
        assert_eq!(table.values(), &[2, 4, 6]);
        assert_eq!(table.domain(), (1, 3));
    }

    #[test]
    fn test_table_out_of_range() {
        let table = LinearTable::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(
            table.interpolate(1.5).unwrap_err(),
            InterpolationError::OutOfRange {
                x: 1.5,
                min: 0.0,
                max: 1.0
            }
        );
    }
}
