//! Interpolator trait definition.

use crate::types::InterpolationError;

/// Common interface for 1-D table interpolators.
///
/// Implementors borrow their sample and value sequences; constructing one
/// validates the table once so that each lookup only has to bracket the
/// query point.
///
/// # Type Parameters
///
/// * `T` - Scalar kind of samples and values
pub trait Interpolator<T> {
    /// Interpolate the value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::OutOfRange`] when `x` lies outside
    /// [`Interpolator::domain`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the covered domain `(first sample, last sample)`.
    fn domain(&self) -> (T, T);
}
