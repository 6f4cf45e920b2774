//! Bracket search over ascending sample sequences.

use crate::types::{InterpolationError, Scalar};

/// Find the pair of indices whose samples bracket `target`.
///
/// Scans adjacent pairs in order and returns `(lower, higher)` such that
/// `samples[lower] < target < samples[higher]`. An exact hit on a sample
/// returns the same index twice, which downstream interpolation treats as a
/// zero-width bracket. A hit on the last sample always wins over an earlier
/// result.
///
/// The scan is linear, which suits the small calibration tables this crate
/// targets. `samples` must be sorted ascending; unsorted input yields an
/// unspecified bracket.
///
/// # Arguments
///
/// * `target` - Value to locate
/// * `samples` - Ascending sample sequence
///
/// # Returns
///
/// * `Ok((lower, higher))` - Bracketing indices (equal on an exact hit)
/// * `Err(InterpolationError::OutOfRange)` - `target` is outside `[samples[0], samples[n-1]]`
/// * `Err(InterpolationError::InsufficientData)` - `samples` is empty
///
/// # Example
///
/// ```
/// use interp_core::math::search::search_nearest_id;
///
/// let samples = [1, 2, 3, 4, 5];
/// assert_eq!(search_nearest_id(3, &samples).unwrap(), (2, 2));
/// assert_eq!(search_nearest_id(2.5, &[1.0, 2.0, 3.0]).unwrap(), (1, 2));
/// assert!(search_nearest_id(0, &samples).is_err());
/// ```
pub fn search_nearest_id<T: Scalar>(
    target: T,
    samples: &[T],
) -> Result<(usize, usize), InterpolationError> {
    let last = match samples.len() {
        0 => return Err(InterpolationError::InsufficientData { got: 0, need: 1 }),
        n => n - 1,
    };

    let mut found = None;
    for (i, pair) in samples.windows(2).enumerate() {
        if pair[0] < target && pair[1] > target {
            found = Some((i, i + 1));
            break;
        } else if pair[0] == target {
            found = Some((i, i));
            break;
        }
    }

    if samples[last] == target {
        found = Some((last, last));
    }

    found.ok_or_else(|| InterpolationError::OutOfRange {
        x: target.widen(),
        min: samples[0].widen(),
        max: samples[last].widen(),
    })
}
