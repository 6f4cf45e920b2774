//! Bisection search for the input that produces a target output.

use super::SolverConfig;
use crate::types::{Scalar, SolverError};
use tracing::{debug, trace, warn};

/// Bisection value searcher.
///
/// Finds `x` between two bounds such that a monotonic function `f` hits a
/// target output. Unlike a root finder that stops on bracket width, the
/// search stops when the *outputs* at the two bracket ends are within
/// `accuracy` of each other, then returns the bracket midpoint.
///
/// The bounds need not be ordered and `f` may be increasing or decreasing:
/// only `f(x_min)` and `f(x_max)` must straddle the target. A bound output
/// may be infinite (`ln(0)`, `1/0`); the search is then unconverged until a
/// midpoint replaces that side. Only NaN outputs are rejected.
///
/// # Termination
///
/// - converged: `|f(x_upper) - f(x_lower)| <= accuracy`
/// - [`SolverError::MaxIterationsExceeded`]: `config.max_iterations` midpoints evaluated
/// - [`SolverError::BracketCollapsed`]: the midpoint equals a bound, which
///   happens for integer kinds or once a float bracket spans adjacent values
///
/// # Example
///
/// ```
/// use interp_core::math::solvers::{HalfLengthValueSearcher, SolverConfig};
///
/// let searcher = HalfLengthValueSearcher::new(SolverConfig::default());
///
/// // Which x gives x³ = 8 on [0, 5]?
/// let f = |x: f64| x * x * x;
/// let x = searcher.search(f, 0.0, 5.0, 8.0, 1e-9).unwrap();
/// assert!((x - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct HalfLengthValueSearcher {
    /// Solver configuration
    config: SolverConfig,
}

impl HalfLengthValueSearcher {
    /// Create a new searcher with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a searcher with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Search `[x_min, x_max]` for the input whose output is `target_y`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function assumed monotonic on the bracket
    /// * `x_min` - One bracket bound
    /// * `x_max` - The other bracket bound
    /// * `target_y` - Output value to hit
    /// * `accuracy` - Convergence threshold on the bracket's output spread
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint of the final bracket
    /// * `Err(SolverError::InvalidAccuracy)` - `accuracy` is negative or NaN
    /// * `Err(SolverError::NanEvaluation)` - `f` returned NaN at a bound or midpoint
    /// * `Err(SolverError::OutOfRange)` - `f(x_min)` and `f(x_max)` do not straddle `target_y`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration cap reached
    /// * `Err(SolverError::BracketCollapsed)` - Bracket cannot be halved further
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::solvers::HalfLengthValueSearcher;
    ///
    /// let searcher = HalfLengthValueSearcher::with_defaults();
    ///
    /// // Decreasing function with bounds given high-to-low
    /// let f = |x: f64| 10.0 - x;
    /// let x = searcher.search(f, 10.0, 0.0, 3.0, 1e-6).unwrap();
    /// assert!((x - 7.0).abs() < 1e-6);
    /// ```
    pub fn search<T, F>(
        &self,
        f: F,
        x_min: T,
        x_max: T,
        target_y: T,
        accuracy: T,
    ) -> Result<T, SolverError>
    where
        T: Scalar,
        F: Fn(T) -> T,
    {
        let tolerance = accuracy.widen();
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(SolverError::InvalidAccuracy {
                accuracy: tolerance,
            });
        }

        let y_at_min = evaluate(&f, x_min)?;
        let y_at_max = evaluate(&f, x_max)?;

        // `lower` holds the bound with the smaller output, `upper` the larger.
        let (mut lower, mut upper) = if y_at_min <= y_at_max {
            ((x_min, y_at_min), (x_max, y_at_max))
        } else {
            ((x_max, y_at_max), (x_min, y_at_min))
        };

        if !(lower.1 <= target_y && target_y <= upper.1) {
            return Err(SolverError::OutOfRange {
                target: target_y.widen(),
                y_min: lower.1.widen(),
                y_max: upper.1.widen(),
            });
        }

        let mut iterations = 0;
        while (upper.1.widen() - lower.1.widen()).abs() > tolerance {
            if iterations >= self.config.max_iterations {
                warn!(
                    iterations,
                    x_lower = lower.0.widen(),
                    x_upper = upper.0.widen(),
                    "bisection search hit iteration cap"
                );
                return Err(SolverError::MaxIterationsExceeded { iterations });
            }

            let x_mid = midpoint(lower.0, upper.0);
            if x_mid == lower.0 || x_mid == upper.0 {
                warn!(
                    iterations,
                    x_lower = lower.0.widen(),
                    x_upper = upper.0.widen(),
                    "bisection bracket collapsed"
                );
                return Err(SolverError::BracketCollapsed {
                    x_lower: lower.0.widen(),
                    x_upper: upper.0.widen(),
                });
            }

            let y_mid = evaluate(&f, x_mid)?;
            iterations += 1;
            trace!(iterations, x = x_mid.widen(), y = y_mid.widen(), "bisection step");

            if y_mid > target_y {
                upper = (x_mid, y_mid);
            } else {
                lower = (x_mid, y_mid);
            }
        }

        let x = midpoint(lower.0, upper.0);
        debug!(iterations, x = x.widen(), "bisection search converged");
        Ok(x)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Search with the default [`SolverConfig`].
///
/// Shorthand for `HalfLengthValueSearcher::with_defaults().search(...)`.
///
/// # Example
///
/// ```
/// use interp_core::math::solvers::half_length_value_search;
///
/// let x = half_length_value_search(|x: f64| x, 0.0, 10.0, 5.0, 0.01).unwrap();
/// assert!((x - 5.0).abs() <= 0.01);
/// ```
pub fn half_length_value_search<T, F>(
    f: F,
    x_min: T,
    x_max: T,
    target_y: T,
    accuracy: T,
) -> Result<T, SolverError>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    HalfLengthValueSearcher::with_defaults().search(f, x_min, x_max, target_y, accuracy)
}

/// Midpoint of `[a, b]` computed in the widened domain.
#[inline]
fn midpoint<T: Scalar>(a: T, b: T) -> T {
    let (a, b) = (a.widen(), b.widen());
    T::narrow(a + (b - a) * 0.5)
}

#[inline]
fn evaluate<T, F>(f: &F, x: T) -> Result<T, SolverError>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let y = f(x);
    if y.widen().is_nan() {
        Err(SolverError::NanEvaluation { x: x.widen() })
    } else {
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    // ========================================
    // Convergence Tests
    // ========================================

    #[test]
    fn test_identity_converges_within_accuracy() {
        let searcher = HalfLengthValueSearcher::with_defaults();
        let x = searcher.search(|x: f64| x, 0.0, 10.0, 5.0, 0.01).unwrap();
        assert!((x - 5.0).abs() <= 0.01, "got {}", x);
    }

    #[test]
    fn test_sqrt_two() {
        let searcher = HalfLengthValueSearcher::with_defaults();
        let x = searcher.search(|x: f64| x * x, 0.0, 2.0, 2.0, 1e-12).unwrap();
        assert_relative_eq!(x, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_decreasing_function() {
        let searcher = HalfLengthValueSearcher::with_defaults();
        let x = searcher
            .search(|x: f64| (-x).exp(), 0.0, 5.0, 0.5, 1e-12)
            .unwrap();
        assert_relative_eq!(x, std::f64::consts::LN_2, epsilon = 1e-9);
    }

    #[test]
    fn test_swapped_bounds() {
        let searcher = HalfLengthValueSearcher::with_defaults();
        let forward = searcher.search(|x: f64| 3.0 * x + 1.0, 0.0, 4.0, 7.0, 1e-9);
        let backward = searcher.search(|x: f64| 3.0 * x + 1.0, 4.0, 0.0, 7.0, 1e-9);
        assert_relative_eq!(forward.unwrap(), 2.0, epsilon = 1e-8);
        assert_relative_eq!(backward.unwrap(), 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_already_converged_bracket_returns_midpoint() {
        let calls = Cell::new(0);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * 1e-6
        };
        let x = HalfLengthValueSearcher::with_defaults()
            .search(f, 0.0, 1.0, 5e-7, 1e-3)
            .unwrap();
        assert_eq!(x, 0.5);
        // Only the two bound evaluations.
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_target_on_bound() {
        let x = half_length_value_search(|x: f64| x, 0.0, 10.0, 10.0, 1e-6).unwrap();
        assert!((x - 10.0).abs() <= 1e-6);
    }

    #[test]
    fn test_integer_kind() {
        // Spread 1 is reached between x = 5 and x = 6, midpoint narrows to 5.
        let x = half_length_value_search(|x: i32| x, 0, 10, 5, 1).unwrap();
        assert_eq!(x, 5);
    }

    #[test]
    fn test_f32_kind() {
        let x = half_length_value_search(|x: f32| x * x, 0.0, 3.0, 4.0, 1e-4).unwrap();
        assert!((x - 2.0).abs() < 1e-3);
    }

    // ========================================
    // Infinite Bound Tests
    // ========================================

    #[test]
    fn test_negative_infinite_lower_bound() {
        // ln(0) = -inf still straddles 1 with ln(10).
        let x = half_length_value_search(|x: f64| x.ln(), 0.0, 10.0, 1.0, 1e-9).unwrap();
        assert_relative_eq!(x, std::f64::consts::E, epsilon = 1e-8);
    }

    #[test]
    fn test_negative_infinite_bound_decreasing_reciprocal() {
        let x = half_length_value_search(|x: f64| -1.0 / x, 0.0, 1.0, -2.0, 1e-9).unwrap();
        assert_relative_eq!(x, 0.5, epsilon = 1e-8);
    }

    #[test]
    fn test_positive_infinite_upper_bound() {
        // 1/0 = +inf becomes the upper side; the first midpoint replaces it.
        let x = half_length_value_search(|x: f64| 1.0 / x, 0.0, 1.0, 2.0, 1e-9).unwrap();
        assert_relative_eq!(x, 0.5, epsilon = 1e-8);
    }

    #[test]
    fn test_infinite_bound_still_range_checked() {
        let err = half_length_value_search(|x: f64| x.ln(), 0.0, 10.0, 5.0, 1e-9).unwrap_err();
        assert_eq!(
            err,
            SolverError::OutOfRange {
                target: 5.0,
                y_min: f64::NEG_INFINITY,
                y_max: 10.0_f64.ln()
            }
        );
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_target_above_both_bounds() {
        let err = half_length_value_search(|x: f64| x, 0.0, 10.0, 11.0, 0.01).unwrap_err();
        assert_eq!(
            err,
            SolverError::OutOfRange {
                target: 11.0,
                y_min: 0.0,
                y_max: 10.0
            }
        );
    }

    #[test]
    fn test_target_below_both_bounds() {
        let err = half_length_value_search(|x: f64| x + 1.0, 0.0, 10.0, 0.5, 0.01);
        assert!(matches!(err, Err(SolverError::OutOfRange { .. })));
    }

    #[test]
    fn test_nan_target_is_out_of_range() {
        let err = half_length_value_search(|x: f64| x, 0.0, 1.0, f64::NAN, 0.01);
        assert!(matches!(err, Err(SolverError::OutOfRange { .. })));
    }

    #[test]
    fn test_iteration_cap() {
        // Step function: outputs never get closer than 10.
        let step = |x: f64| if x < 1.0 { 0.0 } else { 10.0 };
        let searcher = HalfLengthValueSearcher::new(SolverConfig::new(10));
        assert_eq!(
            searcher.search(step, 0.0, 2.0, 5.0, 1.0).unwrap_err(),
            SolverError::MaxIterationsExceeded { iterations: 10 }
        );
    }

    #[test]
    fn test_float_bracket_collapses_on_discontinuity() {
        let step = |x: f64| if x < 1.0 { 0.0 } else { 10.0 };
        let err = half_length_value_search(step, 0.0, 2.0, 5.0, 1.0).unwrap_err();
        match err {
            SolverError::BracketCollapsed { x_lower, x_upper } => {
                assert!(x_lower < 1.0);
                assert_eq!(x_upper, 1.0);
            }
            other => panic!("Expected BracketCollapsed, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_bracket_collapses_with_zero_accuracy() {
        let err = half_length_value_search(|x: i32| x, 0, 10, 5, 0).unwrap_err();
        assert_eq!(
            err,
            SolverError::BracketCollapsed {
                x_lower: 5.0,
                x_upper: 6.0
            }
        );
    }

    #[test]
    fn test_unbounded_still_detects_collapse() {
        let searcher = HalfLengthValueSearcher::new(SolverConfig::unbounded());
        let err = searcher.search(|x: u8| x, 0, 200, 100, 0);
        assert!(matches!(err, Err(SolverError::BracketCollapsed { .. })));
    }

    #[test]
    fn test_nan_bound() {
        let err = half_length_value_search(|x: f64| x.sqrt(), -1.0, 4.0, 1.0, 0.01).unwrap_err();
        assert_eq!(err, SolverError::NanEvaluation { x: -1.0 });
    }

    #[test]
    fn test_nan_midpoint() {
        let f = |x: f64| if x == 0.5 { f64::NAN } else { x };
        let err = half_length_value_search(f, 0.0, 1.0, 0.25, 0.01).unwrap_err();
        assert_eq!(err, SolverError::NanEvaluation { x: 0.5 });
    }

    #[test]
    fn test_invalid_accuracy() {
        assert!(matches!(
            half_length_value_search(|x: f64| x, 0.0, 1.0, 0.5, -1e-3),
            Err(SolverError::InvalidAccuracy { .. })
        ));
        assert!(matches!(
            half_length_value_search(|x: f64| x, 0.0, 1.0, 0.5, f64::NAN),
            Err(SolverError::InvalidAccuracy { .. })
        ));
    }

    #[test]
    fn test_config_accessor() {
        let searcher = HalfLengthValueSearcher::new(SolverConfig::fast());
        assert_eq!(searcher.config(), &SolverConfig::fast());
    }
}
