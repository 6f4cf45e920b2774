//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from bracket search, table interpolation and parabolic fits
//! - `SolverError`: Errors from the bisection value search
//!
//! Numeric payloads are reported in the widened `f64` domain so that the
//! error types do not depend on the scalar kind of the failing call.

use thiserror::Error;

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfRange`: Query point outside the sample domain
/// - `SizeMismatch`: Parallel sequences or grid rows have inconsistent lengths
/// - `SingularFit`: Zero-intercept parabola anchors are zero or equal
/// - `InsufficientData`: Sample sequence is empty
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfRange { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the covered sample domain.
    #[error("out of range: {x} not covered by samples [{min}, {max}]")]
    OutOfRange {
        /// The query point
        x: f64,
        /// First sample value
        min: f64,
        /// Last sample value
        max: f64,
    },

    /// Parallel sequences (or grid rows) have inconsistent lengths.
    #[error("bad array sizes: expected {expected}, got {got}")]
    SizeMismatch {
        /// Length required by the sample axis
        expected: usize,
        /// Length actually supplied
        got: usize,
    },

    /// Zero-intercept parabola cannot be solved for the given anchors.
    #[error("divide by zero: singular parabola anchors x1 = {x1}, x2 = {x2}")]
    SingularFit {
        /// First anchor
        x1: f64,
        /// Second anchor
        x2: f64,
    },

    /// Not enough samples to search.
    #[error("insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

/// Bisection search errors.
///
/// # Variants
/// - `OutOfRange`: Function outputs at the bounds do not straddle the target
/// - `MaxIterationsExceeded`: Outputs did not converge within the iteration cap
/// - `BracketCollapsed`: Midpoint equals a bound, so the bracket cannot shrink further
/// - `NanEvaluation`: The function returned NaN
/// - `InvalidAccuracy`: Accuracy threshold is negative or NaN
///
/// # Examples
/// ```
/// use interp_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Target output is not between the outputs at the bracket bounds.
    #[error("out of range: target {target} not between f(bounds) [{y_min}, {y_max}]")]
    OutOfRange {
        /// Requested output value
        target: f64,
        /// Smaller of the two bound outputs
        y_min: f64,
        /// Larger of the two bound outputs
        y_max: f64,
    },

    /// Search failed to converge within the iteration cap.
    #[error("failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of midpoint evaluations performed
        iterations: usize,
    },

    /// The midpoint of the bracket is one of its bounds.
    #[error("bracket collapsed at [{x_lower}, {x_upper}] before outputs converged")]
    BracketCollapsed {
        /// Bound whose output lies at or below the target
        x_lower: f64,
        /// Bound whose output lies above the target
        x_upper: f64,
    },

    /// Function evaluation produced NaN.
    ///
    /// Infinite outputs are not errors: an infinite bound still takes part
    /// in the straddle check and is replaced by the first midpoint on its side.
    #[error("function evaluated to NaN at x = {x}")]
    NanEvaluation {
        /// Point where the evaluation failed
        x: f64,
    },

    /// Accuracy threshold is unusable.
    #[error("invalid accuracy {accuracy}: must be non-negative")]
    InvalidAccuracy {
        /// Supplied accuracy
        accuracy: f64,
    },
}
