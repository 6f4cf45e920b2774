//! # interp_core: Table Interpolation and Value Search
//!
//! Small numeric toolkit for calibration-style tables stored in any primitive
//! numeric kind:
//! - Bracket search over ascending samples (`math::search`)
//! - Linear and bilinear interpolation, closed-form and table-driven (`math::interpolators`)
//! - Zero-intercept parabola through two points (`math::interpolators`)
//! - Bisection search of a monotonic function for a target output (`math::solvers`)
//! - Decimal rounding of floats in place (`math::rounding`)
//! - Numeric-kind traits and error types (`types`)
//!
//! ## Numeric Kinds
//!
//! Every routine is generic over [`types::Scalar`], implemented for
//! `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32` and `f64`. Division is
//! carried out in `f64` and the result narrowed back to the caller's kind,
//! truncating toward zero for integers.
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::{bilinear_table, linear_table};
//! use interp_core::math::rounding::rounded;
//! use interp_core::math::solvers::half_length_value_search;
//!
//! // 1-D table lookup
//! let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let vs = [10.0, 20.0, 30.0, 40.0, 50.0];
//! assert_eq!(linear_table(2.5, &xs, &vs).unwrap(), 25.0);
//!
//! // 2-D table lookup on integer data
//! let grid = [[0, 10], [20, 30]];
//! assert_eq!(bilinear_table(5, 5, &[0, 10], &[0, 10], &grid).unwrap(), 15);
//!
//! // Which x gives x² = 2?
//! let x = half_length_value_search(|x: f64| x * x, 0.0, 2.0, 2.0, 1e-9).unwrap();
//! assert_eq!(rounded(4, x), 1.4142);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `SolverConfig` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
