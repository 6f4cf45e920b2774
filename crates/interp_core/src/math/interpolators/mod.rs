//! Interpolation methods for numeric sample tables.
//!
//! Every routine is generic over [`Scalar`](crate::types::Scalar), so tables
//! may be stored as integers or floats. Arithmetic runs in `f64` and results
//! are narrowed back to the table's kind.
//!
//! ## Available Routines
//!
//! - [`linear`]: Line through two anchors, evaluated at a point
//! - [`linear_table`]: 1-D table lookup with linear interpolation
//! - [`bilinear`]: Separable bilinear interpolation over one cell
//! - [`bilinear_table`]: 2-D grid lookup with bilinear interpolation
//! - [`zero_parabolic_approximation`]: Parabola through the origin and two points
//!
//! ## Borrowed Tables
//!
//! [`LinearTable`] and [`BilinearTable`] validate the table shape once and
//! then serve lookups without re-checking. [`LinearTable`] implements the
//! [`Interpolator`] trait.
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{Interpolator, LinearTable};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let table = LinearTable::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = table.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y: f64 = table.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod bilinear;
mod linear;
mod parabolic;
mod traits;

// Re-export public items at module level
pub use bilinear::{bilinear, bilinear_table, BilinearTable};
pub use linear::{linear, linear_table, LinearTable};
pub use parabolic::zero_parabolic_approximation;
pub use traits::Interpolator;
