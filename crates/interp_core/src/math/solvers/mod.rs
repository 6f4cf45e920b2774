//! Inverse search over monotonic functions.
//!
//! This module provides:
//! - [`HalfLengthValueSearcher`]: bisection on the output spread of a bracket
//! - [`half_length_value_search`]: the same search with default settings
//! - [`SolverConfig`]: iteration cap shared by searches
//!
//! ## Example
//!
//! ```
//! use interp_core::math::solvers::{HalfLengthValueSearcher, SolverConfig};
//!
//! let searcher = HalfLengthValueSearcher::new(SolverConfig::fast());
//! let x = searcher.search(|x: f64| 2.0 * x, 0.0, 10.0, 8.0, 1e-6).unwrap();
//! assert!((x - 4.0).abs() < 1e-6);
//! ```

mod config;
mod half_length;

pub use config::SolverConfig;
pub use half_length::{half_length_value_search, HalfLengthValueSearcher};
