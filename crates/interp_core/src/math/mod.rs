//! Numeric routines over ordered samples.
//!
//! This module provides:
//! - `search`: bracket lookup of a value in an ascending sample sequence
//! - `interpolators`: linear, bilinear and zero-intercept parabolic interpolation
//! - `solvers`: bisection search for the input that yields a target output
//! - `rounding`: decimal rounding of floating-point values

pub mod interpolators;
pub mod rounding;
pub mod search;
pub mod solvers;
