//! Scalar kinds and error types.
//!
//! This module provides:
//! - `scalar`: Numeric-kind traits with explicit widen/narrow conversions
//! - `error`: Structured error types for interpolation and search operations
//!
//! # Re-exports
//!
//! - [`Scalar`], [`AnyFloat`], [`AnyInt`], [`AnySInt`], [`AnyUInt`] from `scalar`
//! - [`InterpolationError`], [`SolverError`] from `error`

pub mod error;
pub mod scalar;

pub use error::{InterpolationError, SolverError};
pub use scalar::{AnyFloat, AnyInt, AnySInt, AnyUInt, Scalar};
