//! # tmath
//!
//! Lightweight vector and matrix value types.
//!
//! This crate provides:
//!
//! - [`Vector`] - N-dimensional vectors with dot/cross product, sum and norm
//! - [`Matrix`] - Dense row-major matrices with element-wise arithmetic
//!
//! Both compare with a tolerance ([`EQUAL_EPSILON`] by default) rather than
//! exact float equality, and report shape problems through [`Error`].
//!
//! # Design
//!
//! Shapes are fixed at construction. Operations that combine two values
//! check shapes first and return a [`Result`], including the `+` and `-`
//! operators:
//!
//! ```rust
//! use tmath::{Error, Vector};
//!
//! let a = Vector::new(vec![1.0, 0.0, 0.0])?;
//! let b = Vector::new(vec![0.0, 1.0, 0.0])?;
//! let c = Vector::new(vec![0.0, 0.0, 1.0])?;
//!
//! let sum = (&(&a + &b)? + &c)?;
//! assert_eq!(sum, Vector::new(vec![1.0, 1.0, 1.0])?);
//!
//! let short = Vector::new(vec![1.0])?;
//! assert!(matches!(&a + &short, Err(Error::DimensionMismatch { expected: 3, got: 1 })));
//! # Ok::<(), tmath::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `glam` (default) - Conversions to and from `glam::DVec2`, `DVec3` and `DMat3`
//! - `approx` - `approx::AbsDiffEq` and `RelativeEq` for [`Vector`] and [`Matrix`]
//!
//! # Logging
//!
//! Construction and failed validations emit [`tracing`] events at `trace`
//! and `debug` level. No subscriber is installed by this crate.
//!
//! # Dependencies
//!
//! - [`tmath_core`] - Scalar helpers and error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod vector;

pub use matrix::*;
pub use vector::*;

pub use tmath_core::{
    approx_equal, approx_equal_default, approx_equal_slices, Error, Result, Scalar,
    EQUAL_EPSILON,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tmath::prelude::*;
///
/// let v = Vector::zeros(2).unwrap();
/// assert_eq!(v.len(), 2);
/// ```
pub mod prelude {
    pub use crate::{Matrix, Vector};
    pub use tmath_core::prelude::*;
}
