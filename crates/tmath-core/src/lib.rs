//! # tmath-core
//!
//! Core types shared by the tmath crates.
//!
//! - [`Scalar`] - The real number type of every component
//! - [`approx_equal`] - Tolerance-based scalar comparison
//! - [`Error`], [`Result`] - The error taxonomy for vector and matrix operations
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies:
//!
//! ```text
//! tmath-core (this crate)
//!    ^
//!    |
//!    +-- tmath (Vector, Matrix)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tmath_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{approx_equal, approx_equal_default, Scalar, EQUAL_EPSILON};
}
