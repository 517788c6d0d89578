//! Error types for tmath operations.
//!
//! Every fallible operation on `tmath::Vector` and `tmath::Matrix` reports
//! one of the variants of [`Error`]. A shape that does not fit the operation
//! is reported to the caller immediately, never clamped or truncated.
//!
//! # Usage
//!
//! ```rust
//! use tmath_core::{Error, Result};
//!
//! fn check_len(a: usize, b: usize) -> Result<usize> {
//!     if a != b {
//!         return Err(Error::dimension_mismatch(a, b));
//!     }
//!     Ok(a)
//! }
//!
//! assert!(check_len(3, 2).unwrap_err().is_dimension_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vector and matrix operations.
///
/// # Categories
///
/// - **Construction errors**: [`EmptyContainer`](Error::EmptyContainer)
/// - **Dimension errors**: [`DimensionMismatch`](Error::DimensionMismatch),
///   [`ShapeMismatch`](Error::ShapeMismatch),
///   [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Arithmetic errors**: [`Division`](Error::Division)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A container was requested with a size of zero.
    ///
    /// Returned by the sized constructors (`Vector::zeros`, `Matrix::zeros`)
    /// and by the explicit-value constructors when given no values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath_core::Error;
    ///
    /// let err = Error::empty("vector");
    /// assert_eq!(err.to_string(), "empty vector: size must be at least 1");
    /// ```
    #[error("empty {what}: size must be at least 1")]
    EmptyContainer {
        /// Kind of container that was requested
        what: &'static str,
    },

    /// Operand lengths do not match what the operation requires.
    ///
    /// Covers vector length mismatches in binary operations, ragged rows in
    /// matrix construction, the cross product on non-3D vectors, and the
    /// inner dimension of matrix products.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Matrix shapes do not match for an element-wise operation.
    ///
    /// Shapes are reported as `(width, height)`.
    #[error(
        "shape mismatch: expected {}x{}, got {}x{}",
        .expected.0,
        .expected.1,
        .got.0,
        .got.1
    )]
    ShapeMismatch {
        /// Required `(width, height)`
        expected: (usize, usize),
        /// Actual `(width, height)`
        got: (usize, usize),
    },

    /// Requested matrix dimensions cannot be stored.
    ///
    /// Returned when `width * height` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: &'static str,
    },

    /// A division whose divisor is zero.
    ///
    /// Only raised where the result would be meaningless, such as
    /// normalizing a vector of zero magnitude. Plain scalar
    /// division follows IEEE semantics and never reports this.
    #[error("division by zero: {reason}")]
    Division {
        /// What was being divided
        reason: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::EmptyContainer`] error.
    #[inline]
    pub fn empty(what: &'static str) -> Self {
        Self::EmptyContainer { what }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    ///
    /// # Arguments
    ///
    /// * `expected` - Length the operation required
    /// * `got` - Length that was supplied
    #[inline]
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Creates an [`Error::ShapeMismatch`] error from `(width, height)` pairs.
    #[inline]
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: &'static str) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason,
        }
    }

    /// Creates an [`Error::Division`] error.
    #[inline]
    pub fn division(reason: &'static str) -> Self {
        Self::Division { reason }
    }

    /// Returns `true` if this is an empty-container error.
    #[inline]
    pub fn is_empty_error(&self) -> bool {
        matches!(self, Self::EmptyContainer { .. })
    }

    /// Returns `true` for vector and matrix dimension errors.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::ShapeMismatch { .. }
                | Self::InvalidDimensions { .. }
        )
    }

    /// Returns `true` if this is a division error.
    #[inline]
    pub fn is_division_error(&self) -> bool {
        matches!(self, Self::Division { .. })
    }
}
