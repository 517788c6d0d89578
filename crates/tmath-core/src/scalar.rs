//! Scalar type and tolerance-based comparison.
//!
//! Floating-point arithmetic accumulates rounding error, so two results that
//! are mathematically equal rarely compare equal bit-for-bit. Every equality
//! test in tmath goes through [`approx_equal`] instead of `==`.
//!
//! # Usage
//!
//! ```rust
//! use tmath_core::{approx_equal, EQUAL_EPSILON};
//!
//! assert!(approx_equal(0.1 + 0.2, 0.3, EQUAL_EPSILON));
//! assert!(!approx_equal(1.0, 1.1, EQUAL_EPSILON));
//! ```

/// Real number type used for all vector and matrix components.
pub type Scalar = f64;

/// Default tolerance for [`approx_equal`].
///
/// Used by the `==` and `!=` operators of vectors and matrices.
pub const EQUAL_EPSILON: Scalar = 1e-9;

/// Returns `true` if `|a - b| < eps`.
///
/// NaN is never equal to anything, including another NaN.
#[inline]
pub fn approx_equal(a: Scalar, b: Scalar, eps: Scalar) -> bool {
    (a - b).abs() < eps
}

/// [`approx_equal`] with [`EQUAL_EPSILON`].
#[inline]
pub fn approx_equal_default(a: Scalar, b: Scalar) -> bool {
    approx_equal(a, b, EQUAL_EPSILON)
}

/// Compares two slices element by element.
///
/// Both slices must have the same length; callers validate dimensions
/// before comparing. Extra elements of the longer slice are ignored.
#[inline]
pub fn approx_equal_slices(a: &[Scalar], b: &[Scalar], eps: Scalar) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| approx_equal(x, y, eps))
}
