//! N-dimensional vector type.
//!
//! [`Vector`] is a fixed-length sequence of [`Scalar`] components. The length
//! is chosen at construction and never changes; components can be written
//! through indexing.
//!
//! Binary operations check that both operands have the same length and
//! report [`Error::DimensionMismatch`] otherwise, so `+` and `-` produce a
//! [`Result`].
//!
//! # Usage
//!
//! ```rust
//! use tmath::Vector;
//!
//! let a = Vector::new(vec![1.0, 0.0, 0.0])?;
//! let b = Vector::new(vec![0.0, 1.0, 0.0])?;
//!
//! let sum = (&a + &b)?;
//! assert_eq!(sum, Vector::new(vec![1.0, 1.0, 0.0])?);
//! assert_eq!(a.cross(&b)?, Vector::new(vec![0.0, 0.0, 1.0])?);
//! # Ok::<(), tmath::Error>(())
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use tmath_core::{approx_equal, approx_equal_slices, Error, Result, Scalar, EQUAL_EPSILON};
use tracing::{debug, trace};

/// A fixed-length vector of real numbers.
///
/// # Equality
///
/// `==` compares components within [`EQUAL_EPSILON`]. Vectors of different
/// lengths are simply unequal under `==`; call [`Vector::equal`] to get the
/// [`Error::DimensionMismatch`] instead.
///
/// ```rust
/// use tmath::{Vector, EQUAL_EPSILON};
///
/// let a = Vector::new(vec![0.0, 0.0])?;
/// let b = Vector::new(vec![0.0, 0.0, 0.0])?;
/// assert!(a != b);
/// assert!(a.equal(&b, EQUAL_EPSILON).unwrap_err().is_dimension_error());
/// # Ok::<(), tmath::Error>(())
/// ```
///
/// # Example
///
/// ```rust
/// use tmath::Vector;
///
/// let mut v = Vector::zeros(3)?;
/// v[1] = 2.0;
/// assert_eq!(v[1], 2.0);
/// assert_eq!(v.sum(), 2.0);
/// # Ok::<(), tmath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    data: Vec<Scalar>,
}

#[allow(clippy::len_without_is_empty)]
impl Vector {
    /// Creates a vector from explicit components.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if `values` is empty.
    pub fn new(values: Vec<Scalar>) -> Result<Self> {
        if values.is_empty() {
            debug!("vector::new rejected empty component list");
            return Err(Error::empty("vector"));
        }
        trace!(len = values.len(), "vector::new");
        Ok(Self { data: values })
    }

    /// Creates a vector by copying components from a slice.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if `values` is empty.
    #[inline]
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// Creates a zero-filled vector of length `len`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if `len` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath::Vector;
    ///
    /// assert_eq!(Vector::zeros(3)?, Vector::new(vec![0.0, 0.0, 0.0])?);
    /// assert!(Vector::zeros(0).is_err());
    /// # Ok::<(), tmath::Error>(())
    /// ```
    #[inline]
    pub fn zeros(len: usize) -> Result<Self> {
        Self::splat(len, 0.0)
    }

    /// Creates a vector of length `len` with every component set to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if `len` is zero.
    pub fn splat(len: usize, value: Scalar) -> Result<Self> {
        if len < 1 {
            debug!(len, "vector::splat rejected zero length");
            return Err(Error::empty("vector"));
        }
        trace!(len, "vector::splat");
        Ok(Self {
            data: vec![value; len],
        })
    }

    /// Wraps components that are known to be non-empty.
    #[inline]
    pub(crate) fn from_vec_unchecked(data: Vec<Scalar>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    /// Number of components (the dimension).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the component at `i`, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Scalar> {
        self.data.get(i).copied()
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Components as a mutable slice. The length cannot change through it.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.data
    }

    /// Iterates over components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// Iterates mutably over components.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Scalar> {
        self.data.iter_mut()
    }

    /// Consumes the vector, returning its components.
    #[inline]
    pub fn into_inner(self) -> Vec<Scalar> {
        self.data
    }

    /// Checks that `other` has the same dimension, returning it.
    fn validate(&self, other: &Self) -> Result<usize> {
        let len = self.len();
        if other.len() != len {
            debug!(expected = len, got = other.len(), "vector dimension mismatch");
            return Err(Error::dimension_mismatch(len, other.len()));
        }
        Ok(len)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Result<Self> {
        self.validate(other)?;
        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
        })
    }

    /// Tests whether every component pair differs by less than `eps`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the lengths differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath::Vector;
    ///
    /// let a = Vector::new(vec![1.0, 2.0])?;
    /// let b = Vector::new(vec![1.05, 2.0])?;
    /// assert!(a.equal(&b, 0.1)?);
    /// assert!(!a.equal(&b, 0.01)?);
    /// # Ok::<(), tmath::Error>(())
    /// ```
    pub fn equal(&self, other: &Self, eps: Scalar) -> Result<bool> {
        self.validate(other)?;
        Ok(approx_equal_slices(&self.data, &other.data, eps))
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the lengths differ.
    #[inline]
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the lengths differ.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Component-wise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the lengths differ.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        self.validate(other)?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// Cross product of two 3D vectors.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless both operands have length 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath::Vector;
    ///
    /// let ones = Vector::new(vec![1.0, 1.0, 1.0])?;
    /// let x = Vector::new(vec![1.0, 0.0, 0.0])?;
    /// assert_eq!(ones.cross(&x)?, Vector::new(vec![0.0, 1.0, -1.0])?);
    /// # Ok::<(), tmath::Error>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for len in [self.len(), other.len()] {
            if len != 3 {
                debug!(got = len, "cross product requires 3D operands");
                return Err(Error::dimension_mismatch(3, len));
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Sum of all components.
    #[inline]
    pub fn sum(&self) -> Scalar {
        self.data.iter().sum()
    }

    /// Scales the vector to unit Euclidean [`length`](Self::length).
    ///
    /// # Errors
    ///
    /// [`Error::Division`] if the magnitude is zero (within [`EQUAL_EPSILON`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath::Vector;
    ///
    /// let v = Vector::new(vec![2.0, 2.0, 1.0])?;
    /// let n = v.norm()?;
    /// assert_eq!(n, Vector::new(vec![2.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0])?);
    /// # Ok::<(), tmath::Error>(())
    /// ```
    pub fn norm(&self) -> Result<Self> {
        let magnitude = self.length();
        if approx_equal(magnitude, 0.0, EQUAL_EPSILON) {
            debug!(len = self.len(), magnitude, "vector::norm on zero-length vector");
            return Err(Error::division("vector has zero magnitude"));
        }
        Ok(self / magnitude)
    }

    /// Euclidean length (magnitude).
    #[inline]
    pub fn length(&self) -> Scalar {
        self.data.iter().map(|x| x * x).sum::<Scalar>().sqrt()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

/// Writes `[a, b, c]`.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, values: &[Scalar]) -> fmt::Result {
    f.write_str("[")?;
    for (i, x) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{x}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.data)
    }
}

// Equality with EQUAL_EPSILON. Mismatched lengths compare unequal; use
// `Vector::equal` to observe the dimension error.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other, EQUAL_EPSILON).unwrap_or(false)
    }
}

// Indexing
impl Index<usize> for Vector {
    type Output = Scalar;

    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Scalar {
        &mut self.data[i]
    }
}

// &Vector + &Vector
impl Add for &Vector {
    type Output = Result<Vector>;

    #[inline]
    fn add(self, rhs: Self) -> Result<Vector> {
        self.checked_add(rhs)
    }
}

// Vector + Vector
impl Add for Vector {
    type Output = Result<Vector>;

    #[inline]
    fn add(self, rhs: Self) -> Result<Vector> {
        self.checked_add(&rhs)
    }
}

// &Vector - &Vector
impl Sub for &Vector {
    type Output = Result<Vector>;

    #[inline]
    fn sub(self, rhs: Self) -> Result<Vector> {
        self.checked_sub(rhs)
    }
}

// Vector - Vector
impl Sub for Vector {
    type Output = Result<Vector>;

    #[inline]
    fn sub(self, rhs: Self) -> Result<Vector> {
        self.checked_sub(&rhs)
    }
}

// Vector * Scalar
impl Mul<Scalar> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(mut self, rhs: Scalar) -> Vector {
        self.data.iter_mut().for_each(|x| *x *= rhs);
        self
    }
}

impl Mul<Scalar> for &Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Scalar) -> Vector {
        self.clone() * rhs
    }
}

// Scalar * Vector
impl Mul<Vector> for Scalar {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Mul<&Vector> for Scalar {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: &Vector) -> Vector {
        rhs * self
    }
}

// Vector / Scalar, IEEE semantics on zero
impl Div<Scalar> for Vector {
    type Output = Vector;

    #[inline]
    fn div(mut self, rhs: Scalar) -> Vector {
        self.data.iter_mut().for_each(|x| *x /= rhs);
        self
    }
}

impl Div<Scalar> for &Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: Scalar) -> Vector {
        self.clone() / rhs
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        self * -1.0
    }
}

impl Neg for &Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        self * -1.0
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = Error;

    #[inline]
    fn try_from(values: Vec<Scalar>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[Scalar]> for Vector {
    type Error = Error;

    #[inline]
    fn try_from(values: &[Scalar]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<const N: usize> TryFrom<[Scalar; N]> for Vector {
    type Error = Error;

    #[inline]
    fn try_from(values: [Scalar; N]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl From<Vector> for Vec<Scalar> {
    #[inline]
    fn from(v: Vector) -> Vec<Scalar> {
        v.into_inner()
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec2> for Vector {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self {
            data: v.to_array().to_vec(),
        }
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec3> for Vector {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self {
            data: v.to_array().to_vec(),
        }
    }
}

#[cfg(feature = "glam")]
impl TryFrom<&Vector> for glam::DVec2 {
    type Error = Error;

    fn try_from(v: &Vector) -> Result<Self> {
        match *v.as_slice() {
            [x, y] => Ok(glam::DVec2::new(x, y)),
            _ => Err(Error::dimension_mismatch(2, v.len())),
        }
    }
}

#[cfg(feature = "glam")]
impl TryFrom<&Vector> for glam::DVec3 {
    type Error = Error;

    fn try_from(v: &Vector) -> Result<Self> {
        match *v.as_slice() {
            [x, y, z] => Ok(glam::DVec3::new(x, y, z)),
            _ => Err(Error::dimension_mismatch(3, v.len())),
        }
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Vector {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        EQUAL_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Vector {
    fn default_max_relative() -> Scalar {
        Scalar::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
