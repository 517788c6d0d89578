//! Dense matrix type.
//!
//! [`Matrix`] is a grid of [`Scalar`] values with a fixed width (columns per
//! row) and height (number of rows), both at least 1.
//!
//! # Convention
//!
//! Storage is **row-major**. `m[i]` is row `i` as a slice, so `m[i][j]`
//! addresses the cell in row `i`, column `j`:
//!
//! ```text
//!          j=0  j=1
//! i=0  | m00  m01 |
//! i=1  | m10  m11 |
//! i=2  | m20  m21 |      width = 2, height = 3
//! ```
//!
//! Shapes are reported as `(width, height)`.
//!
//! # Usage
//!
//! ```rust
//! use tmath::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let mut b = Matrix::zeros(2, 2)?;
//! b[1][0] = 1.0;
//!
//! let sum = (&a + &b)?;
//! assert_eq!(sum, Matrix::from_rows(vec![vec![1.0, 2.0], vec![4.0, 4.0]])?);
//! assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).is_err());
//! # Ok::<(), tmath::Error>(())
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use tmath_core::{approx_equal_slices, Error, Result, Scalar, EQUAL_EPSILON};
use tracing::{debug, trace};

use crate::vector::{write_components, Vector};

/// A dense, row-major matrix of real numbers.
///
/// # Invariants
///
/// - `width >= 1` and `height >= 1`
/// - every row has exactly `width` cells
///
/// # Equality
///
/// `==` compares cells within [`EQUAL_EPSILON`]. Matrices of different
/// shapes are simply unequal under `==`; call [`Matrix::equal`] to get the
/// [`Error::ShapeMismatch`] instead.
///
/// ```rust
/// use tmath::{Matrix, EQUAL_EPSILON};
///
/// let a = Matrix::zeros(2, 2)?;
/// let b = Matrix::zeros(3, 2)?;
/// assert!(a != b);
/// assert!(a.equal(&b, EQUAL_EPSILON).unwrap_err().is_dimension_error());
/// # Ok::<(), tmath::Error>(())
/// ```
///
/// # Example
///
/// ```rust
/// use tmath::Matrix;
///
/// let m = Matrix::identity(3)?;
/// assert_eq!(m.shape(), (3, 3));
/// assert_eq!(m[1][1], 1.0);
/// assert_eq!(m[0][1], 0.0);
/// # Ok::<(), tmath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Matrix {
    /// Cells in row-major order, `width * height` long
    data: Vec<Scalar>,
    width: usize,
    height: usize,
}

impl Matrix {
    /// Creates a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`] if there are no rows or the rows are empty
    /// - [`Error::DimensionMismatch`] if any row's length differs from the first
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height < 1 || width < 1 {
            debug!(width, height, "matrix::from_rows rejected empty input");
            return Err(Error::empty("matrix"));
        }

        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                debug!(expected = width, got = row.len(), "matrix::from_rows ragged row");
                return Err(Error::dimension_mismatch(width, row.len()));
            }
            data.extend(row);
        }

        trace!(width, height, "matrix::from_rows");
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a zero-filled matrix with `height` rows of `width` cells.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`] if either dimension is zero
    /// - [`Error::InvalidDimensions`] if `width * height` overflows `usize`
    pub fn zeros(width: usize, height: usize) -> Result<Self> {
        if width < 1 || height < 1 {
            debug!(width, height, "matrix::zeros rejected empty shape");
            return Err(Error::empty("matrix"));
        }
        let Some(cells) = width.checked_mul(height) else {
            debug!(width, height, "matrix::zeros cell count overflow");
            return Err(Error::invalid_dimensions(width, height, "cell count overflows usize"));
        };
        trace!(width, height, "matrix::zeros");
        Ok(Self {
            data: vec![0.0; cells],
            width,
            height,
        })
    }

    /// Creates an `n`x`n` identity matrix.
    ///
    /// # Errors
    ///
    /// Same as [`zeros`](Self::zeros) with `width = height = n`.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[i][i] = 1.0;
        }
        Ok(m)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(width, height)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the cell at (`row`, `col`), or `None` if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if col >= self.width {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    /// Returns row `i`, or `None` if out of range.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[Scalar]> {
        (i < self.height).then(|| &self[i])
    }

    /// Iterates over rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Scalar> {
        self.data.chunks_exact(self.width)
    }

    /// Copies row `i` into a [`Vector`].
    pub fn row_vector(&self, i: usize) -> Option<Vector> {
        self.row(i).map(|r| Vector::from_vec_unchecked(r.to_vec()))
    }

    /// Copies column `j` into a [`Vector`].
    pub fn column_vector(&self, j: usize) -> Option<Vector> {
        (j < self.width)
            .then(|| Vector::from_vec_unchecked(self.rows().map(|r| r[j]).collect()))
    }

    /// Cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Checks that `other` has the same shape, returning it.
    fn validate(&self, other: &Self) -> Result<(usize, usize)> {
        let shape = self.shape();
        if other.shape() != shape {
            debug!(
                expected_width = shape.0,
                expected_height = shape.1,
                got_width = other.width,
                got_height = other.height,
                "matrix shape mismatch"
            );
            return Err(Error::shape_mismatch(shape, other.shape()));
        }
        Ok(shape)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Result<Self> {
        let (width, height) = self.validate(other)?;
        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
            width,
            height,
        })
    }

    fn map(mut self, f: impl Fn(Scalar) -> Scalar) -> Self {
        self.data.iter_mut().for_each(|x| *x = f(*x));
        self
    }

    /// Tests whether every cell pair differs by less than `eps`, row-major.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the shapes differ.
    pub fn equal(&self, other: &Self, eps: Scalar) -> Result<bool> {
        self.validate(other)?;
        Ok(approx_equal_slices(&self.data, &other.data, eps))
    }

    /// Cell-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the shapes differ.
    #[inline]
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Cell-wise difference.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the shapes differ.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the transpose: a `height`x`width` matrix.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.width {
            data.extend(self.rows().map(|r| r[j]));
        }
        Self {
            data,
            width: self.height,
            height: self.width,
        }
    }

    /// Matrix-vector product `self * v`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless `v.len() == self.width()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tmath::{Matrix, Vector};
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])?;
    /// let v = Vector::new(vec![1.0, 1.0])?;
    /// assert_eq!(m.mul_vector(&v)?, Vector::new(vec![3.0, 7.0, 11.0])?);
    /// # Ok::<(), tmath::Error>(())
    /// ```
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if v.len() != self.width {
            debug!(expected = self.width, got = v.len(), "matrix * vector mismatch");
            return Err(Error::dimension_mismatch(self.width, v.len()));
        }
        trace!(width = self.width, height = self.height, "matrix::mul_vector");
        Ok(Vector::from_vec_unchecked(
            self.rows()
                .map(|r| r.iter().zip(v).map(|(a, b)| a * b).sum::<Scalar>())
                .collect(),
        ))
    }

    /// Matrix product `self * other`.
    ///
    /// The result is `other.width()` wide and `self.height()` tall.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless `self.width() == other.height()`.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            debug!(expected = self.width, got = other.height, "matrix * matrix mismatch");
            return Err(Error::dimension_mismatch(self.width, other.height));
        }
        trace!(
            lhs_width = self.width,
            lhs_height = self.height,
            rhs_width = other.width,
            "matrix::mul_matrix"
        );

        let (width, height) = (other.width, self.height);
        let mut data = vec![0.0; width * height];
        for (i, lhs_row) in self.rows().enumerate() {
            let out = &mut data[i * width..(i + 1) * width];
            for (k, &a) in lhs_row.iter().enumerate() {
                for (o, &b) in out.iter_mut().zip(&other[k]) {
                    *o += a * b;
                }
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns true if all cells are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_components(f, row)?;
        }
        f.write_str("}")
    }
}

// Equality with EQUAL_EPSILON. Mismatched shapes compare unequal; use
// `Matrix::equal` to observe the shape error.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other, EQUAL_EPSILON).unwrap_or(false)
    }
}

// Row access: m[i] is a row slice, m[i][j] a cell
impl Index<usize> for Matrix {
    type Output = [Scalar];

    #[inline]
    fn index(&self, i: usize) -> &[Scalar] {
        assert!(i < self.height, "Matrix row out of bounds: {i} >= {}", self.height);
        &self.data[i * self.width..(i + 1) * self.width]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [Scalar] {
        assert!(i < self.height, "Matrix row out of bounds: {i} >= {}", self.height);
        &mut self.data[i * self.width..(i + 1) * self.width]
    }
}

// &Matrix + &Matrix
impl Add for &Matrix {
    type Output = Result<Matrix>;

    #[inline]
    fn add(self, rhs: Self) -> Result<Matrix> {
        self.checked_add(rhs)
    }
}

impl Add for Matrix {
    type Output = Result<Matrix>;

    #[inline]
    fn add(self, rhs: Self) -> Result<Matrix> {
        self.checked_add(&rhs)
    }
}

// &Matrix - &Matrix
impl Sub for &Matrix {
    type Output = Result<Matrix>;

    #[inline]
    fn sub(self, rhs: Self) -> Result<Matrix> {
        self.checked_sub(rhs)
    }
}

impl Sub for Matrix {
    type Output = Result<Matrix>;

    #[inline]
    fn sub(self, rhs: Self) -> Result<Matrix> {
        self.checked_sub(&rhs)
    }
}

// Matrix * Scalar
impl Mul<Scalar> for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Scalar) -> Matrix {
        self.map(|x| x * rhs)
    }
}

impl Mul<Scalar> for &Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Scalar) -> Matrix {
        self.clone() * rhs
    }
}

// Scalar * Matrix
impl Mul<Matrix> for Scalar {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

// Matrix / Scalar, IEEE semantics on zero
impl Div<Scalar> for Matrix {
    type Output = Matrix;

    #[inline]
    fn div(self, rhs: Scalar) -> Matrix {
        self.map(|x| x / rhs)
    }
}

impl Div<Scalar> for &Matrix {
    type Output = Matrix;

    #[inline]
    fn div(self, rhs: Scalar) -> Matrix {
        self.clone() / rhs
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    #[inline]
    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    #[inline]
    fn neg(self) -> Matrix {
        -self.clone()
    }
}

// &Matrix * &Vector
impl Mul<&Vector> for &Matrix {
    type Output = Result<Vector>;

    #[inline]
    fn mul(self, rhs: &Vector) -> Result<Vector> {
        self.mul_vector(rhs)
    }
}

// &Matrix * &Matrix
impl Mul for &Matrix {
    type Output = Result<Matrix>;

    #[inline]
    fn mul(self, rhs: Self) -> Result<Matrix> {
        self.mul_matrix(rhs)
    }
}

impl TryFrom<Vec<Vec<Scalar>>> for Matrix {
    type Error = Error;

    #[inline]
    fn try_from(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<const W: usize, const H: usize> TryFrom<[[Scalar; W]; H]> for Matrix {
    type Error = Error;

    #[inline]
    fn try_from(rows: [[Scalar; W]; H]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }
}

#[cfg(feature = "glam")]
impl From<glam::DMat3> for Matrix {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        // glam is column-major; the transpose's columns are our rows
        Self {
            data: m.transpose().to_cols_array().to_vec(),
            width: 3,
            height: 3,
        }
    }
}

#[cfg(feature = "glam")]
impl TryFrom<&Matrix> for glam::DMat3 {
    type Error = Error;

    fn try_from(m: &Matrix) -> Result<Self> {
        if m.shape() != (3, 3) {
            return Err(Error::shape_mismatch((3, 3), m.shape()));
        }
        let mut cells = [0.0; 9];
        cells.copy_from_slice(&m.data);
        // Row-major cells read as columns give the transpose
        Ok(glam::DMat3::from_cols_array(&cells).transpose())
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Matrix {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        EQUAL_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Matrix {
    fn default_max_relative() -> Scalar {
        Scalar::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[Scalar]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_matrix_from_rows() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.width(), 3);
        assert_eq!(a.height(), 2);
        assert_eq!(a[1][2], 6.0);
        assert_eq!(a.get(0, 1), Some(2.0));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.get(0, 3), None);
    }

    #[test]
    fn test_matrix_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        assert_eq!(err, Error::dimension_mismatch(2, 3));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_matrix_empty() {
        assert!(Matrix::from_rows(Vec::new()).unwrap_err().is_empty_error());
        assert!(Matrix::from_rows(vec![Vec::new()]).unwrap_err().is_empty_error());
        assert!(Matrix::zeros(0, 3).unwrap_err().is_empty_error());
        assert!(Matrix::zeros(3, 0).unwrap_err().is_empty_error());
        assert!(Matrix::identity(0).unwrap_err().is_empty_error());
    }

    #[test]
    fn test_matrix_oversized_shape() {
        assert_eq!(
            Matrix::zeros(usize::MAX, 2).unwrap_err(),
            Error::invalid_dimensions(usize::MAX, 2, "cell count overflows usize")
        );
        assert!(Matrix::zeros(2, usize::MAX).unwrap_err().is_dimension_error());
        assert!(matches!(
            Matrix::identity(usize::MAX),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_matrix_zeros_non_square() {
        // height rows of width cells
        let z = Matrix::zeros(4, 2).unwrap();
        assert_eq!(z.shape(), (4, 2));
        assert_eq!(z.rows().count(), 2);
        assert!(z.rows().all(|r| r == [0.0; 4]));
        assert_eq!(z, m(&[&[0.0; 4], &[0.0; 4]]));
    }

    #[test]
    fn test_matrix_index_mut() {
        let mut a = Matrix::zeros(2, 2).unwrap();
        a[0][1] = 3.0;
        a[1][0] = -1.0;
        assert_eq!(a, m(&[&[0.0, 3.0], &[-1.0, 0.0]]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_matrix_row_out_of_range() {
        let a = Matrix::zeros(2, 2).unwrap();
        let _ = &a[2];
    }

    #[test]
    fn test_matrix_clone_is_deep() {
        let a = m(&[&[1.0, 2.0]]);
        let mut b = a.clone();
        b[0][0] = 9.0;
        assert_eq!(a[0][0], 1.0);
    }

    #[test]
    fn test_matrix_equality() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0 + 1e-12]]));
        assert_ne!(a, m(&[&[1.0, 2.0], &[3.0, 4.1]]));
        assert!(a.equal(&m(&[&[1.0, 2.0], &[3.0, 4.1]]), 0.2).unwrap());

        let err = a.equal(&m(&[&[1.0, 2.0]]), EQUAL_EPSILON).unwrap_err();
        assert_eq!(err, Error::shape_mismatch((2, 2), (2, 1)));
        assert_ne!(a, m(&[&[1.0, 2.0]]));
    }

    #[test]
    fn test_matrix_add_sub() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.5, 0.5], &[1.0, -1.0]]);
        assert_eq!((&a + &b).unwrap(), m(&[&[1.5, 2.5], &[4.0, 3.0]]));
        assert_eq!((&a - &b).unwrap(), m(&[&[0.5, 1.5], &[2.0, 5.0]]));
        assert_eq!((a.clone() + b.clone()).unwrap(), (&b + &a).unwrap());

        let wide = Matrix::zeros(3, 2).unwrap();
        assert!((&a + &wide).unwrap_err().is_dimension_error());
        assert!((&a - &wide).unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_matrix_scalar() {
        let a = m(&[&[1.0, -2.0]]);
        assert_eq!(&a * 2.0, m(&[&[2.0, -4.0]]));
        assert_eq!(2.0 * a.clone(), m(&[&[2.0, -4.0]]));
        assert_eq!(&a / 2.0, m(&[&[0.5, -1.0]]));
        assert_eq!(-&a, m(&[&[-1.0, 2.0]]));
    }

    #[test]
    fn test_matrix_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_matrix_identity_mul() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let i3 = Matrix::identity(3).unwrap();
        let i2 = Matrix::identity(2).unwrap();
        assert_eq!((&a * &i3).unwrap(), a);
        assert_eq!((&i2 * &a).unwrap(), a);
    }

    #[test]
    fn test_matrix_mul_matrix() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0, 6.0, 7.0], &[8.0, 9.0, 10.0]]);
        let c = a.mul_matrix(&b).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c, m(&[&[21.0, 24.0, 27.0], &[47.0, 54.0, 61.0]]));
        assert_eq!(b.mul_matrix(&a).unwrap_err(), Error::dimension_mismatch(3, 2));
    }

    #[test]
    fn test_matrix_mul_vector() {
        let a = m(&[&[1.0, 0.0, 0.0], &[0.0, 2.0, 0.0]]);
        let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!((&a * &v).unwrap(), Vector::new(vec![1.0, 4.0]).unwrap());
        let short = Vector::new(vec![1.0, 2.0]).unwrap();
        assert_eq!(a.mul_vector(&short).unwrap_err(), Error::dimension_mismatch(3, 2));
    }

    #[test]
    fn test_matrix_row_column_vectors() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.row_vector(1).unwrap(), Vector::new(vec![3.0, 4.0]).unwrap());
        assert_eq!(a.column_vector(1).unwrap(), Vector::new(vec![2.0, 4.0]).unwrap());
        assert!(a.row_vector(2).is_none());
        assert!(a.column_vector(2).is_none());
    }

    #[test]
    fn test_matrix_display() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.5]]);
        assert_eq!(a.to_string(), "{[1, 2], [3, 4.5]}");
        assert_eq!(m(&[&[7.0]]).to_string(), "{[7]}");
    }

    #[test]
    fn test_matrix_try_from_array() {
        let a = Matrix::try_from([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert!(Matrix::try_from([[0.0; 0]; 2]).unwrap_err().is_empty_error());
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_matrix_glam_roundtrip() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 10.0]]);
        let g = glam::DMat3::try_from(&a).unwrap();
        // glam column 0 is our column 0
        assert_eq!(g.x_axis, glam::DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(Matrix::from(g), a);

        let v = glam::DVec3::new(1.0, 1.0, 1.0);
        let ours = a.mul_vector(&Vector::from(v)).unwrap();
        assert_eq!(ours, Vector::from(g * v));

        let small = Matrix::identity(2).unwrap();
        assert!(glam::DMat3::try_from(&small).unwrap_err().is_dimension_error());
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_matrix_approx_traits() {
        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

        let a = m(&[&[0.1 + 0.2, 1.0], &[2.0, 3.0]]);
        assert_abs_diff_eq!(a, m(&[&[0.3, 1.0], &[2.0, 3.0]]));
        assert_abs_diff_eq!(a, m(&[&[0.3, 1.05], &[2.0, 3.0]]), epsilon = 0.1);
        assert_abs_diff_ne!(a, m(&[&[0.3, 1.05], &[2.0, 3.0]]), epsilon = 0.01);

        let big = m(&[&[1e9, 0.0]]);
        assert_relative_eq!(big, m(&[&[1e9 + 1e-3, 0.0]]), max_relative = 1e-9);

        // same cells, different shape
        let row = m(&[&[0.0, 0.0, 0.0, 0.0]]);
        let square = Matrix::zeros(2, 2).unwrap();
        assert!(!approx::AbsDiffEq::abs_diff_eq(&row, &square, 1.0));
        assert!(!approx::RelativeEq::relative_eq(&row, &square, 1.0, 1.0));
        assert!(!approx::AbsDiffEq::abs_diff_eq(&row, &row.transpose(), 1.0));
    }
}
