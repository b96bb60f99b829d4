//! Core Matrix type

use crate::element::Element;
use crate::error::{Error, Result};
use std::cell::OnceCell;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense 2-dimensional matrix with a memoized transpose
///
/// `Matrix` stores its elements row-major as one `Vec` per row, and keeps a
/// single-slot cache holding its own transpose. The cache fills lazily on
/// the first [`transpose`](Matrix::transpose) call and is cleared by any
/// mutable row access, so a cached value can never be observed stale.
///
/// All mutation goes through [`row_mut`](Matrix::row_mut) or the `IndexMut`
/// sugar; no other path hands out `&mut` into the storage. Both yield
/// `&mut [T]`, so callers can rewrite elements of a row but cannot change
/// its length, which keeps the matrix rectangular.
///
/// The cache uses interior mutability (`OnceCell`), so `Matrix` is not
/// `Sync`; it is a single-threaded type.
///
/// # Example
///
/// ```
/// use matr::matrix::Matrix;
///
/// let mut m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.transpose(), &Matrix::from([[1, 4], [2, 5], [3, 6]]));
///
/// m[0][0] = 10;
/// assert_eq!(m.transpose()[0], [10, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    /// Row-major storage: one inner vec per row, all of equal length
    pub(crate) data: Vec<Vec<T>>,
    /// Memoized transpose; empty until computed, cleared on mutable access
    pub(crate) transposed: OnceCell<Box<Matrix<T>>>,
}

impl<T> Matrix<T> {
    /// Create an empty matrix with zero rows and zero columns
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            transposed: OnceCell::new(),
        }
    }

    /// Create a matrix from a vec of rows
    ///
    /// The rows are taken verbatim. Rectangularity is validated eagerly:
    /// every row must match the length of the first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] carrying the offending row's
    /// length and the expected length if the input is ragged.
    ///
    /// # Example
    ///
    /// ```
    /// use matr::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    /// assert_eq!(m.shape(), (2, 2));
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// # Ok::<(), matr::error::Error>(())
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let cols = first.len();
            for row in &rows[1..] {
                if row.len() != cols {
                    return Err(Error::dimension_mismatch(row.len(), cols));
                }
            }
        }
        Ok(Self {
            data: rows,
            transposed: OnceCell::new(),
        })
    }

    /// Internal constructor for storage already known to be rectangular
    pub(crate) fn from_raw(data: Vec<Vec<T>>) -> Self {
        Self {
            data,
            transposed: OnceCell::new(),
        }
    }

    /// Number of rows in this matrix
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns in this matrix
    ///
    /// A matrix with zero rows has zero columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether this matrix has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutable view of row `index`
    ///
    /// Does not touch the transpose cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= rows()`.
    pub fn row(&self, index: usize) -> Result<&[T]> {
        self.data
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::index_out_of_range(index, self.data.len()))
    }

    /// Mutable view of row `index`
    ///
    /// Clears the transpose cache unconditionally before returning, whether
    /// or not the caller actually writes. Invalidation on access rather
    /// than on write trades an occasional unnecessary recomputation for a
    /// cache that can never be stale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= rows()`.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut [T]> {
        if index >= self.data.len() {
            return Err(Error::index_out_of_range(index, self.data.len()));
        }
        self.transposed.take();
        Ok(&mut self.data[index])
    }
}

impl<T: Element> Matrix<T> {
    /// Create a rows x cols matrix with every element set to `value`
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self::from_raw((0..rows).map(|_| vec![value; cols]).collect())
    }

    /// Create a rows x cols matrix of additive identities
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::zero())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    /// Literal construction from a 2-dimensional array, rectangular by type
    fn from(rows: [[T; N]; M]) -> Self {
        Self::from_raw(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    /// Immutable row access, panicking on out-of-range like `Vec` indexing
    ///
    /// For a fallible alternative, use [`Matrix::row`].
    fn index(&self, index: usize) -> &[T] {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    /// Mutable row access, panicking on out-of-range like `Vec` indexing
    ///
    /// Clears the transpose cache exactly as [`Matrix::row_mut`] does. For a
    /// fallible alternative, use [`Matrix::row_mut`].
    fn index_mut(&mut self, index: usize) -> &mut [T] {
        self.transposed.take();
        &mut self.data[index]
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Elementwise equality over identical shapes
    ///
    /// The transpose cache is derived state, not identity, and is never
    /// consulted.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Diagnostic rendering: elements space-separated, one row per line
    ///
    /// The empty matrix renders as the empty string. This is a debug
    /// format, not a parseable serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for (j, item) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
