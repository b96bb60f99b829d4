//! Matrix multiplication

use super::dot;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::ops::Mul;

impl<T: Element> Matrix<T> {
    /// Matrix product `self * other`
    ///
    /// Produces a `self.rows() x other.cols()` matrix where element
    /// `[i][j]` is the dot product of row `i` of `self` with column `j` of
    /// `other`. Columns are read as rows of `other.transpose()`, which the
    /// memoization guarantees is computed at most once per multiply no
    /// matter how many result elements there are.
    ///
    /// Inner-dimension compatibility (`self.cols() == other.rows()`) is not
    /// checked up front: a mismatch surfaces as a `DimensionMismatch` from
    /// the first dot product.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyOperand`] if either operand has zero rows, before
    ///   any computation
    /// - [`Error::DimensionMismatch`] if the inner dimensions disagree
    ///
    /// # Example
    ///
    /// ```
    /// use matr::matrix::Matrix;
    ///
    /// let a = Matrix::from([[1], [2], [3]]);
    /// let b = Matrix::from([[1, 2, 3]]);
    /// let product = a.multiply(&b)?;
    /// assert_eq!(product, Matrix::from([[1, 2, 3], [2, 4, 6], [3, 6, 9]]));
    /// # Ok::<(), matr::error::Error>(())
    /// ```
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows() == 0 || other.rows() == 0 {
            return Err(Error::EmptyOperand);
        }

        let other_t = other.transpose();
        let mut data = Vec::with_capacity(self.rows());
        for row in &self.data {
            let mut out_row = Vec::with_capacity(other_t.rows());
            for col in &other_t.data {
                out_row.push(dot(row, col)?);
            }
            data.push(out_row);
        }
        Ok(Matrix::from_raw(data))
    }
}

impl<T: Element> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Operator form of [`Matrix::multiply`]
    ///
    /// Chains left-to-right with ordinary operator associativity; no
    /// reassociation is performed.
    ///
    /// # Panics
    ///
    /// Panics if [`Matrix::multiply`] fails (zero-row operand or
    /// incompatible inner dimensions).
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.multiply(rhs) {
            Ok(product) => product,
            Err(err) => panic!("matrix multiplication failed: {err}"),
        }
    }
}

impl<T: Element> Mul for Matrix<T> {
    type Output = Matrix<T>;

    /// By-value operator form, for chained expressions like `a * b * c`
    ///
    /// # Panics
    ///
    /// Panics if [`Matrix::multiply`] fails (zero-row operand or
    /// incompatible inner dimensions).
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}
