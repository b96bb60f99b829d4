//! Error types for matr

use thiserror::Error;

/// Result type alias using matr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matr operations
///
/// Every error is fatal to the operation that raised it: there are no
/// retries, no partial results, and no silent clamping. Callers handle
/// errors at their own boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Two sequences that must have equal length do not
    ///
    /// Raised by [`dot`](crate::ops::dot) when operand lengths differ, and
    /// by [`Matrix::from_rows`](crate::matrix::Matrix::from_rows) when a row
    /// does not match the length of the first row. Because multiplication
    /// checks inner dimensions through its dot products, a mismatched
    /// multiply surfaces as this error too.
    #[error("dimension mismatch: {lhs} != {rhs}")]
    DimensionMismatch {
        /// Length of the first operand
        lhs: usize,
        /// Length of the second operand
        rhs: usize,
    },

    /// Multiplication was attempted with a zero-row operand
    #[error("cannot multiply a matrix with zero rows")]
    EmptyOperand,

    /// A row index is not a valid row of the matrix
    #[error("row index {index} out of range for matrix with {rows} rows")]
    IndexOutOfRange {
        /// The requested row index
        index: usize,
        /// Number of rows in the matrix
        rows: usize,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch { lhs, rhs }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, rows: usize) -> Self {
        Self::IndexOutOfRange { index, rows }
    }
}
