//! # matr
//!
//! **Dense generic 2-dimensional matrices for Rust.**
//!
//! matr provides a row-major [`Matrix`](matrix::Matrix) type parameterized
//! over any element type that supports addition, multiplication, and textual
//! rendering, plus the operations a dense matrix needs: construction,
//! row access, equality, transpose, and matrix multiplication.
//!
//! ## Memoized transpose
//!
//! Each matrix carries a single-slot cache for its own transpose. The first
//! call to [`transpose`](matrix::Matrix::transpose) computes and stores it;
//! later calls return the cached value in O(1). Any mutable row access clears
//! the cache, so a cached transpose is never observably stale. Matrix
//! multiplication leans on this: the right operand is transposed once, and
//! every result element is a dot product of two rows.
//!
//! ## Quick Start
//!
//! ```
//! use matr::prelude::*;
//!
//! let a = Matrix::from([[1, 2, 3]]);
//! let b = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
//! let c = Matrix::from([[1], [2], [3]]);
//!
//! let product = a.multiply(&b)?.multiply(&c)?;
//! assert_eq!(product, Matrix::from([[228]]));
//! # Ok::<(), matr::error::Error>(())
//! ```
//!
//! ## Scope
//!
//! matr is deliberately small: dense storage only, no sparse formats, no
//! pivoting or epsilon comparisons, no parallelism, no blocked/SIMD kernels.
//! Operations run to completion on the caller's thread; the only deferred
//! work is the lazy transpose computation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod matrix;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::ops::dot;
}
