//! Operations over matrices and rows
//!
//! The dot product is the leaf: multiplication is nothing but dot products
//! of left-operand rows against rows of the right operand's (memoized)
//! transpose.

mod dot;
mod matmul;

pub use dot::dot;
