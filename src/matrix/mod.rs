//! Matrix type and row accessors
//!
//! This module provides the core [`Matrix`] type: a dense, row-major,
//! 2-dimensional array that owns its storage outright and memoizes its own
//! transpose in a single-slot cache.

mod core;
mod transpose;

pub use core::Matrix;
