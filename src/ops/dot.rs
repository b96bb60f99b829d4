//! Dot product of two rows

use crate::element::Element;
use crate::error::{Error, Result};

/// Dot product of two equal-length slices
///
/// Sums `v1[k] * v2[k]` in index order starting from `T::zero()`. The
/// left-to-right summation order is part of the contract: for
/// non-associative element types (floating point), it keeps results
/// reproducible.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] carrying both lengths if the slices
/// differ in length.
///
/// # Example
///
/// ```
/// use matr::ops::dot;
///
/// assert_eq!(dot(&[1, 2, 3], &[4, 5, 6])?, 32);
/// # Ok::<(), matr::error::Error>(())
/// ```
pub fn dot<T: Element>(v1: &[T], v2: &[T]) -> Result<T> {
    if v1.len() != v2.len() {
        return Err(Error::dimension_mismatch(v1.len(), v2.len()));
    }

    let mut sum = T::zero();
    for (&a, &b) in v1.iter().zip(v2) {
        sum = sum + a * b;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::dot;
    use crate::error::Error;

    #[test]
    fn dot_sums_elementwise_products() {
        assert_eq!(dot(&[1, 2, 3], &[1, 2, 3]).unwrap(), 14);
        assert_eq!(dot(&[1.0, 2.0], &[0.5, 0.25]).unwrap(), 1.0);
    }

    #[test]
    fn dot_of_empty_slices_is_zero() {
        let empty: &[i32] = &[];
        assert_eq!(dot(empty, empty).unwrap(), 0);
    }

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let err = dot(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { lhs: 3, rhs: 2 }));
    }
}
