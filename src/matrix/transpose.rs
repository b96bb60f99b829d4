//! Memoized transpose

use super::Matrix;
use crate::element::Element;

impl<T: Element> Matrix<T> {
    /// The transpose of this matrix, computed at most once
    ///
    /// Returns a matrix `t` with `t[j][i] == self[i][j]` for every valid
    /// `(i, j)`, so `t` has shape `(cols, rows)`.
    ///
    /// The first call on a non-empty matrix computes the transpose in
    /// O(rows * cols) and stores it in the single-slot cache; subsequent
    /// calls return the cached value in O(1). The cache survives until the
    /// next mutable row access, which clears it, so the returned value
    /// always reflects the current elements.
    ///
    /// A matrix with zero rows has no elements to swap and is returned
    /// as-is, without touching the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use matr::matrix::Matrix;
    ///
    /// let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
    /// let t = m.transpose();
    /// assert_eq!(t, &Matrix::from([[1, 4], [2, 5], [3, 6]]));
    ///
    /// // second call is a cache hit
    /// assert_eq!(m.transpose(), t);
    /// ```
    pub fn transpose(&self) -> &Matrix<T> {
        if self.data.is_empty() {
            return self;
        }

        let cached = self.transposed.get_or_init(|| {
            let mut data: Vec<Vec<T>> = (0..self.cols())
                .map(|_| Vec::with_capacity(self.rows()))
                .collect();
            for row in &self.data {
                for (j, &item) in row.iter().enumerate() {
                    data[j].push(item);
                }
            }
            Box::new(Matrix::from_raw(data))
        });
        cached.as_ref()
    }
}
