use std::error::Error;
use std::fmt;
use std::slice::ChunksExact;

use num_traits::Zero;

use crate::math::vector::Array1;

/// Dense row-major matrix. Rows are examples, columns are features.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of equally sized rows.
    ///
    /// An empty list yields a `0 x 0` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(ShapeError {
                    rows: nrows,
                    cols: ncols,
                    len: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows in order.
    ///
    /// A matrix with zero columns yields no rows.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols.max(1))
    }

    pub fn select_rows(&self, indices: &[usize]) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Array2 {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }

    /// Stack `other` underneath `self`. Both must share the column count.
    pub fn vstack(&self, other: &Array2<T>) -> Result<Array2<T>, ShapeError>
    where
        T: Clone,
    {
        if self.cols != other.cols {
            return Err(ShapeError {
                rows: other.rows,
                cols: self.cols,
                len: other.data.len(),
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Array2 {
            data,
            rows: self.rows + other.rows,
            cols: self.cols,
        })
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Column sums, one entry per feature.
    pub fn sum_columns(&self) -> Array1<T>
    where
        T: Copy + Zero,
    {
        let mut sums = vec![T::zero(); self.cols];
        for row in self.rows() {
            for (acc, &v) in sums.iter_mut().zip(row) {
                *acc = *acc + v;
            }
        }
        Array1::from_vec(sums)
    }
}

impl<T: Clone + Zero> Array2<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Array2 {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_rows_iterates_in_order() {
        let x = Array2::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let rows: Vec<&[i32]> = x.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn test_vstack_and_column_sums() {
        let a = Array2::from_shape_vec((1, 3), vec![1.0, 0.0, 2.0]).unwrap();
        let b = Array2::from_shape_vec((2, 3), vec![0.0, 1.0, 1.0, 3.0, 0.0, 0.0]).unwrap();
        let stacked = a.vstack(&b).unwrap();
        assert_eq!(stacked.shape(), (3, 3));
        assert_eq!(stacked.sum_columns().to_vec(), vec![4.0, 1.0, 3.0]);
    }

    #[test]
    fn test_vstack_column_mismatch() {
        let a = Array2::<f64>::zeros(1, 3);
        let b = Array2::<f64>::zeros(1, 2);
        assert!(a.vstack(&b).is_err());
    }
}
