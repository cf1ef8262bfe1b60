//! Dense row-major grids used for distances and display positions.

use std::ops::{Index, IndexMut};

/// A `rows x cols` grid with O(1) `(row, col)` access.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Default + Clone> Matrix<T> {
    /// # Panics
    ///
    /// If `rows * cols` overflows or cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Like [`Matrix::new`], but returns `None` when `rows * cols` overflows
    /// or the allocation fails.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, T::default());
        Some(Self { data, rows, cols })
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "matrix index ({r}, {c}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        r * self.cols + c
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        &self.data[self.idx(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        let idx = self.idx(r, c);
        &mut self.data[idx]
    }
}

/// An `n x n` grid. Distance layouts write through [`SquareMatrix::set_symmetric`].
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T>(Matrix<T>);

impl<T: Default + Clone> SquareMatrix<T> {
    pub fn new(size: usize) -> Self {
        Self(Matrix::new(size, size))
    }

    pub fn try_new(size: usize) -> Option<Self> {
        Matrix::try_new(size, size).map(Self)
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Writes `value` to both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: T) {
        self.0[(j, i)] = value.clone();
        self.0[(i, j)] = value;
    }
}

impl<T: PartialEq> SquareMatrix<T> {
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.0[(i, j)] == self.0[(j, i)]))
    }
}

impl<T> SquareMatrix<T> {
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    pub fn row(&self, r: usize) -> &[T] {
        self.0.row(r)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.0.iter_rows()
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Default + Clone> From<Vec<Vec<T>>> for SquareMatrix<T> {
    /// Builds a square matrix from nested rows. Short rows are padded with `T::default()`.
    fn from(rows: Vec<Vec<T>>) -> Self {
        let n = rows.len();
        let mut matrix = Self::new(n);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().take(n).enumerate() {
                matrix[(r, c)] = value;
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, SquareMatrix};

    #[test]
    fn matrix_is_row_major() {
        let mut m: Matrix<f64> = Matrix::new(3, 2);
        m[(1, 0)] = 4.0;
        m[(1, 1)] = 5.0;

        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.row(1), &[4.0, 5.0]);
        assert_eq!(m.row(0), &[0.0, 0.0]);
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    fn set_symmetric_writes_both_cells() {
        let mut m: SquareMatrix<i64> = SquareMatrix::new(3);
        m.set_symmetric(0, 2, 9);
        m.set_symmetric(1, 1, 4);

        assert_eq!(m[(0, 2)], 9);
        assert_eq!(m[(2, 0)], 9);
        assert_eq!(m[(1, 1)], 4);
        assert!(m.is_symmetric());

        m[(0, 1)] = 1;
        assert!(!m.is_symmetric());
    }

    #[test]
    fn from_nested_rows() {
        let m = SquareMatrix::from(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(m.size(), 2);
        assert_eq!(m.row(0), &[0, 1]);
        assert_eq!(m.row(1), &[1, 0]);
    }

    #[test]
    fn try_new_rejects_unrepresentable_sizes() {
        assert!(Matrix::<f64>::try_new(usize::MAX, 2).is_none());
        assert!(SquareMatrix::<i64>::try_new(usize::MAX / 2).is_none());
        assert!(SquareMatrix::<i64>::try_new(usize::MAX / 8).is_none());

        let m = SquareMatrix::<i64>::try_new(3).expect("small matrix");
        assert_eq!(m, SquareMatrix::new(3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_index_panics() {
        let m: SquareMatrix<i64> = SquareMatrix::new(2);
        let _ = m[(2, 0)];
    }
}
