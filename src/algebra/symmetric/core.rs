#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for SymmetricMatrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        packed_index(idx.0, idx.1)
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> ShapedMatrix for SymmetricMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> SymmetricMatrix<T>
where
    T: FloatT,
{
    /// An n×n symmetric matrix of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![T::zero(); triangular_number(n)],
        }
    }

    /// The n×n unit matrix
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// Construct by evaluating `f(r,c)` over the lower triangle `c ≤ r`.
    /// The upper triangle is implied by symmetry.
    pub fn from_fn<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut S = Self::zeros(n);
        S.fill(f);
        S
    }

    /// Overwrite every entry with `f(r,c)`, evaluated for `c ≤ r` only
    pub fn fill<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> T,
    {
        // row-by-row traversal of the lower triangle visits
        // the packed store in order
        let mut k = 0;
        for r in 0..self.n {
            for c in 0..=r {
                self.data[k] = f(r, c);
                k += 1;
            }
        }
    }

    /// Construct from the rows of the lower triangle, where row `r`
    /// holds the `r+1` entries `(r,0)..=(r,r)`.
    ///
    /// # Panics
    /// Panics if any row has the wrong length.
    pub fn from_lower_rows(rows: &[&[T]]) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(triangular_number(n));
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                r + 1,
                "row {} of a lower triangle must have {} entries",
                r,
                r + 1
            );
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Bounds checked read of entry `(r,c)`.  `(r,c)` and `(c,r)` always agree.
    pub fn get(&self, r: usize, c: usize) -> Result<T, MatrixError> {
        self.check_index(r, c)?;
        Ok(self[(r, c)])
    }

    /// Bounds checked write of entry `(r,c)`.  The write is also seen at `(c,r)`.
    pub fn set(&mut self, r: usize, c: usize, v: T) -> Result<(), MatrixError> {
        self.check_index(r, c)?;
        self[(r, c)] = v;
        Ok(())
    }

    /// Copy of row `r`, which has the same entries as column `r`
    pub fn row(&self, r: usize) -> Result<RowVector<T>, MatrixError> {
        self.check_index(r, r)?;
        Ok(RowVector::from(self.line(r)))
    }

    /// Copy of column `c`, which has the same entries as row `c`
    pub fn column(&self, c: usize) -> Result<ColumnVector<T>, MatrixError> {
        self.check_index(c, c)?;
        Ok(ColumnVector::from(self.line(c)))
    }

    fn line(&self, i: usize) -> Vec<T> {
        (0..self.n).map(|j| self[(i, j)]).collect()
    }

    /// Sum of the diagonal entries
    pub fn trace(&self) -> T {
        (0..self.n).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    /// Expand to a full dense matrix
    pub fn to_dense(&self) -> Matrix<T> {
        Matrix::from_fn((self.n, self.n), |r, c| self[(r, c)])
    }

    /// The packed lower triangle, stored row by row
    pub fn packed_data(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<&SymmetricMatrix<T>> for Matrix<T>
where
    T: FloatT,
{
    fn from(S: &SymmetricMatrix<T>) -> Self {
        S.to_dense()
    }
}

impl<T> Index<(usize, usize)> for SymmetricMatrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(
            idx.0 < self.n && idx.1 < self.n,
            "index {:?} out of range for symmetric matrix of dimension {}",
            idx,
            self.n
        );
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for SymmetricMatrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(
            idx.0 < self.n && idx.1 < self.n,
            "index {:?} out of range for symmetric matrix of dimension {}",
            idx,
            self.n
        );
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for SymmetricMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}
