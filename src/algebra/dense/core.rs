#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// An m×n matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// The n×n unit matrix
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    /// Overwrite with the unit matrix
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Construct from data given in column major order
    ///
    /// # Panics
    /// Panics if `src` does not have exactly `m*n` entries.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Construct by evaluating `f(r,c)` at every entry
    pub fn from_fn<F>(size: (usize, usize), mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let (m, n) = size;
        let mut data = Vec::with_capacity(m * n);
        for c in 0..n {
            for r in 0..m {
                data.push(f(r, c));
            }
        }
        Self { m, n, data }
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Bounds checked read of entry `(r,c)`
    pub fn get(&self, r: usize, c: usize) -> Result<T, MatrixError> {
        self.check_index(r, c)?;
        Ok(self[(r, c)])
    }

    /// Bounds checked write of entry `(r,c)`
    pub fn set(&mut self, r: usize, c: usize, v: T) -> Result<(), MatrixError> {
        self.check_index(r, c)?;
        self[(r, c)] = v;
        Ok(())
    }

    /// Transposed view of the matrix.  No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Transposed copy of the matrix
    pub fn transpose(&self) -> Self {
        self.t().into()
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Copy of row `r`.  Later changes to the matrix are not reflected.
    pub fn row(&self, r: usize) -> Result<RowVector<T>, MatrixError> {
        if r >= self.m {
            return Err(MatrixError::IndexOutOfRange {
                index: (r, 0),
                size: self.size(),
            });
        }
        let data = (0..self.n).map(|c| self[(r, c)]).collect::<Vec<T>>();
        Ok(RowVector::from(data))
    }

    /// Copy of column `c`.  Later changes to the matrix are not reflected.
    pub fn column(&self, c: usize) -> Result<ColumnVector<T>, MatrixError> {
        if c >= self.n {
            return Err(MatrixError::IndexOutOfRange {
                index: (0, c),
                size: self.size(),
            });
        }
        Ok(ColumnVector::from(self.col_slice(c).to_vec()))
    }

    /// Sum of the diagonal entries
    pub fn trace(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        Ok((0..self.n).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    pub fn is_triu(&self) -> bool {
        // check lower triangle for any nonzero entries
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_tril(&self) -> bool {
        // check upper triangle for any nonzero entries
        for c in 0..self.ncols() {
            for r in 0..c.min(self.nrows()) {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

// construct from a row-wise nested array literal, e.g.
// Matrix::from(&[[1., 2.], [3., 4.]])
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        Matrix::from_fn((M, N), |r, c| rows[r][c])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(
            idx.0 < self.m && idx.1 < self.n,
            "index {:?} out of range for matrix of size {:?}",
            idx,
            (self.m, self.n)
        );
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(
            idx.0 < self.m && idx.1 < self.n,
            "index {:?} out of range for matrix of size {:?}",
            idx,
            (self.m, self.n)
        );
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

pub(crate) fn display_matrix<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix,
    M::Output: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}
