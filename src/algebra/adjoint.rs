/// Adjoint of a matrix
use crate::algebra::{Adjoint, DenseMatrix, FloatT, Matrix, MatrixShape, ShapedMatrix};
use std::ops::Index;

impl<'a, M> ShapedMatrix for Adjoint<'a, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.ncols()
    }
    fn ncols(&self) -> usize {
        self.src.nrows()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::T
    }
}

impl<'a, T> DenseMatrix for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> From<Adjoint<'_, Matrix<T>>> for Matrix<T>
where
    T: FloatT,
{
    fn from(At: Adjoint<'_, Matrix<T>>) -> Self {
        Matrix::from_fn(At.size(), |r, c| At[(r, c)])
    }
}
