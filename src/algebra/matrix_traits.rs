#![allow(non_snake_case)]

use std::ops::Index;

use crate::algebra::{MatrixError, MatrixShape};

/// Dimension queries common to every matrix type
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn shape(&self) -> MatrixShape;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Returns an `IndexOutOfRange` error unless `(r,c)` lies in the matrix
    fn check_index(&self, r: usize, c: usize) -> Result<(), MatrixError> {
        if r < self.nrows() && c < self.ncols() {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                index: (r, c),
                size: self.size(),
            })
        }
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on Matrix, Adjoint and SymmetricMatrix to allow for indexing
//of values in any of those formats.   This follows the Julia naming convention
//for similar types.
/// Read access to matrix entries through a linear index into backing storage
pub trait DenseMatrix: ShapedMatrix + Index<(usize, usize)> {
    type T;
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[Self::T];
}

pub(crate) fn check_same_size<MATA, MATB>(A: &MATA, B: &MATB) -> Result<(), MatrixError>
where
    MATA: ShapedMatrix,
    MATB: ShapedMatrix,
{
    if A.size() == B.size() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            expected: A.size(),
            found: B.size(),
        })
    }
}

pub(crate) fn check_mul_size<MATA, MATB>(A: &MATA, B: &MATB) -> Result<(), MatrixError>
where
    MATA: ShapedMatrix,
    MATB: ShapedMatrix,
{
    if A.ncols() == B.nrows() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            expected: (A.ncols(), B.ncols()),
            found: B.size(),
        })
    }
}
