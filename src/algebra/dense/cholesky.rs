#![allow(non_snake_case)]

use crate::algebra::*;
use log::debug;

/// Cholesky decomposition `A = LLᵀ` of a symmetric positive definite matrix.
///
/// The decomposition owns its lower triangular factor `L` and keeps no
/// reference to the source matrix, so later changes to the source have
/// no effect on it.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T = f64> {
    /// lower triangular factor (stored as square dense)
    L: Matrix<T>,
}

impl<T> CholeskyDecomposition<T>
where
    T: FloatT,
{
    /// Factor `A`, computing `L` one row at a time.
    ///
    /// Returns `NotPositiveDefinite` with the index of the first non-positive
    /// pivot if `A` is not positive definite, and `IncompatibleDimension`
    /// for an empty matrix.
    pub fn new(A: &SymmetricMatrix<T>) -> Result<Self, DenseFactorizationError> {
        let n = A.dimension();
        if n == 0 {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        let mut L = Matrix::zeros((n, n));

        for r in 0..n {
            for c in 0..r {
                let mut t = A[(r, c)];
                for k in 0..c {
                    t -= L[(r, k)] * L[(c, k)];
                }
                L[(r, c)] = t / L[(c, c)];
            }

            let mut t = A[(r, r)];
            for k in 0..r {
                t -= L[(r, k)] * L[(r, k)];
            }

            // NaN pivots fail here too
            if !(t > T::zero()) {
                debug!("cholesky: non-positive pivot {:e} at row {} of {}", t, r, n);
                return Err(DenseFactorizationError::NotPositiveDefinite { pivot: r });
            }
            L[(r, r)] = t.sqrt();
        }

        debug!("cholesky: factored matrix of dimension {}", n);
        Ok(Self { L })
    }

    pub fn dimension(&self) -> usize {
        self.L.nrows()
    }

    /// The lower triangular factor `L`
    pub fn square_root_matrix(&self) -> &Matrix<T> {
        &self.L
    }

    /// Determinant of `A`, as the product of the squared diagonal of `L`
    pub fn determinant(&self) -> T {
        (0..self.dimension()).fold(T::one(), |acc, i| {
            let lii = self.L[(i, i)];
            acc * lii * lii
        })
    }

    /// Natural log of the determinant of `A`.  Stays finite where
    /// [`determinant`](Self::determinant) would overflow or underflow.
    pub fn log_determinant(&self) -> T {
        let s = (0..self.dimension()).fold(T::zero(), |acc, i| acc + self.L[(i, i)].ln());
        let two: T = (2.0).as_T();
        two * s
    }

    /// Solve `Ax = b`, returning a `DimensionMismatch` error if `b` has the
    /// wrong length
    pub fn solve(&self, b: &ColumnVector<T>) -> Result<ColumnVector<T>, MatrixError> {
        check_mul_size(&self.L, b)?;
        let mut x = b.clone();
        self.solve_in_place(x.as_mut_slice());
        Ok(x)
    }

    /// Overwrite `b` with the solution of `Ax = b`
    ///
    /// # Panics
    /// Panics if `b` does not match the dimension of the decomposition.
    pub fn solve_in_place(&self, b: &mut [T]) {
        let n = self.dimension();
        assert_eq!(b.len(), n);
        let L = &self.L;

        // forward substitution: Ly = b
        for r in 0..n {
            let mut t = b[r];
            for k in 0..r {
                t -= L[(r, k)] * b[k];
            }
            b[r] = t / L[(r, r)];
        }

        // backward substitution: Lᵀx = y
        for r in (0..n).rev() {
            let mut t = b[r];
            for k in (r + 1)..n {
                t -= L[(k, r)] * b[k];
            }
            b[r] = t / L[(r, r)];
        }
    }

    /// Inverse of `A`, which is again symmetric.
    ///
    /// Computed as `L⁻ᵀL⁻¹`.  Accuracy degrades with the condition number
    /// of `A`.  For Hilbert matrices, which are notoriously ill conditioned,
    /// the inverse agrees with the exact one to only about 2⁻⁴² relative
    /// accuracy up to dimension 3.
    pub fn inverse(&self) -> SymmetricMatrix<T> {
        let n = self.dimension();
        let L = &self.L;

        // W = L⁻¹, lower triangular, by forward substitution on each unit vector
        let mut W = Matrix::zeros((n, n));
        for c in 0..n {
            W[(c, c)] = T::one() / L[(c, c)];
            for r in (c + 1)..n {
                let mut t = T::zero();
                for k in c..r {
                    t -= L[(r, k)] * W[(k, c)];
                }
                W[(r, c)] = t / L[(r, r)];
            }
        }

        // A⁻¹[r,c] = Σ_k W[k,r]W[k,c], with W[k,r] = 0 for k < r
        SymmetricMatrix::from_fn(n, |r, c| {
            // c ≤ r here
            W.col_slice(r)[r..].dot(&W.col_slice(c)[r..])
        })
    }
}
