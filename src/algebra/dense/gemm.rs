#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, ShapedMatrix};

/// BLAS-like general matrix-matrix multiply
pub trait MultiplyGEMM {
    type T;
    /// Produces `self = α*A*B + β*self`
    ///
    /// # Panics
    /// Panics if the dimensions of `A`, `B` and `self` are incompatible.
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<T = Self::T, Output = Self::T>,
        MATB: DenseMatrix<T = Self::T, Output = Self::T>;
}

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T = T, Output = T>,
        MATB: DenseMatrix<T = T, Output = T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        let k = A.ncols();
        for c in 0..self.ncols() {
            for r in 0..self.nrows() {
                let mut acc = T::zero();
                for i in 0..k {
                    acc += A[(r, i)] * B[(i, c)];
                }
                // β == 0 must not propagate NaNs from uninitialized C
                let Crc = &mut self[(r, c)];
                *Crc = if β == T::zero() {
                    α * acc
                } else {
                    α * acc + β * (*Crc)
                };
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let A = Matrix::<f64>::new_from_slice((m, k), &a);
    let B = Matrix::<f64>::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::new_from_slice((m, n), &c);
    C.mul(&A, &B, 1.0, 1.0);

    assert!(C.data == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // transposed multiply
    let mut C = Matrix::<f64>::zeros((n, m));
    C.mul(&B.t(), &A.t(), 1.0, 0.0);

    assert!(C.data == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
}
