#![allow(non_snake_case)]
use crate::algebra::*;

// LU factorization with partial pivoting, PA = LU.  The unit lower
// triangle L and upper triangle U share the storage of a single matrix.
pub(crate) struct LuEngine<T> {
    LU: Matrix<T>,
    ipiv: Vec<usize>,
}

impl<T> LuEngine<T>
where
    T: FloatT,
{
    pub fn new(A: &Matrix<T>) -> Result<Self, DenseFactorizationError> {
        if !A.is_square() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        let n = A.nrows();
        let mut LU = A.clone();
        let mut ipiv = vec![0; n];

        for k in 0..n {
            // largest magnitude entry on or below the diagonal
            let (p, pmax) = (k..n).fold((k, -T::one()), |(p, pmax), i| {
                let v = LU[(i, k)].abs();
                if v > pmax {
                    (i, v)
                } else {
                    (p, pmax)
                }
            });

            // NaN pivots fail here too
            if !(pmax > T::zero()) {
                return Err(DenseFactorizationError::Singular { pivot: k });
            }

            ipiv[k] = p;
            if p != k {
                for j in 0..n {
                    let tmp = LU[(k, j)];
                    LU[(k, j)] = LU[(p, j)];
                    LU[(p, j)] = tmp;
                }
            }

            let d = LU[(k, k)];
            for i in (k + 1)..n {
                LU[(i, k)] /= d;
            }
            for j in (k + 1)..n {
                let ukj = LU[(k, j)];
                for i in (k + 1)..n {
                    let lik = LU[(i, k)];
                    LU[(i, j)] -= lik * ukj;
                }
            }
        }

        Ok(Self { LU, ipiv })
    }

    /// Overwrite each column `b` of `B` with the solution of `Ax = b`
    pub fn solve(&self, B: &mut Matrix<T>) {
        let n = self.LU.nrows();
        assert_eq!(B.nrows(), n);

        for c in 0..B.ncols() {
            let b = B.col_slice_mut(c);

            for (k, &p) in self.ipiv.iter().enumerate() {
                b.swap(k, p);
            }

            // forward substitution, unit diagonal
            for j in 0..n {
                let bj = b[j];
                for i in (j + 1)..n {
                    b[i] -= self.LU[(i, j)] * bj;
                }
            }

            // backward substitution
            for j in (0..n).rev() {
                b[j] /= self.LU[(j, j)];
                let bj = b[j];
                for i in 0..j {
                    b[i] -= self.LU[(i, j)] * bj;
                }
            }
        }
    }

    pub fn inverse(&self) -> Matrix<T> {
        let mut X = Matrix::identity(self.LU.nrows());
        self.solve(&mut X);
        X
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Inverse of a square matrix, computed by LU factorization with
    /// partial pivoting.
    ///
    /// Returns `IncompatibleDimension` for a non-square matrix and
    /// `Singular` if a zero pivot is encountered.
    pub fn inverse(&self) -> Result<Matrix<T>, DenseFactorizationError> {
        let lu = LuEngine::new(self)?;
        Ok(lu.inverse())
    }
}

macro_rules! generate_test_lu {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A = Matrix::<$fxx>::from(&[
                [3., 2., 4.], //
                [2., 0., 2.], //
                [4., 2., 3.], //
            ]);

            let mut B = Matrix::<$fxx>::from(&[
                [-5., 13.], //
                [-2., 4.],  //
                [-2., 9.],  //
            ]);

            let X = Matrix::<$fxx>::from(&[
                [1., -1.], //
                [0., 2.],  //
                [-2., 3.], //
            ]);

            let lu = LuEngine::new(&A).unwrap();
            lu.solve(&mut B);
            assert!(B.data().norm_inf_diff(X.data()) < 1e-5);

            let Ainv = A.inverse().unwrap();
            let I = &A * &Ainv;
            assert!(I.data().norm_inf_diff(Matrix::identity(3).data()) < 1e-5);
        }
    };
}

generate_test_lu!(f32, test_lu_f32);
generate_test_lu!(f64, test_lu_f64);

#[test]
fn test_lu_singular() {
    let A = Matrix::<f64>::from(&[[1., 2.], [2., 4.]]);
    assert_eq!(
        A.inverse().err(),
        Some(DenseFactorizationError::Singular { pivot: 1 })
    );

    let A = Matrix::<f64>::zeros((2, 3));
    assert_eq!(
        A.inverse().err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}
