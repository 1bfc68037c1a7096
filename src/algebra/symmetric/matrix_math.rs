#![allow(non_snake_case)]
use crate::algebra::*;
use std::ops::{Add, Mul, Neg, Sub};

// Elementwise operations act directly on the packed triangle, so
// their results are symmetric by construction.

impl<T: FloatT> MatrixMath for SymmetricMatrix<T> {
    type T = T;

    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn one_norm(&self) -> T {
        // each off-diagonal cell contributes to two column sums
        let mut colsums = vec![T::zero(); self.n];
        let mut k = 0;
        for r in 0..self.n {
            for c in 0..=r {
                let v = self.data[k].abs();
                colsums[c] += v;
                if r != c {
                    colsums[r] += v;
                }
                k += 1;
            }
        }
        colsums.iter().fold(T::zero(), |acc, &s| T::max(acc, s))
    }

    fn infinity_norm(&self) -> T {
        // row sums and column sums coincide
        self.one_norm()
    }

    fn frobenius_norm(&self) -> T {
        let mut diag = T::zero();
        let mut offdiag = T::zero();
        let mut k = 0;
        for r in 0..self.n {
            for c in 0..=r {
                let v = self.data[k];
                if r == c {
                    diag += v * v;
                } else {
                    offdiag += v * v;
                }
                k += 1;
            }
        }
        let two: T = (2.0).as_T();
        (diag + two * offdiag).sqrt()
    }

    fn max_norm(&self) -> T {
        self.data.norm_inf()
    }
}

impl<T> SymmetricMatrix<T>
where
    T: FloatT,
{
    /// Elementwise sum, or a `DimensionMismatch` error if the dimensions differ
    pub fn try_add(&self, B: &SymmetricMatrix<T>) -> Result<SymmetricMatrix<T>, MatrixError> {
        check_same_size(self, B)?;
        let mut C = self.clone();
        C.data.axpby(T::one(), &B.data, T::one());
        Ok(C)
    }

    /// Elementwise difference, or a `DimensionMismatch` error if the dimensions differ
    pub fn try_sub(&self, B: &SymmetricMatrix<T>) -> Result<SymmetricMatrix<T>, MatrixError> {
        check_same_size(self, B)?;
        let mut C = self.clone();
        C.data.axpby(-T::one(), &B.data, T::one());
        Ok(C)
    }

    /// General matrix product `self*B`.  The product of two symmetric
    /// matrices is not symmetric in general, so the result is a [`Matrix`].
    pub fn try_mul<MATB>(&self, B: &MATB) -> Result<Matrix<T>, MatrixError>
    where
        MATB: DenseMatrix<T = T, Output = T>,
    {
        check_mul_size(self, B)?;
        let mut C = Matrix::zeros((self.n, B.ncols()));
        MultiplyGEMM::mul(&mut C, self, B, T::one(), T::zero());
        Ok(C)
    }

    /// Matrix-vector product `self*x`
    pub fn try_mul_vec(&self, x: &ColumnVector<T>) -> Result<ColumnVector<T>, MatrixError> {
        check_mul_size(self, x)?;
        let mut y = ColumnVector::zeros(self.n);
        let mut k = 0;
        for r in 0..self.n {
            for c in 0..=r {
                let v = self.data[k];
                y[r] += v * x[c];
                if r != c {
                    y[c] += v * x[r];
                }
                k += 1;
            }
        }
        Ok(y)
    }
}

// ---------------------------------------------------------
// operator overloads.  These panic on dimension mismatch.
// ---------------------------------------------------------

macro_rules! unwrap_or_panic {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    };
}

impl<T: FloatT> Add for &SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn add(self, B: &SymmetricMatrix<T>) -> SymmetricMatrix<T> {
        unwrap_or_panic!(self.try_add(B))
    }
}

impl<T: FloatT> Sub for &SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn sub(self, B: &SymmetricMatrix<T>) -> SymmetricMatrix<T> {
        unwrap_or_panic!(self.try_sub(B))
    }
}

impl<T: FloatT> Add for SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn add(self, B: SymmetricMatrix<T>) -> SymmetricMatrix<T> {
        &self + &B
    }
}

impl<T: FloatT> Sub for SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn sub(self, B: SymmetricMatrix<T>) -> SymmetricMatrix<T> {
        &self - &B
    }
}

impl<T: FloatT> Neg for &SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn neg(self) -> SymmetricMatrix<T> {
        let mut C = self.clone();
        C.negate();
        C
    }
}

impl<T: FloatT> Neg for SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn neg(mut self) -> SymmetricMatrix<T> {
        self.negate();
        self
    }
}

impl<T: FloatT> Mul<T> for &SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn mul(self, c: T) -> SymmetricMatrix<T> {
        let mut C = self.clone();
        MatrixMath::scale(&mut C, c);
        C
    }
}

impl<T: FloatT> Mul<T> for SymmetricMatrix<T> {
    type Output = SymmetricMatrix<T>;
    fn mul(mut self, c: T) -> SymmetricMatrix<T> {
        MatrixMath::scale(&mut self, c);
        self
    }
}

impl<T: FloatT> Mul<&SymmetricMatrix<T>> for &SymmetricMatrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &SymmetricMatrix<T>) -> Matrix<T> {
        unwrap_or_panic!(self.try_mul(B))
    }
}

impl<T: FloatT> Mul<&Matrix<T>> for &SymmetricMatrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &Matrix<T>) -> Matrix<T> {
        unwrap_or_panic!(self.try_mul(B))
    }
}

impl<T: FloatT> Mul<&SymmetricMatrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &SymmetricMatrix<T>) -> Matrix<T> {
        unwrap_or_panic!(self.try_mul(B))
    }
}

impl<'a, T: FloatT> Mul<&SymmetricMatrix<T>> for Adjoint<'a, Matrix<T>> {
    type Output = Matrix<T>;
    fn mul(self, B: &SymmetricMatrix<T>) -> Matrix<T> {
        assert_eq!(self.ncols(), B.nrows());
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        MultiplyGEMM::mul(&mut C, &self, B, T::one(), T::zero());
        C
    }
}

impl<T: FloatT> Mul<&ColumnVector<T>> for &SymmetricMatrix<T> {
    type Output = ColumnVector<T>;
    fn mul(self, x: &ColumnVector<T>) -> ColumnVector<T> {
        unwrap_or_panic!(self.try_mul_vec(x))
    }
}

macro_rules! impl_scalar_lmul {
    ($fxx:ty) => {
        impl Mul<&SymmetricMatrix<$fxx>> for $fxx {
            type Output = SymmetricMatrix<$fxx>;
            fn mul(self, A: &SymmetricMatrix<$fxx>) -> SymmetricMatrix<$fxx> {
                A * self
            }
        }
        impl Mul<SymmetricMatrix<$fxx>> for $fxx {
            type Output = SymmetricMatrix<$fxx>;
            fn mul(self, A: SymmetricMatrix<$fxx>) -> SymmetricMatrix<$fxx> {
                A * self
            }
        }
    };
}
impl_scalar_lmul!(f32);
impl_scalar_lmul!(f64);

#[test]
fn test_symmetric_norms_match_dense() {
    let S = SymmetricMatrix::<f64>::from_fn(6, |r, c| ((r + 2 * c) as f64).sin() - 0.3);
    let A = S.to_dense();

    assert_eq!(S.one_norm(), S.infinity_norm());
    assert!((S.one_norm() - A.one_norm()).abs() <= 1e-14 * A.one_norm());
    assert!((S.infinity_norm() - A.infinity_norm()).abs() <= 1e-14 * A.infinity_norm());
    assert!((S.frobenius_norm() - A.frobenius_norm()).abs() <= 1e-14 * A.frobenius_norm());
    assert_eq!(S.max_norm(), A.max_norm());
}

#[test]
fn test_symmetric_arithmetic() {
    let S = SymmetricMatrix::<f64>::from_fn(4, |r, c| (r as f64) - 2.0 * (c as f64));

    assert_eq!(&S + &S, 2.0 * &S);
    assert_eq!(&S - &S, 0.0 * &S);
    assert_eq!(-&S, &S * -1.0);

    let B = SymmetricMatrix::<f64>::zeros(3);
    assert_eq!(
        S.try_add(&B),
        Err(MatrixError::DimensionMismatch {
            expected: (4, 4),
            found: (3, 3)
        })
    );
    assert!(S.try_mul(&B).is_err());
}

#[test]
fn test_symmetric_products() {
    let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[1.0], &[2.0, 3.0]]);
    let T = SymmetricMatrix::<f64>::from_lower_rows(&[&[0.0], &[1.0, 1.0]]);

    // product of symmetric matrices is a general matrix
    let ST = &S * &T;
    assert_eq!(ST, Matrix::from(&[[2., 3.], [3., 5.]]));
    assert_eq!(ST, &S.to_dense() * &T.to_dense());
    assert_eq!(&S * &T.to_dense(), ST);
    assert_eq!(&S.to_dense() * &T, ST);

    let x = ColumnVector::from(vec![1., -1.]);
    assert_eq!((&S * &x).into_vec(), vec![-1., -1.]);
    assert!(S.try_mul_vec(&ColumnVector::zeros(3)).is_err());
}
