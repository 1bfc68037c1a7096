#![allow(non_snake_case)]
use crate::algebra::*;
use std::iter::zip;
use std::ops::{Add, Mul, Neg, Sub};

impl<T: FloatT> MatrixMath for Matrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn one_norm(&self) -> T {
        (0..self.n).fold(T::zero(), |acc, c| T::max(acc, self.col_slice(c).norm_one()))
    }

    fn infinity_norm(&self) -> T {
        let mut rowsums = vec![T::zero(); self.m];
        for c in 0..self.n {
            for (s, v) in zip(rowsums.iter_mut(), self.col_slice(c)) {
                *s += v.abs();
            }
        }
        rowsums.iter().fold(T::zero(), |acc, &s| T::max(acc, s))
    }

    fn frobenius_norm(&self) -> T {
        self.data.norm()
    }

    fn max_norm(&self) -> T {
        self.data.norm_inf()
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Elementwise sum, or a `DimensionMismatch` error if the shapes differ
    pub fn try_add(&self, B: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        check_same_size(self, B)?;
        let mut C = self.clone();
        C.data.axpby(T::one(), &B.data, T::one());
        Ok(C)
    }

    /// Elementwise difference, or a `DimensionMismatch` error if the shapes differ
    pub fn try_sub(&self, B: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        check_same_size(self, B)?;
        let mut C = self.clone();
        C.data.axpby(-T::one(), &B.data, T::one());
        Ok(C)
    }

    /// Matrix product `self*B`, or a `DimensionMismatch` error if the
    /// inner dimensions differ
    pub fn try_mul<MATB>(&self, B: &MATB) -> Result<Matrix<T>, MatrixError>
    where
        MATB: DenseMatrix<T = T, Output = T>,
    {
        check_mul_size(self, B)?;
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        MultiplyGEMM::mul(&mut C, self, B, T::one(), T::zero());
        Ok(C)
    }

    /// Matrix-vector product `self*x`
    pub fn try_mul_vec(&self, x: &ColumnVector<T>) -> Result<ColumnVector<T>, MatrixError> {
        check_mul_size(self, x)?;
        let mut y = ColumnVector::zeros(self.m);
        for c in 0..self.n {
            y.data.axpby(x[c], self.col_slice(c), T::one());
        }
        Ok(y)
    }
}

// ---------------------------------------------------------
// operator overloads.  These panic on dimension mismatch, so
// use the try_* versions when shapes are not known in advance.
// ---------------------------------------------------------

impl<T: FloatT> Add for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, B: &Matrix<T>) -> Matrix<T> {
        match self.try_add(B) {
            Ok(C) => C,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FloatT> Sub for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, B: &Matrix<T>) -> Matrix<T> {
        match self.try_sub(B) {
            Ok(C) => C,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FloatT> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        let mut C = self.clone();
        C.negate();
        C
    }
}

impl<T: FloatT> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, c: T) -> Matrix<T> {
        let mut C = self.clone();
        MatrixMath::scale(&mut C, c);
        C
    }
}

impl<T: FloatT> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &Matrix<T>) -> Matrix<T> {
        match self.try_mul(B) {
            Ok(C) => C,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T: FloatT> Mul<&Matrix<T>> for Adjoint<'a, Matrix<T>> {
    type Output = Matrix<T>;
    fn mul(self, B: &Matrix<T>) -> Matrix<T> {
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        MultiplyGEMM::mul(&mut C, &self, B, T::one(), T::zero());
        C
    }
}

impl<T: FloatT> Mul<&ColumnVector<T>> for &Matrix<T> {
    type Output = ColumnVector<T>;
    fn mul(self, x: &ColumnVector<T>) -> ColumnVector<T> {
        match self.try_mul_vec(x) {
            Ok(y) => y,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FloatT> Mul<&Matrix<T>> for &RowVector<T> {
    type Output = RowVector<T>;
    fn mul(self, A: &Matrix<T>) -> RowVector<T> {
        assert_eq!(self.dimension(), A.nrows());
        let data = (0..A.ncols())
            .map(|c| self.data.dot(A.col_slice(c)))
            .collect::<Vec<T>>();
        RowVector::from(data)
    }
}

macro_rules! impl_owned_binop {
    ($Trait:ident, $fn:ident) => {
        impl<T: FloatT> $Trait for Matrix<T> {
            type Output = Matrix<T>;
            fn $fn(self, B: Matrix<T>) -> Matrix<T> {
                (&self).$fn(&B)
            }
        }
    };
}
impl_owned_binop!(Add, add);
impl_owned_binop!(Sub, sub);

impl<T: FloatT> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(mut self) -> Matrix<T> {
        self.negate();
        self
    }
}

impl<T: FloatT> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(mut self, c: T) -> Matrix<T> {
        MatrixMath::scale(&mut self, c);
        self
    }
}

macro_rules! impl_scalar_lmul {
    ($fxx:ty) => {
        impl Mul<&Matrix<$fxx>> for $fxx {
            type Output = Matrix<$fxx>;
            fn mul(self, A: &Matrix<$fxx>) -> Matrix<$fxx> {
                A * self
            }
        }
        impl Mul<Matrix<$fxx>> for $fxx {
            type Output = Matrix<$fxx>;
            fn mul(self, A: Matrix<$fxx>) -> Matrix<$fxx> {
                A * self
            }
        }
    };
}
impl_scalar_lmul!(f32);
impl_scalar_lmul!(f64);

#[test]
fn test_norms() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [-1.,  4.,  6.],
        [ 3., -8.,  7.],
        [ 0.,  4.,  9.],
    ]);

    assert_eq!(A.one_norm(), 22.);
    assert_eq!(A.infinity_norm(), 18.);
    assert_eq!(A.max_norm(), 9.);
    assert_eq!(Matrix::from(&[[3., 0.], [0., -4.]]).frobenius_norm(), 5.);
    assert_eq!(Matrix::<f64>::zeros((2, 3)).one_norm(), 0.);
}

#[test]
fn test_arithmetic_errors() {
    let A = Matrix::<f64>::zeros((2, 3));
    let B = Matrix::<f64>::zeros((3, 2));
    assert_eq!(
        A.try_add(&B),
        Err(MatrixError::DimensionMismatch {
            expected: (2, 3),
            found: (3, 2)
        })
    );
    assert!(A.try_sub(&B).is_err());
    assert!(A.try_mul(&A).is_err());
    assert_eq!(A.try_mul(&B).map(|C| C.size()), Ok((2, 2)));
    assert!(A.try_mul_vec(&ColumnVector::zeros(2)).is_err());
}

#[test]
#[should_panic]
fn test_mismatched_add_panics() {
    let A = Matrix::<f64>::zeros((2, 3));
    let B = Matrix::<f64>::zeros((3, 2));
    let _ = &A + &B;
}

#[test]
fn test_matrix_vector_products() {
    let A = Matrix::from(&[[1., 2.], [3., 4.], [5., 6.]]);
    let x = ColumnVector::from(vec![1., -1.]);
    assert_eq!((&A * &x).into_vec(), vec![-1., -1., -1.]);

    let y = RowVector::from(vec![1., 0., -1.]);
    assert_eq!((&y * &A).into_vec(), vec![-4., -4.]);

    let AtA = A.t() * &A;
    assert_eq!(AtA, Matrix::from(&[[35., 44.], [44., 56.]]));
}
