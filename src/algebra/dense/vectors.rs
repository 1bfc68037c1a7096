#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

// Row and column vectors share an implementation, differing only in
// which products they take part in.

macro_rules! impl_vector_common {
    ($V:ident, $Other:ident) => {
        impl<T> $V<T>
        where
            T: FloatT,
        {
            /// A vector of zeros with dimension `n`
            pub fn zeros(n: usize) -> Self {
                Self {
                    data: vec![T::zero(); n],
                }
            }

            pub fn dimension(&self) -> usize {
                self.data.len()
            }

            pub fn as_slice(&self) -> &[T] {
                &self.data
            }

            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.data
            }

            pub fn into_vec(self) -> Vec<T> {
                self.data
            }

            /// Bounds checked read of entry `i`
            pub fn get(&self, i: usize) -> Result<T, MatrixError> {
                self.data
                    .get(i)
                    .copied()
                    .ok_or_else(|| self.out_of_range(i))
            }

            /// Bounds checked write of entry `i`
            pub fn set(&mut self, i: usize, v: T) -> Result<(), MatrixError> {
                let err = self.out_of_range(i);
                let x = self.data.get_mut(i).ok_or(err)?;
                *x = v;
                Ok(())
            }

            /// Copy of the vector in the other orientation
            pub fn transpose(&self) -> $Other<T> {
                $Other::from(self.data.clone())
            }

            pub fn max_norm(&self) -> T {
                self.data.norm_inf()
            }

            pub fn norm(&self) -> T {
                self.data.norm()
            }

            fn out_of_range(&self, i: usize) -> MatrixError {
                MatrixError::IndexOutOfRange {
                    index: self.matrix_index(i),
                    size: self.size(),
                }
            }
        }

        impl<T> From<Vec<T>> for $V<T> {
            fn from(data: Vec<T>) -> Self {
                Self { data }
            }
        }

        impl<T: Copy> From<&[T]> for $V<T> {
            fn from(data: &[T]) -> Self {
                Self {
                    data: data.to_vec(),
                }
            }
        }

        impl<T> Index<usize> for $V<T> {
            type Output = T;
            fn index(&self, i: usize) -> &T {
                &self.data[i]
            }
        }

        impl<T> IndexMut<usize> for $V<T> {
            fn index_mut(&mut self, i: usize) -> &mut T {
                &mut self.data[i]
            }
        }

        impl<T: FloatT> Add for &$V<T> {
            type Output = $V<T>;
            /// # Panics
            /// Panics if the dimensions differ
            fn add(self, rhs: &$V<T>) -> $V<T> {
                assert_eq!(self.dimension(), rhs.dimension());
                let mut out = self.clone();
                out.data.axpby(T::one(), &rhs.data, T::one());
                out
            }
        }

        impl<T: FloatT> Sub for &$V<T> {
            type Output = $V<T>;
            /// # Panics
            /// Panics if the dimensions differ
            fn sub(self, rhs: &$V<T>) -> $V<T> {
                assert_eq!(self.dimension(), rhs.dimension());
                let mut out = self.clone();
                out.data.axpby(-T::one(), &rhs.data, T::one());
                out
            }
        }

        impl<T: FloatT> Neg for &$V<T> {
            type Output = $V<T>;
            fn neg(self) -> $V<T> {
                let mut out = self.clone();
                out.data.negate();
                out
            }
        }

        impl<T: FloatT> Mul<T> for &$V<T> {
            type Output = $V<T>;
            fn mul(self, c: T) -> $V<T> {
                let mut out = self.clone();
                out.data.scale(c);
                out
            }
        }

        impl<T: FloatT> Mul<T> for $V<T> {
            type Output = $V<T>;
            fn mul(mut self, c: T) -> $V<T> {
                self.data.scale(c);
                self
            }
        }

        impl Mul<&$V<f32>> for f32 {
            type Output = $V<f32>;
            fn mul(self, v: &$V<f32>) -> $V<f32> {
                v * self
            }
        }

        impl Mul<&$V<f64>> for f64 {
            type Output = $V<f64>;
            fn mul(self, v: &$V<f64>) -> $V<f64> {
                v * self
            }
        }
    };
}

impl_vector_common!(ColumnVector, RowVector);
impl_vector_common!(RowVector, ColumnVector);

impl<T> ShapedMatrix for ColumnVector<T> {
    fn nrows(&self) -> usize {
        self.data.len()
    }
    fn ncols(&self) -> usize {
        1
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> ShapedMatrix for RowVector<T> {
    fn nrows(&self) -> usize {
        1
    }
    fn ncols(&self) -> usize {
        self.data.len()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> ColumnVector<T> {
    fn matrix_index(&self, i: usize) -> (usize, usize) {
        (i, 0)
    }
}

impl<T> RowVector<T> {
    fn matrix_index(&self, i: usize) -> (usize, usize) {
        (0, i)
    }
}

impl<T> RowVector<T>
where
    T: FloatT,
{
    /// Inner product with a column vector of the same dimension
    pub fn try_dot(&self, v: &ColumnVector<T>) -> Result<T, MatrixError> {
        check_mul_size(self, v)?;
        Ok(self.data.dot(&v.data))
    }
}

impl<T> ColumnVector<T>
where
    T: FloatT,
{
    /// Outer product with a row vector, giving a `self.dimension() × v.dimension()` matrix
    pub fn outer(&self, v: &RowVector<T>) -> Matrix<T> {
        Matrix::from_fn((self.dimension(), v.dimension()), |r, c| self[r] * v[c])
    }
}

// row * column = scalar
impl<T: FloatT> Mul<&ColumnVector<T>> for &RowVector<T> {
    type Output = T;
    /// # Panics
    /// Panics if the dimensions differ
    fn mul(self, v: &ColumnVector<T>) -> T {
        assert_eq!(self.dimension(), v.dimension());
        self.data.dot(&v.data)
    }
}

// column * row = matrix
impl<T: FloatT> Mul<&RowVector<T>> for &ColumnVector<T> {
    type Output = Matrix<T>;
    fn mul(self, v: &RowVector<T>) -> Matrix<T> {
        self.outer(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_outer() {
        let cv = ColumnVector::<f64>::from(vec![1., 2.]);
        let rv = RowVector::from(vec![3., 4., 5.]);
        let M = &cv * &rv;
        assert_eq!(M.size(), (2, 3));
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(M[(r, c)], cv[r] * rv[c]);
            }
        }

        let u = RowVector::from(vec![1., -1.]);
        assert_eq!(&u * &cv, -1.);
        assert_eq!(u.try_dot(&cv), Ok(-1.));
        assert!(rv.try_dot(&cv).is_err());
    }

    #[test]
    fn test_vector_arithmetic() {
        let v = ColumnVector::<f64>::from(vec![1., -2., 3.]);
        assert_eq!(&v + &v, 2.0 * &v);
        assert_eq!(&v - &v, 0.0 * &v);
        assert_eq!(-&v, &v * -1.0);
        assert_eq!(v.transpose().as_slice(), v.as_slice());
        assert_eq!(v.max_norm(), 3.);
    }

    #[test]
    fn test_checked_vector_access() {
        let mut v = RowVector::<f64>::zeros(2);
        assert!(v.set(1, 4.0).is_ok());
        assert_eq!(v.get(1), Ok(4.0));
        assert_eq!(
            v.get(2),
            Err(MatrixError::IndexOutOfRange {
                index: (0, 2),
                size: (1, 2)
            })
        );
    }
}
