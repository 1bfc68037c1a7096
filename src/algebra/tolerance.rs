//! Approximate equality predicates.
//!
//! Matrix equality through `PartialEq` is exact.  The predicates here compare
//! values to within a tolerance built from independent absolute and
//! relative precisions, scaled by the size of the compared quantities.

#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::izip;

/// Default relative precision, allowing the last three digits of a
/// double precision value to differ
pub const TARGET_PRECISION: f64 = 2.273_736_754_432_320_6e-13; // 2⁻⁴²

/// Absolute and relative precision for approximate comparisons.
/// Negative values are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision<T> {
    pub absolute: T,
    pub relative: T,
}

impl<T> Precision<T>
where
    T: FloatT,
{
    pub fn new(absolute: T, relative: T) -> Self {
        Self { absolute, relative }
    }

    /// A purely relative precision
    pub fn relative(relative: T) -> Self {
        Self::new(T::zero(), relative)
    }

    fn tolerance(&self, norm: T) -> T {
        T::max(T::zero(), self.absolute) + norm * T::max(T::zero(), self.relative)
    }
}

impl<T> Default for Precision<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::relative(TARGET_PRECISION.as_T())
    }
}

/// `|x - y| ≤ absolute + (|x| + |y|)·relative`.  Matching infinities
/// compare equal, as do two NaNs.
pub fn is_nearly_equal<T: FloatT>(x: T, y: T, precision: &Precision<T>) -> bool {
    if x.is_infinite() && y.is_infinite() {
        return x == y;
    }
    if x.is_nan() && y.is_nan() {
        return true;
    }
    let norm = x.abs() + y.abs();
    (x - y).abs() <= precision.tolerance(norm)
}

/// Elementwise comparison of vectors, each entry within
/// [`TARGET_PRECISION`] times the summed magnitude of both vectors
pub fn is_vector_nearly_equal<T: FloatT>(u: &[T], v: &[T]) -> bool {
    if u.len() != v.len() {
        return false;
    }
    let e: T = TARGET_PRECISION.as_T();
    let tol = e * (u.norm_one() + v.norm_one());
    u.norm_inf_diff(v) <= tol
}

fn frobenius<T, M>(A: &M) -> T
where
    T: FloatT,
    M: DenseMatrix<T = T, Output = T>,
{
    let mut sumsq = T::zero();
    for r in 0..A.nrows() {
        for c in 0..A.ncols() {
            sumsq += A[(r, c)] * A[(r, c)];
        }
    }
    sumsq.sqrt()
}

/// `‖A - B‖_F ≤ absolute + (‖A‖_F + ‖B‖_F)·relative`
pub fn is_matrix_nearly_equal<T, MATA, MATB>(A: &MATA, B: &MATB, precision: &Precision<T>) -> bool
where
    T: FloatT,
    MATA: DenseMatrix<T = T, Output = T>,
    MATB: DenseMatrix<T = T, Output = T>,
{
    if A.size() != B.size() {
        return false;
    }
    let mut dsq = T::zero();
    for r in 0..A.nrows() {
        for c in 0..A.ncols() {
            let d = A[(r, c)] - B[(r, c)];
            dsq += d * d;
        }
    }
    let norm = frobenius(A) + frobenius(B);
    dsq.sqrt() <= precision.tolerance(norm)
}

/// Every entry of `A - B` within [`TARGET_PRECISION`]`·(‖A‖_F + ‖B‖_F)`
pub fn is_matrix_nearly_equal_elementwise<T, MATA, MATB>(A: &MATA, B: &MATB) -> bool
where
    T: FloatT,
    MATA: DenseMatrix<T = T, Output = T>,
    MATB: DenseMatrix<T = T, Output = T>,
{
    if A.size() != B.size() {
        return false;
    }
    let e: T = TARGET_PRECISION.as_T();
    let tol = e * (frobenius(A) + frobenius(B));
    for r in 0..A.nrows() {
        for c in 0..A.ncols() {
            if (A[(r, c)] - B[(r, c)]).abs() > tol {
                return false;
            }
        }
    }
    true
}

/// Compares `Σx` with `y`, allowing for the precision lost to cancellation
/// in the sum: `|Σx - y| ≤ e·(Σ|x| + |y|)` with `e` = [`TARGET_PRECISION`]
pub fn is_sum_nearly_equal<T: FloatT>(xs: &[T], y: T) -> bool {
    let e: T = TARGET_PRECISION.as_T();
    let sum = xs.sum();
    let error = e * (xs.norm_one() + y.abs());
    (sum - y).abs() <= error
}

/// Checks `Av ≈ λv` entrywise, to within
/// `e·(‖A‖_max‖v‖_max/n + |λ|‖v‖_max)` with `e` = [`TARGET_PRECISION`]
pub fn is_nearly_eigenpair<T, M>(A: &M, v: &ColumnVector<T>, λ: T) -> bool
where
    T: FloatT,
    M: DenseMatrix<T = T, Output = T>,
{
    is_nearly_eigenpair_within(A, v, λ, TARGET_PRECISION.as_T())
}

/// As [`is_nearly_eigenpair`], with relative precision `e`
pub fn is_nearly_eigenpair_within<T, M>(A: &M, v: &ColumnVector<T>, λ: T, e: T) -> bool
where
    T: FloatT,
    M: DenseMatrix<T = T, Output = T>,
{
    let n = v.dimension();
    if !A.is_square() || A.nrows() != n || n == 0 {
        return false;
    }

    let Av = (0..n)
        .map(|r| (0..n).fold(T::zero(), |acc, c| acc + A[(r, c)] * v[c]))
        .collect::<Vec<T>>();

    let Anorm = A.data().norm_inf();
    let vnorm = v.max_norm();
    let nT: T = n.as_T();
    let tol = e * ((Anorm * vnorm).abs() / nT + (λ * vnorm).abs());

    izip!(Av.iter(), v.as_slice().iter()).all(|(&avi, &vi)| (avi - λ * vi).abs() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nearly_equal() {
        let p = Precision::relative(1e-10);
        assert!(is_nearly_equal(1.0, 1.0 + 1e-12, &p));
        assert!(!is_nearly_equal(1.0, 1.0 + 1e-8, &p));
        assert!(is_nearly_equal(f64::INFINITY, f64::INFINITY, &p));
        assert!(!is_nearly_equal(f64::INFINITY, f64::NEG_INFINITY, &p));
        assert!(is_nearly_equal(f64::NAN, f64::NAN, &p));

        // absolute precision admits values near zero
        let p = Precision::new(1e-10, -1.0);
        assert!(is_nearly_equal(0.0, 1e-11, &p));
        assert!(!is_nearly_equal(1.0, 1.0 + 1e-9, &p));
    }

    #[test]
    fn test_is_sum_nearly_equal() {
        // catastrophic cancellation is tolerated in proportion to the terms
        let xs = [1e16, 1.0, -1e16];
        assert!(is_sum_nearly_equal(&xs, 1.0));
        assert!(!is_sum_nearly_equal(&[1.0, 2.0], 3.001));
    }

    #[test]
    fn test_is_matrix_nearly_equal() {
        let A = Matrix::from(&[[1., 2.], [3., 4.]]);
        let mut B = A.clone();
        B[(1, 1)] += 1e-14;
        assert!(is_matrix_nearly_equal(&A, &B, &Precision::default()));
        assert!(is_matrix_nearly_equal_elementwise(&A, &B));
        B[(1, 1)] += 1e-6;
        assert!(!is_matrix_nearly_equal(&A, &B, &Precision::default()));
        assert!(!is_matrix_nearly_equal_elementwise(&A, &B));
        assert!(!is_matrix_nearly_equal_elementwise(&A, &Matrix::zeros((2, 3))));
    }

    #[test]
    fn test_is_nearly_eigenpair() {
        let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[2.0], &[1.0, 2.0]]);
        let v = ColumnVector::from(vec![1.0, 1.0]);
        assert!(is_nearly_eigenpair(&S, &v, 3.0));
        assert!(!is_nearly_eigenpair(&S, &v, 1.0));
        assert!(!is_nearly_eigenpair(&S, &ColumnVector::zeros(3), 3.0));

        let w = ColumnVector::from(vec![1.0, 1.0 + 1e-9]);
        assert!(!is_nearly_eigenpair(&S, &w, 3.0));
        assert!(is_nearly_eigenpair_within(&S, &w, 3.0, 1e-6));
    }

    #[test]
    fn test_is_vector_nearly_equal() {
        assert!(is_vector_nearly_equal(&[1.0, 2.0], &[1.0, 2.0 + 1e-14]));
        assert!(!is_vector_nearly_equal(&[1.0, 2.0], &[1.0, 2.1]));
        assert!(!is_vector_nearly_equal(&[1.0], &[1.0, 2.0]));
    }
}
