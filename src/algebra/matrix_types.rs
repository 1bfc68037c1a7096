// All matrices are stored densely.  General matrices are column major,
// and symmetric matrices keep a single packed triangle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense matrix in column major format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in column major format
    pub(crate) data: Vec<T>,
}

/// Dense symmetric matrix in packed triangular format
///
/// Only `n(n+1)/2` values are stored.  The entries `(r,c)` and `(c,r)`
/// share a single backing cell, so the matrix is symmetric by construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymmetricMatrix<T = f64> {
    /// dimension
    pub(crate) n: usize,
    /// packed lower triangle, stored row by row
    pub(crate) data: Vec<T>,
}

/// Dense column vector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnVector<T = f64> {
    pub(crate) data: Vec<T>,
}

/// Dense row vector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowVector<T = f64> {
    pub(crate) data: Vec<T>,
}

/// Read-only transposed view of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}
