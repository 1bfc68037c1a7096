use thiserror::Error;

/// Error type returned by matrix access and arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operands have incompatible shapes
    #[error("Incompatible dimensions: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Row or column index lies outside the matrix
    #[error("Index {index:?} out of range for matrix of size {size:?}")]
    IndexOutOfRange {
        index: (usize, usize),
        size: (usize, usize),
    },
    /// Operation is only defined for square matrices
    #[error("Matrix is not square")]
    NotSquare,
}

/// Error type returned by dense factorization routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    /// Matrix dimension is incompatible with the factorization
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Cholesky factorization produced a non-positive pivot
    #[error("Matrix is not positive definite (non-positive pivot at {pivot})")]
    NotPositiveDefinite { pivot: usize },
    /// Pivoted elimination produced a zero pivot
    #[error("Matrix is singular (zero pivot at {pivot})")]
    Singular { pivot: usize },
    /// Tridiagonal QL iteration exceeded its iteration budget
    #[error("Eigenvalue {index} failed to converge after {iterations} iterations")]
    ConvergenceFailure { index: usize, iterations: u32 },
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside its legal range
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
