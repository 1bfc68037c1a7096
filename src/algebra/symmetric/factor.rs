#![allow(non_snake_case)]
use crate::algebra::*;
use log::debug;

impl<T> SymmetricMatrix<T>
where
    T: FloatT,
{
    /// Cholesky decomposition, failing if the matrix is not positive definite
    pub fn cholesky(&self) -> Result<CholeskyDecomposition<T>, DenseFactorizationError> {
        CholeskyDecomposition::new(self)
    }

    /// Eigendecomposition with default settings
    pub fn eigen(&self) -> Result<Eigendecomposition<T>, DenseFactorizationError> {
        Eigendecomposition::new(self, &EigenSettings::default())
    }

    pub fn eigen_with(
        &self,
        settings: &EigenSettings<T>,
    ) -> Result<Eigendecomposition<T>, DenseFactorizationError> {
        Eigendecomposition::new(self, settings)
    }

    /// Eigenvalues only, in no particular order
    pub fn eigenvalues(&self) -> Result<Vec<T>, DenseFactorizationError> {
        symmetric_eigenvalues(self, &EigenSettings::default())
    }

    /// Inverse of the matrix, which is again symmetric.
    ///
    /// Positive definite matrices are inverted through their Cholesky
    /// decomposition.  Otherwise an LU factorization with partial pivoting
    /// is used and the two triangles of the result are averaged.  Returns
    /// `Singular` if the matrix is singular.
    ///
    /// Accuracy degrades with the condition number of the matrix.  Hilbert
    /// matrices of dimension 4 and above cannot be inverted to 2⁻⁴²
    /// relative accuracy in double precision.
    pub fn inverse(&self) -> Result<SymmetricMatrix<T>, DenseFactorizationError> {
        match CholeskyDecomposition::new(self) {
            Ok(chol) => Ok(chol.inverse()),
            Err(DenseFactorizationError::NotPositiveDefinite { pivot }) => {
                debug!(
                    "inverse: non-positive pivot at row {}, falling back to LU",
                    pivot
                );
                let X = LuEngine::new(&self.to_dense())?.inverse();
                let half: T = (0.5).as_T();
                Ok(SymmetricMatrix::from_fn(self.n, |r, c| {
                    half * (X[(r, c)] + X[(c, r)])
                }))
            }
            Err(e) => Err(e),
        }
    }
}

#[test]
fn test_symmetric_inverse_indefinite() {
    // indefinite, so the LU path is taken
    let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[1.0], &[2.0, 1.0]]);
    let Sinv = S.inverse().unwrap();
    let I = &S * &Sinv;
    assert!(I.data().norm_inf_diff(Matrix::identity(2).data()) < 1e-14);

    let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[1.0], &[1.0, 1.0]]);
    assert_eq!(
        S.inverse().err(),
        Some(DenseFactorizationError::Singular { pivot: 1 })
    );
}

#[test]
fn test_symmetric_eigenvalues() {
    let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[2.0], &[1.0, 2.0]]);
    let mut vals = S.eigenvalues().unwrap();
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((vals[0] - 1.0).abs() < 1e-14);
    assert!((vals[1] - 3.0).abs() < 1e-14);
}
