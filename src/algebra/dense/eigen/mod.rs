#![allow(non_snake_case)]

use crate::algebra::*;
use log::debug;

mod eigenpairs;
mod ql;
mod settings;
mod tridiagonal;

pub use eigenpairs::*;
pub use settings::*;

use ql::tridiagonal_ql;
use tridiagonal::tridiagonalize;

/// Eigendecomposition `VᵀAV = D` of a real symmetric matrix.
///
/// Computed by Householder reduction to tridiagonal form followed by
/// implicitly shifted QL iteration.  Eigenvalues appear in the order
/// the iteration produces them, which is not sorted in any sense.  Use
/// [`EigenpairCollection::sort`] to impose an order.
#[derive(Debug, Clone)]
pub struct Eigendecomposition<T = f64> {
    eigenpairs: EigenpairCollection<T>,
    /// diagonal matrix of eigenvalues
    D: Matrix<T>,
    /// orthogonal matrix of eigenvectors
    V: Matrix<T>,
}

impl<T> Eigendecomposition<T>
where
    T: FloatT,
{
    pub fn new(
        A: &SymmetricMatrix<T>,
        settings: &EigenSettings<T>,
    ) -> Result<Self, DenseFactorizationError> {
        let n = A.dimension();
        if n == 0 {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        let mut V = Matrix::identity(n);
        let mut d = vec![T::zero(); n];
        let mut e = vec![T::zero(); n];

        tridiagonalize(A, Some(&mut V), &mut d, &mut e);
        let sweeps = tridiagonal_ql(&mut d, &mut e, Some(&mut V), settings)?;

        debug!(
            "eigen: diagonalized matrix of dimension {} in {} QL sweeps",
            n, sweeps
        );

        let mut D = Matrix::zeros((n, n));
        for (i, &λ) in d.iter().enumerate() {
            D[(i, i)] = λ;
        }

        let pairs = d
            .iter()
            .enumerate()
            .map(|(i, &λ)| Eigenpair {
                eigenvalue: λ,
                eigenvector: ColumnVector::from(V.col_slice(i)),
            })
            .collect();

        Ok(Self {
            eigenpairs: EigenpairCollection::new(pairs),
            D,
            V,
        })
    }

    pub fn dimension(&self) -> usize {
        self.V.nrows()
    }

    pub fn eigenpairs(&self) -> &EigenpairCollection<T> {
        &self.eigenpairs
    }

    /// Mutable access to the eigenpairs, e.g. for sorting.  Reordering the
    /// pairs leaves [`diagonalized_matrix`](Self::diagonalized_matrix) and
    /// [`transform_matrix`](Self::transform_matrix) untouched.
    pub fn eigenpairs_mut(&mut self) -> &mut EigenpairCollection<T> {
        &mut self.eigenpairs
    }

    /// Eigenvalues in the current order of the eigenpairs
    pub fn eigenvalues(&self) -> Vec<T> {
        self.eigenpairs.eigenvalues()
    }

    /// The diagonal matrix `D`
    pub fn diagonalized_matrix(&self) -> &Matrix<T> {
        &self.D
    }

    /// The orthogonal matrix `V`, whose columns are eigenvectors
    pub fn transform_matrix(&self) -> &Matrix<T> {
        &self.V
    }

    pub fn into_eigenpairs(self) -> EigenpairCollection<T> {
        self.eigenpairs
    }
}

/// Eigenvalues of `A` only, skipping the eigenvector accumulation
pub(crate) fn symmetric_eigenvalues<T: FloatT>(
    A: &SymmetricMatrix<T>,
    settings: &EigenSettings<T>,
) -> Result<Vec<T>, DenseFactorizationError> {
    let n = A.dimension();
    if n == 0 {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    let mut d = vec![T::zero(); n];
    let mut e = vec![T::zero(); n];
    tridiagonalize(A, None, &mut d, &mut e);
    tridiagonal_ql(&mut d, &mut e, None, settings)?;
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eigen() {
        #[rustfmt::skip]
        let S = SymmetricMatrix::<f64>::from_lower_rows(&[
            &[ 3.],
            &[ 1.,  4.],
            &[ 2.,  0.,  5.],
            &[-1.,  2.,  1.,  6.],
        ]);

        let eig = Eigendecomposition::new(&S, &EigenSettings::default()).unwrap();
        let V = eig.transform_matrix();
        let D = eig.diagonalized_matrix();

        let VtAV = V.t() * &(&S * V);
        assert!(VtAV.data().norm_inf_diff(D.data()) < 1e-12);

        let VtV = V.t() * V;
        assert!(VtV.data().norm_inf_diff(Matrix::identity(4).data()) < 1e-14);

        for (i, pair) in eig.eigenpairs().iter().enumerate() {
            assert_eq!(pair.eigenvalue, D[(i, i)]);
            let Av = &S * &pair.eigenvector;
            let λv = &pair.eigenvector * pair.eigenvalue;
            assert!(Av.as_slice().norm_inf_diff(λv.as_slice()) < 1e-12);
        }

        let sum: f64 = eig.eigenvalues().iter().sum();
        assert!((sum - S.trace()).abs() < 1e-12);

        // the values only path agrees
        let vals = symmetric_eigenvalues(&S, &EigenSettings::default()).unwrap();
        for (a, b) in eig.eigenvalues().iter().zip(vals.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_eigen_trivial_cases() {
        let S = SymmetricMatrix::<f64>::from_lower_rows(&[&[-7.5]]);
        let eig = Eigendecomposition::new(&S, &EigenSettings::default()).unwrap();
        assert_eq!(eig.eigenvalues(), vec![-7.5]);
        assert_eq!(eig.transform_matrix(), &Matrix::identity(1));

        let S = SymmetricMatrix::<f64>::zeros(3);
        let eig = Eigendecomposition::new(&S, &EigenSettings::default()).unwrap();
        assert_eq!(eig.eigenvalues(), vec![0.0; 3]);

        let S = SymmetricMatrix::<f64>::zeros(0);
        assert_eq!(
            Eigendecomposition::new(&S, &EigenSettings::default()).err(),
            Some(DenseFactorizationError::IncompatibleDimension)
        );
    }

    #[test]
    fn test_eigen_sort_leaves_transform() {
        let S = SymmetricMatrix::<f64>::from_fn(5, |r, c| ((r + 1) * (c + 2)) as f64 - 4.0);
        let mut eig = Eigendecomposition::new(&S, &EigenSettings::default()).unwrap();
        let V = eig.transform_matrix().clone();

        eig.eigenpairs_mut().sort(OrderBy::ValueDescending);
        let vals = eig.eigenvalues();
        assert!(vals.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(eig.transform_matrix(), &V);

        let pairs = eig.into_eigenpairs();
        assert_eq!(pairs.len(), 5);
    }
}
