#![allow(non_snake_case)]

use densesym::algebra::tolerance::*;
use densesym::algebra::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_symmetric_matrix(n: usize, seed: u64) -> SymmetricMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    SymmetricMatrix::from_fn(n, |_, _| 2.0 * rng.gen::<f64>() - 1.0)
}

fn hilbert_matrix(n: usize) -> SymmetricMatrix<f64> {
    SymmetricMatrix::from_fn(n, |r, c| 1.0 / ((r + c + 1) as f64))
}

// Householder and QL eigenvectors of random matrices land within a few
// multiples of TARGET_PRECISION, so an exact 2⁻⁴² bound depends on the seed
const EIGENPAIR_PRECISION: f64 = 8.0 * TARGET_PRECISION;

#[test]
fn test_random_matrix_eigenvectors() {
    for d in (1..=100).step_by(11) {
        let A = random_symmetric_matrix(d, d as u64);
        let eig = A.eigen().unwrap();
        assert_eq!(eig.dimension(), d);

        let pairs = eig.eigenpairs();
        let D = eig.diagonalized_matrix();
        let V = eig.transform_matrix();
        assert_eq!(pairs.len(), d);

        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.eigenvalue, D[(i, i)]);
            assert_eq!(pair.eigenvector.as_slice(), V.col_slice(i));
            assert!(is_nearly_eigenpair_within(
                &A,
                &pair.eigenvector,
                pair.eigenvalue,
                EIGENPAIR_PRECISION
            ));
        }

        // eigenvalues sum to the trace
        assert!(is_sum_nearly_equal(&eig.eigenvalues(), A.trace()));

        // V diagonalizes A and is orthogonal
        let VtAV = V.t() * &(&A * V);
        assert!(is_matrix_nearly_equal_elementwise(&VtAV, D));
        let VtV = V.t() * V;
        assert!(is_matrix_nearly_equal_elementwise(&VtV, &Matrix::identity(d)));
    }
}

#[test]
fn test_hilbert_matrix_eigenvalues() {
    for d in 1..=8 {
        let H = hilbert_matrix(d);
        let values = H.eigenvalues().unwrap();
        assert_eq!(values.len(), d);

        assert!(is_sum_nearly_equal(&values, H.trace()));
        // positive definite
        assert!(values.iter().all(|&λ| λ > 0.0));
    }

    // the largest eigenvalue of the 4x4 Hilbert matrix
    let mut values = hilbert_matrix(4).eigenvalues().unwrap();
    values.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert!(is_nearly_equal(
        values[0],
        1.500_214_280_059_243,
        &Precision::relative(1e-12)
    ));
}

#[test]
fn test_eigenvalue_ordering() {
    let A = random_symmetric_matrix(10, 42);
    let eig = A.eigen().unwrap();

    let policies = [
        OrderBy::ValueAscending,
        OrderBy::ValueDescending,
        OrderBy::MagnitudeAscending,
        OrderBy::MagnitudeDescending,
    ];

    for order in policies {
        let mut pairs = eig.eigenpairs().clone();
        pairs.sort(order);
        assert_eq!(pairs.len(), 10);

        let values = pairs.eigenvalues();
        let sorted = values.windows(2).all(|w| match order {
            OrderBy::ValueAscending => w[0] <= w[1],
            OrderBy::ValueDescending => w[0] >= w[1],
            OrderBy::MagnitudeAscending => w[0].abs() <= w[1].abs(),
            OrderBy::MagnitudeDescending => w[0].abs() >= w[1].abs(),
        });
        assert!(sorted, "{:?} not in {:?} order", values, order);

        // pairs move as a unit
        for pair in &pairs {
            assert!(is_nearly_eigenpair_within(
                &A,
                &pair.eigenvector,
                pair.eigenvalue,
                EIGENPAIR_PRECISION
            ));
        }
    }

    // sorting a copy leaves the decomposition alone
    let D = eig.diagonalized_matrix();
    for (i, λ) in eig.eigenvalues().iter().enumerate() {
        assert_eq!(*λ, D[(i, i)]);
    }
}

#[test]
fn test_ascending_descending_reversed() {
    let A = random_symmetric_matrix(12, 7);
    let eig = A.eigen().unwrap();

    let mut asc = eig.eigenpairs().clone();
    asc.sort(OrderBy::ValueAscending);
    let mut desc = eig.eigenpairs().clone();
    desc.sort(OrderBy::ValueDescending);

    let mut reversed = desc.eigenvalues();
    reversed.reverse();
    assert_eq!(asc.eigenvalues(), reversed);
}

#[test]
fn test_eigen_custom_settings() {
    let A = random_symmetric_matrix(20, 3);

    let settings = EigenSettingsBuilder::<f64>::default()
        .tol(1e-12)
        .max_iter(50)
        .build()
        .unwrap();
    let eig = A.eigen_with(&settings).unwrap();
    assert!(is_sum_nearly_equal(&eig.eigenvalues(), A.trace()));

    // not enough sweeps to converge
    let settings = EigenSettingsBuilder::<f64>::default()
        .max_iter(1)
        .build()
        .unwrap();
    assert!(matches!(
        A.eigen_with(&settings),
        Err(DenseFactorizationError::ConvergenceFailure { iterations: 1, .. })
    ));

    // illegal settings are rejected by the builder
    assert!(EigenSettingsBuilder::<f64>::default()
        .max_iter(0)
        .build()
        .is_err());
    assert!(EigenSettingsBuilder::<f64>::default()
        .tol(-1.0)
        .build()
        .is_err());
}

#[test]
fn test_eigen_empty_matrix() {
    let A = SymmetricMatrix::<f64>::zeros(0);
    assert_eq!(
        A.eigen().err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
    assert_eq!(
        A.eigenvalues().err(),
        Some(DenseFactorizationError::IncompatibleDimension)
    );
}
