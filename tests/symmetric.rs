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

#[test]
fn test_symmetric_matrix_access() {
    let mut M = random_symmetric_matrix(4, 1);

    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(M[(r, c)], M[(c, r)]);
        }
    }

    // a single write is seen from both index orders
    M.set(3, 1, 0.75).unwrap();
    assert_eq!(M.get(1, 3), Ok(0.75));
    M[(0, 2)] = -0.25;
    assert_eq!(M[(2, 0)], -0.25);

    assert!(matches!(
        M.get(0, 4),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
    assert!(M.row(4).is_err());
}

#[test]
fn test_symmetric_matrix_arithmetic() {
    let M = random_symmetric_matrix(5, 1);

    assert_eq!(&M + &M, 2.0 * &M);
    assert_eq!(&M - &M, 0.0 * &M);
    assert_eq!(-&M, -1.0 * &M);

    // products of symmetric matrices are general matrices
    let N = random_symmetric_matrix(5, 2);
    let P: Matrix<f64> = &M * &N;
    let Q = &M.to_dense() * &N.to_dense();
    assert!(is_matrix_nearly_equal_elementwise(&P, &Q));
    assert!(is_matrix_nearly_equal_elementwise(&P.transpose(), &(&N * &M)));
}

#[test]
fn test_symmetric_hilbert_inverse() {
    // accuracy is lost to ill conditioning from dimension 4 upward
    for d in 1..4 {
        let H = hilbert_matrix(d);
        let HI = H.inverse().unwrap();
        let P = &HI * &H;
        assert!(is_matrix_nearly_equal_elementwise(&P, &Matrix::identity(d)));
    }
}

#[test]
fn test_symmetric_random_inverse() {
    // random matrices are usually indefinite, which exercises
    // the LU path as well as the Cholesky one
    for d in (1..=100).step_by(11) {
        let M = random_symmetric_matrix(d, 1);
        let MI = M.inverse().unwrap();
        let P = &MI * &M;
        assert!(is_matrix_nearly_equal_elementwise(&P, &Matrix::identity(d)));
    }
}

#[test]
fn test_singular_inverse() {
    let M = SymmetricMatrix::<f64>::from_lower_rows(&[&[2.0], &[1.0, 3.0], &[0.0, 0.0, 0.0]]);
    assert_eq!(
        M.inverse().err(),
        Some(DenseFactorizationError::Singular { pivot: 2 })
    );
}

#[test]
fn test_symmetric_matrix_norms() {
    let Z = SymmetricMatrix::<f64>::zeros(3);
    assert_eq!(Z.one_norm(), 0.0);
    assert_eq!(Z.infinity_norm(), 0.0);
    assert_eq!(Z.frobenius_norm(), 0.0);

    let A = random_symmetric_matrix(4, 1);
    assert!(A.one_norm() > 0.0);
    assert!(A.infinity_norm() > 0.0);
    assert!(A.frobenius_norm() > 0.0);
    assert_eq!(A.one_norm(), A.infinity_norm());

    let B = random_symmetric_matrix(4, 2);

    // triangle inequality
    let S = &A + &B;
    assert!(S.one_norm() <= A.one_norm() + B.one_norm());
    assert!(S.infinity_norm() <= A.infinity_norm() + B.infinity_norm());
    assert!(S.frobenius_norm() <= A.frobenius_norm() + B.frobenius_norm());

    // Frobenius norm is sub-multiplicative
    let P = &A * &B;
    assert!(P.frobenius_norm() <= A.frobenius_norm() * B.frobenius_norm());

    // norms agree with the dense definitions
    let Ad = A.to_dense();
    let p = Precision::relative(1e-14);
    assert!(is_nearly_equal(A.one_norm(), Ad.one_norm(), &p));
    assert!(is_nearly_equal(A.infinity_norm(), Ad.infinity_norm(), &p));
    assert!(is_nearly_equal(A.frobenius_norm(), Ad.frobenius_norm(), &p));
}
