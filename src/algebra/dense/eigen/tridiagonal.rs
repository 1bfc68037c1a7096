#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::izip;

/// Householder reduction of a symmetric matrix to tridiagonal form.
///
/// On return `d` holds the diagonal and `e[i]` the subdiagonal entry
/// `(i+1,i)` of `T = QᵀAQ`, with `e[n-1] = 0`.  If an accumulator `V` is
/// supplied it is overwritten by `V·Q`, so passing the identity yields `Q`.
pub(crate) fn tridiagonalize<T: FloatT>(
    A: &SymmetricMatrix<T>,
    mut V: Option<&mut Matrix<T>>,
    d: &mut [T],
    e: &mut [T],
) {
    let n = A.dimension();
    assert!(d.len() == n && e.len() == n);
    if let Some(V) = V.as_deref() {
        assert_eq!(V.size(), (n, n));
    }

    let mut W = A.to_dense();

    // reflector and workspace for the trailing block
    let mut v = vec![T::zero(); n];
    let mut p = vec![T::zero(); n];

    for k in 0..n.saturating_sub(2) {
        let m = n - k - 1;
        let v = &mut v[..m];
        let p = &mut p[..m];

        // x = W[k+1.., k]
        v.copy_from(&W.col_slice(k)[k + 1..]);
        let xnorm = v.norm();
        if xnorm == T::zero() {
            continue;
        }

        // H = I - 2vvᵀ maps x onto α·e₁.  The sign of α avoids cancellation.
        let α = if v[0] > T::zero() { -xnorm } else { xnorm };
        v[0] -= α;
        if v.normalize() == T::zero() {
            continue;
        }

        // p = W₂₂·v on the trailing block
        for (i, pi) in p.iter_mut().enumerate() {
            *pi = W.col_slice(k + 1 + i)[k + 1..].dot(v);
        }

        // W₂₂ ← HW₂₂H = W₂₂ - 2(vwᵀ + wvᵀ), with w = p - (vᵀp)v
        let K = v.dot(p);
        for (pi, &vi) in izip!(p.iter_mut(), v.iter()) {
            *pi -= K * vi;
        }
        let two: T = (2.0).as_T();
        for c in 0..m {
            let col = &mut W.col_slice_mut(k + 1 + c)[k + 1..];
            for (wrc, &vr, &pr) in izip!(col.iter_mut(), v.iter(), p.iter()) {
                *wrc -= two * (vr * p[c] + pr * v[c]);
            }
        }

        // column k (and by symmetry row k) is now α·e₁
        W[(k + 1, k)] = α;
        W[(k, k + 1)] = α;
        for r in (k + 2)..n {
            W[(r, k)] = T::zero();
            W[(k, r)] = T::zero();
        }

        // V ← V·H
        if let Some(V) = V.as_deref_mut() {
            for r in 0..n {
                let s = (0..m).fold(T::zero(), |acc, i| acc + V[(r, k + 1 + i)] * v[i]);
                for (i, &vi) in v.iter().enumerate() {
                    V[(r, k + 1 + i)] -= two * s * vi;
                }
            }
        }
    }

    for i in 0..n {
        d[i] = W[(i, i)];
        e[i] = if i + 1 < n { W[(i + 1, i)] } else { T::zero() };
    }
}

#[test]
fn test_tridiagonalize() {
    let S = SymmetricMatrix::<f64>::from_fn(5, |r, c| 1.0 / ((r + c + 1) as f64) + (r * c) as f64);
    let n = S.dimension();

    let mut V = Matrix::identity(n);
    let mut d = vec![0.0; n];
    let mut e = vec![0.0; n];
    tridiagonalize(&S, Some(&mut V), &mut d, &mut e);

    // QᵀAQ reproduces the tridiagonal matrix
    let T = V.t() * &(&S * &V);
    for r in 0..n {
        for c in 0..n {
            let expected = if r == c {
                d[r]
            } else if r == c + 1 {
                e[c]
            } else if c == r + 1 {
                e[r]
            } else {
                0.0
            };
            assert!((T[(r, c)] - expected).abs() < 1e-10);
        }
    }

    // Q is orthogonal
    let I = V.t() * &V;
    assert!(I.data().norm_inf_diff(Matrix::identity(n).data()) < 1e-12);

    // values-only reduction gives the same tridiagonal
    let mut d2 = vec![0.0; n];
    let mut e2 = vec![0.0; n];
    tridiagonalize(&S, None, &mut d2, &mut e2);
    assert_eq!(d, d2);
    assert_eq!(e, e2);
}
