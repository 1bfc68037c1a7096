#![allow(non_snake_case)]

use crate::algebra::*;
use log::{trace, warn};
use std::iter::zip;

/// Implicitly shifted QL iteration on a symmetric tridiagonal matrix.
///
/// `d` holds the diagonal and `e[i]` the subdiagonal entry `(i+1,i)`, in
/// the layout produced by [`tridiagonalize`](super::tridiagonal::tridiagonalize).
/// On success `d` holds the eigenvalues in the order the iteration leaves
/// them and `e` is destroyed.  Rotations are applied to the columns of `V`
/// when an accumulator is supplied.
///
/// Returns the total number of sweeps taken.
pub(crate) fn tridiagonal_ql<T: FloatT>(
    d: &mut [T],
    e: &mut [T],
    mut V: Option<&mut Matrix<T>>,
    settings: &EigenSettings<T>,
) -> Result<u32, DenseFactorizationError> {
    let n = d.len();
    assert_eq!(e.len(), n);
    let tol = settings.tol;
    let two: T = (2.0).as_T();
    let mut sweeps = 0;

    for l in 0..n {
        let mut iter = 0;

        'sweep: loop {
            // look for a negligible subdiagonal entry to split the matrix
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= tol * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }

            if iter == settings.max_iter {
                warn!(
                    "eigenvalue {} failed to converge after {} QL sweeps",
                    l, iter
                );
                return Err(DenseFactorizationError::ConvergenceFailure {
                    index: l,
                    iterations: iter,
                });
            }
            iter += 1;
            sweeps += 1;

            // Wilkinson shift from the leading 2x2 block
            let g = (d[l + 1] - d[l]) / (two * e[l]);
            let r = g.hypot(T::one());
            let mut g = d[m] - d[l] + e[l] / (g + r.copysign(g));

            let (mut s, mut c, mut p) = (T::one(), T::one(), T::zero());

            // chase the bulge from the bottom of the block up to l
            for i in (l..m).rev() {
                let f = s * e[i];
                let b = c * e[i];
                let r = f.hypot(g);
                e[i + 1] = r;

                if r == T::zero() {
                    // underflow: accept the partial sweep and retry
                    d[i + 1] -= p;
                    e[m] = T::zero();
                    continue 'sweep;
                }

                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                let r = (d[i] - g) * s + two * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                if let Some(V) = V.as_deref_mut() {
                    apply_givens(V, i, c, s);
                }
            }

            d[l] -= p;
            e[l] = g;
            e[m] = T::zero();
        }

        trace!("eigenvalue {} converged after {} QL sweeps", l, iter);
    }

    Ok(sweeps)
}

// rotate columns i and i+1 of V
fn apply_givens<T: FloatT>(V: &mut Matrix<T>, i: usize, c: T, s: T) {
    let n = V.nrows();
    let (vi, vj) = V.data_mut()[i * n..(i + 2) * n].split_at_mut(n);
    for (x, y) in zip(vi, vj) {
        let f = *y;
        *y = s * (*x) + c * f;
        *x = c * (*x) - s * f;
    }
}
