//! Internal utility functions and helpers.

use std::cmp::Ordering;

/// The number of entries in the packed triangle of an n×n matrix
#[inline]
pub(crate) const fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

/// As [`triangular_number`], but `None` on overflow
#[inline]
pub(crate) fn checked_triangular_number(k: usize) -> Option<usize> {
    k.checked_add(1)?.checked_mul(k).map(|t| t >> 1)
}

// index of the entry (r,c) in a packed lower triangle stored
// row by row.  Folding (r,c) and (c,r) onto the same index is
// what makes the packed format symmetric by construction.
#[inline]
pub(crate) fn packed_index(r: usize, c: usize) -> usize {
    if r < c {
        triangular_number(c) + r
    } else {
        triangular_number(r) + c
    }
}

// fill p with the stable permutation that sorts v by `compare`
pub(crate) fn sortperm_by<T, F>(p: &mut [usize], v: &[T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert_eq!(p.len(), v.len());
    p.iter_mut().enumerate().for_each(|(i, p)| *p = i);
    p.sort_by(|&i, &j| compare(&v[i], &v[j]));
}

// gather x = b[p]
pub(crate) fn permute<T: Clone>(b: &[T], p: &[usize]) -> Vec<T> {
    p.iter().map(|&i| b[i].clone()).collect()
}

#[test]
fn test_triangular_number() {
    assert_eq!(triangular_number(0), 0);
    assert_eq!(triangular_number(1), 1);
    assert_eq!(triangular_number(4), 10);

    assert_eq!(checked_triangular_number(4), Some(10));
    assert_eq!(checked_triangular_number(usize::MAX), None);
}

#[test]
fn test_packed_index() {
    // every cell of the lower triangle gets a distinct index
    let n = 5;
    let mut seen = vec![false; triangular_number(n)];
    for r in 0..n {
        for c in 0..=r {
            let k = packed_index(r, c);
            assert!(!seen[k]);
            seen[k] = true;
            assert_eq!(k, packed_index(c, r));
        }
    }
    assert!(seen.iter().all(|&b| b));
}

#[test]
fn test_sortperm_by() {
    let v = [3., -1., 2., -1.];
    let mut p = vec![0; 4];
    sortperm_by(&mut p, &v, |a: &f64, b: &f64| a.total_cmp(b));
    assert_eq!(p, vec![1, 3, 2, 0]);
    assert_eq!(permute(&v, &p), vec![-1., -1., 2., 3.]);
}
