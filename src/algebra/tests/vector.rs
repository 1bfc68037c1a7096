#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_copy_from() {
    let x = vec![3., 0., 2., 1.];
    let mut y = vec![0.; 4];
    y.copy_from(&x);
    assert_eq!(x, y);
}

#[test]
fn test_scalarop() {
    let mut x = vec![3., 0., 2., 1.];
    x.scalarop(|x| -2. * x);
    assert_eq!(x, vec![-6., 0., -4., -2.]);
}

#[test]
fn test_set() {
    let mut x = [3., 0., 2., 1.];
    x.set(-1.5);
    assert_eq!(x, [-1.5; 4]);
}

#[test]
fn test_scale() {
    let mut x = [3., 0., 2., 1.];
    x.scale(3.);
    assert_eq!(x, [9., 0., 6., 3.]);
}

#[test]
fn test_negate() {
    let mut x = vec![9., 4., 16., 1.];
    x.negate();
    assert_eq!(x, vec![-9., -4., -16., -1.]);
}

#[test]
fn test_op_chaining() {
    let x = vec![5., 1., 3., 7.];
    let mut y = vec![1.; 4];
    y.axpby(1., &x, 3.).scale(0.5).negate();
    assert_eq!(y, vec![-4., -2., -3., -5.]);
}

#[test]
fn test_dot() {
    let x = vec![3., 0., 2., 1.];
    let y = vec![-1., -2., 3., 4.];

    assert_eq!(x.dot(&y), 7.);
    assert_eq!(y.dot(&x), 7.);
}

#[test]
fn test_sumsq() {
    let x = [-1., 2., -3., 4.];
    assert_eq!(x.sumsq(), 30.);
}

#[test]
fn test_norm() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm(), 13.);
}

#[test]
fn test_norm_inf() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm_inf(), 12.);

    let x = [-3., f64::NAN, -12.];
    assert!(x.norm_inf().is_nan());
}

#[test]
fn test_norm_one() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm_one(), 19.);
}

#[test]
fn test_norm_inf_diff() {
    let x = [-3., 4., -12.];
    let y = [-2., 4., -10.];
    assert_eq!(x.norm_inf_diff(&y), 2.);
}

#[test]
fn test_axpby() {
    let x = vec![3., 0., 2., 1.];
    let mut y = vec![-1., -2., -1., 0.];
    let a = 2.;
    let b = 3.;

    //y = ax + by
    y.axpby(a, &x, b);

    assert_eq!(y, [3., -6., 1., 2.]);
}

#[test]
fn test_column_vector_snapshot() {
    let mut A = Matrix::from(&[[1., 2.], [3., 4.]]);
    let c = A.column(1).unwrap();
    let r = A.row(1).unwrap();
    A[(1, 1)] = 100.;

    // extracted vectors do not follow later changes
    assert_eq!(c.as_slice(), &[2., 4.]);
    assert_eq!(r.as_slice(), &[3., 4.]);
}
