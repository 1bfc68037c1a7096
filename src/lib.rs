//! __densesym__ is a dense linear algebra layer built around symmetric matrices.
//!
//! It provides general column-major [`Matrix`](crate::algebra::Matrix) storage,
//! a packed [`SymmetricMatrix`](crate::algebra::SymmetricMatrix) type that stores only
//! one triangle, and two factorizations of symmetric matrices:
//!
//! * a __Cholesky decomposition__ $A = LL^T$ for symmetric positive definite $A$,
//!   supporting linear solves, inverses and determinants, and
//!
//! * a __symmetric eigendecomposition__ $V^T A V = D$ computed by Householder
//!   tridiagonalization followed by implicitly shifted QL iteration.
//!
//! ## Example
//!
//! ```
//! use densesym::algebra::*;
//!
//! let S = SymmetricMatrix::<f64>::from_lower_rows(&[
//!     &[4.0],
//!     &[-2.0, 5.0],
//!     &[1.0, 3.0, 6.0],
//! ]);
//!
//! let chol = S.cholesky().unwrap();
//! let b = ColumnVector::from(vec![9.0, 7.0, 15.0]);
//! let x = chol.solve(&b).unwrap();
//! let r = &S * &x;
//! assert!(r.as_slice().norm_inf_diff(b.as_slice()) < 1e-12);
//!
//! let mut eig = S.eigen().unwrap();
//! eig.eigenpairs_mut().sort(OrderBy::ValueAscending);
//! assert_eq!(eig.dimension(), 3);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
