mod cholesky;
mod core;
mod eigen;
mod gemm;
mod lu;
mod matrix_math;
mod vectors;

pub use cholesky::*;
pub use eigen::*;
pub use gemm::*;
pub(crate) use lu::*;

pub(crate) use self::core::display_matrix;
