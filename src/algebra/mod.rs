//! Dense and packed symmetric matrices, vectors and their factorizations.
//!
//! All numerical operations are implemented generically for floats
//! implementing the [`FloatT`](crate::algebra::FloatT) trait, with `f64` as
//! the default type parameter throughout.

mod adjoint;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod symmetric;
pub mod tolerance;
mod utils;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use symmetric::*;
pub(crate) use utils::*;

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;

#[cfg(test)]
mod tests;
