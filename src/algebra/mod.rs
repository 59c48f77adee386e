//! Sparse matrix and vector operations used by the model layer.
//!
//! All matrix data is held in standard compressed sparse column format
//! ([`CscMatrix`]).  Vector operations are provided as traits implemented
//! directly on slices of [`FloatT`].

mod csc;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod scalarmath;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
