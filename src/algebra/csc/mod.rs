#![allow(non_snake_case)]

// the CscMatrix type itself lives in matrix_types; the
// submodules here only add implementations to it
mod block_concatenate;
mod core;
mod matrix_math;
mod utils;
