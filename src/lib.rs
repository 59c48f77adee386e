//! __lpform__ is the preprocessing and solution translation layer between a
//! user supplied linear program
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & c^T x + \text{offset}\\\\\[2ex\]
//!  \text{subject to} & A x \; (=, \le, \ge) \; b \\\\\[1ex\]
//!         & l \le x \le u
//!  \end{array}
//! $$
//!
//! and an iterative kernel (interior point or simplex) that solves it.
//!
//! Loading a model
//!
//! * validates the sparse problem data,
//! * negates variables that only have an upper bound,
//! * equilibrates the constraint matrix with power-of-two factors, so that
//!   scaling introduces no rounding error,
//! * builds either the primal or the dualized equality form
//!   `AI x = b, lb <= x <= ub` handed to the kernel.
//!
//! Every quantity the kernel produces (interior iterates, basic solutions,
//! bases, residuals) can then be mapped back to the user problem, exactly
//! inverting the transformations applied at load time.
//!
//! See [`model::LpModel`] for the entry point.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod io;
pub mod model;
