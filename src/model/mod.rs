//! Linear program preprocessing and solution translation.
//!
//! [`LpModel::load`] validates a user problem, flips and equilibrates it and
//! builds the [`ComputationalForm`] consumed by an iterative kernel.  The
//! remaining [`LpModel`] methods translate starting points, interior
//! iterates, basic solutions and bases between user space and solver space.

mod basis;
mod densecols;
mod dualize;
mod equilibration;
mod errors;
mod formulation;
mod info;
mod info_print;
mod lpmodel;
mod points;
mod residuals;
mod scaling;
mod settings;
mod translate;
mod usermodel;

pub use basis::*;
pub use densecols::*;
pub use equilibration::*;
pub use errors::*;
pub use formulation::*;
pub use info::*;
pub use lpmodel::*;
pub use points::*;
pub use residuals::*;
pub use scaling::*;
pub use settings::*;
pub use usermodel::*;
