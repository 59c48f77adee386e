#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of a loaded model and its computational form.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelInfo {
    pub num_var: usize,
    pub num_constr: usize,
    pub num_entries: usize,
    pub num_rows_solver: usize,
    /// including slack columns
    pub num_cols_solver: usize,
    pub num_entries_solver: usize,
    pub dualized: bool,
    pub dense_cols: usize,
}

/// Quality measures of an interior point, in user space.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InteriorInfo<T> {
    /// largest primal residual (rows and bound distances)
    pub abs_presidual: T,
    /// largest dual residual
    pub abs_dresidual: T,
    /// `abs_presidual / (1 + norm_rhs)`
    pub rel_presidual: T,
    /// `abs_dresidual / (1 + norm_obj)`
    pub rel_dresidual: T,
    /// primal objective including offset
    pub pobjval: T,
    /// dual objective including offset
    pub dobjval: T,
    /// `(pobjval - dobjval) / (1 + |pobjval + dobjval| / 2)`
    pub rel_objgap: T,
    pub complementarity: T,
    pub normx: T,
    pub normy: T,
    pub normz: T,
}

/// Quality measures of a basic solution, in user space.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasicInfo<T> {
    /// largest bound or constraint sign violation
    pub primal_infeas: T,
    /// largest dual sign violation
    pub dual_infeas: T,
    /// `obj'x` without the objective offset
    pub objval: T,
}
