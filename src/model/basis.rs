#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Basis status of a solver column or a user variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BasisStatus {
    /// basic
    Basic,
    /// nonbasic at its lower bound (or at zero if free)
    NonbasicLower,
    /// nonbasic at its upper bound
    NonbasicUpper,
    /// nonbasic free variable away from zero
    Superbasic,
}

impl BasisStatus {
    /// Status of the negated variable.
    pub fn mirrored(self) -> Self {
        match self {
            BasisStatus::NonbasicLower => BasisStatus::NonbasicUpper,
            BasisStatus::NonbasicUpper => BasisStatus::NonbasicLower,
            other => other,
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, BasisStatus::Basic)
    }
}

/// Basis status of a user constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintStatus {
    /// slack is basic, dual is zero
    Basic,
    /// constraint is active, slack is zero
    Nonbasic,
}

/// Basis of the user model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserBasis {
    /// status per constraint
    pub constraints: Vec<ConstraintStatus>,
    /// status per variable
    pub variables: Vec<BasisStatus>,
}

impl UserBasis {
    pub(crate) fn new(num_constr: usize, num_var: usize) -> Self {
        Self {
            constraints: vec![ConstraintStatus::Basic; num_constr],
            variables: vec![BasisStatus::Basic; num_var],
        }
    }
}
