#![allow(non_snake_case)]
use super::ModelError;
use crate::algebra::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constraint sense of a single row of `A x (=|<=|>=) rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintType {
    /// `a'x = rhs`
    Equal,
    /// `a'x <= rhs`
    LessEqual,
    /// `a'x >= rhs`
    GreaterEqual,
}

impl ConstraintType {
    /// Character code of the constraint type (`'='`, `'<'` or `'>'`).
    pub fn as_char(&self) -> char {
        match self {
            ConstraintType::Equal => '=',
            ConstraintType::LessEqual => '<',
            ConstraintType::GreaterEqual => '>',
        }
    }
}

impl TryFrom<char> for ConstraintType {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '=' => Ok(ConstraintType::Equal),
            '<' => Ok(ConstraintType::LessEqual),
            '>' => Ok(ConstraintType::GreaterEqual),
            _ => Err(ModelError::InvalidVector("constr_type")),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Validated linear program as supplied by the user.
///
/// ```text
/// minimize    obj'x + offset
/// subject to  A x (=|<=|>=) rhs
///             lb <= x <= ub
/// ```
///
/// The data is never modified after construction.  Derived counts and norms
/// are computed once by [`UserModel::new`].

#[derive(Debug, Clone)]
pub struct UserModel<T = f64> {
    /// constraint matrix (m x n)
    pub A: CscMatrix<T>,
    /// constraint right hand side
    pub rhs: Vec<T>,
    /// constraint types
    pub constr_type: Vec<ConstraintType>,
    /// linear objective
    pub obj: Vec<T>,
    /// variable lower bounds (may be -inf)
    pub lb: Vec<T>,
    /// variable upper bounds (may be +inf)
    pub ub: Vec<T>,
    /// constant objective term
    pub offset: T,

    /// number of equality constraints
    pub num_eqconstr: usize,
    /// number of variables with both bounds infinite
    pub num_free_var: usize,
    /// ordered indices of variables with both bounds finite
    pub boxed_vars: Vec<usize>,
    /// infinity norm of `obj`
    pub norm_obj: T,
    /// largest magnitude over `rhs` and the finite bounds
    pub norm_rhs: T,
}

impl<T> UserModel<T>
where
    T: FloatT,
{
    /// Validates the raw problem data and takes a copy of it.
    ///
    /// Dimension checks come first, then vectors, then constraint types,
    /// then the matrix.  The first failing check determines the error.
    pub fn new(
        A: &CscMatrix<T>,
        rhs: &[T],
        constr_type: &[char],
        offset: T,
        obj: &[T],
        lb: &[T],
        ub: &[T],
    ) -> Result<Self, ModelError> {
        let (m, n) = (A.m, A.n);

        if n == 0 {
            return Err(ModelError::InvalidDimension("num_var"));
        }
        check_length("rhs", rhs.len(), m)?;
        check_length("constr_type", constr_type.len(), m)?;
        check_length("obj", obj.len(), n)?;
        check_length("lb", lb.len(), n)?;
        check_length("ub", ub.len(), n)?;

        if !rhs.is_finite() {
            return Err(ModelError::InvalidVector("rhs"));
        }
        if !obj.is_finite() {
            return Err(ModelError::InvalidVector("obj"));
        }
        check_bounds(lb, ub)?;

        let constr_type = constr_type
            .iter()
            .map(|&c| ConstraintType::try_from(c))
            .collect::<Result<Vec<_>, _>>()?;

        A.check_format()?;

        let num_eqconstr = constr_type
            .iter()
            .filter(|&&c| c == ConstraintType::Equal)
            .count();
        let num_free_var = std::iter::zip(lb, ub)
            .filter(|(l, u)| l.is_infinite() && u.is_infinite())
            .count();
        let boxed_vars = std::iter::zip(lb, ub)
            .enumerate()
            .filter(|(_, (l, u))| l.is_finite() && u.is_finite())
            .map(|(j, _)| j)
            .collect();

        let norm_obj = obj.norm_inf();
        let norm_rhs = rhs
            .norm_inf()
            .max(lb.norm_inf_finite())
            .max(ub.norm_inf_finite());

        Ok(Self {
            A: A.clone(),
            rhs: rhs.to_vec(),
            constr_type,
            obj: obj.to_vec(),
            lb: lb.to_vec(),
            ub: ub.to_vec(),
            offset,
            num_eqconstr,
            num_free_var,
            boxed_vars,
            norm_obj,
            norm_rhs,
        })
    }

    /// number of constraints (m)
    pub fn num_constr(&self) -> usize {
        self.A.m
    }

    /// number of variables (n)
    pub fn num_var(&self) -> usize {
        self.A.n
    }

    /// number of stored entries of `A`
    pub fn num_entries(&self) -> usize {
        self.A.nnz()
    }
}

fn check_length(name: &'static str, len: usize, expected: usize) -> Result<(), ModelError> {
    if len != expected {
        return Err(ModelError::InvalidDimension(name));
    }
    Ok(())
}

// Every bound is finite or the matching signed infinity, and lb <= ub.
// NaN fails both comparisons and is rejected.
fn check_bounds<T: FloatT>(lb: &[T], ub: &[T]) -> Result<(), ModelError> {
    for (&l, &u) in std::iter::zip(lb, ub) {
        if !(l.is_finite() || l == T::neg_infinity()) {
            return Err(ModelError::InvalidVector("lb"));
        }
        if !(u.is_finite() || u == T::infinity()) {
            return Err(ModelError::InvalidVector("ub"));
        }
        if l > u {
            return Err(ModelError::InvalidVector("lb"));
        }
    }
    Ok(())
}
