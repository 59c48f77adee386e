use crate::algebra::*;

/// Point of the user model.  Also used for basic solutions.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPoint<T = f64> {
    /// primal variables
    pub x: Vec<T>,
    /// constraint slacks, `slack = rhs - A x`
    pub slack: Vec<T>,
    /// constraint duals
    pub y: Vec<T>,
    /// reduced costs
    pub z: Vec<T>,
}

impl<T> UserPoint<T>
where
    T: FloatT,
{
    /// zero point with `num_var` variables and `num_constr` constraints
    pub fn new(num_var: usize, num_constr: usize) -> Self {
        Self {
            x: vec![T::zero(); num_var],
            slack: vec![T::zero(); num_constr],
            y: vec![T::zero(); num_constr],
            z: vec![T::zero(); num_var],
        }
    }
}

/// Point of the computational form.
///
/// `x` and `z` have one entry per column including slack columns,
/// `y` one entry per row.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverPoint<T = f64> {
    pub x: Vec<T>,
    pub y: Vec<T>,
    pub z: Vec<T>,
}

impl<T> SolverPoint<T>
where
    T: FloatT,
{
    /// zero point for a form with `rows` rows and `cols` structural columns
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            x: vec![T::zero(); cols + rows],
            y: vec![T::zero(); rows],
            z: vec![T::zero(); cols + rows],
        }
    }
}

/// Interior point of the user model.
///
/// `xl` and `xu` are the distances of `x` to its lower and upper bounds,
/// `zl` and `zu` the associated duals.  A distance to an infinite bound is
/// infinite and its dual is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInteriorPoint<T = f64> {
    pub x: Vec<T>,
    pub xl: Vec<T>,
    pub xu: Vec<T>,
    pub slack: Vec<T>,
    pub y: Vec<T>,
    pub zl: Vec<T>,
    pub zu: Vec<T>,
}

impl<T> UserInteriorPoint<T>
where
    T: FloatT,
{
    pub fn new(num_var: usize, num_constr: usize) -> Self {
        Self {
            x: vec![T::zero(); num_var],
            xl: vec![T::zero(); num_var],
            xu: vec![T::zero(); num_var],
            slack: vec![T::zero(); num_constr],
            y: vec![T::zero(); num_constr],
            zl: vec![T::zero(); num_var],
            zu: vec![T::zero(); num_var],
        }
    }
}

/// Interior point of the computational form.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInteriorPoint<T = f64> {
    pub x: Vec<T>,
    pub xl: Vec<T>,
    pub xu: Vec<T>,
    pub y: Vec<T>,
    pub zl: Vec<T>,
    pub zu: Vec<T>,
}

impl<T> SolverInteriorPoint<T>
where
    T: FloatT,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        let ncols = cols + rows;
        Self {
            x: vec![T::zero(); ncols],
            xl: vec![T::zero(); ncols],
            xu: vec![T::zero(); ncols],
            y: vec![T::zero(); rows],
            zl: vec![T::zero(); ncols],
            zu: vec![T::zero(); ncols],
        }
    }

    pub(crate) fn assert_dims(&self, rows: usize, cols: usize) {
        let ncols = cols + rows;
        assert_eq!(self.x.len(), ncols);
        assert_eq!(self.xl.len(), ncols);
        assert_eq!(self.xu.len(), ncols);
        assert_eq!(self.y.len(), rows);
        assert_eq!(self.zl.len(), ncols);
        assert_eq!(self.zu.len(), ncols);
    }
}

impl<T> SolverPoint<T> {
    pub(crate) fn assert_dims(&self, rows: usize, cols: usize) {
        assert_eq!(self.x.len(), cols + rows);
        assert_eq!(self.y.len(), rows);
        assert_eq!(self.z.len(), cols + rows);
    }
}

/// Borrowed user space starting point.  Missing vectors are taken as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialPoint<'a, T = f64> {
    pub x: Option<&'a [T]>,
    pub slack: Option<&'a [T]>,
    pub y: Option<&'a [T]>,
    pub z: Option<&'a [T]>,
}

/// Borrowed user space interior starting point.
///
/// All seven vectors are required by
/// [`presolve_ipm_starting_point`](crate::model::LpModel::presolve_ipm_starting_point).
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialInteriorPoint<'a, T = f64> {
    pub x: Option<&'a [T]>,
    pub xl: Option<&'a [T]>,
    pub xu: Option<&'a [T]>,
    pub slack: Option<&'a [T]>,
    pub y: Option<&'a [T]>,
    pub zl: Option<&'a [T]>,
    pub zu: Option<&'a [T]>,
}

impl<'a, T> From<&'a UserPoint<T>> for PartialPoint<'a, T> {
    fn from(p: &'a UserPoint<T>) -> Self {
        Self {
            x: Some(&p.x),
            slack: Some(&p.slack),
            y: Some(&p.y),
            z: Some(&p.z),
        }
    }
}

impl<'a, T> From<&'a UserInteriorPoint<T>> for PartialInteriorPoint<'a, T> {
    fn from(p: &'a UserInteriorPoint<T>) -> Self {
        Self {
            x: Some(&p.x),
            xl: Some(&p.xl),
            xu: Some(&p.xu),
            slack: Some(&p.slack),
            y: Some(&p.y),
            zl: Some(&p.zl),
            zu: Some(&p.zu),
        }
    }
}
