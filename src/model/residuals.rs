// Measures of a kernel iterate against the computational form.  These
// work directly in solver space and need no model state beyond the form.

use super::ComputationalForm;
use crate::algebra::*;
use itertools::izip;

/// Largest violation of `lb <= x <= ub`.
pub fn primal_infeasibility<T: FloatT>(form: &ComputationalForm<T>, x: &[T]) -> T {
    assert_eq!(x.len(), form.lb.len());

    izip!(x, &form.lb, &form.ub).fold(T::zero(), |infeas, (&x, &lb, &ub)| {
        infeas.max(lb - x).max(x - ub)
    })
}

/// Largest reduced cost with the wrong sign for a variable off its bounds.
pub fn dual_infeasibility<T: FloatT>(form: &ComputationalForm<T>, x: &[T], z: &[T]) -> T {
    assert_eq!(x.len(), form.lb.len());
    assert_eq!(z.len(), form.lb.len());

    let mut infeas = T::zero();
    for (&x, &z, &lb, &ub) in izip!(x, z, &form.lb, &form.ub) {
        if x > lb {
            infeas = infeas.max(z);
        }
        if x < ub {
            infeas = infeas.max(-z);
        }
    }
    infeas
}

/// `||b - AI x||_inf`
pub fn primal_residual<T: FloatT>(form: &ComputationalForm<T>, x: &[T]) -> T {
    let mut r = form.b.clone();
    form.AI.gemv(&mut r, x, -T::one(), T::one());
    r.norm_inf()
}

/// `||c - z - AI'y||_inf`
pub fn dual_residual<T: FloatT>(form: &ComputationalForm<T>, y: &[T], z: &[T]) -> T {
    let mut r = form.c.clone();
    r.axpby(-T::one(), z, T::one());
    form.AI.t().gemv(&mut r, y, -T::one(), T::one());
    r.norm_inf()
}
