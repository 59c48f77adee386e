// Maps between the scaled user model and the computational form.
//
// Every function here matches on the formulation once.  In the dual form
// the solver has rows = num_var and cols = num_constr + |boxed_vars|
// structural columns:
//
//   columns 0..m         duals of the user constraints
//   columns m..cols      duals of the upper bounds of boxed variables
//   columns cols..       duals of the lower bounds (identity block)
//
// and the solver duals y are the negated user primal variables.

use super::*;
use crate::algebra::*;

impl<T> LpModel<T>
where
    T: FloatT,
{
    /// Scaled user point to solver point.
    pub(crate) fn dualize_basic_solution(&self, u: &UserPoint<T>) -> SolverPoint<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let m = self.user.num_constr();
        let c = &self.form.c;
        let mut s = SolverPoint::new(rows, cols);

        match self.form.formulation {
            Formulation::Dual => {
                // dual solver variables from primal user variables
                s.y.scalarop_from(|x| -x, &u.x);
                s.z[..m].scalarop_from(|v| -v, &u.slack);
                for (k, &j) in self.user.boxed_vars.iter().enumerate() {
                    s.z[m + k] = c[m + k] + s.y[j];
                }
                for i in 0..rows {
                    s.z[cols + i] = c[cols + i] - s.y[i];
                }

                // primal solver variables from dual user variables.  A
                // negative reduced cost of a boxed variable belongs to its
                // upper bound column.
                s.x[..m].copy_from(&u.y);
                s.x[cols..].copy_from(&u.z);
                for (k, &j) in self.user.boxed_vars.iter().enumerate() {
                    if s.x[cols + j] < T::zero() {
                        s.x[m + k] = -s.x[cols + j];
                        s.x[cols + j] = T::zero();
                    } else {
                        s.x[m + k] = T::zero();
                    }
                }
            }
            Formulation::Primal => {
                let n = cols;
                s.x[..n].copy_from(&u.x);
                s.x[n..].copy_from(&u.slack);
                s.y.copy_from(&u.y);
                s.z[..n].copy_from(&u.z);
                for i in 0..rows {
                    s.z[n + i] = c[n + i] - s.y[i];
                }
            }
        }
        s
    }

    /// Scaled user interior point to solver interior point.  Primal form only.
    pub(crate) fn dualize_ipm_starting_point(
        &self,
        u: &UserInteriorPoint<T>,
    ) -> SolverInteriorPoint<T> {
        assert_eq!(self.form.formulation, Formulation::Primal);

        let (m, n) = (self.rows(), self.cols());
        let mut s = SolverInteriorPoint::new(m, n);

        s.x[..n].copy_from(&u.x);
        s.x[n..].copy_from(&u.slack);
        s.xl[..n].copy_from(&u.xl);
        s.xu[..n].copy_from(&u.xu);
        s.y.copy_from(&u.y);
        s.zl[..n].copy_from(&u.zl);
        s.zu[..n].copy_from(&u.zu);

        // bound distances of the slack columns.  For a fixed slack they
        // are never used by the kernel.
        let inf = T::infinity();
        for (i, ct) in self.user.constr_type.iter().enumerate() {
            let (xl, xu, zl, zu) = match ct {
                ConstraintType::Equal => (T::zero(), T::zero(), T::zero(), T::zero()),
                ConstraintType::LessEqual => (u.slack[i], inf, -u.y[i], T::zero()),
                ConstraintType::GreaterEqual => (inf, -u.slack[i], T::zero(), u.y[i]),
            };
            s.xl[n + i] = xl;
            s.xu[n + i] = xu;
            s.zl[n + i] = zl;
            s.zu[n + i] = zu;
        }
        s
    }

    /// Solver interior point to scaled user interior point.
    ///
    /// Inequality duals and slacks are read from bound distances rather than
    /// from `x` and `y`, so that their sign conditions hold even when the
    /// solver point is not exactly feasible.
    pub(crate) fn dualize_back_interior_solution(
        &self,
        s: &SolverInteriorPoint<T>,
    ) -> UserInteriorPoint<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let lb = &self.scaled.lb;
        let inf = T::infinity();
        let mut u = UserInteriorPoint::new(n, m);

        match self.form.formulation {
            Formulation::Dual => {
                u.x.scalarop_from(|y| -y, &s.y);

                for (i, ct) in self.user.constr_type.iter().enumerate() {
                    u.y[i] = match ct {
                        ConstraintType::Equal => s.x[i],
                        ConstraintType::LessEqual => -s.xu[i],
                        ConstraintType::GreaterEqual => s.xl[i],
                    };
                    u.slack[i] = match ct {
                        ConstraintType::Equal => T::zero(),
                        ConstraintType::LessEqual => s.zu[i],
                        ConstraintType::GreaterEqual => -s.zl[i],
                    };
                }

                // lower bound duals are the identity block columns.  The
                // column of a free variable is fixed at zero, but an inexact
                // solver point may not satisfy that.
                for j in 0..rows {
                    if lb[j].is_finite() {
                        u.zl[j] = s.xl[cols + j];
                        u.xl[j] = s.zl[cols + j];
                    } else {
                        u.zl[j] = T::zero();
                        u.xl[j] = inf;
                    }
                }

                // upper bound quantities come from the boxed columns
                u.zu.set(T::zero());
                u.xu.set(inf);
                for (k, &j) in self.user.boxed_vars.iter().enumerate() {
                    u.zu[j] = s.xl[m + k];
                    u.xu[j] = s.zl[m + k];
                }
            }
            Formulation::Primal => {
                u.x.copy_from(&s.x[..n]);
                u.xl.copy_from(&s.xl[..n]);
                u.xu.copy_from(&s.xu[..n]);
                u.zl.copy_from(&s.zl[..n]);
                u.zu.copy_from(&s.zu[..n]);

                for (i, ct) in self.user.constr_type.iter().enumerate() {
                    u.y[i] = match ct {
                        ConstraintType::Equal => s.y[i],
                        ConstraintType::LessEqual => -s.zl[n + i],
                        ConstraintType::GreaterEqual => s.zu[n + i],
                    };
                    u.slack[i] = match ct {
                        ConstraintType::Equal => T::zero(),
                        ConstraintType::LessEqual => s.xl[n + i],
                        ConstraintType::GreaterEqual => -s.xu[n + i],
                    };
                }
            }
        }
        u
    }

    /// Solver point to scaled user point.  Exact inverse of
    /// `dualize_basic_solution`.
    pub(crate) fn dualize_back_basic_solution(&self, s: &SolverPoint<T>) -> UserPoint<T> {
        let cols = self.cols();
        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let mut u = UserPoint::new(n, m);

        match self.form.formulation {
            Formulation::Dual => {
                u.x.scalarop_from(|y| -y, &s.y);
                u.slack.scalarop_from(|z| -z, &s.z[..m]);
                u.y.copy_from(&s.x[..m]);
                u.z.copy_from(&s.x[cols..]);
                for (k, &j) in self.user.boxed_vars.iter().enumerate() {
                    u.z[j] -= s.x[m + k];
                }
            }
            Formulation::Primal => {
                u.x.copy_from(&s.x[..n]);
                u.slack.copy_from(&s.x[n..]);
                u.y.copy_from(&s.y);
                u.z.copy_from(&s.z[..n]);
            }
        }
        u
    }

    /// Solver basis to basis of the scaled user model.
    pub(crate) fn dualize_back_basis(&self, basis: &[BasisStatus]) -> UserBasis {
        let cols = self.cols();
        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let mut ubasis = UserBasis::new(m, n);

        match self.form.formulation {
            Formulation::Dual => {
                // a constraint is active iff its dual column is basic
                for (cb, b) in ubasis.constraints.iter_mut().zip(&basis[..m]) {
                    *cb = if b.is_basic() {
                        ConstraintStatus::Nonbasic
                    } else {
                        ConstraintStatus::Basic
                    };
                }
                for j in 0..n {
                    // slack columns cannot be superbasic
                    assert_ne!(basis[cols + j], BasisStatus::Superbasic);
                    ubasis.variables[j] = if basis[cols + j].is_basic() {
                        if self.scaled.lb[j].is_finite() {
                            BasisStatus::NonbasicLower
                        } else {
                            BasisStatus::Superbasic
                        }
                    } else {
                        BasisStatus::Basic
                    };
                }
                for (k, &j) in self.user.boxed_vars.iter().enumerate() {
                    if basis[m + k].is_basic() {
                        assert!(ubasis.variables[j].is_basic());
                        ubasis.variables[j] = BasisStatus::NonbasicUpper;
                    }
                }
            }
            Formulation::Primal => {
                for (i, cb) in ubasis.constraints.iter_mut().enumerate() {
                    assert_ne!(basis[n + i], BasisStatus::Superbasic);
                    *cb = if basis[n + i].is_basic() {
                        ConstraintStatus::Basic
                    } else {
                        ConstraintStatus::Nonbasic
                    };
                }
                ubasis.variables.copy_from_slice(&basis[..n]);
            }
        }
        ubasis
    }

    /// Makes a scaled basic solution consistent with its basis: nonbasic
    /// variables sit exactly at their bound, basic variables have zero
    /// reduced cost, active constraints have zero slack and inactive
    /// constraints have zero dual.
    pub(crate) fn correct_scaled_basic_solution(&self, u: &mut UserPoint<T>, basis: &UserBasis) {
        for (j, status) in basis.variables.iter().enumerate() {
            match status {
                BasisStatus::NonbasicLower => u.x[j] = self.scaled.lb[j],
                BasisStatus::NonbasicUpper => u.x[j] = self.scaled.ub[j],
                BasisStatus::Basic => u.z[j] = T::zero(),
                BasisStatus::Superbasic => {}
            }
        }
        for (i, status) in basis.constraints.iter().enumerate() {
            match status {
                ConstraintStatus::Nonbasic => u.slack[i] = T::zero(),
                ConstraintStatus::Basic => u.y[i] = T::zero(),
            }
        }
    }
}
