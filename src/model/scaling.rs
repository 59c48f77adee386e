#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;

// ---------------
// flipped variables
// ---------------

/// Ordered set of variables whose sign was inverted at load time.
///
/// Negating a variable exchanges the roles of its lower and upper bounds.
/// Every flip related translation goes through one of the `mirror_*`
/// methods here, each of which is an involution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipSet {
    vars: Vec<usize>,
}

impl FlipSet {
    pub(crate) fn push(&mut self, j: usize) {
        self.vars.push(j);
    }

    /// flipped variable indices in increasing order
    pub fn indices(&self) -> &[usize] {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Negates the primal value and reduced cost of every flipped variable.
    pub fn mirror_point<T: FloatT>(&self, x: &mut [T], z: &mut [T]) {
        for &j in &self.vars {
            x[j] = -x[j];
            z[j] = -z[j];
        }
    }

    /// Negates `x` and exchanges the lower and upper bound quantities
    /// (`xl`/`xu` and `zl`/`zu`) of every flipped variable.
    pub fn mirror_interior<T: FloatT>(
        &self,
        x: &mut [T],
        xl: &mut [T],
        xu: &mut [T],
        zl: &mut [T],
        zu: &mut [T],
    ) {
        for &j in &self.vars {
            x[j] = -x[j];
            std::mem::swap(&mut xl[j], &mut xu[j]);
            std::mem::swap(&mut zl[j], &mut zu[j]);
        }
    }

    /// Negates the dual residual and exchanges the negated lower and upper
    /// bound residuals of every flipped variable.
    pub fn mirror_residuals<T: FloatT>(&self, rc: &mut [T], rl: &mut [T], ru: &mut [T]) {
        for &j in &self.vars {
            rc[j] = -rc[j];
            let (l, u) = (rl[j], ru[j]);
            rl[j] = -u;
            ru[j] = -l;
        }
    }

    /// Exchanges nonbasic-at-lower and nonbasic-at-upper status.
    pub fn mirror_basis(&self, vbasis: &mut [BasisStatus]) {
        for &j in &self.vars {
            vbasis[j] = vbasis[j].mirrored();
        }
    }
}

// ---------------
// scale factors
// ---------------

/// Scale factors and flipped variables applied at load time.
///
/// Scaled quantities relate to user quantities by
/// `x_scaled = x / colscale`, `z_scaled = z * colscale`,
/// `y_scaled = y / rowscale` and `slack_scaled = slack * rowscale`,
/// followed by the sign flip.  Empty `colscale` and `rowscale` vectors
/// represent identity scaling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingState<T> {
    /// Vector of variable scaling terms (empty when unscaled)
    pub colscale: Vec<T>,
    /// Vector of constraint scaling terms (empty when unscaled)
    pub rowscale: Vec<T>,
    /// variables negated at load time
    pub flipped_vars: FlipSet,
}

impl<T> ScalingState<T>
where
    T: FloatT,
{
    /// true if no equilibration was applied
    pub fn is_unscaled(&self) -> bool {
        self.colscale.is_empty() && self.rowscale.is_empty()
    }

    /// Range `(min, max)` over all row and column factors, `(1,1)` if unscaled.
    pub fn factor_range(&self) -> (T, T) {
        let factors = self.colscale.iter().chain(self.rowscale.iter());
        let (lo, hi) = factors.fold((T::infinity(), T::zero()), |(lo, hi), &s| {
            (T::min(lo, s), T::max(hi, s))
        });
        if lo.is_infinite() {
            (T::one(), T::one())
        } else {
            (lo, hi)
        }
    }

    /// Maps a user space point into the scaled model.
    pub fn scale_point(&self, p: &mut UserPoint<T>) {
        if !self.colscale.is_empty() {
            p.x.hadamard_div(&self.colscale);
            p.z.hadamard(&self.colscale);
        }
        if !self.rowscale.is_empty() {
            p.y.hadamard_div(&self.rowscale);
            p.slack.hadamard(&self.rowscale);
        }
        self.flipped_vars.mirror_point(&mut p.x, &mut p.z);
    }

    /// Maps a basic solution of the scaled model back to user space.
    pub fn unscale_point(&self, p: &mut UserPoint<T>) {
        self.flipped_vars.mirror_point(&mut p.x, &mut p.z);
        if !self.colscale.is_empty() {
            p.x.hadamard(&self.colscale);
            p.z.hadamard_div(&self.colscale);
        }
        if !self.rowscale.is_empty() {
            p.y.hadamard(&self.rowscale);
            p.slack.hadamard_div(&self.rowscale);
        }
    }

    /// Maps a user space interior point into the scaled model.
    pub fn scale_interior(&self, p: &mut UserInteriorPoint<T>) {
        if !self.colscale.is_empty() {
            let d = &self.colscale;
            p.x.hadamard_div(d);
            p.xl.hadamard_div(d);
            p.xu.hadamard_div(d);
            p.zl.hadamard(d);
            p.zu.hadamard(d);
        }
        if !self.rowscale.is_empty() {
            p.y.hadamard_div(&self.rowscale);
            p.slack.hadamard(&self.rowscale);
        }
        self.flipped_vars
            .mirror_interior(&mut p.x, &mut p.xl, &mut p.xu, &mut p.zl, &mut p.zu);
    }

    /// Maps an interior point of the scaled model back to user space.
    pub fn unscale_interior(&self, p: &mut UserInteriorPoint<T>) {
        self.flipped_vars
            .mirror_interior(&mut p.x, &mut p.xl, &mut p.xu, &mut p.zl, &mut p.zu);
        if !self.colscale.is_empty() {
            let d = &self.colscale;
            p.x.hadamard(d);
            p.xl.hadamard(d);
            p.xu.hadamard(d);
            p.zl.hadamard_div(d);
            p.zu.hadamard_div(d);
        }
        if !self.rowscale.is_empty() {
            p.y.hadamard(&self.rowscale);
            p.slack.hadamard_div(&self.rowscale);
        }
    }

    /// Maps residuals `rb = rhs - slack - A x`, `rc = obj - zl + zu - A'y`,
    /// `rl = lb - x + xl` and `ru = ub - x - xu` of the scaled model back to
    /// user space.
    pub fn unscale_residuals(&self, rb: &mut [T], rc: &mut [T], rl: &mut [T], ru: &mut [T]) {
        self.flipped_vars.mirror_residuals(rc, rl, ru);
        if !self.colscale.is_empty() {
            rc.hadamard_div(&self.colscale);
            rl.hadamard(&self.colscale);
            ru.hadamard(&self.colscale);
        }
        if !self.rowscale.is_empty() {
            rb.hadamard_div(&self.rowscale);
        }
    }

    /// Maps basis status of the scaled model back to user space.
    pub fn unscale_basis(&self, basis: &mut UserBasis) {
        self.flipped_vars.mirror_basis(&mut basis.variables);
    }
}

// ---------------
// scaled model
// ---------------

/// Flipped and equilibrated copy of a [`UserModel`].
#[derive(Debug, Clone)]
pub struct ScaledModel<T = f64> {
    /// scaled constraint matrix
    pub A: CscMatrix<T>,
    /// scaled objective
    pub obj: Vec<T>,
    /// scaled right hand side
    pub rhs: Vec<T>,
    /// scaled lower bounds
    pub lb: Vec<T>,
    /// scaled upper bounds
    pub ub: Vec<T>,
    /// transformation relating this model to the user model
    pub scaling: ScalingState<T>,
}

impl<T> ScaledModel<T>
where
    T: FloatT,
{
    /// Builds the scaled model without modifying `user`.
    ///
    /// Every variable with a finite upper bound and an infinite lower bound
    /// is negated, after which the matrix is equilibrated if
    /// `settings.scale` is set.
    pub fn new(user: &UserModel<T>, settings: &ModelSettings) -> Self {
        let mut A = user.A.clone();
        let mut obj = user.obj.clone();
        let mut lb = user.lb.clone();
        let mut ub = user.ub.clone();
        let rhs = user.rhs.clone();

        let mut scaling = ScalingState::<T>::default();

        for j in 0..user.num_var() {
            if ub[j].is_finite() && lb[j].is_infinite() {
                lb[j] = -ub[j];
                ub[j] = T::infinity();
                A.scale_col(j, -T::one());
                obj[j] = -obj[j];
                scaling.flipped_vars.push(j);
            }
        }

        let mut scaled = Self {
            A,
            obj,
            rhs,
            lb,
            ub,
            scaling,
        };

        if settings.scale {
            let eq = equilibrate_matrix(&mut scaled.A, settings.equilibrate_max_iter as usize);
            if !eq.is_identity() {
                scaled.apply_factors(eq.colscale, eq.rowscale);
            }
        }
        scaled
    }

    fn apply_factors(&mut self, colscale: Vec<T>, rowscale: Vec<T>) {
        self.obj.hadamard(&colscale);
        self.lb.hadamard_div(&colscale);
        self.ub.hadamard_div(&colscale);
        self.rhs.hadamard(&rowscale);
        self.scaling.colscale = colscale;
        self.scaling.rowscale = rowscale;
    }
}
