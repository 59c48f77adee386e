use super::*;
use crate::algebra::*;
use itertools::izip;

impl<T> LpModel<T>
where
    T: FloatT,
{
    /// Builds a solver space starting point from a (partial) user point.
    ///
    /// Missing vectors are taken as zero.  In the dual form the solver
    /// primal variables are built from the user duals and vice versa.
    pub fn presolve_starting_point(
        &self,
        point: &PartialPoint<T>,
    ) -> Result<SolverPoint<T>, ModelError> {
        let (m, n) = (self.user.num_constr(), self.user.num_var());

        let mut u = UserPoint::new(n, m);
        copy_optional(&mut u.x, point.x, "x")?;
        copy_optional(&mut u.slack, point.slack, "slack")?;
        copy_optional(&mut u.y, point.y, "y")?;
        copy_optional(&mut u.z, point.z, "z")?;

        self.scaled.scaling.scale_point(&mut u);
        Ok(self.dualize_basic_solution(&u))
    }

    /// Builds a solver space interior starting point from a user point.
    ///
    /// All seven vectors are required.  After scaling, the point must be
    /// compatible with the bounds and sign conventions of the scaled model:
    /// bound distances are nonnegative and infinite exactly for infinite
    /// bounds, bound duals are finite, nonnegative and zero for infinite
    /// bounds, and slacks and duals of inequality rows have the right sign.
    /// Not available for the dual form.
    pub fn presolve_ipm_starting_point(
        &self,
        point: &PartialInteriorPoint<T>,
    ) -> Result<SolverInteriorPoint<T>, ModelError> {
        let x = point.x.ok_or(ModelError::ArgumentNull("x"))?;
        let xl = point.xl.ok_or(ModelError::ArgumentNull("xl"))?;
        let xu = point.xu.ok_or(ModelError::ArgumentNull("xu"))?;
        let slack = point.slack.ok_or(ModelError::ArgumentNull("slack"))?;
        let y = point.y.ok_or(ModelError::ArgumentNull("y"))?;
        let zl = point.zl.ok_or(ModelError::ArgumentNull("zl"))?;
        let zu = point.zu.ok_or(ModelError::ArgumentNull("zu"))?;

        if self.dualized() {
            return Err(ModelError::NotImplemented(
                "interior starting point for a dualized model",
            ));
        }

        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let mut u = UserInteriorPoint::new(n, m);
        copy_optional(&mut u.x, Some(x), "x")?;
        copy_optional(&mut u.xl, Some(xl), "xl")?;
        copy_optional(&mut u.xu, Some(xu), "xu")?;
        copy_optional(&mut u.slack, Some(slack), "slack")?;
        copy_optional(&mut u.y, Some(y), "y")?;
        copy_optional(&mut u.zl, Some(zl), "zl")?;
        copy_optional(&mut u.zu, Some(zu), "zu")?;

        self.scaled.scaling.scale_interior(&mut u);
        self.check_interior_point(&u)?;

        Ok(self.dualize_ipm_starting_point(&u))
    }

    // checks a scaled user interior point against the scaled model
    fn check_interior_point(&self, u: &UserInteriorPoint<T>) -> Result<(), ModelError> {
        let (lb, ub) = (&self.scaled.lb, &self.scaled.ub);
        let inf = T::infinity();
        let zero = T::zero();

        if !u.x.is_finite() {
            return Err(ModelError::InvalidVector("x"));
        }
        // NaN fails every comparison, hence the negated tests
        for (&xl, &l) in izip!(&u.xl, lb) {
            if !(xl >= zero) || (l == -inf) != (xl == inf) {
                return Err(ModelError::InvalidVector("xl"));
            }
        }
        for (&xu, &b) in izip!(&u.xu, ub) {
            if !(xu >= zero) || (b == inf) != (xu == inf) {
                return Err(ModelError::InvalidVector("xu"));
            }
        }
        for (&s, ct) in izip!(&u.slack, &self.user.constr_type) {
            let ok = s.is_finite()
                && match ct {
                    ConstraintType::Equal => s == zero,
                    ConstraintType::LessEqual => s >= zero,
                    ConstraintType::GreaterEqual => s <= zero,
                };
            if !ok {
                return Err(ModelError::InvalidVector("slack"));
            }
        }
        for (&y, ct) in izip!(&u.y, &self.user.constr_type) {
            let ok = y.is_finite()
                && match ct {
                    ConstraintType::Equal => true,
                    ConstraintType::LessEqual => y <= zero,
                    ConstraintType::GreaterEqual => y >= zero,
                };
            if !ok {
                return Err(ModelError::InvalidVector("y"));
            }
        }
        for (&zl, &l) in izip!(&u.zl, lb) {
            if !(zl >= zero && zl < inf) || (l == -inf && zl != zero) {
                return Err(ModelError::InvalidVector("zl"));
            }
        }
        for (&zu, &b) in izip!(&u.zu, ub) {
            if !(zu >= zero && zu < inf) || (b == inf && zu != zero) {
                return Err(ModelError::InvalidVector("zu"));
            }
        }
        Ok(())
    }

    /// Maps a solver point back to user space.  Exact inverse of
    /// [`presolve_starting_point`](Self::presolve_starting_point), without
    /// any basis correction.
    ///
    /// # Panics
    /// Panics if the vector lengths do not match the computational form.
    pub fn postsolve_point(&self, point: &SolverPoint<T>) -> UserPoint<T> {
        point.assert_dims(self.rows(), self.cols());

        let mut u = self.dualize_back_basic_solution(point);
        self.scaled.scaling.unscale_point(&mut u);
        u
    }

    /// Maps a solver interior point back to user space.
    ///
    /// # Panics
    /// Panics if the vector lengths do not match the computational form.
    pub fn postsolve_interior_solution(
        &self,
        point: &SolverInteriorPoint<T>,
    ) -> UserInteriorPoint<T> {
        point.assert_dims(self.rows(), self.cols());

        let mut u = self.dualize_back_interior_solution(point);
        self.scaled.scaling.unscale_interior(&mut u);
        u
    }

    /// Residuals, objective values and complementarity of a solver
    /// interior point, measured in user space.
    ///
    /// # Panics
    /// Panics if the vector lengths do not match the computational form.
    pub fn evaluate_interior_solution(&self, point: &SolverInteriorPoint<T>) -> InteriorInfo<T> {
        point.assert_dims(self.rows(), self.cols());

        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let scaled = &self.scaled;
        let mut u = self.dualize_back_interior_solution(point);

        // rl = lb - x + xl and ru = ub - x - xu over finite bounds
        let mut rl = vec![T::zero(); n];
        let mut ru = vec![T::zero(); n];
        for j in 0..n {
            if scaled.lb[j].is_finite() {
                rl[j] = scaled.lb[j] - u.x[j] + u.xl[j];
            }
            if scaled.ub[j].is_finite() {
                ru[j] = scaled.ub[j] - u.x[j] - u.xu[j];
            }
        }

        // rb = rhs - slack - A x, adding rhs last to keep digits when x is large
        let mut rb = vec![T::zero(); m];
        self.multiply_with_scaled_matrix(&u.x, -T::one(), &mut rb, MatrixShape::N);
        rb.axpby(-T::one(), &u.slack, T::one());
        rb.axpby(T::one(), &scaled.rhs, T::one());

        // rc = obj - zl + zu - A'y
        let mut rc = vec![T::zero(); n];
        self.multiply_with_scaled_matrix(&u.y, -T::one(), &mut rc, MatrixShape::T);
        for (r, &zl, &zu) in izip!(rc.iter_mut(), &u.zl, &u.zu) {
            *r -= zl - zu;
        }
        rc.axpby(T::one(), &scaled.obj, T::one());

        scaled
            .scaling
            .unscale_residuals(&mut rb, &mut rc, &mut rl, &mut ru);
        let presidual = rb.norm_inf().max(rl.norm_inf()).max(ru.norm_inf());
        let dresidual = rc.norm_inf();

        let offset = self.user.offset;
        let pobjval = offset + scaled.obj.dot(&u.x);
        let mut dobjval = offset + scaled.rhs.dot(&u.y);
        let mut complementarity = T::zero();
        for j in 0..n {
            if scaled.lb[j].is_finite() {
                dobjval += scaled.lb[j] * u.zl[j];
                complementarity += u.xl[j] * u.zl[j];
            }
            if scaled.ub[j].is_finite() {
                dobjval -= scaled.ub[j] * u.zu[j];
                complementarity += u.xu[j] * u.zu[j];
            }
        }
        complementarity -= u.y.dot(&u.slack);

        let half: T = (0.5).as_T();
        let rel_objgap = (pobjval - dobjval) / (T::one() + half * T::abs(pobjval + dobjval));

        // norms of the user space solution
        scaled.scaling.unscale_interior(&mut u);

        InteriorInfo {
            abs_presidual: presidual,
            abs_dresidual: dresidual,
            rel_presidual: presidual / (T::one() + self.user.norm_rhs),
            rel_dresidual: dresidual / (T::one() + self.user.norm_obj),
            pobjval,
            dobjval,
            rel_objgap,
            complementarity,
            normx: u.x.norm_inf(),
            normy: u.y.norm_inf(),
            normz: T::max(u.zl.norm_inf(), u.zu.norm_inf()),
        }
    }

    /// Maps a solver basic solution back to user space.
    ///
    /// The solution is first made consistent with the basis in the scaled
    /// model (see [`UserBasis`]), then unscaled.
    ///
    /// # Panics
    /// Panics if the vector lengths do not match the computational form.
    pub fn postsolve_basic_solution(
        &self,
        point: &SolverPoint<T>,
        basis: &[BasisStatus],
    ) -> UserPoint<T> {
        point.assert_dims(self.rows(), self.cols());
        assert_eq!(basis.len(), self.cols() + self.rows());

        let mut u = self.dualize_back_basic_solution(point);
        let ubasis = self.dualize_back_basis(basis);
        self.correct_scaled_basic_solution(&mut u, &ubasis);
        self.scaled.scaling.unscale_point(&mut u);
        u
    }

    /// Maps a solver basis to the basis of the user model.
    ///
    /// # Panics
    /// Panics if `basis` does not have one entry per solver column.
    pub fn postsolve_basis(&self, basis: &[BasisStatus]) -> UserBasis {
        assert_eq!(basis.len(), self.cols() + self.rows());

        let mut ubasis = self.dualize_back_basis(basis);
        self.scaled.scaling.unscale_basis(&mut ubasis);
        ubasis
    }

    /// Primal and dual infeasibility and objective value of a solver basic
    /// solution, measured in user space.
    ///
    /// # Panics
    /// Panics if the vector lengths do not match the computational form.
    pub fn evaluate_basic_solution(
        &self,
        point: &SolverPoint<T>,
        basis: &[BasisStatus],
    ) -> BasicInfo<T> {
        point.assert_dims(self.rows(), self.cols());
        assert_eq!(basis.len(), self.cols() + self.rows());

        let (m, n) = (self.user.num_constr(), self.user.num_var());
        let scaled = &self.scaled;

        let mut u = self.dualize_back_basic_solution(point);
        let ubasis = self.dualize_back_basis(basis);
        self.correct_scaled_basic_solution(&mut u, &ubasis);
        let objval = scaled.obj.dot(&u.x);

        // infeasibilities are scaled like the point itself
        let mut infeas = UserPoint::new(n, m);
        for j in 0..n {
            let x = u.x[j];
            if x < scaled.lb[j] {
                infeas.x[j] = x - scaled.lb[j];
            }
            if x > scaled.ub[j] {
                infeas.x[j] = x - scaled.ub[j];
            }
            let (z, status) = (u.z[j], ubasis.variables[j]);
            if status != BasisStatus::NonbasicLower && z > T::zero() {
                infeas.z[j] = z;
            }
            if status != BasisStatus::NonbasicUpper && z < T::zero() {
                infeas.z[j] = z;
            }
        }
        for (i, ct) in self.user.constr_type.iter().enumerate() {
            let (s, y) = (u.slack[i], u.y[i]);
            match ct {
                ConstraintType::LessEqual => {
                    if s < T::zero() {
                        infeas.slack[i] = s;
                    }
                    if y > T::zero() {
                        infeas.y[i] = y;
                    }
                }
                ConstraintType::GreaterEqual => {
                    if s > T::zero() {
                        infeas.slack[i] = s;
                    }
                    if y < T::zero() {
                        infeas.y[i] = y;
                    }
                }
                ConstraintType::Equal => {}
            }
        }
        scaled.scaling.unscale_point(&mut infeas);

        BasicInfo {
            primal_infeas: T::max(infeas.x.norm_inf(), infeas.slack.norm_inf()),
            dual_infeas: T::max(infeas.z.norm_inf(), infeas.y.norm_inf()),
            objval,
        }
    }
}

// copies `src` into `dst` if present, leaving `dst` untouched otherwise
fn copy_optional<T: FloatT>(
    dst: &mut [T],
    src: Option<&[T]>,
    name: &'static str,
) -> Result<(), ModelError> {
    if let Some(src) = src {
        if src.len() != dst.len() {
            return Err(ModelError::InvalidDimension(name));
        }
        dst.copy_from(src);
    }
    Ok(())
}
