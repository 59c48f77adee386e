#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;

/// Which computational form was built at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formulation {
    /// `[A | I] x = rhs`, one slack column per constraint
    Primal,
    /// `[A' | -I(:,boxed) | I] x = obj`, the dual of the scaled model
    Dual,
}

/// Equality constrained linear program handed to the iterative kernel:
///
/// ```text
/// minimize    c'x
/// subject to  AI x = b
///             lb <= x <= ub
/// ```
///
/// `AI` has `rows` rows and `cols + rows` columns, the last `rows` of which
/// form an identity block.
#[derive(Debug, Clone)]
pub struct ComputationalForm<T = f64> {
    /// constraint matrix with appended identity block
    pub AI: CscMatrix<T>,
    /// transpose of `AI`
    pub AIt: CscMatrix<T>,
    /// right hand side
    pub b: Vec<T>,
    /// cost
    pub c: Vec<T>,
    /// column lower bounds
    pub lb: Vec<T>,
    /// column upper bounds
    pub ub: Vec<T>,
    /// primal or dual form
    pub formulation: Formulation,
    /// dense structural columns of `AI`
    pub dense: DenseColumns,
    /// infinity norm of `c`
    pub norm_c: T,
    /// largest magnitude over `b` and the finite bounds
    pub norm_bounds: T,
    rows: usize,
    cols: usize,
}

impl<T> ComputationalForm<T>
where
    T: FloatT,
{
    /// Assembles the computational form of a scaled model.
    pub fn new(user: &UserModel<T>, scaled: &ScaledModel<T>, settings: &ModelSettings) -> Self {
        let (m, n) = (user.num_constr(), user.num_var());

        let mut form = if settings.dualize.dualize(m, n) {
            Self::load_dual(user, scaled)
        } else {
            Self::load_primal(user, scaled)
        };

        form.AIt = form.AI.transpose();
        form.dense = DenseColumns::new(&form.AI, form.rows, form.cols, settings);
        form.norm_c = form.c.norm_inf();
        form.norm_bounds = form
            .b
            .norm_inf()
            .max(form.lb.norm_inf_finite())
            .max(form.ub.norm_inf_finite());
        form
    }

    fn empty(formulation: Formulation, rows: usize, cols: usize, AI: CscMatrix<T>) -> Self {
        let ncols = cols + rows;
        Self {
            AI,
            AIt: CscMatrix::spalloc((ncols, rows), 0),
            b: vec![T::zero(); rows],
            c: vec![T::zero(); ncols],
            lb: vec![T::zero(); ncols],
            ub: vec![T::zero(); ncols],
            formulation,
            dense: DenseColumns {
                num_dense: 0,
                nz_dense: rows + 1,
            },
            norm_c: T::zero(),
            norm_bounds: T::zero(),
            rows,
            cols,
        }
    }

    fn load_primal(user: &UserModel<T>, scaled: &ScaledModel<T>) -> Self {
        let (m, n) = (user.num_constr(), user.num_var());

        let AI = CscMatrix::hcat(&scaled.A, &CscMatrix::identity(m));
        let mut form = Self::empty(Formulation::Primal, m, n, AI);

        form.b.copy_from(&scaled.rhs);
        form.c[..n].copy_from(&scaled.obj);
        form.lb[..n].copy_from(&scaled.lb);
        form.ub[..n].copy_from(&scaled.ub);

        for (i, ct) in user.constr_type.iter().enumerate() {
            let (l, u) = match ct {
                ConstraintType::Equal => (T::zero(), T::zero()),
                ConstraintType::LessEqual => (T::zero(), T::infinity()),
                ConstraintType::GreaterEqual => (T::neg_infinity(), T::zero()),
            };
            form.lb[n + i] = l;
            form.ub[n + i] = u;
        }
        form
    }

    fn load_dual(user: &UserModel<T>, scaled: &ScaledModel<T>) -> Self {
        let (m, n) = (user.num_constr(), user.num_var());
        let boxed = &user.boxed_vars;
        let nb = boxed.len();

        // after flipping, a finite upper bound implies a finite lower bound
        for j in 0..n {
            if scaled.ub[j].is_finite() {
                assert!(scaled.lb[j].is_finite());
            }
        }

        // AI = [A' | -I(:,boxed) | I_n], assembled in place
        let A = &scaled.A;
        let mut AI = CscMatrix::spalloc((n, m + nb + n), A.nnz() + nb + n);
        AI.colptr.fill(0);
        AI.colcount_block(A, 0, MatrixShape::T);
        AI.colcount_unit(m, nb);
        AI.colcount_unit(m + nb, n);
        AI.colcount_to_colptr();
        AI.fill_block(A, 0, 0, MatrixShape::T);
        AI.fill_unit_columns(boxed, -T::one(), m);
        AI.fill_unit_columns(&(0..n).collect::<Vec<_>>(), T::one(), m + nb);
        AI.backshift_colptrs();

        let cols = m + nb;
        let mut form = Self::empty(Formulation::Dual, n, cols, AI);

        form.b.copy_from(&scaled.obj);

        // c = [-rhs; ub(boxed); -lb]
        form.c[..m].scalarop_from(|r| -r, &scaled.rhs);
        for (k, &j) in boxed.iter().enumerate() {
            form.c[m + k] = scaled.ub[j];
        }
        // a column for an infinite lower bound is fixed at zero,
        // so its cost is immaterial
        for (j, &l) in scaled.lb.iter().enumerate() {
            form.c[cols + j] = if l.is_finite() { -l } else { T::zero() };
        }

        for (i, ct) in user.constr_type.iter().enumerate() {
            let (l, u) = match ct {
                ConstraintType::Equal => (T::neg_infinity(), T::infinity()),
                ConstraintType::LessEqual => (T::neg_infinity(), T::zero()),
                ConstraintType::GreaterEqual => (T::zero(), T::infinity()),
            };
            form.lb[i] = l;
            form.ub[i] = u;
        }
        for k in m..cols {
            form.lb[k] = T::zero();
            form.ub[k] = T::infinity();
        }
        for (j, &l) in scaled.lb.iter().enumerate() {
            form.lb[cols + j] = T::zero();
            form.ub[cols + j] = if l.is_finite() {
                T::infinity()
            } else {
                T::zero()
            };
        }
        form
    }

    /// number of rows of `AI`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// number of structural columns of `AI`, excluding the identity block
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_dualized(&self) -> bool {
        self.formulation == Formulation::Dual
    }

    /// Indices of the dense structural columns of `AI`.
    pub fn dense_column_indices(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&j| self.dense.is_dense(self.AI.col_nnz(j)))
            .collect()
    }
}
