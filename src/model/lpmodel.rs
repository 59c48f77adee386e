#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;

/// A loaded linear program together with its scaled copy and the
/// computational form passed to the iterative kernel.
///
/// All translation methods take `&self`.  Solver space inputs are checked
/// for consistent dimensions and the methods panic on mismatch.
///
/// __Example usage__ : To load the problem
///
/// ```text
/// minimize    x0 + x1
/// subject to  x0 + x1 <= 10
///             x >= 0
/// ```
///
/// ```no_run
/// use lpform::algebra::CscMatrix;
/// use lpform::model::*;
///
/// let A = CscMatrix::from(&[[1., 1.]]);
/// let inf = f64::INFINITY;
/// let settings = ModelSettings::default();
///
/// let model = LpModel::load(
///     &A, &[10.], &['<'], 0., &[1., 1.], &[0., 0.], &[inf, inf], &settings,
/// ).unwrap();
///
/// assert!(!model.dualized());
/// assert_eq!(model.form().lb[2], 0.);
/// ```
#[derive(Debug)]
pub struct LpModel<T = f64> {
    pub(crate) user: UserModel<T>,
    pub(crate) scaled: ScaledModel<T>,
    pub(crate) form: ComputationalForm<T>,
    pub(crate) settings: ModelSettings,
    pub(crate) stream: PrintTarget,
}

impl<T> LpModel<T>
where
    T: FloatT,
{
    /// Validates and preprocesses a linear program.
    ///
    /// On failure nothing is built and the error identifies the first
    /// rejected input.
    ///
    /// With `settings.verbose` the load summary is written to stdout, since
    /// no other print target can be configured before the model exists.
    /// To send it elsewhere, load with `verbose` off, configure the target
    /// through [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget)
    /// and call [`print_summary`](Self::print_summary).
    #[allow(clippy::too_many_arguments)]
    pub fn load(
        A: &CscMatrix<T>,
        rhs: &[T],
        constr_type: &[char],
        offset: T,
        obj: &[T],
        lb: &[T],
        ub: &[T],
        settings: &ModelSettings,
    ) -> Result<Self, ModelError> {
        let user = UserModel::new(A, rhs, constr_type, offset, obj, lb, ub)?;
        let scaled = ScaledModel::new(&user, settings);
        let form = ComputationalForm::new(&user, &scaled, settings);

        let mut model = Self {
            user,
            scaled,
            form,
            settings: settings.clone(),
            stream: PrintTarget::default(),
        };

        if settings.verbose {
            // a failed write to stdout is not a model error
            model.print_summary().ok();
        }
        Ok(model)
    }

    /// the validated user model
    pub fn user(&self) -> &UserModel<T> {
        &self.user
    }

    /// the flipped and equilibrated model
    pub fn scaled(&self) -> &ScaledModel<T> {
        &self.scaled
    }

    /// the computational form handed to the kernel
    pub fn form(&self) -> &ComputationalForm<T> {
        &self.form
    }

    pub fn scaling(&self) -> &ScalingState<T> {
        &self.scaled.scaling
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn dualized(&self) -> bool {
        self.form.is_dualized()
    }

    /// rows of the computational form
    pub fn rows(&self) -> usize {
        self.form.rows()
    }

    /// structural columns of the computational form
    pub fn cols(&self) -> usize {
        self.form.cols()
    }

    /// Dimensions of the user model and the computational form.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            num_var: self.user.num_var(),
            num_constr: self.user.num_constr(),
            num_entries: self.user.num_entries(),
            num_rows_solver: self.rows(),
            num_cols_solver: self.cols() + self.rows(),
            num_entries_solver: self.form.AI.nnz(),
            dualized: self.dualized(),
            dense_cols: self.form.dense.num_dense,
        }
    }

    /// Computes `lhs += alpha * A_s * rhs`, or `lhs += alpha * A_s' * rhs`
    /// for [`MatrixShape::T`], where `A_s` is the scaled user matrix.
    pub fn multiply_with_scaled_matrix(
        &self,
        rhs: &[T],
        alpha: T,
        lhs: &mut [T],
        shape: MatrixShape,
    ) {
        let A = &self.scaled.A;
        match shape {
            MatrixShape::N => A.gemv(lhs, rhs, alpha, T::one()),
            MatrixShape::T => A.t().gemv(lhs, rhs, alpha, T::one()),
        }
    }
}
