#![allow(non_snake_case)]
use crate::algebra::*;

// Target window of binary exponents.  An entry |a| = f * 2^e with f in
// [0.5,1) is well scaled if EXP_MIN <= e <= EXP_MAX, i.e. |a| in [0.5,8).
const EXP_MIN: i32 = 0;
const EXP_MAX: i32 = 3;

/// Row and column factors produced by [`equilibrate_matrix`].
///
/// All factors are exact powers of two.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibration<T> {
    /// Vector of column scaling terms
    pub colscale: Vec<T>,
    /// Vector of row scaling terms
    pub rowscale: Vec<T>,
    /// number of rounds that rescaled the matrix
    pub rounds: usize,
}

impl<T> Equilibration<T>
where
    T: FloatT,
{
    fn new(m: usize, n: usize) -> Self {
        Self {
            colscale: vec![T::one(); n],
            rowscale: vec![T::one(); m],
            rounds: 0,
        }
    }

    /// true if every factor is one
    pub fn is_identity(&self) -> bool {
        self.rounds == 0
    }
}

/// Power-of-two row and column equilibration of `A`, in place.
///
/// The matrix is left unchanged if all of its entries already lie within the
/// target magnitude range.  Otherwise each round divides every row and column
/// by (roughly) the square root of its largest entry, truncated to a power of
/// two so that no rounding error is introduced.  Stops after `max_rounds`
/// rounds or at the first round making no correction.
///
/// On return `A` holds `diag(rowscale) * A_in * diag(colscale)`.
pub fn equilibrate_matrix<T>(A: &mut CscMatrix<T>, max_rounds: usize) -> Equilibration<T>
where
    T: FloatT,
{
    let (m, n) = (A.m, A.n);
    let mut scaling = Equilibration::new(m, n);

    // quick return if entries are within the target range
    if A.nzval.iter().all(|a| in_window(a.binary_exponent())) {
        return scaling;
    }

    let mut colmax = vec![T::zero(); n];
    let mut rowmax = vec![T::zero(); m];

    for _ in 0..max_rounds {
        A.col_norms(&mut colmax);
        A.row_norms(&mut rowmax);

        // replace the norms with this round's scaling factors
        let mut corrected = false;
        for (f, s) in std::iter::zip(rowmax.iter_mut(), scaling.rowscale.iter_mut()) {
            *f = equilibration_factor(f.binary_exponent());
            if *f != T::one() {
                corrected = true;
                *s *= *f;
            }
        }
        for (f, s) in std::iter::zip(colmax.iter_mut(), scaling.colscale.iter_mut()) {
            *f = equilibration_factor(f.binary_exponent());
            if *f != T::one() {
                corrected = true;
                *s *= *f;
            }
        }
        if !corrected {
            break;
        }

        A.lrscale(&rowmax, &colmax);
        scaling.rounds += 1;
    }

    scaling
}

fn in_window(exp: i32) -> bool {
    (EXP_MIN..=EXP_MAX).contains(&exp)
}

// Power of two factor s such that s * 2^exp moves closer to the target
// window.  Integer division truncates toward zero.
fn equilibration_factor<T: FloatT>(exp: i32) -> T {
    if exp < EXP_MIN {
        T::exp2i((EXP_MIN - exp + 1) / 2)
    } else if exp > EXP_MAX {
        T::exp2i(-((exp - EXP_MAX + 1) / 2))
    } else {
        T::one()
    }
}
