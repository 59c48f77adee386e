#![allow(non_snake_case)]
use super::ModelSettings;
use crate::algebra::*;
use itertools::Itertools;

/// Classification of unusually dense structural columns.
///
/// A column is dense if its nonzero count is at least `nz_dense`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseColumns {
    /// number of dense columns
    pub num_dense: usize,
    /// nonzero count at which the dense suffix starts
    pub nz_dense: usize,
}

impl DenseColumns {
    /// Classifies the first `cols` columns of `AI`, a matrix with `rows` rows.
    ///
    /// Sorting the column counts in increasing order, the first count that
    /// exceeds both `dense_min_nnz` and `dense_ratio` times its predecessor
    /// starts the dense suffix.  The classification is dropped if the
    /// suffix holds more than `dense_max_cols` columns.
    pub fn new<T: FloatT>(
        AI: &CscMatrix<T>,
        rows: usize,
        cols: usize,
        settings: &ModelSettings,
    ) -> Self {
        let none = Self {
            num_dense: 0,
            nz_dense: rows + 1,
        };

        let counts = (0..cols).map(|j| AI.col_nnz(j)).sorted_unstable().collect_vec();

        let first = counts
            .iter()
            .tuple_windows()
            .position(|(&prev, &next)| {
                let growth = settings.dense_ratio.saturating_mul(prev);
                next > usize::max(settings.dense_min_nnz, growth)
            });

        match first {
            Some(k) if cols - (k + 1) <= settings.dense_max_cols => Self {
                num_dense: cols - (k + 1),
                nz_dense: counts[k + 1],
            },
            _ => none,
        }
    }

    /// true if a column with `nnz` entries is dense
    pub fn is_dense(&self, nnz: usize) -> bool {
        nnz >= self.nz_dense
    }
}
