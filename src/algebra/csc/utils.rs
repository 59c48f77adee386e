//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// in block partitioned sparse matrices.
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT, MatrixShape};
use std::iter::zip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    // increment the self.colptr by 1 for each of `blockcols`
    // consecutive columns starting at initcol.  Used to account
    // for blocks with one entry per column (identity, signed unit
    // columns etc)
    pub(crate) fn colcount_unit(&mut self, initcol: usize, blockcols: usize) {
        let cols = self.colptr[initcol..(initcol + blockcols)].iter_mut();
        cols.for_each(|x| *x += 1);
    }

    // increment the self.colptr by the number of nonzeros in M

    pub(crate) fn colcount_block(&mut self, M: &CscMatrix<T>, initcol: usize, shape: MatrixShape) {
        match shape {
            MatrixShape::T => {
                for row in M.rowval.iter() {
                    self.colptr[initcol + row] += 1;
                }
            }
            MatrixShape::N => {
                // just add the column count
                for i in 0..M.n {
                    self.colptr[initcol + i] += M.colptr[i + 1] - M.colptr[i];
                }
            }
        }
    }

    // populate values from M using the self.colptr as indicator of
    // next fill location in each row.
    pub(crate) fn fill_block(
        &mut self,
        M: &CscMatrix<T>,
        initrow: usize,
        initcol: usize,
        shape: MatrixShape,
    ) {
        for i in 0..M.n {
            let start = M.colptr[i];
            let stop = M.colptr[i + 1];
            let z = zip(&M.rowval[start..stop], &M.nzval[start..stop]);

            for (&Mrow, &Mval) in z {
                let (col, row) = match shape {
                    MatrixShape::T => (Mrow + initcol, i + initrow),
                    MatrixShape::N => (i + initcol, Mrow + initrow),
                };

                let dest = self.colptr[col];
                self.rowval[dest] = row;
                self.nzval[dest] = Mval;
                self.colptr[col] += 1;
            }
        }
    }

    // place a single entry `val` in each of the columns
    // initcol..initcol+rows.len(), with the k-th column
    // receiving its entry in row `rows[k]`
    pub(crate) fn fill_unit_columns(&mut self, rows: &[usize], val: T, initcol: usize) {
        for (k, &row) in rows.iter().enumerate() {
            let col = initcol + k;
            let dest = self.colptr[col];
            self.rowval[dest] = row;
            self.nzval[dest] = val;
            self.colptr[col] += 1;
        }
    }

    pub(crate) fn colcount_to_colptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.colptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    pub(crate) fn backshift_colptrs(&mut self) {
        self.colptr.rotate_right(1);
        self.colptr[0] = 0;
    }
}
