#![allow(non_snake_case)]

use crate::algebra::{Adjoint, CscMatrix, FloatT, MatrixShape, ShapedMatrix, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use lpform::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that column pointers
    /// are monotone.  Use [`check_format`](CscMatrix::check_format) for that.
    ///
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```no_run
    /// use lpform::algebra::CscMatrix;
    /// let m = 3;
    /// let n = 4;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc((m,n),0);
    /// ```

    pub fn spalloc(size: (usize, usize), nnz: usize) -> Self {
        let (m, n) = size;
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// number of structural entries in column `col`
    pub fn col_nnz(&self, col: usize) -> usize {
        self.colptr[col + 1] - self.colptr[col]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Check that matrix data is correctly formatted.
    ///
    /// Column pointers must start at zero and be non-decreasing, every row
    /// index must lie in `0..m` and appear at most once per column, and every
    /// stored value must be finite.  Row indices within a column need not be
    /// sorted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.len() != self.n + 1 {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr start and monotonicity
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        if self.colptr[self.n] != self.rowval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if !self.nzval.iter().all(|v| v.is_finite()) {
            return Err(SparseFormatError::BadNzval);
        }

        //check for row values out of bounds and repeated
        //row values within each column
        let mut marked = vec![usize::MAX; self.m];
        for col in 0..self.n {
            for &row in &self.rowval[self.colptr[col]..self.colptr[col + 1]] {
                if row >= self.m {
                    return Err(SparseFormatError::BadRowval);
                }
                if marked[row] == col {
                    return Err(SparseFormatError::DuplicateEntry);
                }
                marked[row] = col;
            }
        }

        Ok(())
    }

    /// Allocates a new matrix holding the transpose of `self`.
    ///
    /// Row indices in each column of the result appear in increasing order.
    pub fn transpose(&self) -> Self {
        let mut At = CscMatrix::spalloc((self.n, self.m), self.nnz());

        At.colptr.fill(0);
        At.colcount_block(self, 0, MatrixShape::T);
        At.colcount_to_colptr();
        At.fill_block(self, 0, 0, MatrixShape::T);
        At.backshift_colptrs();

        At
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

/// Builds a sparse matrix from a dense row-major array, dropping zeros.
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for CscMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let mut colptr = Vec::with_capacity(N + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..N {
            for (row, vals) in rows.iter().enumerate() {
                if vals[col] != T::zero() {
                    rowval.push(row);
                    nzval.push(vals[col]);
                }
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(M, N, colptr, rowval, nzval)
    }
}

#[test]
fn test_csc_transpose() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );
    assert!(A.check_format().is_ok());

    let At = A.transpose();
    let B = CscMatrix::from(&[
        [0., 1., 0., 2., 0., 3.],
        [4., 5., 6., 7., 8., 9.],
        [0., 0., 0., 10., 11., 0.],
        [0., 0., 0., 0., 0., 0.],
        [12., 0., 13., 0., 14., 0.],
    ]);
    assert_eq!(At.size(), (5, 6));
    assert_eq!(At, B);
    assert!(At.check_format().is_ok());
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_csc_check_format() {
    let good = CscMatrix::new(2, 2, vec![0, 1, 3], vec![1, 1, 0], vec![1., 2., 3.]);
    assert!(good.check_format().is_ok());

    let mut A = good.clone();
    A.colptr = vec![1, 1, 3];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));

    let mut A = good.clone();
    A.colptr = vec![0, 2, 1];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));

    let mut A = good.clone();
    A.rowval[0] = 2;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let mut A = good.clone();
    A.rowval[2] = 1;
    assert_eq!(A.check_format(), Err(SparseFormatError::DuplicateEntry));

    let mut A = good.clone();
    A.nzval[1] = f64::NAN;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadNzval));

    let mut A = good;
    A.colptr.pop();
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_csc_from_dense() {
    let A = CscMatrix::from(&[[1., 0., 2.], [0., 3., 4.]]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.colptr, vec![0, 1, 2, 4]);
    assert_eq!(A.rowval, vec![0, 1, 0, 1]);
    assert_eq!(A.nzval, vec![1., 3., 2., 4.]);
}
