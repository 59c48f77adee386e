#![allow(non_snake_case)]
use crate::algebra::{BlockConcatenate, CscMatrix, FloatT, MatrixShape};

impl<T> BlockConcatenate for CscMatrix<T>
where
    T: FloatT,
{
    fn hcat(A: &Self, B: &Self) -> Self {
        //first check for compatible row dimensions
        assert_eq!(A.m, B.m);

        //dimensions for C = [A B];
        let nnz = A.nnz() + B.nnz();
        let m = A.m; //rows C
        let n = A.n + B.n; //cols C
        let mut C = CscMatrix::spalloc((m, n), nnz);

        //compute column counts and fill
        C.colptr.fill(0);
        C.colcount_block(A, 0, MatrixShape::N);
        C.colcount_block(B, A.n, MatrixShape::N);
        C.colcount_to_colptr();

        C.fill_block(A, 0, 0, MatrixShape::N);
        C.fill_block(B, 0, A.n, MatrixShape::N);
        C.backshift_colptrs();

        C
    }
}

#[test]
fn test_hcat() {
    let A = CscMatrix::from(&[[1., 0.], [0., 2.]]);
    let I = CscMatrix::<f64>::identity(2);

    let C = CscMatrix::hcat(&A, &I);
    assert_eq!(C, CscMatrix::from(&[[1., 0., 1., 0.], [0., 2., 0., 1.]]));
}
