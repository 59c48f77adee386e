use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixVectorMultiply for CscMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_N(self, y, x, a, b);
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CscMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_T(self.src, y, x, a, b);
    }
}

impl<T: FloatT> MatrixMath for CscMatrix<T> {
    type T = T;

    fn scale_col(&mut self, col: usize, c: T) {
        let (first, last) = (self.colptr[col], self.colptr[col + 1]);
        self.nzval[first..last].scale(c);
    }

    fn col_norms(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.n);

        for (i, v) in norms.iter_mut().enumerate() {
            *v = self.nzval[self.colptr[i]..self.colptr[i + 1]]
                .iter()
                .fold(T::zero(), |m, &nzval| T::max(m, T::abs(nzval)));
        }
    }

    fn row_norms(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.m);

        norms.fill(T::zero());
        for (row, val) in zip(&self.rowval, &self.nzval) {
            norms[*row] = T::max(norms[*row], T::abs(*val));
        }
    }

    fn lrscale(&mut self, l: &[T], r: &[T]) {
        assert_eq!(self.nzval.len(), self.colptr[self.n]);

        for (col, &ri) in r.iter().enumerate() {
            let (first, last) = (self.colptr[col], self.colptr[col + 1]);
            let vals = &mut self.nzval[first..last];
            let rows = &self.rowval[first..last];

            for (val, row) in zip(vals, rows) {
                *val *= l[*row] * ri;
            }
        }
    }
}

#[allow(non_snake_case)]
fn _csc_axpby_N<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(A.nzval.len(), A.colptr[A.n]);
    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    //y += A*x
    if a == T::one() {
        for (j, xj) in x.iter().enumerate().take(A.n) {
            for i in A.colptr[j]..A.colptr[j + 1] {
                y[A.rowval[i]] += A.nzval[i] * *xj;
            }
        }
    } else if a == -T::one() {
        for (j, xj) in x.iter().enumerate().take(A.n) {
            for i in A.colptr[j]..A.colptr[j + 1] {
                y[A.rowval[i]] -= A.nzval[i] * *xj;
            }
        }
    } else {
        for (j, xj) in x.iter().enumerate().take(A.n) {
            for i in A.colptr[j]..A.colptr[j + 1] {
                y[A.rowval[i]] += a * A.nzval[i] * *xj;
            }
        }
    }
}

#[allow(non_snake_case)]
fn _csc_axpby_T<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(A.nzval.len(), A.colptr[A.n]);
    assert_eq!(x.len(), A.m);
    assert_eq!(y.len(), A.n);

    //y += A'*x
    if a == T::one() {
        for (j, yj) in y.iter_mut().enumerate().take(A.n) {
            for k in A.colptr[j]..A.colptr[j + 1] {
                *yj += A.nzval[k] * x[A.rowval[k]];
            }
        }
    } else if a == -T::one() {
        for (j, yj) in y.iter_mut().enumerate().take(A.n) {
            for k in A.colptr[j]..A.colptr[j + 1] {
                *yj -= A.nzval[k] * x[A.rowval[k]];
            }
        }
    } else {
        for (j, yj) in y.iter_mut().enumerate().take(A.n) {
            for k in A.colptr[j]..A.colptr[j + 1] {
                *yj += a * A.nzval[k] * x[A.rowval[k]];
            }
        }
    }
}

#[test]
fn test_gemv() {
    let A = CscMatrix::from(&[[1., 2.], [0., 3.], [-1., 0.]]);

    let mut y = vec![1., 1., 1.];
    A.gemv(&mut y, &[1., -1.], 1., 0.);
    assert_eq!(y, vec![-1., -3., -1.]);

    let mut y = vec![1., 1., 1.];
    A.gemv(&mut y, &[1., -1.], -2., 1.);
    assert_eq!(y, vec![3., 7., 3.]);

    let mut y = vec![1., 1.];
    A.t().gemv(&mut y, &[1., 1., 1.], 1., 1.);
    assert_eq!(y, vec![1., 6.]);
}

#[test]
fn test_norms_and_scaling() {
    let mut A = CscMatrix::from(&[[1., -4.], [0., 3.], [-2., 0.]]);

    let mut cn = vec![0.; 2];
    let mut rn = vec![0.; 3];
    A.col_norms(&mut cn);
    A.row_norms(&mut rn);
    assert_eq!(cn, vec![2., 4.]);
    assert_eq!(rn, vec![4., 3., 2.]);

    A.lrscale(&[1., 2., 0.5], &[2., 0.25]);
    assert_eq!(A, CscMatrix::from(&[[2., -1.], [0., 1.5], [-2., 0.]]));

    A.scale_col(1, -1.);
    assert_eq!(A, CscMatrix::from(&[[2., 1.], [0., -1.5], [-2., 0.]]));
}
