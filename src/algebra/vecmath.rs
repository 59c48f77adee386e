use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(T) -> T, v: &[T]) -> &mut Self {
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn hadamard(&mut self, y: &[T]) -> &mut Self {
        assert_eq!(self.len(), y.len());
        zip(&mut *self, y).for_each(|(x, y)| *x *= *y);
        self
    }

    fn hadamard_div(&mut self, y: &[T]) -> &mut Self {
        assert_eq!(self.len(), y.len());
        zip(&mut *self, y).for_each(|(x, y)| *x /= *y);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    // Returns infinity norm
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    fn norm_inf_finite(&self) -> T {
        self.iter()
            .filter(|x| x.is_finite())
            .fold(T::zero(), |acc, x| T::max(acc, x.abs()))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
}

#[test]
fn test_norm_inf() {
    let x = vec![1., -5., 3.];
    assert_eq!(x.norm_inf(), 5.);
    let x: Vec<f64> = vec![];
    assert_eq!(x.norm_inf(), 0.);
    let x = vec![1., f64::NAN];
    assert!(x.norm_inf().is_nan());
}

#[test]
fn test_norm_inf_finite() {
    let x = vec![-2., f64::INFINITY, 1., f64::NEG_INFINITY];
    assert_eq!(x.norm_inf_finite(), 2.);
}

#[test]
fn test_hadamard_div() {
    let mut x = vec![2., 8., -1.];
    x.hadamard_div(&[2., 4., 0.5]);
    assert_eq!(x, vec![1., 2., -2.]);
    x.hadamard(&[2., 4., 0.5]);
    assert_eq!(x, vec![2., 8., -1.]);
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 1.];
    y.axpby(2., &[3., -1.], -1.);
    assert_eq!(y, vec![5., -3.]);
}
