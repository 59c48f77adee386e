use super::{AsFloatT, FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;
    fn binary_exponent(&self) -> i32 {
        if *self == T::zero() || !self.is_finite() {
            return 0;
        }
        // value = mantissa * 2^exponent with an integer mantissa, so
        // the frexp exponent is shifted by the mantissa's bit length
        let (mantissa, exponent, _sign) = self.integer_decode();
        let bits = (u64::BITS - mantissa.leading_zeros()) as i32;
        exponent as i32 + bits
    }

    fn exp2i(k: i32) -> T {
        let two: T = (2.0).as_T();
        two.powi(k)
    }
}

#[test]
fn test_binary_exponent() {
    assert_eq!(1.0_f64.binary_exponent(), 1);
    assert_eq!(0.5_f64.binary_exponent(), 0);
    assert_eq!(0.499_f64.binary_exponent(), -1);
    assert_eq!(7.99_f64.binary_exponent(), 3);
    assert_eq!(8.0_f64.binary_exponent(), 4);
    assert_eq!((-3.0_f64).binary_exponent(), 2);
    assert_eq!(0.0_f64.binary_exponent(), 0);
    assert_eq!(1e-310_f64.binary_exponent(), -1029);
    assert_eq!(1.0_f32.binary_exponent(), 1);
    assert_eq!(1024.0_f32.binary_exponent(), 11);
}

#[test]
fn test_exp2i() {
    assert_eq!(f64::exp2i(0), 1.0);
    assert_eq!(f64::exp2i(3), 8.0);
    assert_eq!(f64::exp2i(-2), 0.25);
    assert_eq!(f32::exp2i(-1), 0.5);
}
