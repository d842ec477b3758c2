#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::error::ScalarGradError;
    use crate::ops::arithmetic::pow_op;
    use crate::value::Value;
    use crate::value_data::Op;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pow_forward() {
        let a = Value::new(2.0);
        let out = pow_op(&a, 3.0).unwrap();
        assert_abs_diff_eq!(out.data(), 8.0, epsilon = 1e-9);
        assert_eq!(out.op(), Op::Pow);
        assert_eq!(out.operands(), vec![a]);
    }

    #[test]
    fn test_pow_backward_base_gradient() {
        // d(x^3)/dx at x=2 is 3 * 2^2 = 12
        let a = Value::new(2.0);
        let out = pow_op(&a, 3.0).unwrap();
        out.backward().unwrap();
        assert_abs_diff_eq!(a.grad(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pow_backward_scales_upstream_gradient() {
        // The base's contribution is 12 times the upstream gradient.
        let a = Value::new(2.0);
        let cubed = pow_op(&a, 3.0).unwrap();
        let out = &cubed * 5.0;
        out.backward().unwrap();
        assert_abs_diff_eq!(cubed.grad(), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.grad(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pow_negative_exponent() {
        let a = Value::new(4.0);
        let out = pow_op(&a, -1.0).unwrap();
        assert_abs_diff_eq!(out.data(), 0.25, epsilon = 1e-9);
        out.backward().unwrap();
        // d(x^-1)/dx = -x^-2
        assert_abs_diff_eq!(a.grad(), -1.0 / 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pow_rejects_non_finite_exponent() {
        let a = Value::new(2.0);
        for exponent in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = pow_op(&a, exponent).unwrap_err();
            assert!(matches!(
                err,
                ScalarGradError::UnsupportedExponent { .. }
            ));
        }
    }

    #[test]
    fn test_pow_grad_check() {
        for exponent in [2.0, 3.0, -1.0, 0.5] {
            let func = |inputs: &[Value]| pow_op(&inputs[0], exponent);
            check_grad(func, &[1.7], 1e-5, 1e-4).unwrap();
        }
    }
}
