#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::ops::arithmetic::neg_op;
    use crate::value::Value;
    use crate::value_data::Op;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_neg_forward() {
        let a = Value::new(2.5);
        let out = neg_op(&a).unwrap();
        assert_abs_diff_eq!(out.data(), -2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_neg_is_a_composition() {
        // neg is mul(a, -1): a Mul node over the operand and a -1 leaf.
        let a = Value::new(2.5);
        let out = neg_op(&a).unwrap();
        assert_eq!(out.op(), Op::Mul);
        let operands = out.operands();
        assert_eq!(operands.len(), 2);
        assert_eq!(operands[0], a);
        assert_eq!(operands[1].data(), -1.0);
        assert_eq!(operands[1].op(), Op::Leaf);
    }

    #[test]
    fn test_neg_backward() {
        let a = Value::new(2.5);
        let out = neg_op(&a).unwrap();
        out.backward().unwrap();
        assert_eq!(a.grad(), -1.0);
    }

    #[test]
    fn test_neg_grad_check() {
        let func = |inputs: &[Value]| neg_op(&inputs[0]);
        check_grad(func, &[0.9], 1e-5, 1e-4).unwrap();
    }
}
