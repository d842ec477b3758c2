use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::sync::Arc;

// --- Backward Operation ---

/// Backward context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // d(a * b)/da = b, d(a * b)/db = a.
        // Reads the operands' current values; operands are never mutated
        // between construction and backward, so these are the forward values.
        Ok(vec![
            self.b.data() * grad_output,
            self.a.data() * grad_output,
        ])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two nodes, allocating the output node and binding its backward
/// rule.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let out = a.data() * b.data();
    let grad_fn = MulBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Value::from_op(out, Op::Mul, Arc::new(grad_fn)))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
