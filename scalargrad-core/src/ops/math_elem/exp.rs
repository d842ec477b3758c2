use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::sync::Arc;

// --- Backward Operation ---

/// Backward context for the exponential.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    /// The forward result e^x, reused directly since d/dx e^x = e^x.
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![self.output * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Natural exponential e^x.
pub fn exp_op(a: &Value) -> Result<Value, ScalarGradError> {
    let out = a.data().exp();
    let grad_fn = ExpBackward {
        input: a.clone(),
        output: out,
    };
    Ok(Value::from_op(out, Op::Exp, Arc::new(grad_fn)))
}

// --- Value method (calls fallible function) ---

impl Value {
    /// Natural exponential of this node.
    pub fn exp(&self) -> Value {
        exp_op(self).expect("exp_op failed")
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
