use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::sync::Arc;

// --- Backward Operation ---

/// Backward context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // d(a + b)/da = 1, d(a + b)/db = 1
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two nodes, allocating the output node and binding its backward rule.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let out = a.data() + b.data();
    let grad_fn = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Value::from_op(out, Op::Add, Arc::new(grad_fn)))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
