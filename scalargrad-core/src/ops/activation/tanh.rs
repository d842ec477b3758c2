use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::sync::Arc;

// --- Backward Operation ---

/// Backward context for the hyperbolic tangent.
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    /// The forward result t = tanh(x); the rule only needs 1 - t^2.
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // The returned contribution is accumulated (summed) into the operand
        // by the driver, like every other rule: an input feeding tanh on
        // several paths receives every path's contribution.
        let t = self.output;
        Ok(vec![(1.0 - t * t) * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Hyperbolic tangent activation, computed as (e^{2x} - 1) / (e^{2x} + 1).
pub fn tanh_op(a: &Value) -> Result<Value, ScalarGradError> {
    let x = a.data();
    let e2x = (2.0 * x).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    let grad_fn = TanhBackward {
        input: a.clone(),
        output: t,
    };
    Ok(Value::from_op(t, Op::Tanh, Arc::new(grad_fn)))
}

// --- Value method (calls fallible function) ---

impl Value {
    /// Hyperbolic tangent of this node.
    pub fn tanh(&self) -> Value {
        tanh_op(self).expect("tanh_op failed")
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
