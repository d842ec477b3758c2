use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::sync::Arc;

// --- Backward Operation ---

/// Backward context for raising a node to a constant power.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // d(x^p)/dx = p * x^(p-1)
        let x = self.base.data();
        Ok(vec![self.exponent * x.powf(self.exponent - 1.0) * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant real exponent.
///
/// The exponent is a plain number, never a graph node: differentiating a
/// variable exponent requires a different rule that this engine does not
/// implement. A non-finite exponent fails with
/// [`ScalarGradError::UnsupportedExponent`].
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::UnsupportedExponent { exponent });
    }
    let out = base.data().powf(exponent);
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Ok(Value::from_op(out, Op::Pow, Arc::new(grad_fn)))
}

// --- Value method (calls fallible function) ---

impl Value {
    /// Raises this node to a constant power, panicking on an unsupported
    /// exponent. Use [`pow_op`] to handle the error instead.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent).expect("pow_op failed")
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
