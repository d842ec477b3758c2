use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Division, defined as `a * b^(-1)`; the gradient derives from the
/// multiplication and power rules.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let b_inv = pow_op(b, -1.0)?;
    mul_op(a, &b_inv)
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
