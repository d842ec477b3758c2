use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negation, defined as `a * (-1)`.
///
/// A composition, not an independent rule: the gradient derives from the
/// multiplication rule, so the output node carries a `Mul` tag with a
/// constant `-1` operand.
pub fn neg_op(a: &Value) -> Result<Value, ScalarGradError> {
    mul_op(a, &Value::new(-1.0))
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
