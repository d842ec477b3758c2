use crate::error::ScalarGradError;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Subtraction, defined as `a + (-b)`; the gradient derives from the
/// addition and multiplication rules.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
