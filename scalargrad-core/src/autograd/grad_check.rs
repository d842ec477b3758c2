use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient mismatch for input {input_index}: analytical {analytical:?} != numerical {numerical:?}, difference {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("forward evaluation failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("backward pass failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("numerical gradient is not finite for input {input_index}: f(x+h)={loss_plus:?}, f(x-h)={loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is not finite for input {input_index}: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one fresh leaf node per entry of `inputs` and returns the
/// scalar output of the expression under test. The analytic gradient of each
/// input (from one backward pass) must match
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` within `tolerance`, compared both
/// absolutely and relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- Analytic gradients: one forward + backward pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    // Re-evaluates the expression with input `i` replaced by `x`.
    let eval_at = |i: usize, x: f64| -> Result<f64, GradCheckError> {
        let mut perturbed: Vec<Value> = inputs.iter().map(|&v| Value::new(v)).collect();
        perturbed[i] = Value::new(x);
        let out = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.data())
    };

    for (i, &x) in inputs.iter().enumerate() {
        let analytical = leaves[i].grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical,
            });
        }

        let loss_plus = eval_at(i, x + epsilon)?;
        let loss_minus = eval_at(i, x - epsilon)?;
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    const EPSILON: f64 = 1e-5;
    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_check_grad_accepts_correct_gradients() {
        // f(x, y) = x * y + x
        let func = |inputs: &[Value]| {
            let xy = mul_op(&inputs[0], &inputs[1])?;
            add_op(&xy, &inputs[0])
        };
        check_grad(func, &[3.0, -2.0], EPSILON, TOLERANCE).unwrap();
    }

    #[test]
    fn test_check_grad_rejects_wrong_gradients() {
        // Analytic gradient of x*x is 2x, but mul with a detached copy only
        // credits one of the two paths, so the check must fail.
        let func = |inputs: &[Value]| {
            let detached = Value::new(inputs[0].data());
            mul_op(&inputs[0], &detached)
        };
        let err = check_grad(func, &[3.0], EPSILON, TOLERANCE).unwrap_err();
        assert!(matches!(err, GradCheckError::GradientMismatch { .. }));
    }
}
