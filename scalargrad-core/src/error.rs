use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("unsupported exponent {exponent:?}: only finite constant exponents are differentiable")]
    UnsupportedExponent { exponent: f64 },

    #[error("type mismatch in {operation}: {value:?} is not a real number")]
    TypeMismatch { operation: String, value: f64 },

    #[error("input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("backward pass error: {0}")]
    BackwardError(String),
}
