use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt::Debug;

/// Interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf [`Value`] stores an implementation
/// of this trait in the output node's `grad_fn` field, bound at construction
/// time. During `backward()` it is used to propagate gradient from the
/// output node back onto its operands according to the chain rule.
///
/// The `Debug + Send + Sync` bounds exist because the `Arc<dyn BackwardOp>`
/// holding the context may be shared and inspected for debugging.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the local gradient contribution for each operand, given the
    /// gradient flowing into this operation's output (dL/dOutput).
    ///
    /// Returns one value per operand, in the order of the forward pass and
    /// of [`inputs`](Self::inputs). The caller accumulates (sums) each
    /// returned value into the corresponding operand's gradient; rules never
    /// overwrite an operand's accumulator themselves, which is what keeps
    /// shared subexpressions correct.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError>;

    /// The operand nodes that participated in the forward operation, in
    /// forward order. The order **must** match the gradients returned by
    /// [`backward`](Self::backward).
    fn inputs(&self) -> Vec<Value>;
}
