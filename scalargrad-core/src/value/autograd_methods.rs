use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Performs the backward pass with this node as the root.
    ///
    /// Computes d(self)/d(n) for every node `n` reachable from `self` via
    /// the operand relation, accumulating into each node's `grad`:
    ///
    /// 1. topologically orders the reachable graph (operands before
    ///    consumers, each node once — identity-keyed, so shared
    ///    subexpressions appear a single time);
    /// 2. seeds `self.grad = 1.0` (d(root)/d(root));
    /// 3. applies each node's backward rule in reverse order, so a node's
    ///    gradient is fully summed over all of its consumers before it
    ///    propagates to its own operands.
    ///
    /// Gradients are **not** reset first: reusing nodes across passes
    /// requires calling [`zero_grad`](Value::zero_grad) on them, which keeps
    /// deliberate gradient accumulation possible.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let order = topological_sort(self);
        log::debug!("backward pass over {} nodes", order.len());
        if order.len() == 1 && self.read_data().grad_fn.is_none() {
            log::debug!("backward() called on a leaf value; only the seed gradient is set");
        }

        self.write_data().grad = 1.0;

        for node in order.iter().rev() {
            let (grad_output, grad_fn) = {
                let guard = node.read_data();
                (guard.grad, guard.grad_fn.clone())
            };
            // Guard dropped before the rule runs: rules read their operands'
            // payloads, and one of them can be this node (e.g. x * x).
            if let Some(rule) = grad_fn {
                let operand_grads = rule.backward(grad_output)?;
                let operands = rule.inputs();
                if operand_grads.len() != operands.len() {
                    return Err(ScalarGradError::BackwardError(format!(
                        "rule returned {} gradients for {} operands (rule: {:?})",
                        operand_grads.len(),
                        operands.len(),
                        rule
                    )));
                }
                for (operand, grad) in operands.iter().zip(operand_grads) {
                    operand.acc_grad(grad);
                }
            }
        }

        Ok(())
    }

    /// Adds `grad` into this node's gradient accumulator.
    ///
    /// Always a sum, never an overwrite: each consumer edge contributes
    /// exactly once per backward pass, and contributions from distinct paths
    /// to a shared node must add up.
    pub(crate) fn acc_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Resets this node's gradient to 0.0.
    ///
    /// The engine never does this automatically; training loops call it on
    /// every parameter before each new backward pass.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
