use crate::autograd::BackwardOp;
use std::sync::Arc;

/// Tag identifying the operation that produced a node.
///
/// Purely informational: the backward rule lives in `grad_fn`, not here.
/// Consumed by the dot exporter and available to callers via [`crate::Value::op`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Constant or input parameter; no operands, no-op backward rule.
    Leaf,
    Add,
    Mul,
    Pow,
    Tanh,
    Exp,
}

impl Op {
    /// Short label used when rendering the graph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "^",
            Op::Tanh => "tanh",
            Op::Exp => "exp",
        }
    }
}

/// The payload behind a [`crate::Value`] handle.
///
/// Never mutated after construction except for `grad` (accumulated during
/// the backward pass, reset by `zero_grad`) and `data` on leaves (parameter
/// updates by a training driver).
pub struct ValueData {
    /// Forward-evaluated scalar.
    pub data: f64,
    /// Accumulator for d(output)/d(this node). Starts at 0.0; the engine
    /// never resets it on its own.
    pub grad: f64,
    /// Which local-gradient rule applies.
    pub op: Op,
    /// Backward rule bound at construction. `None` for leaves, which is the
    /// no-op default. Holds strong handles to the operands in forward order,
    /// so the rule and the operand relation share one source of truth.
    pub grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            grad_fn: None,
        }
    }
}

impl std::fmt::Debug for ValueData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // grad_fn is skipped: printing it would walk the whole graph.
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .finish()
    }
}
