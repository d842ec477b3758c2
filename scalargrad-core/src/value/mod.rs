use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value_data::{Op, ValueData};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod traits;

/// One scalar node in the computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1. **Shared ownership:** a node may be the operand of arbitrarily many
///    consumers (diamond dependencies); every consumer holds a cheap clone
///    of the same handle, and the graph lives as long as its longest holder.
/// 2. **Interior mutability:** the `grad` accumulator is written through
///    immutable handles during the backward pass.
///
/// Equality and hashing go by node *identity* (the payload allocation), not
/// by value: two distinct nodes holding equal scalars are distinct graph
/// nodes.
pub struct Value {
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a leaf node from a raw scalar.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::leaf(data))),
        }
    }

    /// Checked leaf construction: rejects input that is not a real number.
    pub fn constant(data: f64) -> Result<Self, ScalarGradError> {
        if !data.is_finite() {
            return Err(ScalarGradError::TypeMismatch {
                operation: "constant".to_string(),
                value: data,
            });
        }
        Ok(Value::new(data))
    }

    /// Creates a node produced by an operation, with its backward rule bound.
    pub(crate) fn from_op(
        data: f64,
        op: Op,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
    ) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData {
                data,
                grad: 0.0,
                op,
                grad_fn: Some(grad_fn),
            })),
        }
    }

    /// Returns the forward-evaluated scalar.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the stored scalar.
    ///
    /// Intended for leaf/parameter nodes (gradient-descent updates). Setting
    /// the data of an interior node does not re-run the forward computation.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient. 0.0 until a backward pass has run.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the tag of the operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns the direct operands of this node in forward order.
    ///
    /// Empty for leaves. Consumed by graph-rendering collaborators; the
    /// numeric core itself traverses the same edges during backward.
    pub fn operands(&self) -> Vec<Value> {
        match self.read_data().grad_fn.as_ref() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    /// Acquires a read lock on the node's payload.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's payload.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Stable identity of this node: the address of its payload allocation.
    pub(crate) fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data), // clone the handle, not the payload
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.data) as usize).hash(state);
    }
}
