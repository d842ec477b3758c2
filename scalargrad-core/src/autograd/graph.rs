use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Stable identity of a graph node: the address of its payload allocation.
/// Distinct nodes with equal scalar values are distinct keys.
pub(crate) type NodeId = *const RwLock<ValueData>;

/// Builds a post-order topological sort of the graph reachable from `root`
/// via the operand relation: every node is appended only after all of its
/// operands, each node visited at most once.
///
/// `backward()` consumes this in reverse, which guarantees a node's gradient
/// is fully accumulated (all of its consumers already ran their rules)
/// before its own rule fires. Acyclicity is an invariant maintained by
/// construction (every operation allocates a fresh output node), so the
/// recursion terminates; it is not re-checked here.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }
    for operand in node.operands() {
        build_topo(&operand, visited, sorted);
    }
    sorted.push(node.clone());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node() {
        let a = Value::new(1.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert_eq!(order[0], a);
    }

    #[test]
    fn test_operands_before_consumers() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a + &b;
        let d = &c * &a; // a is shared
        let order = topological_sort(&d);

        // a, b, c, d each appear exactly once
        assert_eq!(order.len(), 4);
        let pos = |v: &Value| {
            order
                .iter()
                .position(|n| n == v)
                .expect("node missing from order")
        };
        assert!(pos(&a) < pos(&c));
        assert!(pos(&b) < pos(&c));
        assert!(pos(&c) < pos(&d));
        assert!(pos(&a) < pos(&d));
        assert_eq!(pos(&d), 3); // root is last in post-order
    }

    #[test]
    fn test_diamond_visited_once() {
        let a = Value::new(1.5);
        let p = &a * &a;
        let q = &a + &a;
        let r = &p * &q;
        let order = topological_sort(&r);
        // a, p, q, r: the shared leaf appears once
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().filter(|n| **n == a).count(), 1);
    }
}
