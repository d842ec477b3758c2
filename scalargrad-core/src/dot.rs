//! Graphviz rendering of a computation graph.
//!
//! Walks the operand relation from a root node and emits a dot digraph:
//! one record per node (operation symbol, data, grad), one edge per operand
//! relation, pointing from operand to consumer. Node identity is the payload
//! address, the same identity the backward pass keys on. Only the public
//! enumeration surface (`operands()`, `op()`, `data()`, `grad()`) is used.

use crate::value::Value;
use crate::value_data::Op;
use std::collections::HashMap;
use std::io::{self, Write};

/// Write a graphviz dot file for the graph reachable from `root` to the
/// given writer.
pub fn write_dot(root: &Value, writer: &mut impl Write) -> io::Result<()> {
    let mut nodes: HashMap<usize, Value> = HashMap::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    collect(root, &mut nodes, &mut edges);

    writeln!(writer, "digraph G {{")?;
    writeln!(writer, "rankdir=\"LR\";")?;
    // Sorted for reproducible output across runs of the same process.
    let mut ids: Vec<usize> = nodes.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        let node = &nodes[&id];
        let op = node.op();
        let label = if op == Op::Leaf {
            format!("data {:.4} | grad {:.4}", node.data(), node.grad())
        } else {
            format!(
                "{} | data {:.4} | grad {:.4}",
                op.symbol(),
                node.data(),
                node.grad()
            )
        };
        writeln!(writer, "n{} [shape=record, label=\"{}\"];", id, label)?;
    }
    for (operand, consumer) in &edges {
        writeln!(writer, "n{} -> n{};", operand, consumer)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Renders the graph reachable from `root` as a dot string.
pub fn dot_string(root: &Value) -> String {
    let mut buffer = Vec::new();
    write_dot(root, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("dot output is ASCII")
}

fn collect(node: &Value, nodes: &mut HashMap<usize, Value>, edges: &mut Vec<(usize, usize)>) {
    let id = node.node_id() as usize;
    if nodes.contains_key(&id) {
        return;
    }
    nodes.insert(id, node.clone());
    for operand in node.operands() {
        edges.push((operand.node_id() as usize, id));
        collect(&operand, nodes, edges);
    }
}
