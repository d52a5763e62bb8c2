use std::fmt::Write;

use flowgen_core::types::{Connection, Node};

use crate::index::NodeIndex;
use crate::order::resolve;

/// Narrative returned for a workflow with no nodes.
pub const EMPTY_WORKFLOW: &str = "Empty workflow with no nodes.";

/// Render the workflow as a numbered step list followed by its data flow.
///
/// Steps follow [`resolve`] order. Optional fields (description, priority,
/// assignee, tags) are only rendered when present and non-empty. Edges whose
/// endpoints do not both resolve are left out of the data-flow section.
pub fn describe(nodes: &[Node], edges: &[Connection]) -> String {
    if nodes.is_empty() {
        return EMPTY_WORKFLOW.to_string();
    }

    let order = resolve(nodes, edges);
    let index = NodeIndex::new(nodes);

    let mut out = String::from("Workflow Description:\n\n");

    for (step, id) in order.iter().enumerate() {
        let Some(node) = index.get(id) else {
            continue;
        };
        write_step(&mut out, step + 1, node);
    }

    if !edges.is_empty() {
        out.push_str("Data Flow:\n");
        for edge in edges {
            if let (Some(from), Some(to)) = (index.get(&edge.from), index.get(&edge.to)) {
                let _ = writeln!(out, "- {} -> {}", from.title, to.title);
            }
        }
    }

    out
}

fn write_step(out: &mut String, step: usize, node: &Node) {
    let _ = writeln!(out, "Step {}: {}", step, node.title);

    if let Some(description) = non_empty(node.description.as_deref()) {
        let _ = writeln!(out, "   Description: {}", description);
    }

    if let Some(meta) = &node.metadata {
        if let Some(priority) = non_empty(meta.priority.as_deref()) {
            let _ = writeln!(out, "   Priority: {}", priority);
        }
        if let Some(assignee) = non_empty(meta.assignee.as_deref()) {
            let _ = writeln!(out, "   Assignee: {}", assignee);
        }
        if let Some(tags) = meta.tags.as_ref().filter(|t| !t.is_empty()) {
            let _ = writeln!(out, "   Tags: {}", tags.join(", "));
        }
    }

    out.push('\n');
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
