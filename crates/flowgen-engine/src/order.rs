use std::collections::{HashMap, HashSet, VecDeque};

use flowgen_core::types::{Connection, Node};
use tracing::debug;

use crate::index::NodeIndex;

/// Compute a deterministic execution order over `nodes`.
///
/// Kahn's algorithm seeded with zero in-degree nodes in input order.
/// Successors are released in the order their edges were given. Nodes
/// left over once the queue drains (cycle members and anything only
/// reachable through a cycle) are appended in input order.
///
/// Edges with an endpoint outside `nodes` are ignored. The result always
/// contains every distinct node id exactly once.
pub fn resolve(nodes: &[Node], edges: &[Connection]) -> Vec<String> {
    let index = NodeIndex::new(nodes);

    // Distinct ids in first-appearance order.
    let ids: Vec<&str> = nodes
        .iter()
        .enumerate()
        .filter(|(pos, node)| index.position(&node.id) == Some(*pos))
        .map(|(_, node)| node.id.as_str())
        .collect();

    let mut successors: HashMap<&str, Vec<&str>> =
        ids.iter().map(|&id| (id, Vec::new())).collect();
    let mut in_degree: HashMap<&str, usize> = ids.iter().map(|&id| (id, 0)).collect();

    for edge in edges {
        if !index.contains(&edge.from) || !index.contains(&edge.to) {
            continue;
        }
        if let Some(next) = successors.get_mut(edge.from.as_str()) {
            next.push(edge.to.as_str());
        }
        if let Some(degree) = in_degree.get_mut(edge.to.as_str()) {
            *degree += 1;
        }
    }

    let mut queue: VecDeque<&str> = ids
        .iter()
        .copied()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut placed: HashSet<&str> = HashSet::with_capacity(ids.len());
    let mut order = Vec::with_capacity(ids.len());

    while let Some(id) = queue.pop_front() {
        placed.insert(id);
        order.push(id.to_string());

        for &next in successors.get(id).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(next) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    if order.len() < ids.len() {
        debug!(
            residual = ids.len() - order.len(),
            "Cycle detected, appending remaining nodes in input order"
        );
        for &id in &ids {
            if !placed.contains(id) {
                order.push(id.to_string());
            }
        }
    }

    order
}
