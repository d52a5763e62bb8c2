use std::collections::HashMap;

use flowgen_core::types::Node;

/// Borrowed id → node lookup built once per call.
///
/// When ids repeat, the first occurrence wins.
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a str, (usize, &'a Node)>,
}

impl<'a> NodeIndex<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.as_str()).or_insert((pos, node));
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).map(|&(_, node)| node)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Input position of the first node carrying `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).map(|&(pos, _)| pos)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
