use super::{count_digits, Node, NodeId};

use std::io::{self, Write};

/// A compiled pattern: an arena of nodes and the entry point into it.
///
/// Immutable once built, so a single graph can back any number of searches.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    head: NodeId,
    groups: usize,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![],
            head: NodeId::from_index(0),
            groups: 0,
        }
    }

    #[inline]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of capturing groups written in the pattern.
    pub fn groups(&self) -> usize {
        self.groups
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn link(&mut self, from: NodeId, to: NodeId) {
        let next = &mut self.nodes[from.index()].next;
        if !next.contains(&to) {
            next.push(to);
        }
    }

    pub(crate) fn set_head(&mut self, head: NodeId) {
        self.head = head;
    }

    pub(crate) fn set_groups(&mut self, groups: usize) {
        self.groups = groups;
    }

    /// Writes one line per node: its id, test, flags and outgoing edges.
    /// The head is marked with `>`.
    pub fn dump<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let width = count_digits(self.nodes.len().saturating_sub(1) as u32);

        for (i, node) in self.nodes.iter().enumerate() {
            let id = NodeId::from_index(i);
            let marker = if id == self.head { '>' } else { ' ' };

            let flags = match (node.capturing, node.sink) {
                (true, true) => " (capture sink)",
                (true, false) => " (capture head)",
                (false, true) => " (sink)",
                (false, false) => "",
            };

            let edges = if node.is_terminal() {
                "match".to_string()
            } else {
                node.next
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            writeln!(
                w,
                "{marker}{i:>width$}: {test}{flags} -> {edges}",
                test = node.test
            )?;
        }
        Ok(())
    }
}
