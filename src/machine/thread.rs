use super::Captures;
use crate::compiler::NodeId;

/// One branch of the search: where it is in the subject, which node it is
/// about to test, and what it has captured on the way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thread {
    pub at: usize,
    pub node: NodeId,
    pub captures: Captures,
}

impl Thread {
    pub fn new(at: usize, node: NodeId) -> Self {
        Self {
            at,
            node,
            captures: Captures::default(),
        }
    }
}
