use super::NodeId;

/// A group being built: its head and the sink every branch converges on.
#[derive(Debug, Clone, Copy)]
pub struct Scope {
    pub head: NodeId,
    pub sink: NodeId,
    /// The node the head was attached to.
    pub before: NodeId,
}

/// The stack of groups open at the current point of the pattern.
///
/// The implicit top-level group sits underneath every explicit one and can
/// never be closed by a `)`.
#[derive(Debug)]
pub struct Scopes {
    top: Scope,
    open: Vec<Scope>,
}

impl Scopes {
    pub fn new(top: Scope) -> Self {
        Self { top, open: vec![] }
    }

    pub fn push(&mut self, scope: Scope) {
        self.open.push(scope)
    }

    /// Pops the innermost explicit group, or `None` if only the top level remains.
    pub fn pop(&mut self) -> Option<Scope> {
        self.open.pop()
    }

    pub fn current(&self) -> &Scope {
        self.open.last().unwrap_or(&self.top)
    }

    pub fn top(&self) -> &Scope {
        &self.top
    }

    /// Number of explicit groups still open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}

/// The span of nodes a following `+` or `?` applies to.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    /// The node the unit hangs off; a `?` bypass starts here.
    pub before: NodeId,
    pub first: NodeId,
    pub last: NodeId,
    /// Already wrapped in a `?`, so it can be skipped entirely.
    pub optional: bool,
}

impl Unit {
    pub fn single(before: NodeId, node: NodeId) -> Self {
        Self {
            before,
            first: node,
            last: node,
            optional: false,
        }
    }

    pub fn group(scope: &Scope) -> Self {
        Self {
            before: scope.before,
            first: scope.head,
            last: scope.sink,
            optional: false,
        }
    }
}
