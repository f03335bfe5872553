use crate::cursor::Cursor;
use crate::Result;

use rustc_hash::FxHashSet;

mod charset;
mod error;
mod graph;
mod node;
mod scope;

#[cfg(test)]
mod tests;

pub use self::charset::CharSet;
pub use self::error::{Error, ErrorKind};
pub use self::graph::Graph;
pub use self::node::{Node, NodeId, Test};

use self::scope::{Scope, Scopes, Unit};

/// Builds a [`Graph`] from a pattern, one token at a time.
///
/// Nodes are appended to `tail`. Groups push a [`Scope`] whose sink is only
/// linked in once the group closes; `|` sends the current branch to that sink
/// and restarts from the group head.
pub struct Compiler {
    graph: Graph,
    scopes: Scopes,
    tail: NodeId,
    last: Option<Unit>,
    groups: usize,
}

impl Compiler {
    pub fn compile(pattern: &str) -> Result<Graph> {
        let mut cursor = Cursor::new(pattern);
        if cursor.at_end() {
            return Err(ErrorKind::EmptyPattern.into());
        }

        let mut compiler = Compiler::new();
        while let Some(ch) = cursor.advance() {
            let pos = cursor.pos() - 1;
            match ch {
                '(' => compiler.open_group(),
                ')' => compiler.close_group(pos)?,
                '|' => compiler.alternate(),
                '+' => compiler.one_or_more(pos)?,
                '?' => compiler.zero_or_one(pos)?,
                '.' => compiler.append(Test::Any),
                '^' => compiler.append(Test::Bol),
                '$' => compiler.append(Test::Eol),
                '[' => {
                    let set = charset(&mut cursor, pos)?;
                    compiler.append(Test::Set(set))
                }
                '\\' => {
                    let test = escape(&mut cursor, pos)?;
                    compiler.append(test)
                }
                ch => compiler.append(Test::Char(ch)),
            }
        }

        let graph = compiler.finish(cursor.pos())?;
        log::debug!(
            "compiled {:?} into {} nodes with {} groups",
            pattern,
            graph.len(),
            graph.groups()
        );
        Ok(graph)
    }

    fn new() -> Self {
        let mut graph = Graph::new();
        let head = graph.push(Node::boundary(false, false));
        let sink = graph.push(Node::boundary(true, false));
        graph.set_head(head);

        Self {
            graph,
            // the top level hangs off nothing, so it points at itself
            scopes: Scopes::new(Scope {
                head,
                sink,
                before: head,
            }),
            tail: head,
            last: None,
            groups: 0,
        }
    }

    /// Links `node` after the current tail and makes it the new tail,
    /// returning the previous tail.
    fn attach(&mut self, node: NodeId) -> NodeId {
        let before = self.tail;
        self.graph.link(before, node);
        self.tail = node;
        before
    }

    fn append(&mut self, test: Test) {
        let node = self.graph.push(Node::new(test));
        let before = self.attach(node);
        self.last = Some(Unit::single(before, node));
    }

    fn open_group(&mut self) {
        let head = self.graph.push(Node::boundary(false, true));
        let sink = self.graph.push(Node::boundary(true, true));
        let before = self.attach(head);

        self.scopes.push(Scope { head, sink, before });
        self.groups += 1;
        self.last = None;
    }

    fn close_group(&mut self, pos: usize) -> Result<()> {
        let scope = self
            .scopes
            .pop()
            .ok_or_else(|| Error::new(pos, ErrorKind::UnbalancedGroup))?;

        self.graph.link(self.tail, scope.sink);
        self.tail = scope.sink;
        self.last = Some(Unit::group(&scope));
        Ok(())
    }

    fn alternate(&mut self) {
        let scope = *self.scopes.current();
        self.graph.link(self.tail, scope.sink);
        self.tail = scope.head;
        self.last = None;
    }

    fn one_or_more(&mut self, pos: usize) -> Result<()> {
        let unit = self
            .last
            .ok_or_else(|| Error::new(pos, ErrorKind::NothingToRepeat))?;

        if self.nullable(&unit) {
            return Err(Error::new(pos, ErrorKind::EmptyRepetition));
        }

        // a group loops from its sink back to its head
        self.graph.link(unit.last, unit.first);
        Ok(())
    }

    fn zero_or_one(&mut self, pos: usize) -> Result<()> {
        let unit = self
            .last
            .ok_or_else(|| Error::new(pos, ErrorKind::NothingToRepeat))?;

        let bypass = self.graph.push(Node::new(Test::Epsilon));
        self.attach(bypass);
        self.graph.link(unit.before, bypass);

        self.last = Some(Unit {
            last: bypass,
            optional: true,
            ..unit
        });
        Ok(())
    }

    /// Whether `unit` can be crossed without consuming input, which would
    /// turn a `+` loop into one that never advances.
    ///
    /// A lone backreference is let through: an empty capture makes its loop
    /// revisit an identical search state, which the machine already skips.
    fn nullable(&self, unit: &Unit) -> bool {
        if unit.optional {
            return true;
        }
        if unit.first == unit.last {
            return self.graph.node(unit.first).test.is_zero_width();
        }

        let mut seen = FxHashSet::default();
        let mut stack = vec![unit.first];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let node = self.graph.node(id);
            if !node.test.may_be_empty() {
                continue;
            }
            if id == unit.last {
                return true;
            }
            stack.extend(node.next.iter().copied());
        }
        false
    }

    fn finish(mut self, pos: usize) -> Result<Graph> {
        if self.scopes.depth() > 0 {
            return Err(Error::new(pos, ErrorKind::UnbalancedGroup));
        }

        let sink = self.scopes.top().sink;
        self.graph.link(self.tail, sink);
        self.graph.set_groups(self.groups);
        Ok(self.graph)
    }
}

fn escape(cursor: &mut Cursor, pos: usize) -> Result<Test> {
    let test = match cursor.advance() {
        Some('d') => Test::Digit,
        Some('w') => Test::Word,
        Some('\\') => Test::Char('\\'),
        Some(ch @ '1'..='9') => Test::Backref(ch as usize - '0' as usize),
        _ => return Err(Error::new(pos, ErrorKind::UnsupportedEscape)),
    };
    Ok(test)
}

fn charset(cursor: &mut Cursor, pos: usize) -> Result<CharSet> {
    let mut set = CharSet::new();
    if cursor.match_if('^') {
        set.negate();
    }

    loop {
        if cursor.match_if(']') {
            return Ok(set);
        }
        match cursor.advance() {
            Some(ch) => set.add(ch),
            None => return Err(Error::new(pos, ErrorKind::UnterminatedCharacterClass)),
        }
    }
}

#[inline]
pub(crate) fn count_digits(n: u32) -> usize {
    if n == 0 {
        return 1;
    }

    let (mut n, mut x) = (n, 0);
    while n > 0 {
        n /= 10;
        x += 1;
    }
    x
}
