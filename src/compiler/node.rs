use super::CharSet;
use crate::cursor::Cursor;
use crate::machine::Captures;

use smallvec::SmallVec;
use std::fmt;

/// Index of a node in the graph arena.
///
/// Edges are stored as ids rather than references, which is what lets a
/// node point back at itself or at an earlier group head.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The condition a node checks at a subject offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Test {
    /// Always succeeds without consuming; used for group boundaries and `?` bypasses.
    Epsilon,
    Char(char),
    /// Any code point except `\n`.
    Any,
    Digit,
    Word,
    Set(CharSet),
    Bol,
    Eol,
    /// 1-based capture occurrence.
    Backref(usize),
}

impl Test {
    /// Evaluates the test at `at`, returning the number of code points
    /// consumed on success.
    pub(crate) fn eval(&self, subject: &Cursor, at: usize, captures: &Captures) -> Option<usize> {
        let current = subject.seek(at);
        match self {
            Test::Epsilon => Some(0),
            Test::Bol => (at == 0).then_some(0),
            Test::Eol => matches!(current, None | Some('\n')).then_some(0),
            Test::Char(ch) => (current == Some(*ch)).then_some(1),
            Test::Any => current.filter(|&ch| ch != '\n').map(|_| 1),
            Test::Digit => current.filter(char::is_ascii_digit).map(|_| 1),
            Test::Word => current.filter(|&ch| is_word(ch)).map(|_| 1),
            Test::Set(set) => current.filter(|&ch| set.has(ch)).map(|_| 1),
            Test::Backref(group) => {
                let span = captures.closed(*group)?;
                let len = span.end - span.start;
                (0..len)
                    .all(|i| subject.seek(at + i) == subject.seek(span.start + i))
                    .then_some(len)
            }
        }
    }

    /// Whether the test never consumes input.
    pub fn is_zero_width(&self) -> bool {
        matches!(self, Test::Epsilon | Test::Bol | Test::Eol)
    }

    /// Whether the test can succeed without consuming input. A backreference
    /// consumes nothing when the text it refers to is empty.
    pub fn may_be_empty(&self) -> bool {
        self.is_zero_width() || matches!(self, Test::Backref(..))
    }
}

fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Test::Epsilon => write!(f, "epsilon"),
            Test::Char(ch) => write!(f, "char {:?}", ch),
            Test::Any => write!(f, "any"),
            Test::Digit => write!(f, "digit"),
            Test::Word => write!(f, "word"),
            Test::Set(set) => write!(f, "set {}", set),
            Test::Bol => write!(f, "bol"),
            Test::Eol => write!(f, "eol"),
            Test::Backref(n) => write!(f, "backref #{}", n),
        }
    }
}

/// One compiled step of the graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub test: Test,
    /// Outgoing edges. A node without any is an accepting terminal.
    pub next: SmallVec<[NodeId; 2]>,
    /// Closes a group scope.
    pub sink: bool,
    /// One half of a capturing group's head/sink pair.
    pub capturing: bool,
}

impl Node {
    pub fn new(test: Test) -> Self {
        Self {
            test,
            next: SmallVec::new(),
            sink: false,
            capturing: false,
        }
    }

    pub fn boundary(sink: bool, capturing: bool) -> Self {
        Self {
            sink,
            capturing,
            ..Self::new(Test::Epsilon)
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.next.is_empty()
    }
}
