use crate::compiler::{Compiler, Graph};
use crate::cursor::Cursor;
use crate::machine::{Found, Machine};
use crate::{Error, Result};

mod matches;
pub use self::matches::{Captures, Match};

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// A compiled pattern.
///
/// Compiling is the only step that can fail; after that the same `Regex`
/// can be searched any number of times, and from several threads at once.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    graph: Graph,
}

impl Regex {
    pub fn compile(pattern: &str) -> Result<Regex> {
        let graph = Compiler::compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            graph,
        })
    }

    /// Whether the pattern matches anywhere in `subject`.
    pub fn is_match(&self, subject: &str) -> bool {
        self.find(subject).is_some()
    }

    /// Searches `subject` and returns the spans of the first accepted branch.
    pub fn captures(&self, subject: &str) -> Option<Captures> {
        let Found {
            start,
            end,
            captures,
        } = self.find(subject)?;

        let mut matches = Vec::with_capacity(captures.len() + 1);
        matches.push(Some(Match { start, end }));
        matches.extend(captures.spans().map(|span| {
            span.map(|span| Match {
                start: span.start,
                end: span.end,
            })
        }));

        Some(Captures { matches })
    }

    /// Number of capturing groups in the pattern.
    pub fn group_count(&self) -> usize {
        self.graph.groups()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Writes the compiled graph, one node per line.
    pub fn dump<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.graph.dump(w)
    }

    fn find(&self, subject: &str) -> Option<Found> {
        let subject = Cursor::new(subject);
        Machine::new(&self.graph).find(&subject)
    }
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Regex::compile(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
