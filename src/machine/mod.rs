use crate::compiler::Graph;
use crate::cursor::Cursor;

use rustc_hash::FxHashSet;

mod captures;
mod thread;


pub use self::captures::Captures;
use self::thread::Thread;

/// The branch that reached an accepting node.
#[derive(Debug)]
pub struct Found {
    pub start: usize,
    pub end: usize,
    pub captures: Captures,
}

/// Runs a compiled [`Graph`] against subjects.
#[derive(Debug)]
pub struct Machine<'a> {
    graph: &'a Graph,
}

impl<'a> Machine<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Tries every start offset from the left, including the one past the
    /// last code point, and returns the first branch that is accepted.
    pub fn find(&self, subject: &Cursor) -> Option<Found> {
        for start in 0..=subject.len() {
            if let Some(found) = self.find_at(subject, start) {
                log::debug!("matched [{}, {}) of {}", found.start, found.end, subject.len());
                return Some(found);
            }
        }

        log::debug!("no match in {} code points", subject.len());
        None
    }

    /// Explores every branch starting at `start` in lockstep.
    fn find_at(&self, subject: &Cursor, start: usize) -> Option<Found> {
        let mut current = vec![Thread::new(start, self.graph.head())];
        let mut next = vec![];

        // identical states have identical futures
        let mut visited = FxHashSet::default();
        visited.insert(current[0].clone());

        while !current.is_empty() {
            log::trace!("start {}: {} threads", start, current.len());

            for thread in current.drain(..) {
                let node = self.graph.node(thread.node);
                let Some(consumed) = node.test.eval(subject, thread.at, &thread.captures) else {
                    continue;
                };

                if node.is_terminal() {
                    return Some(Found {
                        start,
                        end: thread.at + consumed,
                        captures: thread.captures,
                    });
                }

                let mut captures = thread.captures;
                if node.capturing {
                    if node.sink {
                        captures.close(thread.at);
                    } else {
                        captures.open(thread.at);
                    }
                }

                let at = thread.at + consumed;
                for &id in &node.next {
                    let fork = Thread {
                        at,
                        node: id,
                        captures: captures.clone(),
                    };
                    if visited.insert(fork.clone()) {
                        next.push(fork);
                    }
                }
            }

            std::mem::swap(&mut current, &mut next);
        }

        None
    }
}
