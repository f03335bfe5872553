use std::ops::{Bound, Index, Range, RangeBounds};
use std::slice;

/// The groups of a successful search.
///
/// Index 0 is the overall match. The rest are capture group occurrences in
/// the order the winning branch opened them; an occurrence that was opened
/// but never closed is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Captures {
    pub(crate) matches: Vec<Option<Match>>,
}

impl Captures {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index)?.as_ref()
    }

    /// The overall match.
    pub fn whole(&self) -> &Match {
        &self[0]
    }

    pub fn iter(&self) -> slice::Iter<'_, Option<Match>> {
        self.matches.iter()
    }
}

impl Index<usize> for Captures {
    type Output = Match;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(m) => m,
            None => panic!("group {} did not participate in the match", index),
        }
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = &'a Option<Match>;
    type IntoIter = slice::Iter<'a, Option<Match>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A span of the subject, in code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Copies the matched code points out of `subject`.
    pub fn extract(&self, subject: &str) -> String {
        subject.chars().skip(self.start).take(self.len()).collect()
    }
}

impl RangeBounds<usize> for Match {
    fn start_bound(&self) -> Bound<&usize> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&usize> {
        Bound::Excluded(&self.end)
    }
}
