use smallvec::SmallVec;

/// A closed capture: code-point offsets `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Occurrence {
    start: usize,
    end: Option<usize>,
}

/// Group occurrences seen along a single search branch.
///
/// Occurrences are numbered in the order they were opened on this branch.
/// Which one a sink closes is decided by the `open` stack rather than by
/// the group's position in the pattern, since alternation and repetition
/// make branches enter and skip groups differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Captures {
    spans: SmallVec<[Occurrence; 4]>,
    open: SmallVec<[usize; 4]>,
}

impl Captures {
    pub fn open(&mut self, at: usize) {
        self.open.push(self.spans.len());
        self.spans.push(Occurrence {
            start: at,
            end: None,
        });
    }

    pub fn close(&mut self, at: usize) {
        if let Some(index) = self.open.pop() {
            self.spans[index].end = Some(at);
        }
    }

    /// The closed span of the 1-based occurrence `group`.
    pub fn closed(&self, group: usize) -> Option<Span> {
        let occurrence = self.spans.get(group.checked_sub(1)?)?;
        Some(Span {
            start: occurrence.start,
            end: occurrence.end?,
        })
    }

    /// Number of occurrences opened so far.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Every occurrence in opening order; `None` for ones still open.
    pub fn spans(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.spans.iter().map(|o| {
            o.end.map(|end| Span {
                start: o.start,
                end,
            })
        })
    }
}
