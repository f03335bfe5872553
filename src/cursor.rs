/// A reader over a sequence of code points.
///
/// Used to tokenize patterns and to address the subject during a search.
/// Positions are code-point offsets, never byte offsets.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Returns the current code point and moves past it, or `None` at the end.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    /// Returns the current code point without consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end; check [`Cursor::at_end`] first.
    pub fn peek(&self) -> char {
        assert!(!self.at_end(), "peek past the end of input");
        self.chars[self.pos]
    }

    /// Consumes the current code point only if it equals `ch`.
    pub fn match_if(&mut self, ch: char) -> bool {
        if self.at_end() || self.peek() != ch {
            return false;
        }
        self.pos += 1;
        true
    }

    /// Reads the code point at absolute index `index`.
    #[inline]
    pub fn seek(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }
}
