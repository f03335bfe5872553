use smallvec::SmallVec;
use std::fmt;

/// Members of a bracketed character class.
///
/// ASCII members live in a 128-bit mask; anything wider is kept in a short
/// list, since classes rarely name more than a handful of non-ASCII runes.
#[derive(Clone, PartialEq, Default)]
pub struct CharSet {
    ascii: u128,
    wide: SmallVec<[char; 2]>,
    negated: bool,
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii |= 1u128 << ch as u32;
        } else if !self.wide.contains(&ch) {
            self.wide.push(ch);
        }
    }

    pub fn negate(&mut self) {
        self.negated = !self.negated;
    }

    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            (self.ascii >> ch as u32) & 1 == 1
        } else {
            self.wide.contains(&ch)
        }
    }

    /// Whether `ch` satisfies the class, taking negation into account.
    #[inline]
    pub fn has(&self, ch: char) -> bool {
        self.contains(ch) != self.negated
    }

    fn members(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |&n| (self.ascii >> n) & 1 == 1)
            .map(char::from)
            .chain(self.wide.iter().copied())
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        if self.negated {
            f.write_str("^")?;
        }
        for ch in self.members() {
            write!(f, "{}", ch.escape_debug())?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CharSet({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_membership() {
        let mut cs = CharSet::new();
        for ch in "abcé".chars() {
            cs.add(ch);
        }
        assert!(cs.has('a'));
        assert!(cs.has('é'));
        assert!(!cs.has('d'));
        assert!(!cs.has('\u{7f}'));
    }

    #[test]
    fn negated_membership() {
        let mut cs = CharSet::new();
        cs.add('a');
        cs.add('\0');
        cs.negate();
        assert!(!cs.has('a'));
        assert!(!cs.has('\0'));
        assert!(cs.has('\n'));
        assert!(cs.has('ü'));
    }

    #[test]
    fn empty_sets() {
        let mut cs = CharSet::new();
        assert!(!cs.has('x'));
        cs.negate();
        assert!(cs.has('x'));
    }

    #[test]
    fn display_lists_members() {
        let mut cs = CharSet::new();
        cs.add('b');
        cs.add('a');
        cs.add('ß');
        cs.negate();
        assert_eq!(cs.to_string(), "[^abß]");
    }
}
