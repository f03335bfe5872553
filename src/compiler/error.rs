use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Error {
    pub(crate) pos: usize,
    pub(crate) kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(pos: usize, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    pub fn kind(self) -> ErrorKind {
        self.kind
    }

    /// Code-point offset into the pattern where the error was detected.
    pub fn position(self) -> usize {
        self.pos
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    EmptyPattern,

    UnsupportedEscape,
    UnterminatedCharacterClass,
    UnbalancedGroup,

    NothingToRepeat,
    EmptyRepetition,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::EmptyPattern => "empty pattern",
            ErrorKind::UnsupportedEscape => "unsupported escape sequence",
            ErrorKind::UnterminatedCharacterClass => "unterminated character class",
            ErrorKind::UnbalancedGroup => "unbalanced parenthesis",
            ErrorKind::NothingToRepeat => "nothing to repeat",
            ErrorKind::EmptyRepetition => "repeated expression can match the empty string",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.pos)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { pos: 0, kind }
    }
}
