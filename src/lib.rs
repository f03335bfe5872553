//! A small regular expression engine.
//!
//! Patterns are compiled into a graph of test nodes which is then searched
//! with an unanchored, breadth-wise backtracking walk over the subject.
//!
//! ```
//! use regraph::Regex;
//!
//! let re = Regex::compile(r"(\w+) and \1").unwrap();
//! assert!(re.is_match("cat and cat"));
//! assert!(!re.is_match("cat and dog"));
//! ```

pub(crate) mod compiler;
pub(crate) mod cursor;
pub(crate) mod machine;

mod regex;

pub use self::compiler::{Error, ErrorKind};
pub use self::regex::*;

pub type Result<T> = std::result::Result<T, Error>;

/// Compiles `pattern` and searches `subject` with it.
///
/// `Ok(true)` and `Ok(false)` distinguish a match from no match, while `Err`
/// means the pattern could not be compiled.
pub fn is_match(pattern: &str, subject: &str) -> Result<bool> {
    Regex::compile(pattern).map(|re| re.is_match(subject))
}
