//! Surface AST for the automaton text format.
//!
//! The AST mirrors the text: duplicate entries and the per-line grouping of
//! transition symbols are preserved exactly as written. Collapsing to sets is
//! the lowering pass's job, not the parser's.

/// Source span for error reporting (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One parsed automaton description.
///
/// State ids are arbitrary strings, except that an id cannot begin with `#`:
/// the parser reads any line whose first byte is `#` as a section header.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct AutomatonSpec {
    pub states: Vec<String>,
    pub initial: Option<String>,
    pub accepting: Vec<String>,
    pub alphabet: Vec<char>,
    pub transitions: Vec<TransitionSpec>,
}

/// One `src:sym1,sym2,...>dst` line, symbol grouping preserved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct TransitionSpec {
    pub src: String,
    pub symbols: Vec<char>,
    pub dst: String,
}
