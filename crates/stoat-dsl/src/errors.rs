use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDiagnosticSeverity {
    Warning,
}

/// A non-fatal observation made while parsing (the parse still succeeds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub code: String,
    pub severity: ParseDiagnosticSeverity,
    pub message: String,
    pub suggestion: Option<String>,
    pub span: Option<Span>,
}

/// Fatal syntax errors. Parsing stops at the first one; no partial
/// description is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Line {line_no} is outside any section: {line}")]
    #[diagnostic(
        code(stoat::parse::orphan_line),
        help("entry lines must follow one of: #states, #initial, #accepting, #alphabet, #transitions")
    )]
    OrphanLine {
        line: String,
        line_no: usize,
        #[label("no section header applies here")]
        span: miette::SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Alphabet symbol on line {line_no} must be exactly one character: {line}")]
    #[diagnostic(code(stoat::parse::alphabet_symbol))]
    AlphabetSymbol {
        line: String,
        line_no: usize,
        #[label("not a single character")]
        span: miette::SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Malformed transition on line {line_no}: {line}")]
    #[diagnostic(
        code(stoat::parse::transition_shape),
        help("transitions are written as src:sym1,sym2,...>dst with `:` before `>`")
    )]
    TransitionShape {
        line: String,
        line_no: usize,
        #[label("expected src:symbols>dst")]
        span: miette::SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Transition symbol `{symbol}` on line {line_no} must be exactly one character: {line}")]
    #[diagnostic(code(stoat::parse::transition_symbol))]
    TransitionSymbol {
        symbol: String,
        line: String,
        line_no: usize,
        #[label("not a single character")]
        span: miette::SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ParseError {
    /// The offending line's content.
    pub fn line(&self) -> &str {
        match self {
            ParseError::OrphanLine { line, .. }
            | ParseError::AlphabetSymbol { line, .. }
            | ParseError::TransitionShape { line, .. }
            | ParseError::TransitionSymbol { line, .. } => line,
        }
    }

    /// The offending 1-based line number.
    pub fn line_no(&self) -> usize {
        match self {
            ParseError::OrphanLine { line_no, .. }
            | ParseError::AlphabetSymbol { line_no, .. }
            | ParseError::TransitionShape { line_no, .. }
            | ParseError::TransitionSymbol { line_no, .. } => *line_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_orphan_line() {
        let err = ParseError::OrphanLine {
            line: "s0".into(),
            line_no: 1,
            span: (0, 2).into(),
            src: miette::NamedSource::new("test.dfa", "s0".to_owned()),
        };
        assert_eq!(err.to_string(), "Line 1 is outside any section: s0");
        assert_eq!(err.line(), "s0");
        assert_eq!(err.line_no(), 1);
    }

    #[test]
    fn display_alphabet_symbol() {
        let err = ParseError::AlphabetSymbol {
            line: "ab".into(),
            line_no: 3,
            span: (10, 2).into(),
            src: miette::NamedSource::new("test.dfa", "#alphabet\nab".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "Alphabet symbol on line 3 must be exactly one character: ab"
        );
    }

    #[test]
    fn display_transition_symbol_names_the_line() {
        let err = ParseError::TransitionSymbol {
            symbol: "ab".into(),
            line: "s0:ab,cd>s1".into(),
            line_no: 7,
            span: (3, 2).into(),
            src: miette::NamedSource::new("test.dfa", "s0:ab,cd>s1".to_owned()),
        };
        let msg = err.to_string();
        assert!(msg.contains("s0:ab,cd>s1"));
        assert!(msg.contains("line 7"));
    }
}
