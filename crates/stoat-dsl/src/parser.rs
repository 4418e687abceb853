//! Line-at-a-time parser for the automaton text format.
//!
//! The scanner keeps a sticky current-section state: any line whose first
//! byte is `#` selects a section (case-insensitively, after trimming), and
//! every other line is interpreted under whichever section was selected
//! last. An unknown `#...` header deselects the section, so entry lines
//! after it fail the same way as entry lines before the first header.

use std::collections::HashSet;

use crate::ast::{AutomatonSpec, Span, TransitionSpec};
use crate::errors::{ParseDiagnostic, ParseDiagnosticSeverity, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    States,
    Initial,
    Accepting,
    Alphabet,
    Transitions,
}

impl Section {
    fn from_header(line: &str) -> Self {
        match line.to_lowercase().trim() {
            "#states" => Section::States,
            "#initial" => Section::Initial,
            "#accepting" => Section::Accepting,
            "#alphabet" => Section::Alphabet,
            "#transitions" => Section::Transitions,
            _ => Section::None,
        }
    }
}

/// Parse an automaton description.
pub fn parse(source: &str, filename: &str) -> Result<AutomatonSpec, ParseError> {
    let (spec, _) = parse_with_diagnostics(source, filename)?;
    Ok(spec)
}

/// Parse an automaton description and emit non-fatal parser diagnostics.
pub fn parse_with_diagnostics(
    source: &str,
    filename: &str,
) -> Result<(AutomatonSpec, Vec<ParseDiagnostic>), ParseError> {
    let mut section = Section::None;
    let mut spec = AutomatonSpec::default();
    let mut initial_lines = 0usize;

    let mut offset = 0usize;
    let mut line_no = 0usize;
    let mut rest = source;
    while !rest.is_empty() {
        let (raw, consumed) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        line_no += 1;
        let span = Span::new(offset, offset + line.len());

        if line.starts_with('#') {
            section = Section::from_header(line);
        } else {
            match section {
                Section::States => spec.states.push(line.to_owned()),
                Section::Initial => {
                    initial_lines += 1;
                    spec.initial = Some(line.to_owned());
                }
                Section::Accepting => spec.accepting.push(line.to_owned()),
                Section::Alphabet => match single_char(line) {
                    Some(c) => spec.alphabet.push(c),
                    None => {
                        return Err(ParseError::AlphabetSymbol {
                            line: line.to_owned(),
                            line_no,
                            span: source_span(span),
                            src: named_source(source, filename),
                        })
                    }
                },
                Section::Transitions => {
                    spec.transitions
                        .push(parse_transition(line, line_no, span, source, filename)?)
                }
                Section::None => {
                    return Err(ParseError::OrphanLine {
                        line: line.to_owned(),
                        line_no,
                        span: source_span(span),
                        src: named_source(source, filename),
                    })
                }
            }
        }

        offset += consumed;
        rest = &rest[consumed..];
    }

    let diagnostics = collect_diagnostics(&spec, initial_lines);
    Ok((spec, diagnostics))
}

/// Parse one `src:sym1,sym2,...>dst` line.
///
/// The source id is everything before the first `:`, the destination id is
/// everything after the first `>` that follows it. Every comma-separated
/// piece in between must be exactly one character.
fn parse_transition(
    line: &str,
    line_no: usize,
    span: Span,
    source: &str,
    filename: &str,
) -> Result<TransitionSpec, ParseError> {
    let shape_error = || ParseError::TransitionShape {
        line: line.to_owned(),
        line_no,
        span: source_span(span),
        src: named_source(source, filename),
    };

    let Some(colon) = line.find(':') else {
        return Err(shape_error());
    };
    let Some(gt) = line[colon + 1..].find('>').map(|i| colon + 1 + i) else {
        return Err(shape_error());
    };

    let mut symbols = Vec::new();
    let mut piece_start = colon + 1;
    for piece in line[colon + 1..gt].split(',') {
        match single_char(piece) {
            Some(c) => symbols.push(c),
            None => {
                let piece_span =
                    Span::new(span.start + piece_start, span.start + piece_start + piece.len());
                return Err(ParseError::TransitionSymbol {
                    symbol: piece.to_owned(),
                    line: line.to_owned(),
                    line_no,
                    span: source_span(piece_span),
                    src: named_source(source, filename),
                });
            }
        }
        piece_start += piece.len() + 1;
    }

    Ok(TransitionSpec {
        src: line[..colon].to_owned(),
        symbols,
        dst: line[gt + 1..].to_owned(),
    })
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn source_span(span: Span) -> miette::SourceSpan {
    (span.start, span.end - span.start).into()
}

fn named_source(source: &str, filename: &str) -> miette::NamedSource<String> {
    miette::NamedSource::new(filename, source.to_owned())
}

fn collect_diagnostics(spec: &AutomatonSpec, initial_lines: usize) -> Vec<ParseDiagnostic> {
    let mut diagnostics = Vec::new();

    if initial_lines > 1 {
        diagnostics.push(ParseDiagnostic {
            code: "initial_overridden".into(),
            severity: ParseDiagnosticSeverity::Warning,
            message: format!("{initial_lines} lines under #initial; the last one wins"),
            suggestion: Some("keep a single id line under #initial".into()),
            span: None,
        });
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in &spec.states {
        if !seen.insert(id) && reported.insert(id) {
            diagnostics.push(ParseDiagnostic {
                code: "duplicate_state".into(),
                severity: ParseDiagnosticSeverity::Warning,
                message: format!("state `{id}` is declared more than once"),
                suggestion: None,
                span: None,
            });
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "#states\ns0\ns1\n#initial\ns0\n#accepting\ns1\n#alphabet\na\nb\n#transitions\ns0:a,b>s1\n";

    // ---------------------------------------------------------------
    // Section handling
    // ---------------------------------------------------------------

    #[test]
    fn parses_a_basic_description() {
        let spec = parse(BASIC, "basic.dfa").unwrap();
        assert_eq!(spec.states, vec!["s0", "s1"]);
        assert_eq!(spec.initial.as_deref(), Some("s0"));
        assert_eq!(spec.accepting, vec!["s1"]);
        assert_eq!(spec.alphabet, vec!['a', 'b']);
        assert_eq!(
            spec.transitions,
            vec![TransitionSpec {
                src: "s0".into(),
                symbols: vec!['a', 'b'],
                dst: "s1".into(),
            }]
        );
    }

    #[test]
    fn headers_match_case_insensitively_after_trimming() {
        let spec = parse("#STATES \ns0\n#Initial\ns0\n", "caps.dfa").unwrap();
        assert_eq!(spec.states, vec!["s0"]);
        assert_eq!(spec.initial.as_deref(), Some("s0"));
    }

    #[test]
    fn empty_source_parses_to_the_empty_description() {
        let spec = parse("", "empty.dfa").unwrap();
        assert_eq!(spec, AutomatonSpec::default());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let spec = parse("#states\r\ns0\r\n#initial\r\ns0\r\n", "crlf.dfa").unwrap();
        assert_eq!(spec.states, vec!["s0"]);
        assert_eq!(spec.initial.as_deref(), Some("s0"));
    }

    #[test]
    fn state_lines_are_taken_verbatim() {
        let spec = parse("#states\n a spaced id \n\n", "verbatim.dfa").unwrap();
        assert_eq!(spec.states, vec![" a spaced id ", ""]);
    }

    #[test]
    fn last_initial_wins_and_is_diagnosed() {
        let (spec, diagnostics) =
            parse_with_diagnostics("#initial\ns0\ns1\n", "twice.dfa").unwrap();
        assert_eq!(spec.initial.as_deref(), Some("s1"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "initial_overridden");
    }

    #[test]
    fn duplicate_states_are_diagnosed_once() {
        let (spec, diagnostics) =
            parse_with_diagnostics("#states\ns0\ns0\ns0\n", "dup.dfa").unwrap();
        assert_eq!(spec.states.len(), 3);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "duplicate_state");
    }

    // ---------------------------------------------------------------
    // Errors
    // ---------------------------------------------------------------

    #[test]
    fn entry_line_before_any_header_is_an_error() {
        let err = parse("s0\n#states\ns0\n", "orphan.dfa").unwrap_err();
        assert!(matches!(err, ParseError::OrphanLine { .. }));
        assert_eq!(err.line(), "s0");
        assert_eq!(err.line_no(), 1);
    }

    #[test]
    fn unknown_header_deselects_the_section() {
        let err = parse("#states\ns0\n#stuff\ns1\n", "unknown.dfa").unwrap_err();
        assert!(matches!(err, ParseError::OrphanLine { .. }));
        assert_eq!(err.line(), "s1");
        assert_eq!(err.line_no(), 4);
    }

    #[test]
    fn indented_header_is_not_a_header() {
        // Only a line whose first byte is `#` can select a section.
        let err = parse(" #states\ns0\n", "indent.dfa").unwrap_err();
        assert!(matches!(err, ParseError::OrphanLine { .. }));
        assert_eq!(err.line(), " #states");
    }

    #[test]
    fn wide_alphabet_symbol_is_an_error() {
        let err = parse("#alphabet\nab\n", "wide.dfa").unwrap_err();
        assert!(matches!(err, ParseError::AlphabetSymbol { .. }));
        assert_eq!(err.line(), "ab");
        assert_eq!(err.line_no(), 2);
    }

    #[test]
    fn wide_transition_symbol_error_names_the_line() {
        let err = parse("#transitions\ns0:ab,cd>s1\n", "wide_sym.dfa").unwrap_err();
        match &err {
            ParseError::TransitionSymbol { symbol, line, .. } => {
                assert_eq!(symbol, "ab");
                assert_eq!(line, "s0:ab,cd>s1");
            }
            other => panic!("expected TransitionSymbol, got {other:?}"),
        }
        assert_eq!(err.line_no(), 2);
    }

    #[test]
    fn empty_transition_symbol_is_an_error() {
        let err = parse("#transitions\ns0:>s1\n", "empty_sym.dfa").unwrap_err();
        assert!(matches!(err, ParseError::TransitionSymbol { .. }));
    }

    #[test]
    fn transition_without_delimiters_is_an_error() {
        let err = parse("#transitions\nnonsense\n", "shape.dfa").unwrap_err();
        assert!(matches!(err, ParseError::TransitionShape { .. }));
        assert_eq!(err.line(), "nonsense");
    }

    #[test]
    fn transition_with_gt_before_colon_is_an_error() {
        let err = parse("#transitions\ns0>a:s1\n", "reversed.dfa").unwrap_err();
        assert!(matches!(err, ParseError::TransitionShape { .. }));
    }

    // ---------------------------------------------------------------
    // Transition splitting
    // ---------------------------------------------------------------

    #[test]
    fn transition_symbols_split_on_commas() {
        let spec = parse("#transitions\nt0:1,2,3,4>t3\n", "digits.dfa").unwrap();
        assert_eq!(spec.transitions[0].symbols, vec!['1', '2', '3', '4']);
        assert_eq!(spec.transitions[0].src, "t0");
        assert_eq!(spec.transitions[0].dst, "t3");
    }

    #[test]
    fn destination_may_contain_delimiters() {
        // Only the first `:` and the first following `>` are structural.
        let spec = parse("#transitions\na:b>c:d>e\n", "tail.dfa").unwrap();
        assert_eq!(spec.transitions[0].src, "a");
        assert_eq!(spec.transitions[0].symbols, vec!['b']);
        assert_eq!(spec.transitions[0].dst, "c:d>e");
    }

    #[test]
    fn unicode_symbols_are_single_characters() {
        let spec = parse("#alphabet\nä\n#transitions\ns0:ä>s1\n", "unicode.dfa").unwrap();
        assert_eq!(spec.alphabet, vec!['ä']);
        assert_eq!(spec.transitions[0].symbols, vec!['ä']);
    }
}
