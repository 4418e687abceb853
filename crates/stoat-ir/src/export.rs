//! Rendering automata back to the text format.

use indexmap::IndexMap;

use stoat_dsl::ast::{AutomatonSpec, TransitionSpec};
use stoat_dsl::printer;

use crate::automaton::{Automaton, State};
use crate::errors::ModelError;

/// Render an automaton in the wire format.
///
/// Rendering is defined only for automata whose invariants hold: an invalid
/// automaton yields [`ModelError::Invalid`] carrying the violation list, and
/// no partial text is ever produced.
pub fn render(automaton: &Automaton) -> Result<String, ModelError> {
    let violations = automaton.violations();
    if !violations.is_empty() {
        return Err(ModelError::Invalid { violations });
    }
    Ok(printer::print(&to_spec(automaton)))
}

/// The ungated structural half of rendering.
///
/// Transitions are grouped by source state, then by destination, both in
/// first-appearance order; symbols within a group keep insertion order. The
/// grouping is what turns the transition relation back into
/// `src:sym1,sym2,...>dst` lines.
pub fn to_spec(automaton: &Automaton) -> AutomatonSpec {
    let mut groups: IndexMap<&State, IndexMap<&State, Vec<char>>> = IndexMap::new();
    for transition in &automaton.transitions {
        groups
            .entry(&transition.src)
            .or_default()
            .entry(&transition.dst)
            .or_default()
            .push(transition.symbol);
    }

    let mut transitions = Vec::new();
    for (src, destinations) in &groups {
        for (dst, symbols) in destinations {
            transitions.push(TransitionSpec {
                src: src.label().to_owned(),
                symbols: symbols.clone(),
                dst: dst.label().to_owned(),
            });
        }
    }

    AutomatonSpec {
        states: automaton
            .states
            .iter()
            .map(|s| s.label().to_owned())
            .collect(),
        initial: automaton.initial.as_ref().map(|s| s.label().to_owned()),
        accepting: automaton
            .accepting
            .iter()
            .map(|s| s.label().to_owned())
            .collect(),
        alphabet: automaton.alphabet.iter().copied().collect(),
        transitions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Transition;
    use crate::parse;

    #[test]
    fn transitions_regroup_by_source_and_destination() {
        let a = parse(
            "#states\ns0\ns1\n#initial\ns0\n#accepting\ns1\n#alphabet\na\nb\nc\n#transitions\ns0:a>s1\ns1:c>s0\ns0:b>s1\n",
            "group.dfa",
        )
        .unwrap();
        let spec = to_spec(&a);
        assert_eq!(spec.transitions.len(), 2);
        assert_eq!(spec.transitions[0].src, "s0");
        assert_eq!(spec.transitions[0].symbols, vec!['a', 'b']);
        assert_eq!(spec.transitions[0].dst, "s1");
        assert_eq!(spec.transitions[1].src, "s1");
        assert_eq!(spec.transitions[1].symbols, vec!['c']);
    }

    #[test]
    fn render_refuses_an_invalid_automaton() {
        let mut a = parse(
            "#states\ns0\n#initial\ns0\n#alphabet\na\n",
            "invalid.dfa",
        )
        .unwrap();
        a.transitions.insert(Transition::new(
            State::from("ghost"),
            State::from("s0"),
            'a',
        ));
        match render(&a).unwrap_err() {
            ModelError::Invalid { violations } => assert!(!violations.is_empty()),
            other => panic!("expected Invalid, got {other}"),
        }
    }

    #[test]
    fn render_round_trips_through_the_parser() {
        let source = "#states\ns0\ns1\n#initial\ns0\n#accepting\ns1\n#alphabet\na\nb\n#transitions\ns0:a,b>s1\ns1:a>s1\n";
        let a = parse(source, "roundtrip.dfa").unwrap();
        let rendered = render(&a).unwrap();
        let reparsed = parse(&rendered, "rendered.dfa").unwrap();
        assert_eq!(reparsed, a);
    }

    #[test]
    fn render_accepts_an_automaton_without_an_initial_state() {
        // Invariant 1 only constrains a declared initial state.
        let a = parse("#states\ns0\n", "noinit.dfa").unwrap();
        let rendered = render(&a).unwrap();
        assert!(rendered.contains("#initial\n#accepting\n"));
    }
}
