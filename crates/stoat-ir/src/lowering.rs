//! Lowering from the surface AST to the automaton model.

use stoat_dsl::ast::AutomatonSpec;

use crate::automaton::{Automaton, State, Transition};

/// Lower a parsed description into an [`Automaton`].
///
/// Grouped transition lines flatten into one transition per symbol, and set
/// insertion collapses every duplicate the text may carry. Lowering is
/// total: any parsed description lowers.
pub fn lower(spec: &AutomatonSpec) -> Automaton {
    let mut automaton = Automaton::default();

    for id in &spec.states {
        automaton.states.insert(State::new(id));
    }
    automaton.initial = spec.initial.as_deref().map(State::from);
    for id in &spec.accepting {
        automaton.accepting.insert(State::new(id));
    }
    for symbol in &spec.alphabet {
        automaton.alphabet.insert(*symbol);
    }
    for group in &spec.transitions {
        for symbol in &group.symbols {
            automaton.transitions.insert(Transition::new(
                State::new(&group.src),
                State::new(&group.dst),
                *symbol,
            ));
        }
    }

    automaton
}
