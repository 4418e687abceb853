//! Proptest strategies for generating valid `Automaton` instances.

use proptest::prelude::*;

use crate::automaton::{Automaton, State, Transition};

const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

/// Strategy for a valid automaton suitable for property testing.
///
/// Generated automata have:
/// - 1–6 states with unique labels; some labels contain the `_` separator so
///   product-label disambiguation gets exercised
/// - an initial state and a (possibly empty) accepting subset
/// - a 1–3 symbol alphabet drawn from {a, b, c}
/// - up to 12 transitions over declared states and symbols
pub fn arb_automaton() -> impl Strategy<Value = Automaton> {
    (1..=6usize, 1..=3usize)
        .prop_flat_map(|(nstates, nsymbols)| {
            (
                Just(nstates),
                Just(nsymbols),
                proptest::collection::vec(proptest::bool::ANY, nstates),
                0..nstates,
                proptest::collection::vec(0..nstates, 0..=nstates),
                proptest::collection::vec((0..nstates, 0..nsymbols, 0..nstates), 0..=12),
            )
        })
        .prop_map(
            |(nstates, nsymbols, underscored, initial, accepting, transitions)| {
                let labels: Vec<String> = (0..nstates)
                    .map(|i| {
                        if underscored[i] {
                            format!("s_{i}")
                        } else {
                            format!("s{i}")
                        }
                    })
                    .collect();

                let mut automaton = Automaton::default();
                for label in &labels {
                    automaton.states.insert(State::new(label));
                }
                automaton.initial = Some(State::new(&labels[initial]));
                for i in accepting {
                    automaton.accepting.insert(State::new(&labels[i]));
                }
                for symbol in SYMBOLS.iter().take(nsymbols) {
                    automaton.alphabet.insert(*symbol);
                }
                for (src, symbol, dst) in transitions {
                    automaton.transitions.insert(Transition::new(
                        State::new(&labels[src]),
                        State::new(&labels[dst]),
                        SYMBOLS[symbol],
                    ));
                }
                automaton
            },
        )
}
