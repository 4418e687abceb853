//! Trimming: reduce an automaton to its reachable, live fragment.

use indexmap::IndexSet;
use tracing::debug;

use crate::automaton::{Automaton, State, Transition};
use crate::errors::{ModelError, Operand};

/// Shrink `automaton` to the states that can take part in some accepted run.
///
/// Three steps, producing a new automaton:
///
/// 1. forward reachability from the initial state over the transition
///    relation, with an explicit work-list (the traversal depth is the
///    longest path in the graph, so call recursion is out);
/// 2. dead-end pruning to a fixed point: every reachable state that is
///    neither accepting nor the source of a surviving transition is dropped,
///    and the transition relation is re-filtered to surviving endpoints
///    after each pass. The initial state is exempt: a product with an empty
///    language trims down to its start state standing alone, not to an
///    automaton with no states;
/// 3. the alphabet is recomputed as the symbols the surviving transitions
///    actually use.
///
/// The accept set of the result is filtered to the surviving states, so the
/// output always passes [`Automaton::validate`].
pub fn trim(automaton: &Automaton) -> Result<Automaton, ModelError> {
    let initial = automaton.initial.as_ref().ok_or(ModelError::MissingInitial {
        operand: Operand::Only,
    })?;

    // Step 1: forward reachability.
    let mut live: IndexSet<State> = IndexSet::new();
    live.insert(initial.clone());
    let mut frontier: Vec<&State> = vec![initial];
    while let Some(state) = frontier.pop() {
        for transition in &automaton.transitions {
            if transition.src == *state && live.insert(transition.dst.clone()) {
                frontier.push(&transition.dst);
            }
        }
    }
    let reachable = live.len();

    // Every transition out of a reachable state has a reachable destination,
    // so filtering on the source alone is already endpoint-closed.
    let mut kept: Vec<&Transition> = automaton
        .transitions
        .iter()
        .filter(|t| live.contains(&t.src))
        .collect();

    // Step 2: dead-end pruning to a fixed point.
    loop {
        let before = live.len();
        live.retain(|state| {
            state == initial
                || automaton.accepting.contains(state)
                || kept.iter().any(|t| t.src == *state)
        });
        kept.retain(|t| live.contains(&t.src) && live.contains(&t.dst));
        if live.len() == before {
            break;
        }
    }

    // Step 3: the surviving transitions decide the alphabet.
    let alphabet: IndexSet<char> = kept.iter().map(|t| t.symbol).collect();

    let trimmed = Automaton {
        initial: Some(initial.clone()),
        accepting: automaton
            .accepting
            .iter()
            .filter(|s| live.contains(*s))
            .cloned()
            .collect(),
        alphabet,
        transitions: kept.into_iter().cloned().collect(),
        states: live,
    };
    debug!(
        reachable,
        live = trimmed.states.len(),
        transitions = trimmed.transitions.len(),
        "trimmed"
    );
    Ok(trimmed)
}
