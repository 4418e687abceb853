//! Product construction for language intersection.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::automaton::{Automaton, State, Transition};
use crate::errors::{ModelError, Operand};

/// Build the automaton recognizing `L(left) ∩ L(right)`.
///
/// The state set is the full cross product of the operands' state sets,
/// unreachable pairs included; trimming afterwards is what keeps the result
/// small. The true identity of a product state is the operand pair. Its
/// display label joins the two labels with `_`, and when two distinct pairs
/// would collide on that label (the separator can occur inside operand
/// labels) the later pair is suffixed with `~2`, `~3`, … so labels stay
/// unique in serialized output as well.
///
/// Transitions pair up operand transitions that carry the same symbol, so a
/// symbol present in only one operand never fires in the product. The
/// alphabet is the union of the operand alphabets.
pub fn intersect(left: &Automaton, right: &Automaton) -> Result<Automaton, ModelError> {
    let left_initial = left.initial.as_ref().ok_or(ModelError::MissingInitial {
        operand: Operand::Left,
    })?;
    let right_initial = right.initial.as_ref().ok_or(ModelError::MissingInitial {
        operand: Operand::Right,
    })?;

    let mut pairs: IndexMap<(State, State), State> = IndexMap::new();
    let mut used: IndexSet<String> = IndexSet::new();
    let mut product = Automaton::default();

    for l in &left.states {
        for r in &right.states {
            let state = pair_state(&mut pairs, &mut used, l, r);
            product.states.insert(state);
        }
    }

    // Initial and accepting pairs are combined even when an operand side is
    // undeclared; the resulting dangling reference stays detectable through
    // validation instead of aborting the pipeline here.
    product.initial = Some(pair_state(&mut pairs, &mut used, left_initial, right_initial));

    for l in &left.accepting {
        for r in &right.accepting {
            let state = pair_state(&mut pairs, &mut used, l, r);
            product.accepting.insert(state);
        }
    }

    product.alphabet = left.alphabet.union(&right.alphabet).copied().collect();

    for lt in &left.transitions {
        for rt in &right.transitions {
            if lt.symbol == rt.symbol {
                let src = pair_state(&mut pairs, &mut used, &lt.src, &rt.src);
                let dst = pair_state(&mut pairs, &mut used, &lt.dst, &rt.dst);
                product
                    .transitions
                    .insert(Transition::new(src, dst, lt.symbol));
            }
        }
    }

    debug!(
        states = product.states.len(),
        transitions = product.transitions.len(),
        "product constructed"
    );
    Ok(product)
}

/// The product state for a pair of operand states, created on first use.
fn pair_state(
    pairs: &mut IndexMap<(State, State), State>,
    used: &mut IndexSet<String>,
    left: &State,
    right: &State,
) -> State {
    let key = (left.clone(), right.clone());
    if let Some(state) = pairs.get(&key) {
        return state.clone();
    }
    let state = State::new(unique_label(format!("{left}_{right}"), used));
    pairs.insert(key, state.clone());
    state
}

fn unique_label(base: String, used: &mut IndexSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2usize;
    loop {
        let candidate = format!("{base}~{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
