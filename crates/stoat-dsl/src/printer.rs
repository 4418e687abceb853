//! The inverse of the parser: render an [`AutomatonSpec`] in the wire format.

use crate::ast::AutomatonSpec;

/// Render a description, sections in fixed order, one entity per line.
///
/// `#initial` gets an id line only when an initial state is present, so an
/// automaton without one round-trips.
pub fn print(spec: &AutomatonSpec) -> String {
    let mut out = String::new();

    out.push_str("#states\n");
    for id in &spec.states {
        out.push_str(id);
        out.push('\n');
    }

    out.push_str("#initial\n");
    if let Some(id) = &spec.initial {
        out.push_str(id);
        out.push('\n');
    }

    out.push_str("#accepting\n");
    for id in &spec.accepting {
        out.push_str(id);
        out.push('\n');
    }

    out.push_str("#alphabet\n");
    for symbol in &spec.alphabet {
        out.push(*symbol);
        out.push('\n');
    }

    out.push_str("#transitions\n");
    for transition in &spec.transitions {
        out.push_str(&transition.src);
        out.push(':');
        for (i, symbol) in transition.symbols.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push(*symbol);
        }
        out.push('>');
        out.push_str(&transition.dst);
        out.push('\n');
    }

    out
}
