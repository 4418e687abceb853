use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::automaton::Violation;

/// Which automaton a binary (or unary) operation is complaining about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
    Only,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => write!(f, "left operand"),
            Operand::Right => write!(f, "right operand"),
            Operand::Only => write!(f, "input automaton"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("the {operand} has no initial state")]
    #[diagnostic(
        code(stoat::model::missing_initial),
        help("add an id line under the #initial section")
    )]
    MissingInitial { operand: Operand },

    #[error("automaton is invalid: {}", format_violations(.violations))]
    #[diagnostic(code(stoat::model::invalid))]
    Invalid { violations: Vec<Violation> },
}

fn format_violations(violations: &[Violation]) -> String {
    if violations.len() == 1 {
        return violations[0].to_string();
    }
    let mut s = format!("{} violations:\n", violations.len());
    for (i, v) in violations.iter().enumerate() {
        s.push_str(&format!("  {}. {}\n", i + 1, v));
    }
    s
}
