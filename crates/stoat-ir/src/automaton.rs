//! The automaton value types and their structural invariants.

use std::fmt;

use indexmap::IndexSet;

/// A state, identified by its textual label: two states with equal labels
/// are the same state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(String);

impl State {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

/// An edge of the transition relation. Equality and hashing are structural
/// over all three fields; a transition set is a relation, so duplicate
/// triples collapse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub src: State,
    pub dst: State,
    pub symbol: char,
}

impl Transition {
    pub fn new(src: State, dst: State, symbol: char) -> Self {
        Self { src, dst, symbol }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}>{}", self.src, self.symbol, self.dst)
    }
}

/// An automaton over single-character symbols.
///
/// The structural invariants — initial and accepting states declared,
/// transition endpoints declared, transition symbols in the alphabet — are
/// checked by [`Automaton::validate`], not enforced on construction, so
/// algorithms can operate on descriptions exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    pub states: IndexSet<State>,
    pub initial: Option<State>,
    pub accepting: IndexSet<State>,
    pub alphabet: IndexSet<char>,
    pub transitions: IndexSet<Transition>,
}

/// A broken structural invariant, reported by [`Automaton::violations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UndeclaredInitial { state: State },
    UndeclaredAccepting { state: State },
    DanglingSource { transition: Transition },
    DanglingDestination { transition: Transition },
    ForeignSymbol { transition: Transition },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UndeclaredInitial { state } => {
                write!(f, "initial state `{state}` is not declared under #states")
            }
            Violation::UndeclaredAccepting { state } => {
                write!(f, "accepting state `{state}` is not declared under #states")
            }
            Violation::DanglingSource { transition } => {
                write!(
                    f,
                    "transition {transition} leaves the undeclared state `{}`",
                    transition.src
                )
            }
            Violation::DanglingDestination { transition } => {
                write!(
                    f,
                    "transition {transition} enters the undeclared state `{}`",
                    transition.dst
                )
            }
            Violation::ForeignSymbol { transition } => {
                write!(
                    f,
                    "transition {transition} uses symbol `{}` outside the alphabet",
                    transition.symbol
                )
            }
        }
    }
}

impl Automaton {
    /// Every broken invariant, in declaration order. All three invariants
    /// are evaluated independently; nothing short-circuits.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(initial) = &self.initial {
            if !self.states.contains(initial) {
                violations.push(Violation::UndeclaredInitial {
                    state: initial.clone(),
                });
            }
        }

        for state in &self.accepting {
            if !self.states.contains(state) {
                violations.push(Violation::UndeclaredAccepting {
                    state: state.clone(),
                });
            }
        }

        for transition in &self.transitions {
            if !self.states.contains(&transition.src) {
                violations.push(Violation::DanglingSource {
                    transition: transition.clone(),
                });
            }
            if !self.states.contains(&transition.dst) {
                violations.push(Violation::DanglingDestination {
                    transition: transition.clone(),
                });
            }
            if !self.alphabet.contains(&transition.symbol) {
                violations.push(Violation::ForeignSymbol {
                    transition: transition.clone(),
                });
            }
        }

        violations
    }

    /// True iff all structural invariants hold.
    pub fn validate(&self) -> bool {
        self.violations().is_empty()
    }

    /// Run the automaton on `input`, treating the transition set as a
    /// relation: the run tracks every state reachable over the consumed
    /// prefix and accepts when one of them is accepting. Without an initial
    /// state nothing is accepted.
    pub fn accepts(&self, input: &str) -> bool {
        let Some(initial) = &self.initial else {
            return false;
        };

        let mut current: IndexSet<&State> = IndexSet::new();
        current.insert(initial);
        for symbol in input.chars() {
            let mut next: IndexSet<&State> = IndexSet::new();
            for transition in &self.transitions {
                if transition.symbol == symbol && current.contains(&transition.src) {
                    next.insert(&transition.dst);
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }
        current.iter().any(|state| self.accepting.contains(*state))
    }
}
