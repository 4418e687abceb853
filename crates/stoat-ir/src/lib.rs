#![doc = include_str!("../README.md")]

pub mod automaton;
pub mod errors;
pub mod export;
pub mod intersect;
pub mod lowering;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest_generators;
pub mod trim;

pub use automaton::{Automaton, State, Transition, Violation};
pub use errors::ModelError;
pub use export::{render, to_spec};
pub use intersect::intersect;
pub use lowering::lower;
pub use trim::trim;

use stoat_dsl::errors::ParseError;

/// Parse text straight into an [`Automaton`] (parse, then lower).
pub fn parse(source: &str, filename: &str) -> Result<Automaton, ParseError> {
    Ok(lowering::lower(&stoat_dsl::parse(source, filename)?))
}
