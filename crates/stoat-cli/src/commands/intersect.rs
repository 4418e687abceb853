// Command handler for: Intersect
//
// The three-path pipeline: parse both inputs, build the product automaton,
// trim it, render, and write the result.

use std::path::Path;

use tracing::info;

use super::helpers::{clear_output, read_source, write_output};
use super::CommandError;

pub(crate) fn run(dfa1: &Path, dfa2: &Path, out: &Path) -> Result<(), CommandError> {
    clear_output(out)?;

    let left_text = read_source(dfa1)?;
    let right_text = read_source(dfa2)?;
    let left = stoat_ir::parse(&left_text, &dfa1.display().to_string())?;
    let right = stoat_ir::parse(&right_text, &dfa2.display().to_string())?;

    let product = stoat_ir::intersect(&left, &right)?;
    let trimmed = stoat_ir::trim(&product)?;
    let rendered = stoat_ir::render(&trimmed)?;

    write_output(out, &rendered)?;
    info!(
        out = %out.display(),
        states = trimmed.states.len(),
        transitions = trimmed.transitions.len(),
        "intersection written"
    );
    Ok(())
}
