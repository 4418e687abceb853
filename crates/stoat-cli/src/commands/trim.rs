// Command handler for: Trim

use std::path::Path;

use super::helpers::{clear_output, read_source, write_output};
use super::CommandError;

pub(crate) fn run(file: &Path, out: &Path) -> Result<(), CommandError> {
    clear_output(out)?;

    let source = read_source(file)?;
    let automaton = stoat_ir::parse(&source, &file.display().to_string())?;
    let trimmed = stoat_ir::trim(&automaton)?;
    let rendered = stoat_ir::render(&trimmed)?;

    write_output(out, &rendered)
}
