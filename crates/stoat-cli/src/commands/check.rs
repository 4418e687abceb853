// Command handler for: Check
//
// Parses, lowers, and validates one automaton; reports summary counts,
// parser warnings, and invariant violations in text or JSON.

use std::path::Path;

use serde::Serialize;

use super::helpers::read_source;
use super::{CommandError, EXIT_INVALID};

#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    pub(crate) schema_version: u32,
    pub(crate) file: String,
    pub(crate) states: usize,
    pub(crate) initial: Option<String>,
    pub(crate) accepting: usize,
    pub(crate) alphabet: usize,
    pub(crate) transitions: usize,
    pub(crate) warnings: Vec<String>,
    pub(crate) violations: Vec<String>,
    pub(crate) valid: bool,
}

pub(crate) const CHECK_SCHEMA_VERSION: u32 = 1;

pub(crate) fn run(file: &Path, format: &str) -> Result<(), CommandError> {
    let source = read_source(file)?;
    let filename = file.display().to_string();

    let (spec, diagnostics) = stoat_dsl::parse_with_diagnostics(&source, &filename)?;
    let automaton = stoat_ir::lower(&spec);
    let violations = automaton.violations();

    let report = CheckReport {
        schema_version: CHECK_SCHEMA_VERSION,
        file: filename,
        states: automaton.states.len(),
        initial: automaton.initial.as_ref().map(|s| s.label().to_owned()),
        accepting: automaton.accepting.len(),
        alphabet: automaton.alphabet.len(),
        transitions: automaton.transitions.len(),
        warnings: diagnostics.iter().map(|d| d.message.clone()).collect(),
        violations: violations.iter().map(ToString::to_string).collect(),
        valid: violations.is_empty(),
    };

    match format {
        "json" => {
            let encoded = serde_json::to_string_pretty(&report)
                .map_err(|source| CommandError::Report { source })?;
            println!("{encoded}");
        }
        _ => println!("{}", render_check_text(&report)),
    }

    if !report.valid {
        std::process::exit(EXIT_INVALID);
    }
    Ok(())
}

pub(crate) fn render_check_text(report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.file));
    out.push_str(&format!(
        "  states: {}  accepting: {}  alphabet: {}  transitions: {}\n",
        report.states, report.accepting, report.alphabet, report.transitions
    ));
    match &report.initial {
        Some(id) => out.push_str(&format!("  initial: {id}\n")),
        None => out.push_str("  initial: (none)\n"),
    }
    for warning in &report.warnings {
        out.push_str(&format!("  warning: {warning}\n"));
    }
    for violation in &report.violations {
        out.push_str(&format!("  violation: {violation}\n"));
    }
    out.push_str(if report.valid {
        "  verdict: valid"
    } else {
        "  verdict: INVALID"
    });
    out
}
