pub(crate) mod check;
pub(crate) mod helpers;
pub(crate) mod intersect;
pub(crate) mod trim;

use miette::Diagnostic;
use thiserror::Error;

use stoat_ir::ModelError;

pub(crate) const EXIT_IO: i32 = 1;
pub(crate) const EXIT_SYNTAX: i32 = 3;
pub(crate) const EXIT_INVALID: i32 = 4;

/// Everything a subcommand can fail with, each class with its own exit code.
#[derive(Debug, Error, Diagnostic)]
pub(crate) enum CommandError {
    #[error("cannot read {path}")]
    #[diagnostic(code(stoat::io::read))]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot clear existing output file {path}")]
    #[diagnostic(code(stoat::io::clear))]
    ClearOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}")]
    #[diagnostic(code(stoat::io::write))]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode report")]
    #[diagnostic(code(stoat::io::report))]
    Report {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] stoat_dsl::errors::ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),
}

impl CommandError {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CommandError::ReadInput { .. }
            | CommandError::ClearOutput { .. }
            | CommandError::WriteOutput { .. }
            | CommandError::Report { .. } => EXIT_IO,
            CommandError::Parse(_) => EXIT_SYNTAX,
            CommandError::Model(_) => EXIT_INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoat_ir::errors::Operand;

    #[test]
    fn exit_codes_partition_the_failure_classes() {
        let io = CommandError::ReadInput {
            path: "missing.dfa".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(io.exit_code(), EXIT_IO);

        let model = CommandError::Model(ModelError::MissingInitial {
            operand: Operand::Only,
        });
        assert_eq!(model.exit_code(), EXIT_INVALID);
    }

    #[test]
    fn parse_errors_map_to_the_syntax_exit_code() {
        let err = stoat_dsl::parse("stray\n", "stray.dfa").unwrap_err();
        assert_eq!(CommandError::from(err).exit_code(), EXIT_SYNTAX);
    }
}
