#![doc = include_str!("../README.md")]

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const CLI_LONG_ABOUT: &str = "Intersect and trim deterministic finite automata \
    described in a line-oriented text format.\n\n\
    Typical use:\n  \
    stoat intersect a.dfa b.dfa out.dfa\n\n\
    Exit codes:\n  \
    0  success\n  \
    1  I/O failure (missing input, unwritable output)\n  \
    2  command-line usage error\n  \
    3  syntax error in an input automaton\n  \
    4  automaton invalid (undeclared states, dangling transitions, foreign symbols)";

#[derive(Parser)]
#[command(name = "stoat")]
#[command(about = "Intersect and trim automata in a line-oriented text format")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect two automata and write the trimmed product
    #[command(display_order = 0)]
    Intersect {
        /// Path to the first input automaton
        dfa1: PathBuf,

        /// Path to the second input automaton
        dfa2: PathBuf,

        /// Path for the output automaton (cleared first if it exists)
        out: PathBuf,
    },

    /// Parse and validate a single automaton
    #[command(display_order = 1)]
    Check {
        /// Path to the automaton file
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Trim a single automaton to its reachable, live fragment
    #[command(display_order = 2)]
    Trim {
        /// Path to the automaton file
        file: PathBuf,

        /// Path for the output automaton (cleared first if it exists)
        out: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Intersect { dfa1, dfa2, out } => commands::intersect::run(&dfa1, &dfa2, &out),
        Commands::Check { file, format } => commands::check::run(&file, &format),
        Commands::Trim { file, out } => commands::trim::run(&file, &out),
    };

    if let Err(err) = outcome {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
