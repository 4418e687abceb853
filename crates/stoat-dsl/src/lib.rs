#![doc = include_str!("../README.md")]

pub mod ast;
pub mod errors;
pub mod parser;
pub mod printer;

pub use parser::parse;
pub use parser::parse_with_diagnostics;
pub use printer::print;
