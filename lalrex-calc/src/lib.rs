//! Arithmetic expression calculator built on the `lalrex` runtime.
//!
//! The crate is shaped the way any `lalrex`-based parser is:
//! - `parser_data`: the generated parser tables for the expression grammar
//! - `token`: the terminal payload type
//! - `lexer`: ordered lexing rules feeding the runtime lexer
//! - `parser`: semantic actions and the [`CalcParser`] facade
//! - `error`: the calculator's own error surface

pub mod error;
pub mod lexer;
pub mod parser;
pub mod parser_data;
pub mod token;

pub use error::CalcError;
pub use lexer::{calc_lexer, calc_rules, CalcLexer, CalcParseError};
pub use parser::{eval_str, CalcDriver, CalcParser};
pub use parser_data::{CalcCode, CalcData, CalcValue};
pub use token::{CalcToken, TokenValue};
