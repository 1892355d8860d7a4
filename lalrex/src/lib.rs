//! Runtime core of a table-driven LALR(1) parser framework.
//!
//! `lalrex` executes parser automatons in the style of the Lemon parser
//! generator: a compressed action table with fallback tokens and an optional
//! wildcard terminal, a parse stack of `(state, symbol, value)` frames, and
//! error reporting with optional grammar-level error capture. The tables are
//! produced by an external generator and handed to the engine through the
//! [`ParserData`] trait; semantic actions live in a [`ParserDriver`].
//!
//! The crate also ships the matching front half of the pipeline: an
//! ordered-rule [`Lexer`] that turns an input string into tokens and tracks
//! source positions. The expected wiring is a `tokenize` callback that feeds
//! each token straight into [`Parser::consume`], followed by
//! [`Parser::end_parsing`] when the input runs out.

mod cursor;
mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod test_grammar;

pub use crate::cursor::Position;
pub use crate::error::{LexError, LexerBuildError, ParseError};
pub use crate::lexer::{LexRule, Lexer, LexerStats};
pub use crate::parser::{
    audit_tables, ActCode, Capture, CaptureContext, Frame, Parser, ParserData, ParserDriver,
    ParserStats, RuleInfo, SymCode, Token, REDUCE_USE_DEFAULT, SHIFT_USE_DEFAULT,
};
