use crate::cursor::Position;
use smartstring::alias::String;
use thiserror::Error;

/// A lexing rule failed to compile.
#[derive(Debug, Error)]
#[error("invalid lexing rule pattern {pattern:?}")]
pub struct LexerBuildError {
    /// The offending regex source.
    pub pattern: String,
    #[source]
    pub source: regex_automata::meta::BuildError,
}

/// Errors surfaced while tokenizing.
///
/// `E` is the caller's error type: whatever the `on_token`/`on_error`
/// callbacks and the regex rule actions raise is propagated unchanged.
#[derive(Debug, Error)]
pub enum LexError<E> {
    /// No rule matched at the cursor. `suffix` holds a short snippet of the
    /// unmatched input for diagnostics.
    #[error("no lexing rule matches at {position} (at {suffix:?})")]
    NoMatchingRule { position: Position, suffix: String },

    /// A callback or rule action raised; tokenization was aborted.
    #[error("{0}")]
    Callback(E),
}

/// Errors surfaced by the parser runtime.
///
/// `E` is the driver's error type, raised from semantic actions.
#[derive(Debug, Error)]
pub enum ParseError<E> {
    /// The automaton hit the error action and no capture point claimed it.
    #[error("syntax error at '{token}' (line {line})")]
    UnexpectedToken { token: &'static str, line: usize },

    /// The error action was hit while feeding the end-of-input symbol.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A shift would have exceeded the configured stack limit. The parser
    /// is dead until `reset`.
    #[error("parse stack overflow")]
    StackOverflow,

    /// `consume` or `end_parsing` was called after accept.
    #[error("parsing already finished")]
    AlreadyAccepted,

    /// The tables routed the automaton somewhere impossible. Always a bug
    /// in the table generator, never in the input.
    #[error("malformed parse table: {0}")]
    TableMalformed(&'static str),

    /// A semantic action failed.
    #[error("{0}")]
    Driver(E),
}
