//! Error type for the calculator's semantic layer.
//!
//! Lexer and parser failures keep their own types from the runtime crate;
//! [`CalcError`] covers what the calculator itself can get wrong: turning a
//! numeric literal into an `i64`, evaluating an expression, or finding an
//! unexpected payload on the value stack. Conversions use `#[from]` so `?`
//! works at the call sites.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// A numeric literal did not fit an `i64`.
    #[error("unable to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Right operand of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A reduction found the wrong payload variant on the stack. Indicates
    /// a table/action mismatch, not bad input.
    #[error("unexpected value on parse stack")]
    BadStackValue,
}

/// Lets lexer rule actions raise [`CalcError`] with `?` while sharing the
/// parser's error type.
impl From<CalcError> for lalrex::ParseError<CalcError> {
    fn from(err: CalcError) -> Self {
        lalrex::ParseError::Driver(err)
    }
}
