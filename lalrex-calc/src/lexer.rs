//! Lexing rules for the calculator: single-character operator literals, an
//! integer rule, and a silent whitespace rule. Rule order is significant —
//! the first matching rule wins.

use crate::error::CalcError;
use crate::parser_data::CalcCode;
use crate::token::{CalcToken, TokenValue};
use lalrex::{LexRule, Lexer, LexerBuildError, ParseError};

/// Error type shared by rule actions and the `on_token` callback, so the
/// parser can be driven straight from `tokenize`.
pub type CalcParseError = ParseError<CalcError>;

pub type CalcLexer = Lexer<CalcToken, CalcParseError>;

fn op(code: CalcCode) -> Option<CalcToken> {
    // Line numbers are stamped by the tokenize callback, which sees the
    // position.
    Some(CalcToken::new(code, TokenValue::None, 0))
}

pub fn calc_rules() -> Vec<LexRule<CalcToken, CalcParseError>> {
    vec![
        LexRule::literal("+", op(CalcCode::Plus)),
        LexRule::literal("-", op(CalcCode::Minus)),
        LexRule::literal("*", op(CalcCode::Times)),
        LexRule::literal("/", op(CalcCode::Divide)),
        LexRule::literal("(", op(CalcCode::LParen)),
        LexRule::literal(")", op(CalcCode::RParen)),
        LexRule::regex(r"[0-9]+", |s| {
            let n: i64 = s.parse().map_err(CalcError::from)?;
            Ok(Some(CalcToken::new(
                CalcCode::Num,
                TokenValue::Number(n),
                0,
            )))
        }),
        LexRule::regex(r"[ \t\r\n]+", |_| Ok(None)),
    ]
}

pub fn calc_lexer() -> Result<CalcLexer, LexerBuildError> {
    Lexer::try_new(calc_rules())
}
