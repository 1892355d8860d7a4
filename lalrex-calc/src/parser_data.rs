//! Parser tables for the arithmetic grammar. This module is laid out the way
//! the table generator emits it; edit the grammar, not this file.
//!
//! ```text
//! start ::= expr.
//! expr  ::= expr PLUS expr.    [left, precedence 1]
//! expr  ::= expr MINUS expr.   [left, precedence 1]
//! expr  ::= expr TIMES expr.   [left, precedence 2]
//! expr  ::= expr DIVIDE expr.  [left, precedence 2]
//! expr  ::= LPAREN expr RPAREN.
//! expr  ::= NUM.
//! ```

use crate::token::{CalcToken, TokenValue};
use lalrex::{ParserData, RuleInfo, SymCode, REDUCE_USE_DEFAULT};

/// Terminal codes. The end-of-input symbol is 0 and is fed by the runtime,
/// never by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CalcCode {
    Plus = 1,
    Minus = 2,
    Times = 3,
    Divide = 4,
    Num = 5,
    LParen = 6,
    RParen = 7,
}

impl From<CalcCode> for SymCode {
    fn from(code: CalcCode) -> Self {
        code as SymCode
    }
}

pub const EXPR: SymCode = 8;
pub const START: SymCode = 9;

/// Semantic values on the parse stack: consumed terminals and evaluated
/// subexpressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CalcValue {
    #[default]
    None,
    Token(CalcToken),
    Expr(i64),
}

pub struct CalcData;

impl ParserData for CalcData {
    type Token = CalcToken;
    type Value = CalcValue;

    const INVALID_CODE: SymCode = 10;
    const NUM_TERMINALS: SymCode = 8;
    const HAS_FALLBACK: bool = false;
    const NUM_STATES: usize = 10;
    const NUM_RULES: usize = 7;

    const MAX_SHIFT: u32 = 9;
    const MIN_SHIFTREDUCE: u32 = 10;
    const MAX_SHIFTREDUCE: u32 = 16;
    const MIN_REDUCE: u32 = 20;
    const MAX_REDUCE: u32 = 26;
    const ERROR_ACTION: u32 = 17;
    const ACCEPT_ACTION: u32 = 18;
    const NO_ACTION: u32 = 19;

    const ACTION_COUNT: usize = 23;
    const SHIFT_COUNT: usize = 9;
    const SHIFT_OFFSET_MIN: i32 = -5;
    const SHIFT_OFFSET_MAX: i32 = 11;
    const REDUCE_COUNT: usize = 5;
    const REDUCE_OFFSET_MIN: i32 = 8;
    const REDUCE_OFFSET_MAX: i32 = 14;
    const WILDCARD: Option<SymCode> = None;

    #[rustfmt::skip]
    const ACTION: &'static [u32] = &[
        /*  0 */ 16,  1, 20,  2,  3,  4,  5,
        /*  7 */  2,  3,  4,  5, 19, 19, 15,
        /* 14 */  4,  5,
        /* 16 */  6, 18,  7,  8,  9, 23, 24,
    ];
    #[rustfmt::skip]
    const LOOKAHEAD: &'static [SymCode] = &[
        /*  0 */  5,  6,  0,  1,  2,  3,  4,
        /*  7 */  1,  2,  3,  4, 10, 10,  7,
        /* 14 */  3,  4,
        /* 16 */  8,  9,  8,  8,  8,  8,  8,
    ];
    const SHIFT_OFFSET: &'static [i32] = &[-5, -5, -5, -5, -5, -5, 2, 6, 11, 11];
    const REDUCE_OFFSET: &'static [i32] = &[
        8,
        10,
        11,
        12,
        13,
        14,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
    ];
    const DEFAULT: &'static [u32] = &[17, 17, 17, 17, 17, 17, 17, 17, 21, 22];
    const FALLBACK: &'static [SymCode] = &[0, 0, 0, 0, 0, 0, 0, 0];
    const RULE_INFO: &'static [RuleInfo] = &[
        RuleInfo { lhs: START, nrhs: 1 },
        RuleInfo { lhs: EXPR, nrhs: 3 },
        RuleInfo { lhs: EXPR, nrhs: 3 },
        RuleInfo { lhs: EXPR, nrhs: 3 },
        RuleInfo { lhs: EXPR, nrhs: 3 },
        RuleInfo { lhs: EXPR, nrhs: 3 },
        RuleInfo { lhs: EXPR, nrhs: 1 },
    ];
    const TOKEN_NAME: &'static [&'static str] = &[
        "$", "PLUS", "MINUS", "TIMES", "DIVIDE", "NUM", "LPAREN", "RPAREN", "expr", "start",
    ];
    const RULE_NAME: &'static [&'static str] = &[
        "start ::= expr",
        "expr ::= expr PLUS expr",
        "expr ::= expr MINUS expr",
        "expr ::= expr TIMES expr",
        "expr ::= expr DIVIDE expr",
        "expr ::= LPAREN expr RPAREN",
        "expr ::= NUM",
    ];
    const ERROR_CAPTURES: &'static [SymCode] = &[];

    fn token_value(token: CalcToken) -> CalcValue {
        match token.value {
            TokenValue::Number(n) => CalcValue::Expr(n),
            TokenValue::None => CalcValue::Token(token),
        }
    }
}
