//! Hand-checked tables for a two-rule grammar used by the runtime tests:
//!
//! ```text
//! start ::= item.
//! item  ::= A ANY.
//! ```
//!
//! `ANY` is the wildcard terminal and `B` falls back to `A`, so the fixture
//! exercises every branch of the shift-action lookup.

use crate::parser::{
    ParserData, ParserDriver, RuleInfo, SymCode, Token, REDUCE_USE_DEFAULT,
};
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TinyCode {
    A = 1,
    B = 2,
    Any = 3,
}

impl From<TinyCode> for SymCode {
    fn from(code: TinyCode) -> Self {
        code as SymCode
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TinyToken {
    pub code: TinyCode,
    pub line_no: usize,
}

impl Token for TinyToken {
    type Code = TinyCode;

    fn code(&self) -> Self::Code {
        self.code
    }
    fn line_no(&self) -> usize {
        self.line_no
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TinyValue {
    #[default]
    None,
    Tok,
    Item,
}

pub struct Tiny;

impl ParserData for Tiny {
    type Token = TinyToken;
    type Value = TinyValue;

    const INVALID_CODE: SymCode = 6;
    const NUM_TERMINALS: SymCode = 4;
    const HAS_FALLBACK: bool = true;
    const NUM_STATES: usize = 3;
    const NUM_RULES: usize = 2;

    const MAX_SHIFT: u32 = 2;
    const MIN_SHIFTREDUCE: u32 = 3;
    const MAX_SHIFTREDUCE: u32 = 4;
    const MIN_REDUCE: u32 = 8;
    const MAX_REDUCE: u32 = 9;
    const ERROR_ACTION: u32 = 5;
    const ACCEPT_ACTION: u32 = 6;
    const NO_ACTION: u32 = 7;

    const ACTION_COUNT: usize = 7;
    const SHIFT_COUNT: usize = 2;
    const SHIFT_OFFSET_MIN: i32 = -1;
    const SHIFT_OFFSET_MAX: i32 = 4;
    const REDUCE_COUNT: usize = 0;
    const REDUCE_OFFSET_MIN: i32 = 1;
    const REDUCE_OFFSET_MAX: i32 = 1;
    const WILDCARD: Option<SymCode> = Some(3);

    const ACTION: &'static [u32] = &[1, 7, 7, 4, 8, 2, 6];
    const LOOKAHEAD: &'static [SymCode] = &[1, 6, 6, 3, 0, 4, 5];
    const SHIFT_OFFSET: &'static [i32] = &[-1, 0, 4];
    const REDUCE_OFFSET: &'static [i32] = &[1, REDUCE_USE_DEFAULT, REDUCE_USE_DEFAULT];
    const DEFAULT: &'static [u32] = &[5, 5, 5];
    const FALLBACK: &'static [SymCode] = &[0, 0, 1, 0];
    const RULE_INFO: &'static [RuleInfo] = &[
        RuleInfo { lhs: 5, nrhs: 1 },
        RuleInfo { lhs: 4, nrhs: 2 },
    ];
    const TOKEN_NAME: &'static [&'static str] = &["$", "A", "B", "ANY", "item", "start"];
    const RULE_NAME: &'static [&'static str] = &["start ::= item", "item ::= A ANY"];
    const ERROR_CAPTURES: &'static [SymCode] = &[];

    fn token_value(_token: TinyToken) -> TinyValue {
        TinyValue::Tok
    }
}

#[derive(Debug, Default)]
pub struct TinyDriver {
    pub overflows: usize,
    pub syntax_errors: usize,
}

impl ParserDriver for TinyDriver {
    type Data = Tiny;
    type Error = Infallible;

    fn reduce(&mut self, rule: usize, rhs: &mut Vec<TinyValue>) -> Result<TinyValue, Infallible> {
        Ok(match rule {
            0 => rhs.pop().unwrap_or_default(),
            _ => TinyValue::Item,
        })
    }

    fn syntax_error(&mut self, _token: Option<&TinyToken>) {
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        self.overflows += 1;
    }
}
