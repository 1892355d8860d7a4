//! Semantic actions and the calculator facade.

use crate::error::CalcError;
use crate::lexer::calc_lexer;
use crate::parser_data::{CalcData, CalcValue};
use crate::token::CalcToken;
use lalrex::{ParseError, Parser, ParserDriver, ParserStats};

/// Executes the grammar's reductions over [`CalcValue`] payloads and counts
/// reported errors.
#[derive(Debug, Default)]
pub struct CalcDriver {
    pub syntax_errors: usize,
    pub overflows: usize,
}

fn expr_value(value: Option<CalcValue>) -> Result<i64, CalcError> {
    match value {
        Some(CalcValue::Expr(n)) => Ok(n),
        _ => Err(CalcError::BadStackValue),
    }
}

impl ParserDriver for CalcDriver {
    type Data = CalcData;
    type Error = CalcError;

    fn reduce(&mut self, rule: usize, rhs: &mut Vec<CalcValue>) -> Result<CalcValue, CalcError> {
        match rule {
            // start ::= expr
            0 => rhs.pop().ok_or(CalcError::BadStackValue),
            // expr ::= expr OP expr
            1..=4 => {
                let right = expr_value(rhs.pop())?;
                rhs.pop();
                let left = expr_value(rhs.pop())?;
                let value = match rule {
                    1 => left + right,
                    2 => left - right,
                    3 => left * right,
                    _ => {
                        if right == 0 {
                            return Err(CalcError::DivisionByZero);
                        }
                        left / right
                    }
                };
                Ok(CalcValue::Expr(value))
            }
            // expr ::= LPAREN expr RPAREN
            5 => {
                rhs.pop();
                let inner = rhs.pop().ok_or(CalcError::BadStackValue)?;
                Ok(inner)
            }
            // expr ::= NUM
            6 => rhs.pop().ok_or(CalcError::BadStackValue),
            _ => Err(CalcError::BadStackValue),
        }
    }

    fn syntax_error(&mut self, token: Option<&CalcToken>) {
        log::debug!("syntax error at {token:?}");
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        log::debug!("expression nesting overflowed the parse stack");
        self.overflows += 1;
    }
}

/// Push-style calculator parser: feed tokens with [`CalcParser::consume`]
/// and close with [`CalcParser::finish`], or evaluate a whole string with
/// [`CalcParser::eval`].
pub struct CalcParser {
    parser: Parser<CalcDriver>,
}

impl CalcParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: Parser::new(CalcDriver::default()),
        }
    }

    /// Cap the parse stack; deeply nested input then fails with
    /// [`ParseError::StackOverflow`] instead of growing without bound.
    pub fn set_max_stack_size(&mut self, max: Option<usize>) {
        self.parser.set_max_stack_size(max);
    }

    pub fn consume(&mut self, token: CalcToken) -> Result<(), ParseError<CalcError>> {
        self.parser.consume(token)
    }

    /// End of input: runs the final reductions and returns the value.
    pub fn finish(&mut self) -> Result<i64, ParseError<CalcError>> {
        match self.parser.end_parsing()? {
            CalcValue::Expr(n) => Ok(n),
            _ => Err(ParseError::Driver(CalcError::BadStackValue)),
        }
    }

    /// Tokenize and parse `input` in one go. Resets any previous state.
    pub fn eval(&mut self, input: &str) -> anyhow::Result<i64> {
        self.parser.reset();
        let mut lexer = calc_lexer()?;
        lexer.tokenize(input, |mut token, pos| {
            token.line_no = pos.line_no;
            self.parser.consume(token)
        })?;
        Ok(self.finish()?)
    }

    /// Frames above the sentinel, observable for diagnostics and tests.
    pub fn stack_depth(&self) -> usize {
        self.parser.stack_depth()
    }

    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }

    pub fn driver(&self) -> &CalcDriver {
        self.parser.driver()
    }
}

impl Default for CalcParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot evaluation.
pub fn eval_str(input: &str) -> anyhow::Result<i64> {
    CalcParser::new().eval(input)
}
