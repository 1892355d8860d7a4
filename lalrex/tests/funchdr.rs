//! End-to-end test of the full pipeline on a function-header grammar:
//!
//! ```text
//! start  ::= header.
//! header ::= FUNC NAME LPAREN params RPAREN ARROW TYPE.
//! params ::= param.
//! params ::= params COMMA param.
//! param  ::= NAME COLON TYPE.
//! ```
//!
//! `FUNC` falls back to `NAME` (keywords may be used as parameter names) and
//! `param` is an error-capture point: a malformed parameter is absorbed as a
//! placeholder and parsing continues.

use lalrex::{
    audit_tables, Capture, CaptureContext, LexRule, Lexer, ParseError, Parser, ParserData,
    ParserDriver, RuleInfo, SymCode, Token, REDUCE_USE_DEFAULT,
};
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
enum FhCode {
    Func = 1,
    Name = 2,
    LParen = 3,
    RParen = 4,
    Comma = 5,
    Colon = 6,
    Arrow = 7,
    Type = 8,
}

impl From<FhCode> for SymCode {
    fn from(code: FhCode) -> Self {
        code as SymCode
    }
}

#[derive(Debug, Clone)]
struct FhToken {
    code: FhCode,
    text: String,
    line_no: usize,
}

impl Token for FhToken {
    type Code = FhCode;

    fn code(&self) -> Self::Code {
        self.code
    }
    fn line_no(&self) -> usize {
        self.line_no
    }
}

#[derive(Debug, PartialEq, Eq)]
struct FunctionHeader {
    name: String,
    /// `None` marks a parameter replaced by error capture.
    params: Vec<Option<String>>,
    ret: String,
}

#[derive(Debug, Default)]
enum FhValue {
    #[default]
    None,
    Token(FhToken),
    Param(Option<String>),
    Params(Vec<Option<String>>),
    Header(FunctionHeader),
}

const PARAM: SymCode = 9;
const PARAMS: SymCode = 10;
const HEADER: SymCode = 11;
const START: SymCode = 12;

struct Fh;

impl ParserData for Fh {
    type Token = FhToken;
    type Value = FhValue;

    const INVALID_CODE: SymCode = 13;
    const NUM_TERMINALS: SymCode = 9;
    const HAS_FALLBACK: bool = true;
    const NUM_STATES: usize = 11;
    const NUM_RULES: usize = 5;

    const MAX_SHIFT: u32 = 10;
    const MIN_SHIFTREDUCE: u32 = 11;
    const MAX_SHIFTREDUCE: u32 = 15;
    const MIN_REDUCE: u32 = 19;
    const MAX_REDUCE: u32 = 23;
    const ERROR_ACTION: u32 = 16;
    const ACCEPT_ACTION: u32 = 17;
    const NO_ACTION: u32 = 18;

    const ACTION_COUNT: usize = 22;
    const SHIFT_COUNT: usize = 10;
    const SHIFT_OFFSET_MIN: i32 = -1;
    const SHIFT_OFFSET_MAX: i32 = 16;
    const REDUCE_COUNT: usize = 8;
    const REDUCE_OFFSET_MIN: i32 = 6;
    const REDUCE_OFFSET_MAX: i32 = 12;
    const WILDCARD: Option<SymCode> = None;

    #[rustfmt::skip]
    const ACTION: &'static [u32] = &[
        1, 18, 2, 18, 3, 4, 18, 18, 6, 7, 8, 18, 15, 9, 4, 12, 19,
        10, 17, 21, 5, 22,
    ];
    #[rustfmt::skip]
    const LOOKAHEAD: &'static [SymCode] = &[
        1, 13, 2, 13, 3, 2, 13, 13, 6, 4, 5, 13, 8, 7, 2, 8, 0,
        11, 12, 9, 10, 9,
    ];
    const SHIFT_OFFSET: &'static [i32] = &[-1, 0, 1, 3, 2, 5, 4, 6, 12, 7, 16];
    const REDUCE_OFFSET: &'static [i32] = &[
        6,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        10,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
        12,
        REDUCE_USE_DEFAULT,
        REDUCE_USE_DEFAULT,
    ];
    const DEFAULT: &'static [u32] = &[16; 11];
    const FALLBACK: &'static [SymCode] = &[0, 2, 0, 0, 0, 0, 0, 0, 0];
    const RULE_INFO: &'static [RuleInfo] = &[
        RuleInfo { lhs: START, nrhs: 1 },
        RuleInfo { lhs: HEADER, nrhs: 7 },
        RuleInfo { lhs: PARAMS, nrhs: 1 },
        RuleInfo { lhs: PARAMS, nrhs: 3 },
        RuleInfo { lhs: PARAM, nrhs: 3 },
    ];
    const TOKEN_NAME: &'static [&'static str] = &[
        "$", "FUNC", "NAME", "LPAREN", "RPAREN", "COMMA", "COLON", "ARROW", "TYPE", "param",
        "params", "header", "start",
    ];
    const RULE_NAME: &'static [&'static str] = &[
        "start ::= header",
        "header ::= FUNC NAME LPAREN params RPAREN ARROW TYPE",
        "params ::= param",
        "params ::= params COMMA param",
        "param ::= NAME COLON TYPE",
    ];
    const ERROR_CAPTURES: &'static [SymCode] = &[PARAM];

    fn token_value(token: FhToken) -> FhValue {
        FhValue::Token(token)
    }
}

#[derive(Debug, Default)]
struct FhDriver {
    captures: usize,
    resolved_at_capture: usize,
}

fn take_text(value: FhValue) -> String {
    match value {
        FhValue::Token(t) => t.text,
        other => panic!("expected token value, got {other:?}"),
    }
}

impl ParserDriver for FhDriver {
    type Data = Fh;
    type Error = Infallible;

    fn reduce(&mut self, rule: usize, rhs: &mut Vec<FhValue>) -> Result<FhValue, Infallible> {
        Ok(match rule {
            // start ::= header
            0 => rhs.pop().unwrap(),
            // header ::= FUNC NAME LPAREN params RPAREN ARROW TYPE
            1 => {
                let ret = take_text(rhs.pop().unwrap());
                rhs.pop();
                rhs.pop();
                let FhValue::Params(params) = std::mem::take(&mut rhs[3]) else {
                    panic!("expected params");
                };
                let name = take_text(std::mem::take(&mut rhs[1]));
                FhValue::Header(FunctionHeader { name, params, ret })
            }
            // params ::= param
            2 => {
                let FhValue::Param(p) = rhs.pop().unwrap() else {
                    panic!("expected param");
                };
                FhValue::Params(vec![p])
            }
            // params ::= params COMMA param
            3 => {
                let FhValue::Param(p) = rhs.pop().unwrap() else {
                    panic!("expected param");
                };
                rhs.pop();
                let FhValue::Params(mut params) = rhs.pop().unwrap() else {
                    panic!("expected params");
                };
                params.push(p);
                FhValue::Params(params)
            }
            // param ::= NAME COLON TYPE
            4 => {
                rhs.pop();
                rhs.pop();
                FhValue::Param(Some(take_text(rhs.pop().unwrap())))
            }
            other => panic!("unknown rule {other}"),
        })
    }

    fn capture_error(&mut self, ctx: CaptureContext<'_, Fh>) -> Capture<FhValue> {
        // Nothing sensible to absorb at end of input.
        if ctx.lhs != PARAM || ctx.token.is_none() {
            return Capture::Propagate;
        }
        self.captures += 1;
        self.resolved_at_capture = ctx.resolved.len();
        Capture::As(FhValue::Param(None))
    }
}

type FhError = ParseError<Infallible>;

fn rules() -> Vec<LexRule<FhToken, FhError>> {
    let lit = |text: &str, code: FhCode| {
        LexRule::literal(
            text,
            Some(FhToken {
                code,
                text: text.to_string(),
                line_no: 1,
            }),
        )
    };
    vec![
        lit("func", FhCode::Func),
        lit("Int", FhCode::Type),
        lit("->", FhCode::Arrow),
        lit("(", FhCode::LParen),
        lit(")", FhCode::RParen),
        lit(",", FhCode::Comma),
        lit(":", FhCode::Colon),
        LexRule::regex(r"[A-Za-z_][A-Za-z0-9_]*", |s| {
            Ok(Some(FhToken {
                code: FhCode::Name,
                text: s.to_string(),
                line_no: 1,
            }))
        }),
        LexRule::regex(r"[ \t\n]+", |_| Ok(None)),
    ]
}

fn parse(input: &str) -> Result<FunctionHeader, FhError> {
    parse_with(input).map(|(header, _)| header)
}

fn parse_with(input: &str) -> Result<(FunctionHeader, FhDriver), FhError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut lexer = Lexer::try_new(rules()).unwrap();
    let mut parser = Parser::new(FhDriver::default());
    lexer
        .tokenize(input, |token, _| parser.consume(token))
        .map_err(|err| match err {
            lalrex::LexError::Callback(e) => e,
            other => panic!("lexing failed: {other}"),
        })?;
    let value = parser.end_parsing()?;
    let FhValue::Header(header) = value else {
        panic!("expected header, got {value:?}");
    };
    Ok((header, parser.into_driver()))
}

#[test]
fn tables_pass_audit() {
    audit_tables::<Fh>().unwrap();
}

#[test]
fn well_formed_header() {
    let header = parse("func add(a: Int, b: Int) -> Int").unwrap();
    assert_eq!(
        header,
        FunctionHeader {
            name: "add".to_string(),
            params: vec![Some("a".to_string()), Some("b".to_string())],
            ret: "Int".to_string(),
        }
    );
}

#[test]
fn malformed_param_is_captured() {
    let (header, driver) = parse_with("func add(a: Int, b: Bogus) -> Int").unwrap();
    assert_eq!(header.name, "add");
    assert_eq!(header.params, vec![Some("a".to_string()), None]);
    assert_eq!(header.ret, "Int");
    assert_eq!(driver.captures, 1);
    // NAME and COLON of the malformed parameter were popped and handed to
    // the delegate.
    assert_eq!(driver.resolved_at_capture, 2);
}

#[test]
fn keyword_falls_back_to_name() {
    let header = parse("func func(func: Int) -> Int").unwrap();
    assert_eq!(header.name, "func");
    assert_eq!(header.params, vec![Some("func".to_string())]);
}

#[test]
fn truncated_header_is_unexpected_end() {
    let err = parse("func add(").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEndOfInput));
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = parse("func add(a: Int) -> Int -> Int").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { token: "ARROW", .. }
    ));
}
