use crate::error::ParseError;
use std::fmt::Debug;

/// Symbol code. Terminals occupy `[0, NUM_TERMINALS)` with the end-of-input
/// symbol at 0; nonterminals follow.
pub type SymCode = u16;

/// Compressed action code. The code space is partitioned into shift,
/// shift-reduce and reduce ranges plus the error/accept/no-action markers;
/// see [`ParserData`].
pub type ActCode = u32;

/// `SHIFT_OFFSET` entry marking a state without a shift row.
pub const SHIFT_USE_DEFAULT: i32 = i32::MIN;

/// `REDUCE_OFFSET` entry marking a state without a reduce row.
pub const REDUCE_USE_DEFAULT: i32 = i32::MIN;

/// Per-rule metadata: left-hand side symbol and right-hand side length.
#[derive(Debug, Clone, Copy)]
pub struct RuleInfo {
    pub lhs: SymCode,
    pub nrhs: u8,
}

/// A terminal as delivered by the lexer: an opaque payload that knows its
/// terminal code and the line it came from.
pub trait Token: Debug {
    type Code: Copy + Debug + Into<SymCode>;

    fn code(&self) -> Self::Code;
    fn line_no(&self) -> usize;
}

/// The generator-produced automaton: control constants, compressed tables
/// and string tables, plus the hook wrapping a terminal into a symbol value.
///
/// All tables are immutable shared data; a single `ParserData` impl may back
/// any number of parser instances.
pub trait ParserData {
    type Token: Token;
    /// Tagged union over all semantic payloads. `Default` supplies the
    /// sentinel frame's payload and lets drivers `mem::take` slots.
    type Value: Debug + Default;

    /// Code used for "no symbol" (one past the last symbol).
    const INVALID_CODE: SymCode;
    const NUM_TERMINALS: SymCode;
    const HAS_FALLBACK: bool;
    const NUM_STATES: usize;
    const NUM_RULES: usize;

    /// Action `a <= MAX_SHIFT` shifts to state `a`.
    const MAX_SHIFT: ActCode;
    /// Actions in `[MIN_SHIFTREDUCE, MAX_SHIFTREDUCE]` shift, then reduce by
    /// rule `a - MIN_SHIFTREDUCE`.
    const MIN_SHIFTREDUCE: ActCode;
    const MAX_SHIFTREDUCE: ActCode;
    /// Actions in `[MIN_REDUCE, MAX_REDUCE]` reduce by rule `a - MIN_REDUCE`.
    const MIN_REDUCE: ActCode;
    const MAX_REDUCE: ActCode;
    const ERROR_ACTION: ActCode;
    const ACCEPT_ACTION: ActCode;
    const NO_ACTION: ActCode;

    /// Number of valid entries in `ACTION`/`LOOKAHEAD`.
    const ACTION_COUNT: usize;
    /// Highest state with a shift row.
    const SHIFT_COUNT: usize;
    const SHIFT_OFFSET_MIN: i32;
    const SHIFT_OFFSET_MAX: i32;
    /// Highest state with a reduce row.
    const REDUCE_COUNT: usize;
    const REDUCE_OFFSET_MIN: i32;
    const REDUCE_OFFSET_MAX: i32;
    /// Terminal that matches where no literal terminal does, if the grammar
    /// declared one.
    const WILDCARD: Option<SymCode>;

    const ACTION: &'static [ActCode];
    const LOOKAHEAD: &'static [SymCode];
    const SHIFT_OFFSET: &'static [i32];
    const REDUCE_OFFSET: &'static [i32];
    const DEFAULT: &'static [ActCode];
    /// Per-terminal fallback; 0 means none. Chains may not exceed one hop.
    const FALLBACK: &'static [SymCode];
    const RULE_INFO: &'static [RuleInfo];
    const TOKEN_NAME: &'static [&'static str];
    const RULE_NAME: &'static [&'static str];
    /// Nonterminals declared as error-capture points.
    const ERROR_CAPTURES: &'static [SymCode];

    /// Wrap a consumed terminal into its symbol value.
    fn token_value(token: Self::Token) -> Self::Value;
}

/// Verdict of an error-capture delegate.
#[derive(Debug)]
pub enum Capture<V> {
    /// Inject `V` as the capturing nonterminal's value and resume parsing
    /// as if it had been reduced.
    As(V),
    /// Decline; the error is reported and parsing aborts.
    Propagate,
}

/// Everything an error-capture delegate gets to see.
pub struct CaptureContext<'a, D: ParserData> {
    /// The capturing nonterminal and its name.
    pub lhs: SymCode,
    pub lhs_name: &'static str,
    /// Symbols of the partial right-hand side popped during the unwind,
    /// bottom-up. The delegate may take their values.
    pub resolved: &'a mut Vec<(SymCode, D::Value)>,
    /// Tokens discarded since the last successful shift.
    pub unclaimed: &'a [D::Token],
    /// The offending token, if the error was not hit at end of input.
    pub token: Option<&'a D::Token>,
}

/// Grammar-side collaborator of the runtime: executes semantic actions and
/// observes errors.
pub trait ParserDriver {
    type Data: ParserData;
    type Error;

    /// Semantic action for `rule`. `rhs` holds the right-hand-side values
    /// left to right; the returned value becomes the left-hand side's
    /// payload. The driver may drain or `mem::take` from `rhs`.
    fn reduce(
        &mut self,
        rule: usize,
        rhs: &mut Vec<<Self::Data as ParserData>::Value>,
    ) -> Result<<Self::Data as ParserData>::Value, Self::Error>;

    /// Reporting hook; called before the runtime returns the syntax error.
    fn syntax_error(&mut self, _token: Option<&<Self::Data as ParserData>::Token>) {}

    /// Reporting hook; called exactly once when the stack limit is hit.
    fn stack_overflow(&mut self) {}

    /// Error-capture delegate for the nonterminals in
    /// [`ParserData::ERROR_CAPTURES`].
    fn capture_error(
        &mut self,
        _ctx: CaptureContext<'_, Self::Data>,
    ) -> Capture<<Self::Data as ParserData>::Value> {
        Capture::Propagate
    }
}

/// One parse stack frame. After the shift half of a shift-reduce action the
/// `state` field holds the encoded pending reduce (`MIN_REDUCE + rule`)
/// rather than a real state number.
#[derive(Debug)]
pub struct Frame<V> {
    pub state: usize,
    pub sym: SymCode,
    pub value: V,
}

#[derive(Debug, Clone, Default)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reduces: usize,
    pub fallbacks: usize,
    pub captures: usize,
    pub errors: usize,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Active,
    Accepted,
    Dead,
}

const END_CODE: SymCode = 0;

type Val<R> = <<R as ParserDriver>::Data as ParserData>::Value;
type Tok<R> = <<R as ParserDriver>::Data as ParserData>::Token;
type Data<R> = <R as ParserDriver>::Data;

/// The LALR(1) parser engine.
///
/// Tokens are pushed in with [`Parser::consume`]; when the input is
/// exhausted, [`Parser::end_parsing`] feeds the end-of-input symbol until the
/// automaton accepts and yields the final semantic value. The expected
/// integration pattern is a lexer `on_token` callback that calls `consume`.
pub struct Parser<R: ParserDriver> {
    driver: R,
    stack: Vec<Frame<Val<R>>>,
    max_stack_size: Option<usize>,
    result: Option<Val<R>>,
    status: Status,
    /// A capture just fired and no shift has succeeded since; erroring
    /// tokens are discarded into `unclaimed` instead of re-capturing.
    error_hot: bool,
    unclaimed: Vec<Tok<R>>,
    rhs_buf: Vec<Val<R>>,
    resolved_buf: Vec<(SymCode, Val<R>)>,
    stats: ParserStats,
}

impl<R: ParserDriver> Parser<R> {
    pub fn new(driver: R) -> Self {
        let mut stack = Vec::with_capacity(128);
        stack.push(Frame {
            state: 0,
            sym: END_CODE,
            value: Val::<R>::default(),
        });
        Self {
            driver,
            stack,
            max_stack_size: None,
            result: None,
            status: Status::Active,
            error_hot: false,
            unclaimed: Vec::new(),
            rhs_buf: Vec::new(),
            resolved_buf: Vec::new(),
            stats: ParserStats::default(),
        }
    }

    /// Limit the stack to `max` frames (sentinel included). Exceeding the
    /// limit empties the stack, fires the driver's `stack_overflow` hook
    /// once and kills the parser until [`Parser::reset`].
    pub fn set_max_stack_size(&mut self, max: Option<usize>) {
        self.max_stack_size = max;
    }

    pub fn driver(&self) -> &R {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut R {
        &mut self.driver
    }

    pub fn into_driver(self) -> R {
        self.driver
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Number of frames above the sentinel.
    pub fn stack_depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// The stack frames above the sentinel, bottom-up.
    pub fn frames(&self) -> impl Iterator<Item = &Frame<Val<R>>> {
        self.stack.iter().skip(1)
    }

    /// Drop all progress and make the parser usable again.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(Frame {
            state: 0,
            sym: END_CODE,
            value: Val::<R>::default(),
        });
        self.result = None;
        self.status = Status::Active;
        self.error_hot = false;
        self.unclaimed.clear();
        self.stats = ParserStats::default();
    }

    /// Feed the next terminal, in lexical order. Semantic actions for any
    /// reduces this triggers run before the call returns. After accept,
    /// further calls are rejected; after a stack overflow they are no-ops.
    pub fn consume(&mut self, token: Tok<R>) -> Result<(), ParseError<R::Error>> {
        match self.status {
            Status::Accepted => return Err(ParseError::AlreadyAccepted),
            Status::Dead => return Ok(()),
            Status::Active => {}
        }
        self.stats.tokens += 1;
        let la: SymCode = token.code().into();
        if log::log_enabled!(log::Level::Trace) {
            self.dump_stack(la);
        }
        self.drive(la, Some(token))
    }

    /// Signal end of input: feeds the end symbol through the automaton until
    /// accept or error, and on accept returns the final semantic value.
    pub fn end_parsing(&mut self) -> Result<Val<R>, ParseError<R::Error>> {
        match self.status {
            Status::Accepted => return Err(ParseError::AlreadyAccepted),
            Status::Dead => return Err(ParseError::StackOverflow),
            Status::Active => {}
        }
        if log::log_enabled!(log::Level::Trace) {
            self.dump_stack(END_CODE);
        }
        self.drive(END_CODE, None)?;
        debug_assert_eq!(self.status, Status::Accepted);
        self.result
            .take()
            .ok_or(ParseError::TableMalformed("accept produced no result"))
    }

    /// The dispatch loop: one lookahead, as many reduces as it takes until
    /// the token is shifted, captured away, accepted past, or rejected.
    fn drive(&mut self, la: SymCode, mut token: Option<Tok<R>>) -> Result<(), ParseError<R::Error>> {
        loop {
            let state = self.top_state();
            let action = self.find_shift_action(state, la)?;
            if action <= Data::<R>::MAX_SHIFTREDUCE {
                let Some(t) = token.take() else {
                    // The end symbol can never be shifted.
                    return Err(ParseError::TableMalformed("end symbol shifted"));
                };
                let value = Data::<R>::token_value(t);
                self.shift(action, la, value)?;
                self.error_hot = false;
                self.unclaimed.clear();
                if action >= Data::<R>::MIN_SHIFTREDUCE {
                    let rule = (action - Data::<R>::MIN_SHIFTREDUCE) as usize;
                    self.reduce(rule)?;
                }
                return Ok(());
            } else if (Data::<R>::MIN_REDUCE..=Data::<R>::MAX_REDUCE).contains(&action) {
                let rule = (action - Data::<R>::MIN_REDUCE) as usize;
                if self.reduce(rule)? {
                    // Accepted; an unconsumed real token is dropped, the
                    // next consume is rejected.
                    return Ok(());
                }
            } else if action == Data::<R>::ACCEPT_ACTION {
                self.accept_from_stack();
                return Ok(());
            } else if action == Data::<R>::ERROR_ACTION {
                self.stats.errors += 1;
                log::trace!("syntax error on '{}'", token_name::<Data<R>>(la));
                if self.error_hot {
                    if let Some(t) = token.take() {
                        log::trace!("discard input token '{}'", token_name::<Data<R>>(la));
                        self.unclaimed.push(t);
                        return Ok(());
                    }
                } else if self.try_capture(token.as_ref())? {
                    self.error_hot = true;
                    continue;
                }
                self.driver.syntax_error(token.as_ref());
                return match token {
                    Some(t) => Err(ParseError::UnexpectedToken {
                        token: token_name::<Data<R>>(la),
                        line: t.line_no(),
                    }),
                    None => Err(ParseError::UnexpectedEndOfInput),
                };
            } else {
                return Err(ParseError::TableMalformed("no action for state"));
            }
        }
    }

    #[inline]
    fn top_state(&self) -> usize {
        self.stack.last().map(|f| f.state).unwrap_or(0)
    }

    /// Action for terminal lookahead `la` in `state`: compressed lookup with
    /// fallback substitution and wildcard, default action on a miss. A state
    /// at or above `MIN_REDUCE` is an encoded pending reduce and is returned
    /// as the action itself.
    fn find_shift_action(
        &mut self,
        state: usize,
        la: SymCode,
    ) -> Result<ActCode, ParseError<R::Error>> {
        if state as ActCode >= Data::<R>::MIN_REDUCE {
            return Ok(state as ActCode);
        }
        debug_assert!(state <= Data::<R>::SHIFT_COUNT);
        let offset = *Data::<R>::SHIFT_OFFSET
            .get(state)
            .ok_or(ParseError::TableMalformed("state without shift row"))?;
        if offset == SHIFT_USE_DEFAULT {
            return self.default_action(state);
        }
        let mut la = la;
        loop {
            debug_assert!(la != Data::<R>::INVALID_CODE);
            debug_assert!(la < Data::<R>::NUM_TERMINALS);
            let i = offset as i64 + la as i64;
            if i >= 0
                && (i as usize) < Data::<R>::ACTION_COUNT
                && Data::<R>::LOOKAHEAD[i as usize] == la
            {
                return Ok(Data::<R>::ACTION[i as usize]);
            }
            if Data::<R>::HAS_FALLBACK {
                let fallback = *Data::<R>::FALLBACK.get(la as usize).unwrap_or(&0);
                if fallback != 0 {
                    log::trace!(
                        "fallback {} => {}",
                        token_name::<Data<R>>(la),
                        token_name::<Data<R>>(fallback)
                    );
                    if *Data::<R>::FALLBACK.get(fallback as usize).unwrap_or(&0) != 0 {
                        return Err(ParseError::TableMalformed("fallback chain does not terminate"));
                    }
                    self.stats.fallbacks += 1;
                    la = fallback;
                    continue;
                }
            }
            if let Some(wildcard) = Data::<R>::WILDCARD {
                // The index must itself be in table bounds and hit the
                // wildcard row; the end symbol never wildcard-matches.
                let j = offset as i64 + wildcard as i64;
                if j >= 0
                    && (j as usize) < Data::<R>::ACTION_COUNT
                    && Data::<R>::LOOKAHEAD[j as usize] == wildcard
                    && la > 0
                {
                    log::trace!(
                        "wildcard {} => {}",
                        token_name::<Data<R>>(la),
                        token_name::<Data<R>>(wildcard)
                    );
                    return Ok(Data::<R>::ACTION[j as usize]);
                }
            }
            return self.default_action(state);
        }
    }

    fn default_action(&self, state: usize) -> Result<ActCode, ParseError<R::Error>> {
        Data::<R>::DEFAULT
            .get(state)
            .copied()
            .ok_or(ParseError::TableMalformed("state without default action"))
    }

    /// Goto lookup after a reduce. Always hits for well-formed tables.
    fn find_reduce_action(
        &self,
        state: usize,
        lhs: SymCode,
    ) -> Result<ActCode, ParseError<R::Error>> {
        debug_assert!(state <= Data::<R>::REDUCE_COUNT);
        debug_assert!(lhs != Data::<R>::INVALID_CODE);
        Self::probe_reduce_action(state, lhs)
            .ok_or(ParseError::TableMalformed("goto lookup missed"))
    }

    fn probe_reduce_action(state: usize, lhs: SymCode) -> Option<ActCode> {
        let offset = *Data::<R>::REDUCE_OFFSET.get(state)?;
        if offset == REDUCE_USE_DEFAULT {
            return None;
        }
        let i = offset as i64 + lhs as i64;
        if i < 0 || i as usize >= Data::<R>::ACTION_COUNT {
            return None;
        }
        let i = i as usize;
        if Data::<R>::LOOKAHEAD[i] != lhs {
            return None;
        }
        Some(Data::<R>::ACTION[i])
    }

    /// Push for a shift or shift-reduce action. Shift-reduce targets are
    /// rewritten into the pending-reduce range.
    fn shift(
        &mut self,
        action: ActCode,
        sym: SymCode,
        value: Val<R>,
    ) -> Result<(), ParseError<R::Error>> {
        let mut state = action;
        if state > Data::<R>::MAX_SHIFT {
            state += Data::<R>::MIN_REDUCE - Data::<R>::MIN_SHIFTREDUCE;
        }
        if state < Data::<R>::MIN_REDUCE {
            log::trace!(
                "shift '{}', go to state {}",
                token_name::<Data<R>>(sym),
                state
            );
        } else {
            log::trace!(
                "shift '{}', pending reduce {}",
                token_name::<Data<R>>(sym),
                state - Data::<R>::MIN_REDUCE
            );
        }
        self.stats.shifts += 1;
        self.push(state as usize, sym, value)
    }

    /// Push after a goto. Goto targets are real states or encoded pending
    /// reduces; shift-reduce and error actions cannot follow a reduce.
    fn push_goto(
        &mut self,
        action: ActCode,
        sym: SymCode,
        value: Val<R>,
    ) -> Result<(), ParseError<R::Error>> {
        if action == Data::<R>::ERROR_ACTION
            || (action > Data::<R>::MAX_SHIFT && action <= Data::<R>::MAX_SHIFTREDUCE)
        {
            return Err(ParseError::TableMalformed("invalid goto action"));
        }
        if action < Data::<R>::MIN_REDUCE {
            log::trace!(
                "... then shift '{}', go to state {}",
                token_name::<Data<R>>(sym),
                action
            );
        } else {
            log::trace!(
                "... then shift '{}', pending reduce {}",
                token_name::<Data<R>>(sym),
                action - Data::<R>::MIN_REDUCE
            );
        }
        self.push(action as usize, sym, value)
    }

    fn push(&mut self, state: usize, sym: SymCode, value: Val<R>) -> Result<(), ParseError<R::Error>> {
        if let Some(max) = self.max_stack_size {
            if self.stack.len() >= max {
                log::trace!("stack overflow at depth {}", self.stack.len());
                self.driver.stack_overflow();
                self.stack.clear();
                self.status = Status::Dead;
                return Err(ParseError::StackOverflow);
            }
        }
        self.stack.push(Frame { state, sym, value });
        if self.stack.len() > self.stats.max_depth {
            self.stats.max_depth = self.stack.len();
        }
        Ok(())
    }

    /// Reduce by `rule`: run the semantic action over the top `nrhs` frames,
    /// pop them, and route the left-hand side through the goto table.
    /// Returns true if the goto was the accept action.
    fn reduce(&mut self, rule: usize) -> Result<bool, ParseError<R::Error>> {
        let info = Data::<R>::RULE_INFO
            .get(rule)
            .ok_or(ParseError::TableMalformed("rule number out of range"))?;
        let nrhs = info.nrhs as usize;
        let depth = self.stack.len();
        if depth <= nrhs {
            return Err(ParseError::TableMalformed("reduce below sentinel"));
        }
        log::trace!(
            "reduce {} [{}]",
            rule,
            Data::<R>::RULE_NAME.get(rule).copied().unwrap_or("?")
        );
        self.stats.reduces += 1;
        let prev_state = self.stack[depth - 1 - nrhs].state;
        self.rhs_buf.clear();
        self.rhs_buf
            .extend(self.stack.drain(depth - nrhs..).map(|f| f.value));
        let value = self
            .driver
            .reduce(rule, &mut self.rhs_buf)
            .map_err(ParseError::Driver)?;
        let action = self.find_reduce_action(prev_state, info.lhs)?;
        if action == Data::<R>::ACCEPT_ACTION {
            self.accept_with(value);
            return Ok(true);
        }
        self.push_goto(action, info.lhs, value)?;
        Ok(false)
    }

    fn accept_with(&mut self, value: Val<R>) {
        log::trace!("accept (max stack depth {})", self.stats.max_depth);
        self.result = Some(value);
        self.stack.truncate(1);
        self.status = Status::Accepted;
    }

    /// Accept hit directly in the dispatch loop: the start symbol's value is
    /// on top of the stack.
    fn accept_from_stack(&mut self) {
        if self.stack.len() > 1 {
            if let Some(top) = self.stack.pop() {
                if self.result.is_none() {
                    self.result = Some(top.value);
                }
            }
        }
        log::trace!("accept (max stack depth {})", self.stats.max_depth);
        self.stack.truncate(1);
        self.status = Status::Accepted;
    }

    /// Unwind towards the nearest enclosing error-capture point: the topmost
    /// frame from whose state one of the declared capture nonterminals can
    /// be shifted. Frames above it form the partial right-hand side handed
    /// to the delegate.
    fn try_capture(&mut self, token: Option<&Tok<R>>) -> Result<bool, ParseError<R::Error>> {
        if Data::<R>::ERROR_CAPTURES.is_empty() {
            return Ok(false);
        }
        for idx in (0..self.stack.len()).rev() {
            let state = self.stack[idx].state;
            if state as ActCode >= Data::<R>::MIN_REDUCE {
                continue;
            }
            for &lhs in Data::<R>::ERROR_CAPTURES {
                let Some(goto) = Self::probe_reduce_action(state, lhs) else {
                    continue;
                };
                self.resolved_buf.clear();
                self.resolved_buf
                    .extend(self.stack.drain(idx + 1..).map(|f| (f.sym, f.value)));
                let verdict = self.driver.capture_error(CaptureContext {
                    lhs,
                    lhs_name: token_name::<Data<R>>(lhs),
                    resolved: &mut self.resolved_buf,
                    unclaimed: &self.unclaimed,
                    token,
                });
                return match verdict {
                    Capture::As(value) => {
                        log::trace!("capture error as '{}'", token_name::<Data<R>>(lhs));
                        self.stats.captures += 1;
                        if goto == Data::<R>::ACCEPT_ACTION {
                            self.accept_with(value);
                        } else {
                            self.push_goto(goto, lhs, value)?;
                        }
                        Ok(true)
                    }
                    Capture::Propagate => Ok(false),
                };
            }
        }
        Ok(false)
    }

    fn dump_stack(&self, la: SymCode) {
        let mut out = String::new();
        for frame in self.stack.iter().skip(1) {
            out.push_str(&format!(
                "<{}> {}  ",
                frame.state,
                token_name::<Data<R>>(frame.sym)
            ));
        }
        log::trace!(
            "stack: [{}] <- '{}'",
            out.trim_end(),
            token_name::<Data<R>>(la)
        );
    }
}

fn token_name<D: ParserData>(code: SymCode) -> &'static str {
    D::TOKEN_NAME.get(code as usize).copied().unwrap_or("?")
}

/// Structural sanity checks over a table set: parallel array lengths, legal
/// action ranges for terminal entries, fallback termination, nonterminal
/// rule heads. Meant for tests and generator validation, not the hot path.
pub fn audit_tables<D: ParserData>() -> Result<(), &'static str> {
    if D::LOOKAHEAD.len() != D::ACTION.len() {
        return Err("lookahead/action length mismatch");
    }
    if D::ACTION_COUNT > D::ACTION.len() {
        return Err("action count exceeds table length");
    }
    if D::SHIFT_OFFSET.len() < D::NUM_STATES || D::REDUCE_OFFSET.len() < D::NUM_STATES {
        return Err("offset table shorter than state count");
    }
    if D::DEFAULT.len() < D::NUM_STATES {
        return Err("default table shorter than state count");
    }
    if D::RULE_INFO.len() != D::NUM_RULES {
        return Err("rule info length mismatch");
    }
    for i in 0..D::ACTION_COUNT {
        if D::LOOKAHEAD[i] < D::NUM_TERMINALS {
            let a = D::ACTION[i];
            let legal = a <= D::MAX_SHIFTREDUCE
                || (D::MIN_REDUCE..=D::MAX_REDUCE).contains(&a)
                || a == D::ERROR_ACTION
                || a == D::ACCEPT_ACTION;
            if !legal {
                return Err("terminal action out of legal ranges");
            }
        }
    }
    for &fallback in D::FALLBACK {
        if fallback != 0 {
            let next = *D::FALLBACK.get(fallback as usize).unwrap_or(&0);
            if next != 0 {
                return Err("fallback chain does not terminate");
            }
        }
    }
    for info in D::RULE_INFO {
        if info.lhs < D::NUM_TERMINALS {
            return Err("rule reduces to a terminal");
        }
    }
    Ok(())
}
