use crate::cursor::Position;
use crate::error::{LexError, LexerBuildError};
use regex_automata::{meta, Anchored, Input};
use smartstring::alias::String;
use std::fmt::Debug;

/// A single lexing rule. Rules are tried in the order given to
/// [`Lexer::try_new`]; the first rule that matches at least one character at
/// the cursor wins, regardless of how far later rules would have matched.
///
/// `T` is the caller's token data (idiomatically a `(token, code)` carrier),
/// `E` the caller's error type raised from regex rule actions.
pub enum LexRule<T, E> {
    /// Match `text` verbatim at the cursor and emit a clone of `data`
    /// (`None` consumes the match silently).
    Literal { text: String, data: Option<T> },
    /// Match the longest prefix of the remaining input accepted by
    /// `pattern`, anchored at the cursor, and feed the matched text to
    /// `action`. `Ok(None)` consumes the match silently (whitespace,
    /// comments).
    Regex {
        pattern: String,
        action: fn(&str) -> Result<Option<T>, E>,
    },
}

impl<T, E> LexRule<T, E> {
    pub fn literal(text: impl AsRef<str>, data: Option<T>) -> Self {
        Self::Literal {
            text: String::from(text.as_ref()),
            data,
        }
    }

    pub fn regex(pattern: impl AsRef<str>, action: fn(&str) -> Result<Option<T>, E>) -> Self {
        Self::Regex {
            pattern: String::from(pattern.as_ref()),
            action,
        }
    }
}

enum CompiledRule<T, E> {
    Literal {
        text: String,
        data: Option<T>,
    },
    Regex {
        re: meta::Regex,
        action: fn(&str) -> Result<Option<T>, E>,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexerStats {
    /// Tokens handed to `on_token`.
    pub tokens: usize,
    /// Silent matches (whitespace, comments).
    pub skipped: usize,
    /// Unmatched regions encountered.
    pub errors: usize,
}

/// An ordered-rule tokenizer.
///
/// The lexer owns its rule list and a [`Position`] cursor; the position
/// always reflects the start of the most recent token or attempted token and
/// is observable through [`Lexer::position`] as well as at every callback.
pub struct Lexer<T, E> {
    rules: Vec<CompiledRule<T, E>>,
    pos: Position,
    stats: LexerStats,
}

impl<T, E> Lexer<T, E>
where
    T: Clone + Debug,
{
    /// Compile `rules` into a lexer. Fails on the first malformed regex.
    pub fn try_new(rules: Vec<LexRule<T, E>>) -> Result<Self, LexerBuildError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            compiled.push(match rule {
                LexRule::Literal { text, data } => CompiledRule::Literal { text, data },
                LexRule::Regex { pattern, action } => {
                    let re = meta::Regex::new(&pattern).map_err(|source| LexerBuildError {
                        pattern: pattern.clone(),
                        source,
                    })?;
                    CompiledRule::Regex { re, action }
                }
            });
        }
        Ok(Self {
            rules: compiled,
            pos: Position::start(),
            stats: LexerStats::default(),
        })
    }

    /// Start of the most recent token or attempted token.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn stats(&self) -> LexerStats {
        self.stats
    }

    /// Tokenize `input`, handing each token and its start position to
    /// `on_token`. Stops with [`LexError::NoMatchingRule`] at the first
    /// cursor where no rule applies; any error raised by `on_token` aborts
    /// tokenization and is propagated.
    pub fn tokenize<F>(&mut self, input: &str, mut on_token: F) -> Result<(), LexError<E>>
    where
        F: FnMut(T, Position) -> Result<(), E>,
    {
        self.run(input, &mut on_token, None)
    }

    /// Like [`Lexer::tokenize`], but a dead cursor calls `on_error` once per
    /// unmatched region and then scans forward, one character at a time, to
    /// the next offset where some rule matches. Both callbacks may raise to
    /// abort.
    pub fn tokenize_with_recovery<F, G>(
        &mut self,
        input: &str,
        mut on_token: F,
        mut on_error: G,
    ) -> Result<(), LexError<E>>
    where
        F: FnMut(T, Position) -> Result<(), E>,
        G: FnMut(Position) -> Result<(), E>,
    {
        self.run(input, &mut on_token, Some(&mut on_error))
    }

    fn run(
        &mut self,
        input: &str,
        on_token: &mut dyn FnMut(T, Position) -> Result<(), E>,
        mut on_error: Option<&mut dyn FnMut(Position) -> Result<(), E>>,
    ) -> Result<(), LexError<E>> {
        self.pos = Position::start();
        while self.pos.offset < input.len() {
            let at = self.pos.offset;
            match self.apply_at(input, at).map_err(LexError::Callback)? {
                Some((len, data)) => {
                    debug_assert!(len > 0);
                    if let Some(token) = data {
                        log::trace!("token {:?} at {}", token, self.pos);
                        self.stats.tokens += 1;
                        on_token(token, self.pos).map_err(LexError::Callback)?;
                    } else {
                        self.stats.skipped += 1;
                    }
                    self.step(input, at, len);
                }
                None => {
                    self.stats.errors += 1;
                    let Some(on_error) = on_error.as_deref_mut() else {
                        return Err(LexError::NoMatchingRule {
                            position: self.pos,
                            suffix: snippet(input, at),
                        });
                    };
                    log::trace!("no rule matches at {}", self.pos);
                    on_error(self.pos).map_err(LexError::Callback)?;
                    self.skip_to_next_match(input);
                }
            }
        }
        Ok(())
    }

    /// First rule matching at least one character, with its action applied.
    fn apply_at(&self, input: &str, at: usize) -> Result<Option<(usize, Option<T>)>, E> {
        for rule in &self.rules {
            match rule {
                CompiledRule::Literal { text, data } => {
                    if !text.is_empty() && input[at..].starts_with(text.as_str()) {
                        return Ok(Some((text.len(), data.clone())));
                    }
                }
                CompiledRule::Regex { re, action } => {
                    if let Some(end) = self.regex_end_at(re, input, at) {
                        let data = action(&input[at..end])?;
                        return Ok(Some((end - at, data)));
                    }
                }
            }
        }
        Ok(None)
    }

    /// Does any rule match at least one character here? Actions do not run.
    fn some_rule_matches(&self, input: &str, at: usize) -> bool {
        self.rules.iter().any(|rule| match rule {
            CompiledRule::Literal { text, .. } => {
                !text.is_empty() && input[at..].starts_with(text.as_str())
            }
            CompiledRule::Regex { re, .. } => self.regex_end_at(re, input, at).is_some(),
        })
    }

    fn regex_end_at(&self, re: &meta::Regex, input: &str, at: usize) -> Option<usize> {
        re.find(Input::new(input).range(at..).anchored(Anchored::Yes))
            .map(|m| m.end())
            .filter(|end| *end > at)
    }

    /// Consume `len` matched bytes starting at `at`.
    fn step(&mut self, input: &str, at: usize, len: usize) {
        self.pos.advance(&input.as_bytes()[at..at + len]);
    }

    /// Advance one character at a time until some rule matches or the input
    /// is exhausted.
    fn skip_to_next_match(&mut self, input: &str) {
        loop {
            let at = self.pos.offset;
            let Some(c) = input[at..].chars().next() else {
                break;
            };
            self.step(input, at, c.len_utf8());
            if self.pos.offset >= input.len() || self.some_rule_matches(input, self.pos.offset) {
                break;
            }
        }
    }
}

const SNIPPET_LEN: usize = 16;

fn snippet(input: &str, at: usize) -> String {
    let rest = &input[at..];
    let end = rest
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= SNIPPET_LEN)
        .last()
        .unwrap_or(0);
    String::from(&rest[..end])
}
