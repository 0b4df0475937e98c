//! # Parser - Backtracking Primitives
//!
//! The [`Parser`] owns everything one parse run needs: a [`Cursor`] over the
//! input, the [`LinkAccumulator`] side channel, the [`GrammarConfig`] and
//! the furthest-failure bookkeeping used for error messages.
//!
//! ## Rollback
//!
//! Grammar rules are plain functions `fn(&mut Parser) -> PResult<T>`. A rule
//! that fails may have consumed input or recorded links before giving up,
//! so every choice point goes through [`Parser::attempt`], which takes a
//! checkpoint (cursor position + accumulator length) and rewinds to it on
//! failure. Abandoned branches therefore never leak links into the branch
//! that is finally accepted.
//!
//! ```ignore
//! // `[[` is only an internal link if the whole construct matches
//! if let Ok(text) = p.attempt(internal_link) {
//!     return Ok(text);
//! }
//! ```
//!
//! ## Priority Choice
//!
//! [`Parser::priority_choice`] is the workhorse of the text grammar: it tries
//! an ordered list of rules, keeps the output of the first that matches and
//! starts over, until none match. It never fails.

use std::borrow::Cow;

use crate::models::Link;

use super::accumulator::LinkAccumulator;
use super::config::GrammarConfig;
use super::cursor::Cursor;
use super::error::{Backtrack, Expected, PResult, ParseError};

/// A grammar rule producing text, as used by [`Parser::priority_choice`].
pub type TextRule = fn(&mut Parser<'_>) -> PResult<String>;

/// The parser state for one run over one input.
pub struct Parser<'a> {
    cur: Cursor<'a>,
    links: LinkAccumulator,
    config: &'a GrammarConfig,
    expected: Expected,
}

/// Where to rewind to when an alternative fails.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    pos: usize,
    links: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser at the start of `input` with an empty accumulator.
    pub fn new(input: &'a str, config: &'a GrammarConfig) -> Self {
        Self {
            cur: Cursor::new(input),
            links: LinkAccumulator::new(),
            config,
            expected: Expected::default(),
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.cur.pos()
    }

    pub fn at_end(&self) -> bool {
        self.cur.eof()
    }

    /// The current character, if any.
    pub fn peek(&self) -> Option<char> {
        self.cur.peek()
    }

    pub fn config(&self) -> &'a GrammarConfig {
        self.config
    }

    /// Links recorded so far in this run.
    pub fn links(&self) -> &LinkAccumulator {
        &self.links
    }

    /// Prepend a link to the accumulator.
    pub fn record_link(&mut self, link: Link) {
        log::trace!("recording link {link:?} at byte {}", self.pos());
        self.links.record(link);
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.cur.pos(),
            links: self.links.len(),
        }
    }

    fn rewind(&mut self, cp: Checkpoint) {
        self.cur.reset(cp.pos);
        self.links.truncate(cp.links);
    }

    /// Note that `what` was expected at the current position and fail.
    pub fn expect(&mut self, what: impl Into<Cow<'static, str>>) -> Backtrack {
        self.expected.record(self.cur.pos(), what.into());
        Backtrack
    }

    /// Like [`Parser::expect`], but only builds the message when it could
    /// end up in the final error.
    fn expect_with(&mut self, what: impl FnOnce() -> String) -> Backtrack {
        let pos = self.cur.pos();
        if self.expected.reaches(pos) {
            self.expected.record(pos, Cow::Owned(what()));
        }
        Backtrack
    }

    /// Run `rule`; if it fails, restore the position and the accumulator.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let cp = self.checkpoint();
        let result = rule(self);
        if result.is_err() {
            self.rewind(cp);
        }
        result
    }

    /// Run `rule` and always restore the position and the accumulator.
    pub fn look_ahead<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let cp = self.checkpoint();
        let result = rule(self);
        self.rewind(cp);
        result
    }

    /// Succeed, consuming nothing, only if `rule` would fail here.
    ///
    /// Failures inside the probe are not reported as expectations.
    pub fn not_followed_by<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> PResult<T>,
        what: &'static str,
    ) -> PResult<()> {
        let saved = std::mem::take(&mut self.expected);
        let matched = self.look_ahead(rule).is_ok();
        self.expected = saved;
        if matched {
            Err(self.expect_with(|| format!("no {what}")))
        } else {
            Ok(())
        }
    }

    /// Match `lit` exactly. Nothing is consumed unless all of it matches.
    pub fn literal(&mut self, lit: &str) -> PResult<()> {
        if self.cur.starts_with(lit) {
            self.cur.bump_n(lit.len());
            Ok(())
        } else {
            Err(self.expect_with(|| format!("{lit:?}")))
        }
    }

    /// Consume one character satisfying `pred`.
    pub fn satisfy(&mut self, pred: impl Fn(char) -> bool, what: &'static str) -> PResult<char> {
        match self.cur.peek() {
            Some(c) if pred(c) => {
                self.cur.bump();
                Ok(c)
            }
            _ => Err(self.expect(what)),
        }
    }

    /// Consume the longest (possibly empty) run of characters satisfying `pred`.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        self.cur.eat_while(pred)
    }

    /// Like [`Parser::take_while`] but requires at least one character.
    pub fn take_while1(
        &mut self,
        pred: impl Fn(char) -> bool,
        what: &'static str,
    ) -> PResult<&'a str> {
        let run = self.cur.eat_while(pred);
        if run.is_empty() {
            Err(self.expect(what))
        } else {
            Ok(run)
        }
    }

    /// Consume everything up to and including the first `terminator`,
    /// returning what came before it.
    pub fn take_through(&mut self, terminator: &str) -> PResult<&'a str> {
        let rest = self.cur.rest();
        match rest.find(terminator) {
            Some(idx) => {
                self.cur.bump_n(idx + terminator.len());
                Ok(&rest[..idx])
            }
            None => Err(self.expect_with(|| format!("{terminator:?}"))),
        }
    }

    /// Skip spaces and tabs on the current line.
    pub fn skip_spaces(&mut self) {
        self.cur.eat_while(|c| c == ' ' || c == '\t');
    }

    pub fn end_of_input(&mut self) -> PResult<()> {
        if self.cur.eof() {
            Ok(())
        } else {
            Err(self.expect("end of input"))
        }
    }

    /// Repeatedly try `rules` in order, concatenating the output of the first
    /// one that matches each time, until none matches.
    ///
    /// Never fails; zero matches give the empty string. A rule that succeeds
    /// without consuming input ends the repetition.
    pub fn priority_choice(&mut self, rules: &[TextRule]) -> String {
        let mut out = String::new();
        'repeat: loop {
            let start = self.pos();
            for rule in rules {
                let cp = self.checkpoint();
                match rule(self) {
                    Ok(piece) if self.pos() > start => {
                        out.push_str(&piece);
                        continue 'repeat;
                    }
                    Ok(_) => {
                        self.rewind(cp);
                        break 'repeat;
                    }
                    Err(Backtrack) => self.rewind(cp),
                }
            }
            break;
        }
        out
    }

    /// Run `rule` against an empty accumulator and return its value with the
    /// links it recorded. The outer accumulator is restored either way.
    pub fn with_fresh_links<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<(T, Vec<Link>)> {
        let outer = std::mem::take(&mut self.links);
        let result = self.attempt(rule);
        let inner = std::mem::replace(&mut self.links, outer);
        result.map(|value| (value, inner.into_links()))
    }

    /// Turn the furthest recorded failure into a [`ParseError`].
    pub fn into_error(self) -> ParseError {
        self.expected.into_error(self.cur.s)
    }
}
