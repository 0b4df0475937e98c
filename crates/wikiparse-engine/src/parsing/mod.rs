//! # Parsing
//!
//! A backtracking recursive-descent parser for MediaWiki wikitext.
//!
//! ## Architecture
//!
//! 1. **Primitives** ([`Parser`]): cursor, literals, rollback, priority choice
//! 2. **Grammar** ([`grammar`]): text, links, templates, lists, headings
//! 3. **Entry points** ([`run`], [`extract_links`]): drive one rule over a
//!    whole input with a fresh link accumulator
//!
//! Every run must consume its entire input; trailing text the rule does not
//! accept is reported as a [`ParseError`] expecting end of input.

pub mod accumulator;
pub mod config;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod kinds;
pub mod parser;

pub use accumulator::LinkAccumulator;
pub use config::GrammarConfig;
pub use error::{Backtrack, PResult, ParseError};
pub use parser::{Parser, TextRule};

use crate::models::Link;

/// Run `rule` over all of `input` with the default grammar configuration.
pub fn run<T>(
    rule: impl FnOnce(&mut Parser<'_>) -> PResult<T>,
    input: &str,
) -> Result<T, ParseError> {
    run_with_config(&GrammarConfig::default(), rule, input)
}

/// Run `rule` over all of `input` with a fresh link accumulator.
pub fn run_with_config<T>(
    config: &GrammarConfig,
    rule: impl FnOnce(&mut Parser<'_>) -> PResult<T>,
    input: &str,
) -> Result<T, ParseError> {
    log::trace!("parsing {} bytes", input.len());

    let mut p = Parser::new(input, config);
    let result = rule(&mut p).and_then(|value| {
        p.end_of_input()?;
        Ok(value)
    });

    result.map_err(|Backtrack| {
        let err = p.into_error();
        log::debug!("{err}");
        err
    })
}

/// All internal links in `input`, most recent first.
pub fn extract_links(input: &str) -> Result<Vec<Link>, ParseError> {
    run(grammar::link_list, input)
}

/// Like [`run`], but returns `default` when the input does not parse.
pub fn parse_or_default<T>(
    default: T,
    rule: impl FnOnce(&mut Parser<'_>) -> PResult<T>,
    input: &str,
) -> T {
    match run(rule, input) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("using default value: {err}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn run_requires_whole_input() {
        let err = run(grammar::basic_text, "word]]").unwrap_err();
        assert_eq!(err.position, 4);
        assert!(err.expected.contains(&"end of input".to_string()));
    }

    #[test]
    fn each_run_starts_with_no_links() {
        assert_eq!(extract_links("[[a]]").unwrap(), [Link::new("", "a", "")]);
        assert_eq!(extract_links("[[b]]").unwrap(), [Link::new("", "b", "")]);
        assert!(extract_links("no links").unwrap().is_empty());
    }

    #[test]
    fn extract_links_reports_unparsable_text() {
        let err = extract_links("ok\nbad ]] here").unwrap_err();
        assert_eq!((err.line, err.column), (2, 5));
    }

    #[test]
    fn parse_or_default_substitutes_on_failure() {
        assert_eq!(parse_or_default(String::new(), grammar::basic_text, "a|b"), "");
        assert_eq!(parse_or_default(String::new(), grammar::basic_text, "ab"), "ab");
    }
}
