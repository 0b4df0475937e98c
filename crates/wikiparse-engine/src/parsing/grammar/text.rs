//! # Text-Level Grammar
//!
//! Rules that produce ordinary text. Everything the surrounding rules do not
//! recognise ends up here, one run or one stray character at a time.
//!
//! ## Dispatch Order
//!
//! [`line_text`] and [`block_text`] are priority choices over:
//!
//! | Rule | Matches | Output |
//! |------|---------|--------|
//! | [`ignored_span`] | `<!-- -->`, `<tag>` | nothing |
//! | `internal_link` | `[[target\|alt]]` | link text |
//! | `external_link` | `[http://url title]` | title |
//! | `ignored_template` | `{{...}}` | nothing |
//! | [`loose_bracket`] | a single `[ ] { }` | the bracket |
//! | [`basic_text`] | a run of plain characters | the run, minus `''` markup |
//! | [`loose_punctuation`] | a single `\| : = < >` | the character |
//!
//! `block_text` also takes `\n` as text, so it spans lines.

use crate::parsing::error::PResult;
use crate::parsing::kinds::Markup;
use crate::parsing::parser::{Parser, TextRule};

use super::links::{external_link, internal_link};
use super::templates::ignored_template;

const LINE_RULES: &[TextRule] = &[
    ignored_span,
    internal_link,
    external_link,
    ignored_template,
    loose_bracket,
    basic_text,
    loose_punctuation,
];

const BLOCK_RULES: &[TextRule] = &[
    ignored_span,
    internal_link,
    external_link,
    ignored_template,
    loose_bracket,
    basic_text,
    loose_punctuation,
    newline,
];

/// Text on a single line; stops before the newline.
pub fn line_text(p: &mut Parser<'_>) -> PResult<String> {
    Ok(p.priority_choice(LINE_RULES))
}

/// Text that may span several lines.
pub fn block_text(p: &mut Parser<'_>) -> PResult<String> {
    Ok(p.priority_choice(BLOCK_RULES))
}

/// One or more HTML comments or tags, dropped from the output.
pub fn ignored_span(p: &mut Parser<'_>) -> PResult<String> {
    markup(p)?;
    while p.attempt(markup).is_ok() {}
    Ok(String::new())
}

fn markup(p: &mut Parser<'_>) -> PResult<()> {
    let comment = p.attempt(|p| {
        p.literal(Markup::COMMENT_OPEN)?;
        p.take_through(Markup::COMMENT_CLOSE)
    });
    if comment.is_ok() {
        return Ok(());
    }

    p.literal(Markup::TAG_OPEN)?;
    p.take_through(Markup::TAG_CLOSE)?;
    Ok(())
}

/// Characters that can appear in a run of [`basic_text`].
pub fn is_basic_char(c: char) -> bool {
    !matches!(c, '[' | ']' | '{' | '}' | '|' | '<' | '>' | ':' | '=' | '\n')
}

/// A run of plain characters with bold/italic quote markup removed.
pub fn basic_text(p: &mut Parser<'_>) -> PResult<String> {
    let run = p.take_while1(is_basic_char, "text")?;
    Ok(strip_quote_markup(run))
}

/// Removes `''` runs, then `'''` runs.
///
/// The first pass already eats the first two quotes of every `'''`, so bold
/// markup leaves a single `'` behind: `'''bold'''` becomes `'bold'`.
pub fn strip_quote_markup(text: &str) -> String {
    text.replace("''", "").replace("'''", "")
}

/// A single bracket that does not open a link or template and is not
/// doubled.
pub fn loose_bracket(p: &mut Parser<'_>) -> PResult<String> {
    let bracket = match p.peek() {
        Some(c @ ('[' | ']' | '{' | '}')) => c,
        _ => return Err(p.expect("bracket")),
    };

    // `[[` and `{{` are covered here; a single `[` can still open an
    // external link
    let doubled: String = [bracket, bracket].iter().collect();
    p.not_followed_by(|p| p.literal(&doubled), "doubled bracket")?;
    if bracket == '[' {
        p.not_followed_by(external_link, "external link")?;
    }
    p.satisfy(|c| c == bracket, "bracket")?;
    Ok(bracket.to_string())
}

/// A single separator character taken as text outside of the constructs
/// that give it meaning.
pub fn loose_punctuation(p: &mut Parser<'_>) -> PResult<String> {
    p.satisfy(|c| matches!(c, '|' | ':' | '=' | '<' | '>'), "punctuation")
        .map(String::from)
}

fn newline(p: &mut Parser<'_>) -> PResult<String> {
    p.literal("\n")?;
    Ok("\n".to_string())
}

/// A newline, or nothing at end of input.
pub fn end_of_line(p: &mut Parser<'_>) -> PResult<()> {
    if p.at_end() {
        return Ok(());
    }
    p.literal("\n")
}
