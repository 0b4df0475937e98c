//! Section headings `== Title ==`.

use crate::parsing::error::PResult;
use crate::parsing::kinds::Heading;
use crate::parsing::parser::{Parser, TextRule};

use super::links::{external_link, internal_link};
use super::templates::ignored_template;
use super::text::{basic_text, ignored_span, loose_bracket};

const HEADING_RULES: &[TextRule] = &[
    ignored_span,
    internal_link,
    external_link,
    ignored_template,
    loose_bracket,
    basic_text,
];

/// A heading delimited by exactly `level` `=` on each side, ending the line.
///
/// Returns the title without trailing whitespace.
pub fn heading(p: &mut Parser<'_>, level: usize) -> PResult<String> {
    let delimiter = Heading::delimiter(level);
    p.literal(&delimiter)?;
    p.skip_spaces();
    let title = p.priority_choice(HEADING_RULES);
    p.skip_spaces();
    p.literal(&delimiter)?;
    p.skip_spaces();
    p.literal("\n")?;
    Ok(title.trim_end().to_string())
}

/// A heading of any level, deepest first.
pub fn any_heading(p: &mut Parser<'_>) -> PResult<(usize, String)> {
    for level in (1..=Heading::MAX_LEVEL).rev() {
        if let Ok(title) = p.attempt(|p| heading(p, level)) {
            return Ok((level, title));
        }
    }
    Err(p.expect("heading"))
}
