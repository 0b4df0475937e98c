//! Internal and external links.
//!
//! These are the only rules that write to the link accumulator. An internal
//! link records its [`Link`] once the closing `]]` has matched, so a
//! half-matched link never leaves a record behind after its checkpoint is
//! rewound.

use crate::models::{AnnotatedText, Link};
use crate::parsing::error::PResult;
use crate::parsing::kinds::{ExternalLink, WikiLink};
use crate::parsing::parser::{Parser, TextRule};

use super::templates::ignored_template;
use super::text::{block_text, ignored_span, loose_bracket, strip_quote_markup};

const ALT_TEXT_RULES: &[TextRule] = &[
    ignored_span,
    internal_link,
    external_link,
    ignored_template,
    loose_bracket,
    link_text,
];

const TITLE_RULES: &[TextRule] = &[ignored_span, link_text];

/// `[[target]]` or `[[target|alt text]]`.
///
/// Produces the alt text, else the page title, else nothing for links into
/// a hidden namespace such as `Category:`.
pub fn internal_link(p: &mut Parser<'_>) -> PResult<String> {
    p.literal(WikiLink::OPEN)?;
    let target = p.take_while1(WikiLink::is_target_char, "link target")?;
    let alt = match p.literal(WikiLink::ALIAS) {
        Ok(()) => Some(p.priority_choice(ALT_TEXT_RULES)),
        Err(_) => None,
    };
    p.literal(WikiLink::CLOSE)?;

    let link = Link::from_target(target);
    let text = if p.config().is_hidden_namespace(&link.namespace) {
        String::new()
    } else {
        alt.unwrap_or_else(|| link.page.clone())
    };
    p.record_link(link);
    Ok(text)
}

/// `[scheme://url title]`. The URL is dropped.
pub fn external_link(p: &mut Parser<'_>) -> PResult<String> {
    p.literal(ExternalLink::OPEN)?;
    let schemes = &p.config().url_schemes;
    if !schemes.iter().any(|scheme| p.literal(scheme).is_ok()) {
        return Err(p.expect("URL scheme"));
    }
    p.take_while1(ExternalLink::is_url_char, "URL")?;
    p.skip_spaces();
    let title = p.priority_choice(TITLE_RULES);
    p.literal(ExternalLink::CLOSE)?;

    if title.is_empty() {
        Ok(p.config().untitled_link_label.clone())
    } else {
        Ok(title)
    }
}

/// Plain text inside a link label, with quote markup removed.
pub fn link_text(p: &mut Parser<'_>) -> PResult<String> {
    let run = p.take_while1(
        |c| !matches!(c, '[' | ']' | '{' | '}' | '<' | '>' | '\n'),
        "link text",
    )?;
    Ok(strip_quote_markup(run))
}

/// Parses a block of text and returns the links it contained, newest first.
pub fn link_list(p: &mut Parser<'_>) -> PResult<Vec<Link>> {
    block_text(p)?;
    Ok(p.links().to_links())
}

/// Parses a block of text into an [`AnnotatedText`] whose annotations are
/// its links in the order they were recorded.
///
/// A link is recorded when its `]]` closes, so links nested in a label come
/// before the link that contains them. The links are kept out of the
/// enclosing run's accumulator.
pub fn annotated_text(p: &mut Parser<'_>) -> PResult<AnnotatedText> {
    let (text, mut links) = p.with_fresh_links(block_text)?;
    links.reverse();
    Ok(AnnotatedText::new(text, links))
}
