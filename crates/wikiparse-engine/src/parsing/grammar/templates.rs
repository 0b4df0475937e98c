//! Template invocations `{{name|positional|key=value}}`.
//!
//! Arguments land in a [`TemplateData`] map. Positional arguments are keyed
//! by a running counter, named ones by their `key=` prefix; the first
//! occurrence of a key wins. Templates do not nest: a `{{` inside an argument
//! makes the enclosing template fail to match.

use crate::models::{TEMPLATE_NAME_KEY, TemplateData};
use crate::parsing::error::{Backtrack, PResult};
use crate::parsing::kinds::Template;
use crate::parsing::parser::{Parser, TextRule};

use super::links::{external_link, internal_link};
use super::text::{ignored_span, loose_bracket};

const VALUE_RULES: &[TextRule] = &[
    ignored_span,
    internal_link,
    external_link,
    loose_bracket,
    value_text,
    loose_angle,
];

/// An anonymous template; its name is stored as positional argument `"0"`.
///
/// A template nested inside an argument, as in `{{t|ja|{{ruby|x}}}}`, does
/// not match, and its doubled `{{` is not loose text either. A run over text
/// containing one fails as a whole, so callers that must get through such
/// text should parse it line by line or entry by entry and skip the units
/// that fail.
pub fn template(p: &mut Parser<'_>) -> PResult<TemplateData> {
    p.literal(Template::OPEN)?;
    let mut data = TemplateData::new();
    template_args(p, 0, &mut data)?;
    Ok(data)
}

/// A template whose data is not wanted. Links inside it are still recorded.
pub fn ignored_template(p: &mut Parser<'_>) -> PResult<String> {
    template(p)?;
    Ok(String::new())
}

/// A template invocation of `name` specifically.
///
/// `name` is stored under [`TEMPLATE_NAME_KEY`] and positional arguments
/// count from 1.
pub fn known_template<'n>(
    name: &'n str,
) -> impl Fn(&mut Parser<'_>) -> PResult<TemplateData> + 'n {
    move |p: &mut Parser<'_>| {
        p.literal(Template::OPEN)?;
        p.literal(name)?;

        let mut data = TemplateData::new();
        data.insert(TEMPLATE_NAME_KEY.to_string(), name.to_string());
        if p.literal(Template::CLOSE).is_ok() {
            return Ok(data);
        }
        p.literal(Template::SEPARATOR)?;
        template_args(p, 1, &mut data)?;
        Ok(data)
    }
}

/// Arguments up to and including the closing `}}`.
fn template_args(p: &mut Parser<'_>, mut offset: usize, data: &mut TemplateData) -> PResult<()> {
    loop {
        let key = match p.attempt(arg_name) {
            Ok(name) => name.to_string(),
            Err(Backtrack) => {
                let key = offset.to_string();
                offset += 1;
                key
            }
        };
        let value = p.priority_choice(VALUE_RULES);
        data.entry(key).or_insert(value);

        if p.literal(Template::CLOSE).is_ok() {
            return Ok(());
        }
        p.literal(Template::SEPARATOR)?;
    }
}

fn arg_name<'a>(p: &mut Parser<'a>) -> PResult<&'a str> {
    let name = p.take_while1(Template::is_name_char, "argument name")?;
    p.literal(Template::ASSIGN)?;
    Ok(name)
}

fn value_text(p: &mut Parser<'_>) -> PResult<String> {
    p.take_while1(Template::is_value_char, "argument text")
        .map(str::to_string)
}

fn loose_angle(p: &mut Parser<'_>) -> PResult<String> {
    p.satisfy(|c| matches!(c, '<' | '>'), "angle bracket")
        .map(String::from)
}
