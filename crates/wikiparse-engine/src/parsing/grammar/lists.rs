//! Nested lists.
//!
//! A list is read by recursive descent over marker prefixes. `list_items`
//! collects consecutive lines that start with exactly `marker`; before
//! reading a line as a leaf, `list_item` tries each one-character extension
//! of the prefix as a sublist.
//!
//! ```text
//! * a          BulletList [
//! ** b           Item "a",
//! *# c           BulletList [ Item "b" ],
//! * d            OrderedList [ Item "c" ],
//!                Item "d" ]
//! ```

use crate::models::ListNode;
use crate::parsing::error::PResult;
use crate::parsing::kinds::ListMarker;
use crate::parsing::parser::Parser;

use super::text::{end_of_line, line_text};

/// A list of any kind starting at the current line.
pub fn list(p: &mut Parser<'_>) -> PResult<ListNode> {
    for marker in ListMarker::ALL {
        let prefix = marker.symbol().to_string();
        if let Ok(node) = p.attempt(|p| list_items(p, &prefix)) {
            return Ok(node);
        }
    }
    Err(p.expect("list"))
}

/// One or more items sharing the prefix `marker`.
pub fn list_items(p: &mut Parser<'_>, marker: &str) -> PResult<ListNode> {
    let Some(kind) = ListMarker::of_prefix(marker) else {
        return Err(p.expect("list marker"));
    };
    p.look_ahead(|p| p.literal(marker))?;

    let mut items = vec![list_item(p, marker)?];
    while let Ok(item) = p.attempt(|p| list_item(p, marker)) {
        items.push(item);
    }
    Ok(kind.container(items))
}

/// A sublist one level deeper than `marker`, or a single line of text.
pub fn list_item(p: &mut Parser<'_>, marker: &str) -> PResult<ListNode> {
    for deeper in ListMarker::ALL {
        let prefix = deeper.extend(marker);
        if let Ok(node) = p.attempt(|p| list_items(p, &prefix)) {
            return Ok(node);
        }
    }

    let Some(kind) = ListMarker::of_prefix(marker) else {
        return Err(p.expect("list marker"));
    };
    p.literal(marker)?;
    p.skip_spaces();
    let text = line_text(p)?;
    end_of_line(p)?;
    Ok(kind.leaf(text))
}
