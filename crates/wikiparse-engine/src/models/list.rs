use serde::{Deserialize, Serialize};

/// A node of a parsed wikitext list.
///
/// Leaves carry the text of one line; containers hold the items of one
/// nesting level in source order. Trees are built by recursive descent, so
/// a node never refers back to an ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListNode {
    /// A line of an ordinary list (`*`, `#` or `:` markers).
    Item(String),
    /// A definition-list term (`;` marker).
    ListHeading(String),
    /// Items marked with `*`.
    BulletList(Vec<ListNode>),
    /// Items marked with `#`.
    OrderedList(Vec<ListNode>),
    /// Items marked with `:` or `;`.
    IndentedList(Vec<ListNode>),
}

impl ListNode {
    /// Child nodes of a container; empty for leaves.
    pub fn children(&self) -> &[ListNode] {
        match self {
            ListNode::BulletList(items)
            | ListNode::OrderedList(items)
            | ListNode::IndentedList(items) => items,
            ListNode::Item(_) | ListNode::ListHeading(_) => &[],
        }
    }

    /// Texts of the plain items at this node's own level.
    ///
    /// Nested containers and definition-list terms are skipped. A leaf item
    /// yields its own text.
    pub fn extract_top_level(&self) -> Vec<&str> {
        match self {
            ListNode::Item(text) => vec![text.as_str()],
            ListNode::ListHeading(_) => Vec::new(),
            _ => self
                .children()
                .iter()
                .filter_map(|child| match child {
                    ListNode::Item(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }
}
