use crate::models::ListNode;

/// One step of a list marker prefix such as `#*:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered,
    Indented,
    Definition,
}

impl ListMarker {
    /// Order in which deeper sublists are tried.
    pub const ALL: [ListMarker; 4] = [
        ListMarker::Bullet,
        ListMarker::Ordered,
        ListMarker::Indented,
        ListMarker::Definition,
    ];

    pub fn symbol(self) -> char {
        match self {
            ListMarker::Bullet => '*',
            ListMarker::Ordered => '#',
            ListMarker::Indented => ':',
            ListMarker::Definition => ';',
        }
    }

    /// The marker kind a prefix ends with, if any.
    pub fn of_prefix(prefix: &str) -> Option<ListMarker> {
        let last = prefix.chars().last()?;
        Self::ALL.into_iter().find(|m| m.symbol() == last)
    }

    /// Appends this marker to an existing prefix.
    pub fn extend(self, prefix: &str) -> String {
        let mut deeper = String::with_capacity(prefix.len() + 1);
        deeper.push_str(prefix);
        deeper.push(self.symbol());
        deeper
    }

    /// Wraps the items read under a prefix ending with this marker.
    pub fn container(self, items: Vec<ListNode>) -> ListNode {
        match self {
            ListMarker::Bullet => ListNode::BulletList(items),
            ListMarker::Ordered => ListNode::OrderedList(items),
            ListMarker::Indented | ListMarker::Definition => ListNode::IndentedList(items),
        }
    }

    /// Wraps the text of a single line under a prefix ending with this marker.
    pub fn leaf(self, text: String) -> ListNode {
        match self {
            ListMarker::Definition => ListNode::ListHeading(text),
            _ => ListNode::Item(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_kind_comes_from_last_symbol() {
        assert_eq!(ListMarker::of_prefix("*#"), Some(ListMarker::Ordered));
        assert_eq!(ListMarker::of_prefix(";"), Some(ListMarker::Definition));
        assert_eq!(ListMarker::of_prefix(""), None);
    }

    #[test]
    fn extend_appends_symbol() {
        assert_eq!(ListMarker::Indented.extend("*"), "*:");
    }
}
