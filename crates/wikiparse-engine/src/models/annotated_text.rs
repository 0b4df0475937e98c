use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::link::Link;

/// Text paired with the links that were found while producing it.
///
/// `AnnotatedText` is a monoid: [`AnnotatedText::default`] is the identity and
/// `+` concatenates the text and the annotation lists component-wise.
/// Annotations keep insertion order and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedText {
    text: String,
    annotations: Vec<Link>,
}

impl AnnotatedText {
    pub fn new(text: impl Into<String>, annotations: Vec<Link>) -> Self {
        Self {
            text: text.into(),
            annotations,
        }
    }

    /// Plain text with no annotations.
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(s, Vec::new())
    }

    /// Concatenates every element in order. An empty input gives the identity.
    pub fn concat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = AnnotatedText>,
    {
        items.into_iter().fold(Self::default(), Add::add)
    }

    /// Concatenates every element, appending a newline after each one
    /// (the last included).
    pub fn join<I>(items: I) -> Self
    where
        I: IntoIterator<Item = AnnotatedText>,
    {
        items
            .into_iter()
            .fold(Self::default(), |acc, item| acc + item + Self::text("\n"))
    }

    /// Applies `f` to the text, carrying the annotations through untouched.
    pub fn map_text(self, f: impl FnOnce(String) -> String) -> Self {
        Self {
            text: f(self.text),
            annotations: self.annotations,
        }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn get_annotations(&self) -> &[Link] {
        &self.annotations
    }

    pub fn into_parts(self) -> (String, Vec<Link>) {
        (self.text, self.annotations)
    }
}

impl Add for AnnotatedText {
    type Output = AnnotatedText;

    fn add(mut self, rhs: AnnotatedText) -> AnnotatedText {
        self.text.push_str(&rhs.text);
        self.annotations.extend(rhs.annotations);
        self
    }
}

impl FromIterator<AnnotatedText> for AnnotatedText {
    fn from_iter<I: IntoIterator<Item = AnnotatedText>>(iter: I) -> Self {
        Self::concat(iter)
    }
}

impl From<&str> for AnnotatedText {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for AnnotatedText {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn linked(text: &str, page: &str) -> AnnotatedText {
        AnnotatedText::new(text, vec![Link::new("", page, "")])
    }

    #[test]
    fn concat_of_nothing_is_identity() {
        let empty = AnnotatedText::concat(Vec::<AnnotatedText>::new());
        assert_eq!(empty, AnnotatedText::default());
        assert_eq!(empty.get_text(), "");
        assert!(empty.get_annotations().is_empty());
    }

    #[test]
    fn concat_keeps_annotation_order_and_duplicates() {
        let joined = AnnotatedText::concat([linked("a", "x"), linked("b", "y"), linked("c", "x")]);
        assert_eq!(joined.get_text(), "abc");
        let pages: Vec<_> = joined
            .get_annotations()
            .iter()
            .map(|l| l.page.as_str())
            .collect();
        assert_eq!(pages, ["x", "y", "x"]);
    }

    #[test]
    fn join_terminates_every_line() {
        let joined = AnnotatedText::join([linked("a", "x"), "b".into()]);
        assert_eq!(joined.get_text(), "a\nb\n");
        assert_eq!(joined.get_annotations(), &[Link::new("", "x", "")]);
    }

    #[test]
    fn join_of_nothing_is_identity() {
        let empty = AnnotatedText::join(Vec::<AnnotatedText>::new());
        assert_eq!(empty, AnnotatedText::default());
    }

    #[test]
    fn map_text_leaves_annotations_alone() {
        let mapped = linked("word", "word").map_text(|t| t.to_uppercase());
        assert_eq!(mapped.get_text(), "WORD");
        assert_eq!(mapped.get_annotations(), &[Link::new("", "word", "")]);
    }

    #[test]
    fn collects_from_iterator() {
        let collected: AnnotatedText = ["a", "b"].into_iter().map(AnnotatedText::from).collect();
        assert_eq!(collected, AnnotatedText::text("ab"));
    }
}
