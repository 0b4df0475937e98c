use crate::models::Link;

/// Links recorded during one parse run, newest first.
///
/// Internally the newest link sits at the end of the vector, which lets the
/// parser roll back an abandoned alternative by truncating to the length it
/// saw at its checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAccumulator {
    links: Vec<Link>,
}

impl LinkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every recorded link.
    pub fn reset(&mut self) {
        self.links.clear();
    }

    /// Prepends a link.
    pub fn record(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Iterates the links, most recently recorded first.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Snapshot of the links, most recently recorded first.
    pub fn to_links(&self) -> Vec<Link> {
        self.iter().cloned().collect()
    }

    /// The links, most recently recorded first.
    pub fn into_links(mut self) -> Vec<Link> {
        self.links.reverse();
        self.links
    }

    /// Forgets links recorded after the accumulator had `len` entries.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.links.truncate(len);
    }
}
