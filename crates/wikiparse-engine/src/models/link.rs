use serde::{Deserialize, Serialize};

/// A reference recorded from an internal link such as `[[w:en:Word#Noun]]`.
///
/// All three fields are derived from the raw link target and never edited
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Everything before the last `:` of the target; empty for the main namespace.
    pub namespace: String,
    /// The target page title.
    pub page: String,
    /// The anchor after the first `#`; empty when the link has none.
    pub section: String,
}

impl Link {
    pub fn new(
        namespace: impl Into<String>,
        page: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            page: page.into(),
            section: section.into(),
        }
    }

    /// Splits a raw link target into namespace, page and section.
    ///
    /// The namespace split uses the *last* colon, so `w:en:Word` lands in
    /// namespace `w:en`. The section split uses the *first* `#` of the
    /// remaining local part.
    pub fn from_target(target: &str) -> Self {
        let (namespace, local) = target.rsplit_once(':').unwrap_or(("", target));
        let (page, section) = local.split_once('#').unwrap_or((local, ""));
        Self::new(namespace, page, section)
    }

    /// True when the link points into the main namespace.
    pub fn is_main_namespace(&self) -> bool {
        self.namespace.is_empty()
    }
}
