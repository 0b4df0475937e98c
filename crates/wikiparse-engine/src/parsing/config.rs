use serde::{Deserialize, Serialize};

use super::kinds::ExternalLink;

/// Tunable parts of the grammar.
///
/// The defaults describe English Wiktionary. Every field has a default, so a
/// partial `[grammar]` table in a config file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Schemes accepted right after the `[` of an external link.
    pub url_schemes: Vec<String>,
    /// Namespaces whose internal links are recorded but contribute no text.
    pub hidden_namespaces: Vec<String>,
    /// Text produced by an external link that has no title.
    pub untitled_link_label: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            url_schemes: ExternalLink::DEFAULT_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            hidden_namespaces: ["Image", "Category", "File"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            untitled_link_label: "[link]".to_string(),
        }
    }
}

impl GrammarConfig {
    pub fn is_hidden_namespace(&self, namespace: &str) -> bool {
        self.hidden_namespaces.iter().any(|ns| ns == namespace)
    }
}
