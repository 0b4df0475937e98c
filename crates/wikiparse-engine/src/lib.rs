pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{AnnotatedText, Link, ListNode, TemplateData};
pub use parsing::{
    GrammarConfig, ParseError, extract_links, parse_or_default, run, run_with_config,
};
