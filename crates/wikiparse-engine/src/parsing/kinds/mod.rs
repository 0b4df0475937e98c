//! # Syntax Kinds
//!
//! Types that own the delimiters of each wikitext construct. Grammar rules
//! refer to these constants and never spell out `[[` or `{{` themselves.
//!
//! ## Types
//!
//! - **`WikiLink`**: `[[target|alt]]`
//! - **`ExternalLink`**: `[scheme://path title]`
//! - **`Template`**: `{{name|arg|key=value}}`
//! - **`Markup`**: HTML comments and tags, which are dropped
//! - **`ListMarker`**: `*`, `#`, `:` and `;` line prefixes
//! - **`Heading`**: `==`-delimited section titles

pub mod external_link;
pub mod heading;
pub mod list_marker;
pub mod markup;
pub mod template;
pub mod wikilink;

pub use external_link::ExternalLink;
pub use heading::Heading;
pub use list_marker::ListMarker;
pub use markup::Markup;
pub use template::Template;
pub use wikilink::WikiLink;
