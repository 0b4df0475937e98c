//! # Wikitext Grammar
//!
//! Grammar rules built on the [`Parser`](super::Parser) primitives. Each rule
//! is a function `fn(&mut Parser) -> PResult<T>` and can be handed to
//! [`run`](super::run) directly; rules that need an argument
//! ([`heading`], [`list_items`], [`known_template`]) are wrapped in a closure
//! or return one.
//!
//! ## Modules
//!
//! - **`text`**: plain text, ignored markup, loose brackets and punctuation
//! - **`links`**: internal and external links, the only rules that record
//!   links
//! - **`templates`**: `{{...}}` argument maps
//! - **`lists`**: `*`, `#`, `:` and `;` nested lists
//! - **`headings`**: `== Title ==` lines

pub mod headings;
pub mod links;
pub mod lists;
pub mod templates;
pub mod text;

pub use headings::{any_heading, heading};
pub use links::{annotated_text, external_link, internal_link, link_list, link_text};
pub use lists::{list, list_item, list_items};
pub use templates::{ignored_template, known_template, template};
pub use text::{
    basic_text, block_text, end_of_line, ignored_span, is_basic_char, line_text,
    loose_bracket, loose_punctuation, strip_quote_markup,
};
