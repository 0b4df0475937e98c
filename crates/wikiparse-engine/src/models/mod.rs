pub mod annotated_text;
pub mod link;
pub mod list;
pub mod template;

pub use annotated_text::AnnotatedText;
pub use link::Link;
pub use list::ListNode;
pub use template::{TEMPLATE_NAME_KEY, TemplateData, template_name};
