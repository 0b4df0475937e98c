/// HTML comments and tags. Their content never reaches the extracted text.
pub struct Markup;

impl Markup {
    pub const COMMENT_OPEN: &'static str = "<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";
    pub const TAG_OPEN: &'static str = "<";
    pub const TAG_CLOSE: &'static str = ">";
}
