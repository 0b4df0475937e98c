pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: &'static str = "|";

    /// Characters that cannot appear in a link target.
    pub fn is_target_char(c: char) -> bool {
        !matches!(c, '[' | ']' | '{' | '}' | '|' | '<' | '>' | '\n')
    }
}
