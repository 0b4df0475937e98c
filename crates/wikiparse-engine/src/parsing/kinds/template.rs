pub struct Template;

impl Template {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    pub const SEPARATOR: &'static str = "|";
    pub const ASSIGN: &'static str = "=";

    /// Characters allowed in a `name=` argument prefix.
    pub fn is_name_char(c: char) -> bool {
        !matches!(c, '=' | '|' | '{' | '}' | '[' | ']' | '<' | '>' | '\n')
    }

    /// Characters allowed in a run of plain argument text.
    pub fn is_value_char(c: char) -> bool {
        !matches!(c, '[' | ']' | '{' | '}' | '|' | '<' | '>')
    }
}
