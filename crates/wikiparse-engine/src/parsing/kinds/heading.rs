pub struct Heading;

impl Heading {
    pub const DELIMITER: char = '=';
    pub const MAX_LEVEL: usize = 6;

    /// The `=` run that opens and closes a heading of `level`.
    pub fn delimiter(level: usize) -> String {
        Self::DELIMITER.to_string().repeat(level)
    }
}
