/// Bracketed external link `[http://example.com/ title]`.
///
/// The URL is discarded; only the title survives as text.
pub struct ExternalLink;

impl ExternalLink {
    pub const OPEN: &'static str = "[";
    pub const CLOSE: &'static str = "]";

    /// URL schemes recognised after the opening bracket.
    pub const DEFAULT_SCHEMES: [&'static str; 7] = [
        "http://", "https://", "ftp://", "news://", "irc://", "mailto:", "//",
    ];

    /// Characters allowed in the URL part.
    pub fn is_url_char(c: char) -> bool {
        !matches!(c, '[' | ']' | '{' | '}' | '<' | '>' | '|' | ' ' | '\n')
    }
}
