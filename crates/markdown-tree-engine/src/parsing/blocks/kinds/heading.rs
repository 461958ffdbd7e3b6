/// ATX (`# Title`) and setext (`Title` + `===`) heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading from indentation-stripped `content`.
    ///
    /// Returns the level and the heading text with any closing `#` run
    /// removed. The opening run must be followed by whitespace or the end of
    /// the line; the closing run must be preceded by whitespace.
    pub fn atx(content: &str) -> Option<(u8, String)> {
        let level = content.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &content[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }

        let trimmed = rest.trim();
        let without_closing = trimmed.trim_end_matches('#');
        let text = if without_closing.is_empty() {
            ""
        } else if without_closing.len() < trimmed.len() {
            if without_closing.ends_with([' ', '\t']) {
                without_closing.trim_end()
            } else {
                trimmed
            }
        } else {
            trimmed
        };
        Some((level as u8, text.to_string()))
    }

    /// Returns the setext level for an underline: `=` is 1, `-` is 2.
    pub fn setext_level(content: &str) -> Option<u8> {
        let t = content.trim_end();
        if t.is_empty() {
            return None;
        }
        if t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }
}
