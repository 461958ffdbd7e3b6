use crate::parsing::blocks::classify::LineClass;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in the builder.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Whether the line opens (or continues) a quote.
    pub fn starts(line: &LineClass) -> bool {
        line.indent < 4 && line.content().as_bytes().first() == Some(&Self::PREFIX)
    }

    /// Strips one `>` marker and a single following space or tab column.
    ///
    /// Returns `None` when the line does not carry a marker at this level.
    pub fn strip_marker(line: &LineClass) -> Option<LineClass> {
        if !Self::starts(line) {
            return None;
        }
        let rest = line.after(1);
        Some(if rest.indent > 0 {
            rest.strip_columns(1)
        } else {
            rest
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> Option<String> {
        BlockQuote::strip_marker(&LineClass::new(s, 0)).map(|l| l.text)
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(strip("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(strip("> hello").as_deref(), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_marker() {
        assert_eq!(strip("> > hello").as_deref(), Some("> hello"));
        assert_eq!(strip(">> hello").as_deref(), Some("> hello"));
    }

    #[test]
    fn strip_only_one_space() {
        assert_eq!(strip(">   code").as_deref(), Some("  code"));
    }

    #[test]
    fn four_spaces_is_not_a_marker() {
        assert_eq!(strip("    > hello"), None);
        assert_eq!(strip("   > hello").as_deref(), Some("hello"));
    }

    #[test]
    fn tab_after_marker_counts_as_columns() {
        // `>` at column 0, tab expands to columns 1..4, one column is the marker's space
        assert_eq!(strip(">\tcode").as_deref(), Some("  code"));
    }
}
