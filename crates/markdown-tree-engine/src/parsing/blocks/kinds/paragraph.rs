/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Their lines are buffered without leading
/// indentation and joined with `\n` when the paragraph closes.
pub struct Paragraph;

impl Paragraph {
    /// Joins buffered lines into the paragraph's raw inline text.
    ///
    /// Trailing whitespace of the last line is dropped; it can never form a
    /// hard line break.
    pub fn join(lines: &[String]) -> String {
        lines.join("\n").trim_end().to_string()
    }
}
