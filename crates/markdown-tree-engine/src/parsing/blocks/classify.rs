/// Tab stops are every four columns.
pub const TAB_STOP: usize = 4;

/// Lines indented this far (relative to their container) are code, not
/// block openers.
pub const CODE_INDENT: usize = 4;

/// Local facts about the unconsumed part of a line.
///
/// Each time a container prefix (`>` or list item indentation) is stripped,
/// a new `LineClass` is produced for the remainder. Tabs in the leading
/// whitespace are expanded to spaces using the remainder's absolute column,
/// so `indent` is always a column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Remainder text, leading whitespace expanded to spaces.
    pub text: String,
    /// Absolute column where `text` begins in the source line.
    pub col: usize,
    /// Number of leading spaces in `text`.
    pub indent: usize,
    /// Whether `text` is empty or whitespace only.
    pub is_blank: bool,
}

impl LineClass {
    /// Classifies `text`, which begins at absolute column `col`.
    pub fn new(text: &str, col: usize) -> Self {
        let text = expand_indent(text, col);
        let indent = text.bytes().take_while(|&b| b == b' ').count();
        let is_blank = text.trim().is_empty();
        Self {
            text,
            col,
            indent,
            is_blank,
        }
    }

    /// The text after the leading indentation.
    pub fn content(&self) -> &str {
        &self.text[self.indent..]
    }

    /// Drops `n` columns of leading indentation (at most `indent`).
    pub fn strip_columns(&self, n: usize) -> Self {
        let n = n.min(self.indent);
        Self {
            text: self.text[n..].to_string(),
            col: self.col + n,
            indent: self.indent - n,
            is_blank: self.is_blank,
        }
    }

    /// Classifies the text that follows the first `offset` bytes of `content()`.
    pub fn after(&self, offset: usize) -> Self {
        let content = self.content();
        let offset = offset.min(content.len());
        Self::new(&content[offset..], self.col + self.indent + offset)
    }

    /// Whether a block opener may start on this line.
    pub fn may_open(&self) -> bool {
        self.indent < CODE_INDENT && !self.is_blank
    }
}

/// Expands tabs in the leading whitespace of `s`, which begins at column `col`.
pub fn expand_indent(s: &str, col: usize) -> String {
    let ws_len = s
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    if !s.as_bytes()[..ws_len].contains(&b'\t') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + TAB_STOP);
    let mut column = col;
    for b in s[..ws_len].bytes() {
        let width = if b == b'\t' {
            TAB_STOP - column % TAB_STOP
        } else {
            1
        };
        out.extend(std::iter::repeat_n(' ', width));
        column += width;
    }
    out.push_str(&s[ws_len..]);
    out
}
