/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them and
/// their content is never decoded.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Normalizes the raw text between matching backtick runs.
    ///
    /// Line endings become spaces. Unless the content is all spaces, one
    /// leading and one trailing space are each stripped.
    pub fn content(raw: &str) -> String {
        let s = raw.replace('\n', " ");
        if s.bytes().all(|b| b == b' ') {
            return s;
        }
        let s = s.strip_prefix(' ').unwrap_or(&s);
        let s = s.strip_suffix(' ').unwrap_or(s);
        s.to_string()
    }
}
