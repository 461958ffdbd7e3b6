use crate::parsing::{cursor::Cursor, decode::decode};

/// Link and image syntax shared by inline links and reference definitions.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE: &'static [u8; 2] = b"![";
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
    pub const ANGLE_OPEN: u8 = b'<';
    pub const ANGLE_CLOSE: u8 = b'>';
    /// Labels longer than this are never definitions.
    pub const MAX_LABEL_LEN: usize = 999;

    /// Parses `[label]` at the cursor, returning the raw label text.
    ///
    /// Labels may not contain unescaped brackets and may not be blank.
    pub fn label<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        let saved = cur.i;
        cur.bump();
        let start = cur.i;
        loop {
            match cur.peek() {
                None | Some(Self::OPEN) => {
                    cur.i = saved;
                    return None;
                }
                Some(Self::CLOSE) => break,
                Some(b'\\') => cur.bump_n(if cur.peek_at(1).is_some() { 2 } else { 1 }),
                Some(_) => cur.bump_n(1),
            }
        }
        let label = cur.since(start);
        cur.bump();
        if label.trim().is_empty() || label.len() > Self::MAX_LABEL_LEN {
            cur.i = saved;
            return None;
        }
        Some(label)
    }

    /// Parses a link destination at the cursor.
    ///
    /// `<...>` destinations are taken verbatim with surrounding whitespace
    /// trimmed. Bare destinations run to the first whitespace or unbalanced
    /// `)` and have escapes and references decoded.
    pub fn destination(cur: &mut Cursor<'_>) -> Option<String> {
        let saved = cur.i;
        if cur.peek() == Some(Self::ANGLE_OPEN) {
            cur.bump();
            let start = cur.i;
            cur.skip_while(|b| b != Self::ANGLE_CLOSE && b != Self::ANGLE_OPEN);
            if cur.peek() != Some(Self::ANGLE_CLOSE) {
                cur.i = saved;
                return None;
            }
            let inner = cur.since(start).trim().to_string();
            cur.bump();
            return Some(inner);
        }

        let start = cur.i;
        let mut depth = 0usize;
        while let Some(b) = cur.peek() {
            match b {
                b'\\' if cur.peek_at(1).is_some_and(|n| n.is_ascii_punctuation()) => {
                    cur.bump_n(2);
                    continue;
                }
                Self::TARGET_OPEN => depth += 1,
                Self::TARGET_CLOSE if depth == 0 => break,
                Self::TARGET_CLOSE => depth -= 1,
                b if b.is_ascii_whitespace() || b.is_ascii_control() => break,
                _ => {}
            }
            cur.bump();
        }
        if depth != 0 {
            cur.i = saved;
            return None;
        }
        Some(decode(cur.since(start)).into_owned())
    }

    /// Parses a `"title"`, `'title'` or `(title)` at the cursor.
    pub fn title(cur: &mut Cursor<'_>) -> Option<String> {
        let close = match cur.peek()? {
            b'"' => b'"',
            b'\'' => b'\'',
            Self::TARGET_OPEN => Self::TARGET_CLOSE,
            _ => return None,
        };
        let saved = cur.i;
        cur.bump();
        let start = cur.i;
        loop {
            match cur.peek() {
                None => {
                    cur.i = saved;
                    return None;
                }
                Some(b'\\') => cur.bump_n(if cur.peek_at(1).is_some() { 2 } else { 1 }),
                Some(b) if b == close => break,
                Some(Self::TARGET_OPEN) if close == Self::TARGET_CLOSE => {
                    cur.i = saved;
                    return None;
                }
                Some(_) => cur.bump_n(1),
            }
        }
        let raw = cur.since(start);
        cur.bump();
        Some(decode(raw).into_owned())
    }

    /// Skips spaces and tabs and at most one line ending.
    ///
    /// Returns whether anything was skipped.
    pub fn skip_space(cur: &mut Cursor<'_>) -> bool {
        let start = cur.i;
        cur.skip_blanks();
        if cur.peek() == Some(b'\n') {
            cur.bump();
            cur.skip_blanks();
        }
        cur.i > start
    }

    /// Parses an inline target `(dest "title")` at the cursor.
    pub fn inline_target(cur: &mut Cursor<'_>) -> Option<(String, Option<String>)> {
        if cur.peek() != Some(Self::TARGET_OPEN) {
            return None;
        }
        let saved = cur.i;
        cur.bump();
        Self::skip_space(cur);

        let href = if cur.peek() == Some(Self::TARGET_CLOSE) {
            String::new()
        } else {
            match Self::destination(cur) {
                Some(href) => href,
                None => {
                    cur.i = saved;
                    return None;
                }
            }
        };

        let spaced = Self::skip_space(cur);
        let title = if spaced && cur.peek() != Some(Self::TARGET_CLOSE) {
            match Self::title(cur) {
                Some(t) => Some(t),
                None => {
                    cur.i = saved;
                    return None;
                }
            }
        } else {
            None
        };
        Self::skip_space(cur);

        if cur.peek() != Some(Self::TARGET_CLOSE) {
            cur.i = saved;
            return None;
        }
        cur.bump();
        Some((href, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn target(s: &str) -> Option<(String, Option<String>, usize)> {
        let mut cur = Cursor::new(s);
        Link::inline_target(&mut cur).map(|(h, t)| (h, t, cur.i))
    }

    #[rstest]
    #[case::bare("(/url)", Some(("/url", None)))]
    #[case::with_title(r#"(/url "the title")"#, Some(("/url", Some("the title"))))]
    #[case::single_quotes("(/url 'x')", Some(("/url", Some("x"))))]
    #[case::paren_title("(/url (x))", Some(("/url", Some("x"))))]
    #[case::empty("()", Some(("", None)))]
    #[case::angle("(< /my url >)", Some(("/my url", None)))]
    #[case::angle_keeps_escapes(r"(<a\*b>)", Some((r"a\*b", None)))]
    #[case::balanced_parens("(foo(and(bar)))", Some(("foo(and(bar))", None)))]
    #[case::decoded(r"(/a\*b&amp;c)", Some(("/a*b&c", None)))]
    #[case::space_in_dest("(/my url)", None)]
    #[case::unclosed("(/url", None)]
    #[case::quote_without_space_is_dest(r#"(/url"t")"#, Some((r#"/url"t""#, None)))]
    #[case::newline_around("(\n/url\n)", Some(("/url", None)))]
    fn parses_inline_targets(#[case] input: &str, #[case] expected: Option<(&str, Option<&str>)>) {
        let got = target(input);
        assert_eq!(
            got.as_ref().map(|(h, t, _)| (h.as_str(), t.as_deref())),
            expected
        );
        if let Some((_, _, end)) = got {
            assert_eq!(end, input.len());
        }
    }

    #[rstest]
    #[case("[foo]", Some("foo"))]
    #[case(r"[a\]b]", Some(r"a\]b"))]
    #[case("[a[b]", None)]
    #[case("[  ]", None)]
    #[case("[open", None)]
    fn parses_labels(#[case] input: &str, #[case] expected: Option<&str>) {
        let mut cur = Cursor::new(input);
        assert_eq!(Link::label(&mut cur), expected);
    }
}
