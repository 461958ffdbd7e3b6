//! # Entity/Escape Decoder
//!
//! Decodes backslash escapes and HTML character references in literal text.
//! Code span and code block content never passes through here.
//!
//! - `\X` with `X` ASCII punctuation becomes `X`; any other backslash is kept.
//! - `&name;` decodes when `name` is in the HTML5 named reference table.
//! - `&#NNN;` (1-7 digits) and `&#xHHH;` / `&#XHHH;` (1-6 hex digits) decode
//!   to the code point; zero, surrogates and values past U+10FFFF become
//!   U+FFFD.
//!
//! Anything malformed passes through literally.

use std::borrow::Cow;

/// Longest named reference we try to look up (`&CounterClockwiseContourIntegral;`).
const MAX_NAME_LEN: usize = 32;

/// Returns true for characters a backslash may escape.
pub fn is_escapable(b: u8) -> bool {
    b.is_ascii_punctuation()
}

/// Decodes escapes and character references in `text`.
///
/// Borrows when there is nothing to decode.
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| b == b'\\' || b == b'&') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;
    let mut literal_start = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() && is_escapable(bytes[i + 1]) => {
                out.push_str(&text[literal_start..i]);
                out.push(bytes[i + 1] as char);
                i += 2;
                literal_start = i;
            }
            b'&' => {
                if let Some((decoded, len)) = char_reference(&text[i..]) {
                    out.push_str(&text[literal_start..i]);
                    out.push_str(&decoded);
                    i += len;
                    literal_start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    out.push_str(&text[literal_start..]);
    Cow::Owned(out)
}

/// Parses a character reference at the start of `s` (which begins with `&`).
///
/// Returns the decoded text and the number of bytes consumed.
pub fn char_reference(s: &str) -> Option<(String, usize)> {
    let b = s.as_bytes();
    if b.first() != Some(&b'&') {
        return None;
    }

    if b.get(1) == Some(&b'#') {
        let (radix, digits_start, max_digits) = match b.get(2) {
            Some(b'x' | b'X') => (16, 3, 6),
            _ => (10, 2, 7),
        };
        let mut end = digits_start;
        while end < b.len() && end - digits_start < max_digits && (b[end] as char).is_digit(radix)
        {
            end += 1;
        }
        if end == digits_start || b.get(end) != Some(&b';') {
            return None;
        }
        let code = u32::from_str_radix(&s[digits_start..end], radix).ok()?;
        let ch = match code {
            0 => '\u{FFFD}',
            _ => char::from_u32(code).unwrap_or('\u{FFFD}'),
        };
        return Some((ch.to_string(), end + 1));
    }

    let mut end = 1usize;
    while end < b.len() && end <= MAX_NAME_LEN && b[end].is_ascii_alphanumeric() {
        end += 1;
    }
    if end == 1 || b.get(end) != Some(&b';') || !b[1].is_ascii_alphabetic() {
        return None;
    }
    let candidate = &s[..=end];
    match html_escape::decode_html_entities(candidate) {
        Cow::Owned(decoded) if decoded != candidate => Some((decoded, end + 1)),
        _ => None,
    }
}
