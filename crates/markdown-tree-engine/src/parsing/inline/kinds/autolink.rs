use std::sync::OnceLock;

use regex::Regex;

/// Autolinks: `<scheme:...>` and `<user@host>`.
pub struct Autolink;

impl Autolink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const MAILTO: &'static str = "mailto:";

    /// Recognizes an autolink at the start of `s` (which begins with `<`).
    ///
    /// Returns the raw content, the href and the number of bytes consumed.
    /// Content is never decoded. Any whitespace inside the brackets rejects
    /// the autolink.
    pub fn parse(s: &str) -> Option<(&str, String, usize)> {
        static URI: OnceLock<Regex> = OnceLock::new();
        static EMAIL: OnceLock<Regex> = OnceLock::new();

        let rest = s.strip_prefix(Self::OPEN as char)?;
        let end = rest.find(|c: char| c == '<' || c == '>' || c.is_whitespace())?;
        if rest.as_bytes()[end] != Self::CLOSE {
            return None;
        }
        let content = &rest[..end];

        let uri = URI.get_or_init(|| {
            Regex::new(r"^[A-Za-z][A-Za-z0-9.+-]{1,31}:[^\x00-\x20<>]*$").expect("Invalid URI regex")
        });
        let email = EMAIL.get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .expect("Invalid email regex")
        });

        let href = if uri.is_match(content) {
            content.to_string()
        } else if email.is_match(content) {
            format!("{}{content}", Self::MAILTO)
        } else {
            return None;
        };
        Some((content, href, end + 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::http("<http://foo.bar.baz>", Some("http://foo.bar.baz"))]
    #[case::custom_scheme("<irc://foo.bar:2233/baz>", Some("irc://foo.bar:2233/baz"))]
    #[case::email("<foo@bar.example.com>", Some("mailto:foo@bar.example.com"))]
    #[case::entity_not_decoded("<http://a?x=1&amp;y=2>", Some("http://a?x=1&amp;y=2"))]
    #[case::embedded_space("<http://foo.bar/baz bim>", None)]
    #[case::no_scheme("<foo.bar>", None)]
    #[case::one_letter_scheme("<m:abc>", None)]
    #[case::unclosed("<http://foo", None)]
    #[case::empty("<>", None)]
    fn recognizes(#[case] input: &str, #[case] href: Option<&str>) {
        let got = Autolink::parse(input);
        assert_eq!(got.as_ref().map(|(_, h, _)| h.as_str()), href);
        if let Some((_, _, len)) = got {
            assert_eq!(len, input.len());
        }
    }

    #[test]
    fn consumes_only_the_autolink() {
        let (content, _, len) = Autolink::parse("<a@b.c> rest").unwrap();
        assert_eq!(content, "a@b.c");
        assert_eq!(len, 7);
    }
}
