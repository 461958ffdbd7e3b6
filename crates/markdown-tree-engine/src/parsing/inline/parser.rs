use crate::{
    models::{InlineNode, inline::plain_text},
    parsing::{
        cursor::Cursor,
        decode::{decode, is_escapable},
        refs::{LinkDefinition, LinkReferenceTable},
    },
};

use super::{
    emphasis,
    index::SpanIndex,
    kinds::{Autolink, CodeSpan, Delimiter, Link},
    types::{DelimiterRun, Piece, into_nodes, push_merged},
};

/// Tokenizes one paragraph or heading's text into spans.
///
/// Constructs are tried in priority order at each position: hard line
/// breaks, code spans (raw zones), links and images, autolinks, then
/// delimiter runs that are resolved into emphasis and strikethrough once
/// the range has been scanned. Everything else is literal text, decoded.
pub fn tokenize_spans(text: &str, refs: &LinkReferenceTable, max_depth: usize) -> Vec<InlineNode> {
    let tokenizer = Tokenizer {
        src: text,
        index: SpanIndex::build(text),
        refs,
        max_depth,
    };
    tokenizer.tokenize(0, text.len(), 0)
}

struct Tokenizer<'a> {
    src: &'a str,
    index: SpanIndex,
    refs: &'a LinkReferenceTable,
    max_depth: usize,
}

/// A link or image recognized at a bracket.
struct Bracketed {
    node: InlineNode,
    end: usize,
}

impl Tokenizer<'_> {
    fn tokenize(&self, start: usize, end: usize, depth: usize) -> Vec<InlineNode> {
        let pieces = self.scan(start, end, depth);
        into_nodes(emphasis::resolve(pieces, depth, self.max_depth))
    }

    fn scan(&self, start: usize, end: usize, depth: usize) -> Vec<Piece> {
        let mut out: Vec<Piece> = Vec::new();
        let mut cur = Cursor::at(self.src, start);
        let mut text_start = start;

        while cur.i < end {
            let at = cur.i;
            let Some(b) = cur.peek() else {
                break;
            };
            let emitted: Option<(Piece, usize)> = match b {
                b'\\' if at + 1 < end && cur.peek_at(1) == Some(b'\n') => {
                    Some((Piece::node(InlineNode::LineBreak), at + 2))
                }
                b'\\' => {
                    let skip = if at + 1 < end && cur.peek_at(1).is_some_and(is_escapable) {
                        2
                    } else {
                        1
                    };
                    cur.bump_n(skip);
                    continue;
                }
                b' ' => match self.try_hard_break(at, end) {
                    Some(next) => Some((Piece::node(InlineNode::LineBreak), next)),
                    None => {
                        cur.skip_while(|b| b == b' ');
                        continue;
                    }
                },
                CodeSpan::TICK => match self.try_code_span(at, end) {
                    Some(hit) => Some(hit),
                    None => {
                        cur.skip_while(|b| b == CodeSpan::TICK);
                        continue;
                    }
                },
                b'!' if cur.starts_with(Link::IMAGE) => self
                    .try_bracketed(at + 1, end, depth, true)
                    .map(|hit| (Piece::node(hit.node), hit.end)),
                Link::OPEN => self
                    .try_bracketed(at, end, depth, false)
                    .map(|hit| (Piece::node(hit.node), hit.end)),
                Autolink::OPEN => self.try_autolink(at, end),
                b if Delimiter::is_delimiter(b) => {
                    let (piece, next) = self.delimiter_run(at, end);
                    flush_text(&mut out, self.src, text_start, at);
                    out.push(piece);
                    cur.i = next;
                    text_start = next;
                    continue;
                }
                _ => None,
            };

            match emitted {
                Some((piece, next)) => {
                    let text_end = match piece {
                        Piece::Node {
                            node: InlineNode::LineBreak,
                            ..
                        } => trim_break_spaces(self.src, text_start, at),
                        _ => at,
                    };
                    flush_text(&mut out, self.src, text_start, text_end);
                    out.push(piece);
                    cur.i = next;
                    text_start = next;
                }
                None => {
                    cur.bump();
                }
            }
        }
        flush_text(&mut out, self.src, text_start, end.min(self.src.len()));
        out
    }

    /// Two or more spaces before a line ending.
    fn try_hard_break(&self, at: usize, end: usize) -> Option<usize> {
        let b = self.src.as_bytes();
        let mut i = at;
        while i < end && b[i] == b' ' {
            i += 1;
        }
        (i - at >= 2 && i < end && b[i] == b'\n').then_some(i + 1)
    }

    fn try_code_span(&self, at: usize, end: usize) -> Option<(Piece, usize)> {
        let (content_start, content_end, span_end) = self.index.code_span(at)?;
        if span_end > end {
            return None;
        }
        let content = CodeSpan::content(&self.src[content_start..content_end]);
        Some((Piece::node(InlineNode::CodeSpan(content)), span_end))
    }

    fn try_autolink(&self, at: usize, end: usize) -> Option<(Piece, usize)> {
        let (content, href, len) = Autolink::parse(&self.src[at..end])?;
        let node = InlineNode::Link {
            href,
            title: None,
            spans: vec![InlineNode::Text(content.to_string())],
        };
        Some((Piece::node(node), at + len))
    }

    fn delimiter_run(&self, at: usize, end: usize) -> (Piece, usize) {
        let b = self.src.as_bytes();
        let ch = b[at];
        let mut next = at;
        while next < end && b[next] == ch {
            next += 1;
        }
        let len = next - at;
        let before = self.src[..at].chars().next_back();
        let after = self.src[next..].chars().next();
        let (can_open, can_close) = if ch == Delimiter::TILDE && len > Delimiter::MAX_TILDE_RUN {
            (false, false)
        } else {
            Delimiter::flanking(ch, before, after)
        };
        let run = DelimiterRun {
            ch,
            len,
            orig_len: len,
            can_open,
            can_close,
        };
        (Piece::Delim(run), next)
    }

    /// Tries a link (`[`) or image (`![`, with `open` at the `[`).
    ///
    /// Inline targets win over references. Brackets that are neither become
    /// a placeholder holding their literal text.
    fn try_bracketed(&self, open: usize, end: usize, depth: usize, image: bool) -> Option<Bracketed> {
        if depth >= self.max_depth {
            log::debug!("inline nesting bound {} reached; brackets kept as text", self.max_depth);
            return None;
        }
        let close = self.index.bracket_close(open)?;
        if close >= end {
            return None;
        }
        let label_text = &self.src[open + 1..close];
        let after = close + 1;

        let mut cur = Cursor::at(self.src, after);
        if let Some((href, title)) = Link::inline_target(&mut cur)
            && cur.i <= end
        {
            let def = LinkDefinition { href, title };
            return Some(self.build_link(open, close, depth, image, &def, cur.i));
        }

        if let Some(label_close) = self
            .index
            .bracket_close(after)
            .filter(|&c| c < end)
        {
            let label = &self.src[after + 1..label_close];
            let key = if label.trim().is_empty() { label_text } else { label };
            if let Some(def) = self.refs.get(key) {
                return Some(self.build_link(open, close, depth, image, def, label_close + 1));
            }
        } else if let Some(def) = self.refs.get(label_text) {
            return Some(self.build_link(open, close, depth, image, def, after));
        }

        let mut spans = vec![InlineNode::Text(if image { "![" } else { "[" }.to_string())];
        for node in self.tokenize(open + 1, close, depth + 1) {
            push_merged(&mut spans, node);
        }
        push_merged(&mut spans, InlineNode::Text("]".to_string()));
        Some(Bracketed {
            node: InlineNode::LinkRefPlaceholder { spans },
            end: after,
        })
    }

    fn build_link(
        &self,
        open: usize,
        close: usize,
        depth: usize,
        image: bool,
        def: &LinkDefinition,
        end: usize,
    ) -> Bracketed {
        let spans = self.tokenize(open + 1, close, depth + 1);
        let node = if image {
            InlineNode::Image {
                src: def.href.clone(),
                alt: plain_text(&spans),
                title: def.title.clone(),
            }
        } else {
            InlineNode::Link {
                href: def.href.clone(),
                title: def.title.clone(),
                spans,
            }
        };
        Bracketed { node, end }
    }
}

fn flush_text(out: &mut Vec<Piece>, src: &str, start: usize, end: usize) {
    if end <= start {
        return;
    }
    let text = decode(&src[start..end]).into_owned();
    match out.last_mut() {
        Some(Piece::Node {
            node: InlineNode::Text(prev),
            ..
        }) => prev.push_str(&text),
        _ => out.push(Piece::node(InlineNode::Text(text))),
    }
}

/// Drops the spaces that form a hard break from the preceding text.
fn trim_break_spaces(src: &str, start: usize, at: usize) -> usize {
    let trimmed = src[start..at].trim_end_matches(' ');
    start + trimmed.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn t(s: &str) -> InlineNode {
        InlineNode::Text(s.into())
    }

    fn style(kind: StyleKind, spans: Vec<InlineNode>) -> InlineNode {
        InlineNode::Style { kind, spans }
    }

    fn link(href: &str, spans: Vec<InlineNode>) -> InlineNode {
        InlineNode::Link {
            href: href.into(),
            title: None,
            spans,
        }
    }

    fn spans(text: &str) -> Vec<InlineNode> {
        tokenize_spans(text, &LinkReferenceTable::default(), 64)
    }

    fn spans_with_refs(text: &str, defs: &[(&str, &str)]) -> Vec<InlineNode> {
        let mut table = LinkReferenceTable::default();
        for (label, href) in defs {
            table.insert(
                label,
                LinkDefinition {
                    href: href.to_string(),
                    title: None,
                },
            );
        }
        tokenize_spans(text, &table, 64)
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(spans("just some words\nover lines"), vec![t("just some words\nover lines")]);
    }

    #[rstest]
    #[case::spaces("foo  \nbar")]
    #[case::many_spaces("foo     \nbar")]
    #[case::backslash("foo\\\nbar")]
    fn hard_breaks(#[case] input: &str) {
        assert_eq!(spans(input), vec![t("foo"), InlineNode::LineBreak, t("bar")]);
    }

    #[test]
    fn single_trailing_space_is_soft() {
        assert_eq!(spans("foo \nbar"), vec![t("foo \nbar")]);
    }

    #[test]
    fn long_space_runs_stay_text() {
        let input = format!("a{}b", " ".repeat(40_000));
        assert_eq!(spans(&input), vec![t(&input)]);

        let input = format!("a{}\nb", " ".repeat(40_000));
        assert_eq!(spans(&input), vec![t("a"), InlineNode::LineBreak, t("b")]);
    }

    #[test]
    fn spaces_before_a_break_after_other_spaces() {
        assert_eq!(
            spans("a b  \nc"),
            vec![t("a b"), InlineNode::LineBreak, t("c")]
        );
    }

    #[test]
    fn code_span_beats_emphasis() {
        assert_eq!(
            spans("*foo`*`"),
            vec![t("*foo"), InlineNode::CodeSpan("*".into())]
        );
    }

    #[test]
    fn code_span_content_is_verbatim() {
        assert_eq!(
            spans(r"`a\*b &amp;`"),
            vec![InlineNode::CodeSpan(r"a\*b &amp;".into())]
        );
    }

    #[test]
    fn unmatched_backticks_are_literal() {
        assert_eq!(spans("```foo``"), vec![t("```foo``")]);
    }

    #[test]
    fn triple_emphasis() {
        assert_eq!(
            spans("***foo***"),
            vec![style(
                StyleKind::Bold,
                vec![style(StyleKind::Italic, vec![t("foo")])]
            )]
        );
    }

    #[rstest]
    #[case::star_italic("*a*", StyleKind::Italic)]
    #[case::underscore_bold("__a__", StyleKind::Bold)]
    #[case::single_tilde("~a~", StyleKind::Strikethrough)]
    #[case::double_tilde("~~a~~", StyleKind::Strikethrough)]
    fn simple_styles(#[case] input: &str, #[case] kind: StyleKind) {
        assert_eq!(spans(input), vec![style(kind, vec![t("a")])]);
    }

    #[rstest]
    #[case::spaced_star("a * b * c")]
    #[case::intraword_underscore("snake_case_name")]
    #[case::triple_tilde("~~~a~~~")]
    #[case::unclosed("*open")]
    fn literal_delimiters(#[case] input: &str) {
        assert_eq!(spans(input), vec![t(input)]);
    }

    #[test]
    fn many_flat_pairs_resolve_in_order() {
        let out = spans(&"*a* ".repeat(20_000));
        assert_eq!(out.len(), 40_000);
        assert!(out.iter().step_by(2).all(|n| *n == style(StyleKind::Italic, vec![t("a")])));
        assert!(out.iter().skip(1).step_by(2).all(|n| *n == t(" ")));
    }

    #[test]
    fn match_hides_runs_inside_it() {
        assert_eq!(
            spans("*a _b* c_"),
            vec![style(StyleKind::Italic, vec![t("a _b")]), t(" c_")]
        );
    }

    #[test]
    fn intraword_star_emphasis() {
        assert_eq!(
            spans("foo*bar*baz"),
            vec![t("foo"), style(StyleKind::Italic, vec![t("bar")]), t("baz")]
        );
    }

    #[test]
    fn inline_link_with_title() {
        assert_eq!(
            spans(r#"[a *b*](/url "t")"#),
            vec![InlineNode::Link {
                href: "/url".into(),
                title: Some("t".into()),
                spans: vec![t("a "), style(StyleKind::Italic, vec![t("b")])],
            }]
        );
    }

    #[test]
    fn image_alt_is_plain_text() {
        assert_eq!(
            spans("![foo *bar*](/img.png)"),
            vec![InlineNode::Image {
                src: "/img.png".into(),
                alt: "foo bar".into(),
                title: None,
            }]
        );
    }

    #[test]
    fn image_inside_link() {
        assert_eq!(
            spans("[![alt](/i.png)](/target)"),
            vec![link(
                "/target",
                vec![InlineNode::Image {
                    src: "/i.png".into(),
                    alt: "alt".into(),
                    title: None,
                }]
            )]
        );
    }

    #[rstest]
    #[case::shortcut("[Foo]")]
    #[case::collapsed("[foo][]")]
    #[case::full("[text][FOO]")]
    fn reference_links(#[case] input: &str) {
        let got = spans_with_refs(input, &[("foo", "/url")]);
        assert!(matches!(
            got.as_slice(),
            [InlineNode::Link { href, .. }] if href == "/url"
        ));
    }

    #[test]
    fn unresolved_reference_is_placeholder() {
        assert_eq!(
            spans("[nope] x"),
            vec![
                InlineNode::LinkRefPlaceholder {
                    spans: vec![t("[nope]")]
                },
                t(" x"),
            ]
        );
    }

    #[test]
    fn placeholder_keeps_inner_markup() {
        assert_eq!(
            spans("[*a*]"),
            vec![InlineNode::LinkRefPlaceholder {
                spans: vec![t("["), style(StyleKind::Italic, vec![t("a")]), t("]")]
            }]
        );
    }

    #[test]
    fn autolinks() {
        assert_eq!(
            spans("<http://a.b/c> and <me@x.org>"),
            vec![
                link("http://a.b/c", vec![t("http://a.b/c")]),
                t(" and "),
                link("mailto:me@x.org", vec![t("me@x.org")]),
            ]
        );
    }

    #[test]
    fn autolink_with_space_is_literal() {
        assert_eq!(
            spans("<http://foo.bar/baz bim>"),
            vec![t("<http://foo.bar/baz bim>")]
        );
    }

    #[test]
    fn escapes_and_entities_decode_in_text() {
        assert_eq!(spans(r"\*not\* &amp; &#65;"), vec![t("*not* & A")]);
    }

    #[test]
    fn escaped_bracket_is_not_a_link() {
        assert_eq!(spans(r"\[x](/u)"), vec![t("[x](/u)")]);
    }

    #[test]
    fn depth_bound_keeps_brackets_literal() {
        let got = tokenize_spans("[a](/u)", &LinkReferenceTable::default(), 0);
        assert_eq!(got, vec![t("[a](/u)")]);
    }
}
