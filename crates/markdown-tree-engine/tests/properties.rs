//! End-to-end behaviour of the public parsing API.

use markdown_tree_engine::{
    BlockNode, Document, InlineNode, ParseOptions, StyleKind, parse, parse_lines, parse_rope,
    parse_with_options, validate,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::{Duration, Instant};
use xi_rope::Rope;

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

fn style(kind: StyleKind, spans: Vec<InlineNode>) -> InlineNode {
    InlineNode::Style { kind, spans }
}

fn paragraph(spans: Vec<InlineNode>) -> BlockNode {
    BlockNode::Paragraph {
        heading_level: None,
        spans,
    }
}

fn bullet_list(paragraphs: &[&str]) -> BlockNode {
    BlockNode::List {
        start: None,
        items: paragraphs
            .iter()
            .map(|p| BlockNode::Item {
                parts: vec![paragraph(vec![text(p)])],
            })
            .collect(),
    }
}

/// Spans of the only paragraph in `md`.
fn spans_of(md: &str) -> Vec<InlineNode> {
    let doc = parse(md);
    match doc.blocks.as_slice() {
        [BlockNode::Paragraph { spans, .. }] => spans.clone(),
        other => panic!("expected a single paragraph, got {other:?}"),
    }
}

fn first_link_href(doc: &Document) -> Option<String> {
    fn find(spans: &[InlineNode]) -> Option<String> {
        spans.iter().find_map(|s| match s {
            InlineNode::Link { href, .. } => Some(href.clone()),
            InlineNode::Style { spans, .. } | InlineNode::LinkRefPlaceholder { spans } => {
                find(spans)
            }
            _ => None,
        })
    }
    doc.blocks.iter().find_map(|b| match b {
        BlockNode::Paragraph { spans, .. } => find(spans),
        _ => None,
    })
}

#[test]
fn repeated_invocations_are_structurally_equal() {
    let md = "# T\n\n- a\n  - b *c*\n\n> q [r]\n\n[r]: /r\n\n```\nx\n```\n";
    let first = parse(md);
    for _ in 0..5 {
        assert_eq!(parse(md), first);
    }
}

#[rstest]
#[case::words("Just some plain words")]
#[case::punctuation("Commas, periods. Colons: and semicolons; are fine")]
#[case::unicode("Ünïcödé text, with symbols ©")]
fn plain_paragraph_is_one_text_span(#[case] md: &str) {
    assert_eq!(spans_of(md), vec![text(md)]);
}

#[test]
fn triple_delimiters_nest_bold_around_italic() {
    assert_eq!(
        spans_of("***foo***"),
        vec![style(
            StyleKind::Bold,
            vec![style(StyleKind::Italic, vec![text("foo")])]
        )]
    );
}

#[test]
fn different_rule_character_separates_lists() {
    let doc = parse("- foo\n***\n- bar");
    assert_eq!(
        doc.blocks,
        vec![
            bullet_list(&["foo"]),
            BlockNode::HorizontalRule,
            bullet_list(&["bar"]),
        ]
    );
}

#[test]
fn four_spaces_make_code_three_do_not() {
    let doc = parse("    code line");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            lines: vec!["code line".to_string()],
            start_line_number: None,
        }]
    );

    let doc = parse("   not code");
    assert_eq!(doc.blocks, vec![paragraph(vec![text("not code")])]);
}

#[rstest]
#[case::before("[foo]: /url \"t\"\n\n[foo]")]
#[case::after("[foo]\n\n[foo]: /url \"t\"")]
fn reference_resolution_ignores_definition_order(#[case] md: &str) {
    let doc = parse(md);
    assert_eq!(
        doc.blocks,
        vec![paragraph(vec![InlineNode::Link {
            href: "/url".to_string(),
            title: Some("t".to_string()),
            spans: vec![text("foo")],
        }])]
    );
}

#[test]
fn first_definition_wins_case_insensitively() {
    let doc = parse("[FOO]: /a\n[foo]: /b\n\n[Foo]");
    assert_eq!(first_link_href(&doc).as_deref(), Some("/a"));
}

#[test]
fn autolink_with_space_stays_literal() {
    let md = "<http://foo.bar/baz bim>";
    assert_eq!(spans_of(md), vec![text(md)]);
}

#[test]
fn code_span_takes_precedence_over_emphasis() {
    assert_eq!(
        spans_of("*foo`*`"),
        vec![text("*foo"), InlineNode::CodeSpan("*".to_string())]
    );
}

#[test]
fn every_input_form_yields_the_same_tree() {
    let md = "Title\n=====\r\n\r\n1) one\r2) two\n";
    let expected = parse(md);
    assert_eq!(parse_rope(&Rope::from(md)), expected);
    assert_eq!(parse_lines(&[md]), expected);
    assert_eq!(
        parse_lines(&["Title", "=====", "", "1) one", "2) two"]),
        expected
    );
}

#[rstest]
#[case::emphasis_soup(&"*a **b _c ~~d".repeat(200))]
#[case::unbalanced_brackets(&("[".repeat(500) + &"](".repeat(500)))]
#[case::backtick_runs(&"`` ` ``` x".repeat(200))]
#[case::mixed_markers("> - > 1. > * text\n  > - more\n\t\tcode?\n~~~\n")]
fn arbitrary_input_produces_a_valid_tree(#[case] md: &str) {
    let doc = parse(md);
    assert!(!doc.is_empty());
    assert_eq!(validate(&doc), Ok(()));
}

#[rstest]
#[case::flat_emphasis_pairs("*a* ".repeat(20_000))]
#[case::long_space_run(format!("a{}b", " ".repeat(40_000)))]
#[case::alternating_kinds("*a _b ~c ".repeat(10_000))]
fn large_inputs_parse_in_linear_time(#[case] md: String) {
    let started = Instant::now();
    let doc = parse(&md);
    let elapsed = started.elapsed();
    assert!(!doc.is_empty());
    assert!(
        elapsed < Duration::from_secs(1),
        "parsing {} bytes took {elapsed:?}",
        md.len()
    );
}

#[test]
fn nesting_bound_keeps_markers_as_text() {
    let md = "> > > deep";
    let options = ParseOptions {
        max_nesting_depth: 2,
    };
    let doc = parse_with_options(md, &options);
    insta::assert_snapshot!(doc.outline(), @r#"
    quote
      quote
        paragraph
          text "> deep"
    "#);
}

#[test]
fn mixed_document_outline() {
    let md = r#"# Notes

Some *emphasis* and a [link](https://example.com "Example").

1. First
2. Second
   - nested `code`

> Quoted\
> text

```toml
key = "value"
```

[unused]: /nowhere
"#;
    insta::assert_snapshot!(parse(md).outline(), @r#"
    heading(1)
      text "Notes"
    paragraph
      text "Some "
      italic
        text "emphasis"
      text " and a "
      link "https://example.com" title="Example"
        text "link"
      text "."
    list(start=1)
      item
        paragraph
          text "First"
      item
        paragraph
          text "Second"
        list
          item
            paragraph
              text "nested "
              code "code"
    quote
      paragraph
        text "Quoted"
        break
        text "text"
    code(toml)
      | key = "value"
    "#);
}

#[test]
fn documents_round_trip_through_json() {
    let doc = parse("## H\n\n- [x](/y)\n\n    code\n");
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    assert_eq!(validate(&back), Ok(()));
}
