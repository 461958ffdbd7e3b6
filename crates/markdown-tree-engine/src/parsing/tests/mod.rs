//! Fixture and whole-pipeline tests for the parsing module.
//!
//! Fixtures (`.md`) and their expected outlines (`.outline`) are co-located
//! in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::{
    models::{BlockNode, InlineNode},
    parsing::{ParseOptions, parse, parse_lines, parse_rope, parse_with_options},
};

#[test]
fn fixture_lists_and_rules() {
    assert_fixture("lists_and_rules");
}

#[test]
fn fixture_forward_references() {
    assert_fixture("forward_references");
}

#[test]
fn fixture_code_blocks() {
    assert_fixture("code_blocks");
}

#[test]
fn fixture_quotes_and_inline() {
    assert_fixture("quotes_and_inline");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.outline")).unwrap();

    let doc = parse(&md);
    invariants::check(&doc);
    assert_eq!(doc.outline(), expected.trim_end());
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n\t\n").is_empty());
}

#[test]
fn all_input_forms_agree() {
    let md = "# T\r\n\r\n- a\r- b\n\n```\ncode\n```\n";
    let from_str = parse(md);
    let from_rope = parse_rope(&xi_rope::Rope::from(md));
    let from_lines = parse_lines(&["# T", "", "- a\r- b", "", "```\ncode", "```"]);
    assert_eq!(from_rope, from_str);
    assert_eq!(from_lines, from_str);
}

#[test]
fn repeated_parses_are_equal() {
    let md = "> *a* [b]\n\n[b]: /c\n\n1. x\n   ```\n   y\n";
    assert_eq!(parse(md), parse(md));
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = parse("`[not a link](x)`");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            heading_level: None,
            spans: vec![InlineNode::CodeSpan("[not a link](x)".into())],
        }]
    );
}

#[test]
fn deep_nesting_is_bounded() {
    let quotes = format!("{}x", "> ".repeat(10_000));
    let brackets = format!("{}x{}", "[".repeat(5_000), "]".repeat(5_000));
    let stars = format!("{}x{}", "*".repeat(10_000), "*".repeat(10_000));
    let items = (0..200)
        .map(|i| format!("{}- x", "  ".repeat(i)))
        .collect::<Vec<_>>()
        .join("\n");

    for md in [quotes, brackets, stars, items] {
        let doc = parse(&md);
        invariants::check(&doc);
        assert!(!doc.is_empty());
    }
}

#[test]
fn nesting_bound_is_configurable() {
    let options = ParseOptions {
        max_nesting_depth: 1,
    };
    let doc = parse_with_options("> > x", &options);
    assert_eq!(doc.outline(), "quote\n  paragraph\n    text \"> x\"");
}
