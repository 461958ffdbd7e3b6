//! # Link Reference Table
//!
//! Definitions (`[label]: destination "title"`) are collected from the start
//! of every paragraph before any inline tokenization, so references resolve
//! regardless of where in the document their definition appears.

use std::collections::HashMap;

use super::{blocks::RawBlock, cursor::Cursor, inline::kinds::Link};

/// Target of a link reference definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    pub href: String,
    pub title: Option<String>,
}

/// Document-wide map from normalized label to definition.
///
/// The first definition of a label wins; later ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReferenceTable {
    defs: HashMap<String, LinkDefinition>,
}

impl LinkReferenceTable {
    /// Adds a definition unless the label is already defined.
    ///
    /// Returns whether the definition was added.
    pub fn insert(&mut self, label: &str, def: LinkDefinition) -> bool {
        let key = normalize_label(label);
        if key.is_empty() || self.defs.contains_key(&key) {
            return false;
        }
        self.defs.insert(key, def);
        true
    }

    pub fn get(&self, label: &str) -> Option<&LinkDefinition> {
        self.defs.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Case-folds a label and collapses internal whitespace runs to one space.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
        .to_lowercase()
}

/// Removes definitions from paragraphs (in document order) and returns them.
///
/// A paragraph left empty is dropped. Headings never hold definitions.
pub fn collect_definitions(blocks: &mut Vec<RawBlock>) -> LinkReferenceTable {
    let mut table = LinkReferenceTable::default();
    collect_into(blocks, &mut table);
    log::debug!("collected {} link reference definitions", table.len());
    table
}

fn collect_into(blocks: &mut Vec<RawBlock>, table: &mut LinkReferenceTable) {
    blocks.retain_mut(|block| match block {
        RawBlock::Paragraph { text } => {
            let mut rest = text.as_str();
            while let Some((label, def, len)) = parse_definition(rest) {
                if !table.insert(label, def) {
                    log::debug!("duplicate link reference definition [{label}] ignored");
                }
                rest = &rest[len..];
            }
            let consumed = text.len() - rest.len();
            if consumed > 0 {
                text.drain(..consumed);
            }
            !text.is_empty()
        }
        RawBlock::List { items, .. } => {
            for item in items.iter_mut() {
                collect_into(&mut item.parts, table);
            }
            true
        }
        RawBlock::Quote { parts } => {
            collect_into(parts, table);
            true
        }
        _ => true,
    });
}

/// Parses one definition at the start of `text`.
///
/// Returns the raw label, the definition and the bytes consumed, including
/// the line ending that follows it.
fn parse_definition(text: &str) -> Option<(&str, LinkDefinition, usize)> {
    let mut cur = Cursor::new(text);
    let label = Link::label(&mut cur)?;
    if cur.bump() != Some(b':') {
        return None;
    }
    Link::skip_space(&mut cur);

    let dest_start = cur.i;
    let href = Link::destination(&mut cur)?;
    if cur.i == dest_start {
        return None;
    }
    let after_dest = cur.i;

    if Link::skip_space(&mut cur)
        && !cur.eof()
        && let Some(title) = Link::title(&mut cur)
        && let Some(end) = line_end(&mut cur)
    {
        let def = LinkDefinition {
            href,
            title: Some(title),
        };
        return Some((label, def, end));
    }

    // No usable title: the destination must end its line.
    cur.i = after_dest;
    let end = line_end(&mut cur)?;
    Some((label, LinkDefinition { href, title: None }, end))
}

/// Accepts trailing blanks up to the end of the line; returns the position
/// after the line ending.
fn line_end(cur: &mut Cursor<'_>) -> Option<usize> {
    cur.skip_blanks();
    match cur.peek() {
        None => Some(cur.i),
        Some(b'\n') => Some(cur.i + 1),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::RawItem;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn para(text: &str) -> RawBlock {
        RawBlock::Paragraph { text: text.into() }
    }

    #[rstest]
    #[case::simple("[foo]: /url", Some(("foo", "/url", None)))]
    #[case::title(r#"[foo]: /url "title""#, Some(("foo", "/url", Some("title"))))]
    #[case::title_next_line("[foo]:\n/url\n'title'", Some(("foo", "/url", Some("title"))))]
    #[case::angle_dest("[foo]: <my url>", Some(("foo", "my url", None)))]
    #[case::paren_title("[foo]: /url (t)", Some(("foo", "/url", Some("t"))))]
    #[case::trailing_junk("[foo]: /url junk", None)]
    #[case::junk_after_title(r#"[foo]: /url "t" junk"#, None)]
    #[case::missing_dest("[foo]:", None)]
    #[case::no_colon("[foo] /url", None)]
    #[case::blank_label("[ ]: /url", None)]
    fn parses_definitions(
        #[case] input: &str,
        #[case] expected: Option<(&str, &str, Option<&str>)>,
    ) {
        let got = parse_definition(input);
        assert_eq!(
            got.as_ref()
                .map(|(l, d, _)| (*l, d.href.as_str(), d.title.as_deref())),
            expected
        );
    }

    #[test]
    fn failed_title_leaves_following_line() {
        let (_, def, len) = parse_definition("[foo]: /url\n\"bad\" trailing").unwrap();
        assert_eq!(def.title, None);
        assert_eq!(len, "[foo]: /url\n".len());
    }

    #[test]
    fn labels_normalize_case_and_space() {
        assert_eq!(normalize_label("  Foo \n  BAR "), "foo bar");
        assert_eq!(normalize_label("ß"), normalize_label("SS"));
    }

    #[test]
    fn first_definition_wins() {
        let mut blocks = vec![para("[FOO]: /a"), para("[foo]: /b")];
        let table = collect_definitions(&mut blocks);
        assert!(blocks.is_empty());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Foo").map(|d| d.href.as_str()), Some("/a"));
    }

    #[test]
    fn definitions_are_stripped_from_paragraph_start() {
        let mut blocks = vec![para("[a]: /1\n[b]: /2\ntext [c]: /3")];
        let table = collect_definitions(&mut blocks);
        assert_eq!(blocks, vec![para("text [c]: /3")]);
        assert_eq!(table.len(), 2);
        assert!(table.get("c").is_none());
    }

    #[test]
    fn nested_containers_are_scanned() {
        let mut blocks = vec![
            RawBlock::Quote {
                parts: vec![para("[q]: /quoted")],
            },
            RawBlock::List {
                start: None,
                items: vec![RawItem {
                    parts: vec![para("[i]: /item")],
                }],
            },
        ];
        let table = collect_definitions(&mut blocks);
        assert_eq!(table.get("q").map(|d| d.href.as_str()), Some("/quoted"));
        assert_eq!(table.get("i").map(|d| d.href.as_str()), Some("/item"));
    }

    #[test]
    fn headings_hold_no_definitions() {
        let mut blocks = vec![RawBlock::Heading {
            level: 1,
            text: "[x]: /y".into(),
        }];
        let table = collect_definitions(&mut blocks);
        assert!(table.is_empty());
        assert_eq!(blocks.len(), 1);
    }
}
