use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::{
    block::BlockNode,
    inline::{InlineNode, StyleKind},
};

/// A parsed document: an ordered sequence of block nodes.
///
/// Built in one parse call and never mutated by the engine afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

impl Document {
    pub fn new(blocks: Vec<BlockNode>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Renders a stable, indented text outline of the tree.
    ///
    /// One node per line, two spaces per nesting level. Text payloads use
    /// Rust debug quoting so whitespace and newlines stay visible.
    pub fn outline(&self) -> String {
        let mut out = Outline::default();
        for b in &self.blocks {
            out.block(b, 0);
        }
        out.finish()
    }
}

#[derive(Default)]
struct Outline {
    lines: Vec<String>,
}

impl Outline {
    fn push(&mut self, depth: usize, line: String) {
        self.lines.push(format!("{}{}", "  ".repeat(depth), line));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn block(&mut self, b: &BlockNode, depth: usize) {
        match b {
            BlockNode::Paragraph {
                heading_level,
                spans,
            } => {
                let label = match heading_level {
                    Some(level) => format!("heading({level})"),
                    None => "paragraph".to_string(),
                };
                self.push(depth, label);
                self.spans(spans, depth + 1);
            }
            BlockNode::HorizontalRule => self.push(depth, "hr".to_string()),
            BlockNode::List { start, items } => {
                let label = match start {
                    Some(n) => format!("list(start={n})"),
                    None => "list".to_string(),
                };
                self.push(depth, label);
                for item in items {
                    self.block(item, depth + 1);
                }
            }
            BlockNode::Item { parts } => {
                self.push(depth, "item".to_string());
                for p in parts {
                    self.block(p, depth + 1);
                }
            }
            BlockNode::CodeBlock {
                language, lines, ..
            } => {
                let label = match language {
                    Some(lang) => format!("code({lang})"),
                    None => "code".to_string(),
                };
                self.push(depth, label);
                for line in lines {
                    let rendered = format!("| {line}");
                    self.push(depth + 1, rendered.trim_end().to_string());
                }
            }
            BlockNode::Quote { parts } => {
                self.push(depth, "quote".to_string());
                for p in parts {
                    self.block(p, depth + 1);
                }
            }
        }
    }

    fn spans(&mut self, spans: &[InlineNode], depth: usize) {
        for s in spans {
            self.span(s, depth);
        }
    }

    fn span(&mut self, s: &InlineNode, depth: usize) {
        match s {
            InlineNode::Text(t) => self.push(depth, format!("text {t:?}")),
            InlineNode::LineBreak => self.push(depth, "break".to_string()),
            InlineNode::Style { kind, spans } => {
                let label = match kind {
                    StyleKind::Bold => "bold",
                    StyleKind::Italic => "italic",
                    StyleKind::Strikethrough => "strike",
                };
                self.push(depth, label.to_string());
                self.spans(spans, depth + 1);
            }
            InlineNode::Link { href, title, spans } => {
                let mut label = format!("link {href:?}");
                if let Some(t) = title {
                    let _ = write!(label, " title={t:?}");
                }
                self.push(depth, label);
                self.spans(spans, depth + 1);
            }
            InlineNode::Image { src, alt, title } => {
                let mut label = format!("image {src:?} alt={alt:?}");
                if let Some(t) = title {
                    let _ = write!(label, " title={t:?}");
                }
                self.push(depth, label);
            }
            InlineNode::CodeSpan(c) => self.push(depth, format!("code {c:?}")),
            InlineNode::LinkRefPlaceholder { spans } => {
                self.push(depth, "ref".to_string());
                self.spans(spans, depth + 1);
            }
        }
    }
}
