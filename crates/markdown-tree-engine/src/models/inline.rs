use serde::{Deserialize, Serialize};

/// The style applied by an [`InlineNode::Style`] span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Bold,
    Italic,
    Strikethrough,
}

/// An inline content unit within a paragraph or heading.
///
/// Serialized adjacently tagged so that `Text("x")` becomes
/// `{"type": "text", "value": "x"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text, already decoded (escapes and character references resolved).
    Text(String),
    /// A hard line break.
    LineBreak,
    Style {
        kind: StyleKind,
        spans: Vec<InlineNode>,
    },
    Link {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        spans: Vec<InlineNode>,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Verbatim code span content. Never decoded.
    CodeSpan(String),
    /// A bracket construct with no matching reference definition.
    ///
    /// The brackets are kept as literal `Text` at either end (`[` or `![`,
    /// then `]`). The content between them is tokenized like link text, not
    /// kept verbatim, so `[*a*]` holds an italic span and renders as
    /// `[<em>a</em>]`.
    LinkRefPlaceholder { spans: Vec<InlineNode> },
}

impl InlineNode {
    /// Returns the plain text of this node with all markup removed.
    ///
    /// Used for image `alt` text; line breaks flatten to a single space.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(s) | InlineNode::CodeSpan(s) => out.push_str(s),
            InlineNode::LineBreak => out.push(' '),
            InlineNode::Image { alt, .. } => out.push_str(alt),
            InlineNode::Style { spans, .. }
            | InlineNode::Link { spans, .. }
            | InlineNode::LinkRefPlaceholder { spans } => {
                for s in spans {
                    s.push_plain_text(out);
                }
            }
        }
    }

    /// Nesting depth of this node: 1 for leaves, 1 + deepest child otherwise.
    pub fn depth(&self) -> usize {
        match self {
            InlineNode::Style { spans, .. }
            | InlineNode::Link { spans, .. }
            | InlineNode::LinkRefPlaceholder { spans } => {
                1 + spans.iter().map(InlineNode::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

/// Concatenates the plain text of a span sequence.
pub fn plain_text(spans: &[InlineNode]) -> String {
    spans.iter().map(InlineNode::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_nested_spans() {
        let spans = vec![
            InlineNode::Text("a ".into()),
            InlineNode::Style {
                kind: StyleKind::Bold,
                spans: vec![InlineNode::CodeSpan("b".into())],
            },
            InlineNode::LineBreak,
            InlineNode::Text("c".into()),
        ];
        assert_eq!(plain_text(&spans), "a b c");
    }

    #[test]
    fn depth_counts_wrapping_levels() {
        let node = InlineNode::Style {
            kind: StyleKind::Bold,
            spans: vec![InlineNode::Style {
                kind: StyleKind::Italic,
                spans: vec![InlineNode::Text("x".into())],
            }],
        };
        assert_eq!(node.depth(), 3);
        assert_eq!(InlineNode::LineBreak.depth(), 1);
    }

    #[test]
    fn text_serializes_adjacently_tagged() {
        let json = serde_json::to_string(&InlineNode::Text("x".into())).unwrap();
        assert_eq!(json, r#"{"type":"text","value":"x"}"#);
    }
}
