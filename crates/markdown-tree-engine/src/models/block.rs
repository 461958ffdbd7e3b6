use serde::{Deserialize, Serialize};

use super::inline::InlineNode;

/// A structural unit of the document.
///
/// `Item` only ever appears inside `List::items`; the parser never emits it
/// anywhere else, and the validator rejects trees that do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockNode {
    /// A paragraph, or a heading when `heading_level` is set (1..=6).
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading_level: Option<u8>,
        spans: Vec<InlineNode>,
    },
    HorizontalRule,
    List {
        /// Numeric value of the first ordinal marker; `None` for bullet lists.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        items: Vec<BlockNode>,
    },
    Item {
        parts: Vec<BlockNode>,
    },
    CodeBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        lines: Vec<String>,
        /// 1-based source line of the first content line (fenced blocks only).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_line_number: Option<usize>,
    },
    Quote {
        parts: Vec<BlockNode>,
    },
}

impl BlockNode {
    /// Short lowercase name of the variant, matching its serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::HorizontalRule => "horizontal_rule",
            BlockNode::List { .. } => "list",
            BlockNode::Item { .. } => "item",
            BlockNode::CodeBlock { .. } => "code_block",
            BlockNode::Quote { .. } => "quote",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            BlockNode::Paragraph {
                heading_level: Some(_),
                ..
            }
        )
    }
}
