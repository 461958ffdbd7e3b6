use super::kinds::ListMarker;

/// A block as produced by the block builder.
///
/// Paragraph and heading text is kept raw here: link reference definitions
/// are collected from it before any inline tokenization happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlock {
    /// Paragraph lines joined with `\n`, leading indentation removed.
    Paragraph { text: String },
    Heading { level: u8, text: String },
    HorizontalRule,
    List {
        start: Option<u64>,
        items: Vec<RawItem>,
    },
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
        start_line_number: Option<usize>,
    },
    Quote { parts: Vec<RawBlock> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub parts: Vec<RawBlock>,
}

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks (paragraphs, code blocks) and nest up to the
/// configured depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A block quote; each line continues it only with a leading `>`.
    Quote,
    /// A list. Only items whose marker has the same kind join it.
    List {
        marker: ListMarker,
        start: Option<u64>,
    },
    /// A list item; continuation lines must be indented to `content_indent`
    /// columns (relative to the enclosing container).
    Item { content_indent: usize },
}

impl ContainerFrame {
    /// Whether this frame counts toward the nesting bound.
    pub fn nests(&self) -> bool {
        !matches!(self, ContainerFrame::List { .. })
    }
}
