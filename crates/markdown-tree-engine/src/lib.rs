pub mod models;
pub mod parsing;
pub mod render;
pub mod validate;

// Re-export key types for easier usage
pub use models::{BlockNode, Document, InlineNode, StyleKind};
pub use parsing::{
    ParseOptions, parse, parse_lines, parse_rope, parse_with_options, refs::LinkReferenceTable,
};
pub use render::{
    CodeBlockHandler, CodeBlockView, Element, Highlighter, HighlighterRegistry, Projector,
};
pub use validate::{ValidationError, validate};
