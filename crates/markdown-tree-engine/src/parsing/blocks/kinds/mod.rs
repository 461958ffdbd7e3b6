//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The builder asks
//! these types whether a line opens, continues or closes a block; it never
//! hardcodes `>`, `#` or fence characters itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_marker;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_marker::{ListMarker, MarkerMatch};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
