pub mod block;
pub mod document;
pub mod inline;

pub use block::BlockNode;
pub use document::Document;
pub use inline::{InlineNode, StyleKind};
