//! # Element Projection
//!
//! Walks a `Document` into generic [`Element`]s that a front end can render
//! or serialize. Code blocks consult a [`HighlighterRegistry`] keyed by
//! language; callers may override code block rendering per language with a
//! [`CodeBlockHandler`], including asynchronous ones.

pub mod element;
pub mod handler;
pub mod projector;
pub mod registry;

pub use element::Element;
pub use handler::{CodeBlockHandler, CodeBlockView};
pub use projector::{Projector, spans_to_elements};
pub use registry::{AliasMap, Highlighter, HighlighterRegistry};
