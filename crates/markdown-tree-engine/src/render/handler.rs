use async_trait::async_trait;

use super::element::Element;

/// A code block as seen by a [`CodeBlockHandler`].
#[derive(Debug, Clone, Copy)]
pub struct CodeBlockView<'a> {
    pub language: Option<&'a str>,
    pub lines: &'a [String],
    pub start_line_number: Option<usize>,
}

/// Replaces the default rendering of code blocks for a language.
///
/// Handlers may suspend (for example to call out to an external
/// formatter); the projector awaits each one before moving on, so the
/// replacement occupies the code block's original position.
#[async_trait]
pub trait CodeBlockHandler: Send + Sync {
    async fn render(&self, block: CodeBlockView<'_>) -> Element;
}
