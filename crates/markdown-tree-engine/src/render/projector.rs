use crate::models::{BlockNode, Document, InlineNode, StyleKind};

use super::{
    element::Element,
    handler::{CodeBlockHandler, CodeBlockView},
    registry::{AliasMap, Highlighter, HighlighterRegistry},
};

/// Projects a document into generic elements.
///
/// Code blocks render as `pre > code`, styled by the highlighter registered
/// for their language. A [`CodeBlockHandler`] registered for a language
/// replaces that rendering entirely.
#[derive(Default)]
pub struct Projector {
    highlighters: HighlighterRegistry,
    handlers: AliasMap<Box<dyn CodeBlockHandler>>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlighters(highlighters: HighlighterRegistry) -> Self {
        Self {
            highlighters,
            handlers: AliasMap::default(),
        }
    }

    pub fn highlighters_mut(&mut self) -> &mut HighlighterRegistry {
        &mut self.highlighters
    }

    pub fn register_highlighter(
        &mut self,
        name: &str,
        aliases: &[&str],
        highlighter: impl Highlighter + 'static,
    ) {
        self.highlighters.register(name, aliases, highlighter);
    }

    pub fn register_handler(
        &mut self,
        name: &str,
        aliases: &[&str],
        handler: impl CodeBlockHandler + 'static,
    ) {
        self.handlers.insert(name, aliases, Box::new(handler));
    }

    /// Projects synchronously, driving any handlers to completion.
    pub fn project(&self, doc: &Document) -> Vec<Element> {
        pollster::block_on(self.project_async(doc))
    }

    /// Projects the document, awaiting code block handlers one at a time in
    /// document order.
    pub async fn project_async(&self, doc: &Document) -> Vec<Element> {
        let mut code_blocks = Vec::new();
        collect_code_blocks(&doc.blocks, &mut code_blocks);

        let mut replacements = Vec::with_capacity(code_blocks.len());
        for view in code_blocks {
            let handler = view.language.and_then(|lang| self.handlers.get(lang));
            let replacement = match handler {
                Some(h) => Some(h.render(view).await),
                None => None,
            };
            replacements.push(replacement);
        }

        let mut walk = Walk {
            projector: self,
            replacements: replacements.into_iter(),
        };
        walk.blocks(&doc.blocks)
    }

    fn code_block(&self, view: CodeBlockView<'_>) -> Element {
        let mut code = Element::node("code");
        let children = match view.language {
            Some(lang) => {
                code = code.with_attr("class", format!("language-{lang}"));
                match self.highlighters.get(lang) {
                    Some(h) => h.highlight(view.lines),
                    None => {
                        log::debug!("no highlighter for language {lang:?}; rendering unstyled");
                        vec![Element::text(view.lines.join("\n"))]
                    }
                }
            }
            None => vec![Element::text(view.lines.join("\n"))],
        };
        Element::node("pre").with_children(vec![code.with_children(children)])
    }
}

fn code_view(block: &BlockNode) -> Option<CodeBlockView<'_>> {
    match block {
        BlockNode::CodeBlock {
            language,
            lines,
            start_line_number,
        } => Some(CodeBlockView {
            language: language.as_deref(),
            lines,
            start_line_number: *start_line_number,
        }),
        _ => None,
    }
}

/// Code blocks in the same order `Walk` visits them.
fn collect_code_blocks<'a>(blocks: &'a [BlockNode], out: &mut Vec<CodeBlockView<'a>>) {
    for block in blocks {
        match block {
            BlockNode::CodeBlock { .. } => out.extend(code_view(block)),
            BlockNode::List { items: parts, .. }
            | BlockNode::Item { parts }
            | BlockNode::Quote { parts } => collect_code_blocks(parts, out),
            BlockNode::Paragraph { .. } | BlockNode::HorizontalRule => {}
        }
    }
}

struct Walk<'p> {
    projector: &'p Projector,
    replacements: std::vec::IntoIter<Option<Element>>,
}

impl Walk<'_> {
    fn blocks(&mut self, blocks: &[BlockNode]) -> Vec<Element> {
        blocks.iter().map(|b| self.block(b)).collect()
    }

    fn block(&mut self, block: &BlockNode) -> Element {
        match block {
            BlockNode::Paragraph {
                heading_level,
                spans,
            } => {
                let tag = match heading_level {
                    Some(level) => format!("h{level}"),
                    None => "p".to_string(),
                };
                Element::node(tag).with_children(spans_to_elements(spans))
            }
            BlockNode::HorizontalRule => Element::node("hr"),
            BlockNode::List { start, items } => {
                let list = match start {
                    Some(n) => Element::node("ol").with_attr("start", n.to_string()),
                    None => Element::node("ul"),
                };
                list.with_children(self.blocks(items))
            }
            BlockNode::Item { parts } => Element::node("li").with_children(self.blocks(parts)),
            BlockNode::Quote { parts } => {
                Element::node("blockquote").with_children(self.blocks(parts))
            }
            BlockNode::CodeBlock { .. } => {
                let replacement = self.replacements.next().flatten();
                match (replacement, code_view(block)) {
                    (Some(el), _) => el,
                    (None, Some(view)) => self.projector.code_block(view),
                    (None, None) => Element::node("pre"),
                }
            }
        }
    }
}

/// Maps spans to elements. Placeholders contribute their children directly.
pub fn spans_to_elements(spans: &[InlineNode]) -> Vec<Element> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        push_span(span, &mut out);
    }
    out
}

fn push_span(span: &InlineNode, out: &mut Vec<Element>) {
    let el = match span {
        InlineNode::Text(t) => Element::text(t.clone()),
        InlineNode::LineBreak => Element::node("br"),
        InlineNode::Style { kind, spans } => {
            let tag = match kind {
                StyleKind::Bold => "strong",
                StyleKind::Italic => "em",
                StyleKind::Strikethrough => "del",
            };
            Element::node(tag).with_children(spans_to_elements(spans))
        }
        InlineNode::Link { href, title, spans } => {
            let mut a = Element::node("a").with_attr("href", href.clone());
            if let Some(t) = title {
                a = a.with_attr("title", t.clone());
            }
            a.with_children(spans_to_elements(spans))
        }
        InlineNode::Image { src, alt, title } => {
            let mut img = Element::node("img")
                .with_attr("src", src.clone())
                .with_attr("alt", alt.clone());
            if let Some(t) = title {
                img = img.with_attr("title", t.clone());
            }
            img
        }
        InlineNode::CodeSpan(c) => Element::node("code").with_children(vec![Element::text(c.clone())]),
        InlineNode::LinkRefPlaceholder { spans } => {
            for s in spans {
                push_span(s, out);
            }
            return;
        }
    };
    out.push(el);
}
